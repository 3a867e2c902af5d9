//! Tests for bracket searches and range sums.
//!
//! These tests verify the sorted-array lookups used to locate anchors:
//! - Lower/upper bracket indices with exact-match and out-of-range handling
//! - Nearest-index tie-breaking
//! - Inclusive range sums
//!
//! ## Test Organization
//!
//! 1. **Lower Bracket** - checked and clamped variants
//! 2. **Upper Bracket** - checked and clamped variants
//! 3. **Nearest** - tie-breaking and clamping
//! 4. **Monotonicity** - ascending queries yield non-decreasing indices
//! 5. **Range Sums** - inclusive boundaries and error cases

use reweave::prelude::*;

// ============================================================================
// Lower Bracket
// ============================================================================

/// Below-range queries are distinguishable from genuine brackets.
#[test]
fn lower_bracket_marks_below_range_queries() {
    let x = [1.0, 3.0, 5.0, 7.0];
    let lookup = [0.0, 1.0, 2.0, 5.0, 8.0];
    let got = lower_bracket_indices(&x, &lookup).unwrap();
    assert_eq!(got, vec![None, Some(0), Some(0), Some(2), Some(3)]);
}

/// The clamped variant maps below-range queries to the first index.
#[test]
fn lower_bracket_clamps_to_first_index() {
    let x = [1.0, 3.0, 5.0, 7.0];
    let lookup = [0.0, 1.0, 2.0, 5.0, 8.0];
    let got = lower_bracket_indices_clamped(&x, &lookup).unwrap();
    assert_eq!(got, vec![0, 0, 0, 2, 3]);
}

/// An exact match maps to its own index, not the predecessor.
#[test]
fn lower_bracket_exact_match_maps_to_itself() {
    let x = [1.0, 3.0, 5.0];
    let got = lower_bracket_indices_clamped(&x, &[3.0]).unwrap();
    assert_eq!(got, vec![1]);
}

// ============================================================================
// Upper Bracket
// ============================================================================

/// Above-range queries are distinguishable from genuine brackets.
#[test]
fn upper_bracket_marks_above_range_queries() {
    let x = [1.0, 3.0, 5.0, 7.0];
    let lookup = [0.0, 1.0, 2.0, 5.0, 8.0];
    let got = upper_bracket_indices(&x, &lookup).unwrap();
    assert_eq!(got, vec![Some(0), Some(0), Some(1), Some(2), None]);
}

/// The clamped variant maps above-range queries to the last index.
#[test]
fn upper_bracket_clamps_to_last_index() {
    let x = [1.0, 3.0, 5.0, 7.0];
    let lookup = [0.0, 1.0, 2.0, 5.0, 8.0];
    let got = upper_bracket_indices_clamped(&x, &lookup).unwrap();
    assert_eq!(got, vec![0, 0, 1, 2, 3]);
}

/// An exact match maps to its own index, not the successor.
#[test]
fn upper_bracket_exact_match_maps_to_itself() {
    let x = [1.0, 3.0, 5.0];
    let got = upper_bracket_indices_clamped(&x, &[3.0]).unwrap();
    assert_eq!(got, vec![1]);
}

// ============================================================================
// Nearest
// ============================================================================

/// Nearest picks the numerically closer bracket, ties going lower.
#[test]
fn nearest_prefers_the_closer_bracket() {
    let x = [0.0, 2.0, 10.0];
    let lookup = [-5.0, 0.0, 1.0, 2.0, 5.0, 7.0, 10.0, 20.0];
    let got = nearest_indices(&x, &lookup).unwrap();
    //                  -5  0  1(tie) 2  5  7  10  20
    assert_eq!(got, vec![0, 0, 0, 1, 1, 2, 2, 2]);
}

// ============================================================================
// Monotonicity
// ============================================================================

/// Ascending queries produce non-decreasing bracket indices.
#[test]
fn bracket_indices_are_monotone_in_the_queries() {
    let x: Vec<f64> = (0..50).map(|i| (i as f64) * 0.7 + 0.13).collect();
    let lookup: Vec<f64> = (0..200).map(|i| (i as f64) * 0.19 - 1.0).collect();

    let lower = lower_bracket_indices_clamped(&x, &lookup).unwrap();
    let upper = upper_bracket_indices_clamped(&x, &lookup).unwrap();
    for pair in lower.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for pair in upper.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

/// Empty inputs are rejected up front.
#[test]
fn empty_inputs_are_rejected() {
    let x: [f64; 0] = [];
    assert_eq!(
        lower_bracket_indices(&x, &[1.0]).unwrap_err(),
        WeaveError::EmptyInput
    );
    assert_eq!(
        upper_bracket_indices(&[1.0], &x).unwrap_err(),
        WeaveError::EmptyInput
    );
    assert_eq!(nearest_indices(&x, &x).unwrap_err(), WeaveError::EmptyInput);
}

// ============================================================================
// Range Sums
// ============================================================================

/// Boundary elements are counted in both neighboring ranges.
#[test]
fn range_sums_include_both_endpoints() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let got = sum_over_index_ranges(&a, &[0, 2, 4]).unwrap();
    assert_eq!(got, vec![6.0, 12.0]);
}

/// A zero-width range contributes the single shared element.
#[test]
fn range_sums_handle_zero_width_ranges() {
    let a = [1.0, 2.0, 3.0];
    let got = sum_over_index_ranges(&a, &[1, 1, 2]).unwrap();
    assert_eq!(got, vec![2.0, 5.0]);
}

/// Malformed boundaries are rejected with context.
#[test]
fn range_sums_reject_malformed_boundaries() {
    let a = [1.0, 2.0, 3.0];
    assert!(matches!(
        sum_over_index_ranges(&a, &[0]).unwrap_err(),
        WeaveError::InvalidBoundaries(_)
    ));
    assert!(matches!(
        sum_over_index_ranges(&a, &[2, 0]).unwrap_err(),
        WeaveError::InvalidBoundaries(_)
    ));
    assert_eq!(
        sum_over_index_ranges(&a, &[0, 3]).unwrap_err(),
        WeaveError::IndexOutOfBounds { index: 3, len: 3 }
    );
    let empty: [f64; 0] = [];
    assert_eq!(
        sum_over_index_ranges(&empty, &[0, 1]).unwrap_err(),
        WeaveError::EmptyInput
    );
}
