//! Tests for the integral-matching stretch.
//!
//! These tests verify the conservation engine's closed-form correction:
//! - Exact trapezoidal matching for arbitrary finite targets
//! - Endpoint and anchor pinning
//! - Per-span matching with explicit, defaulted, and inferred partitions
//! - Configuration and degeneracy errors

use approx::assert_abs_diff_eq;
use reweave::prelude::*;

fn x() -> Vec<f64> {
    vec![-2.0, -1.0, 1.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 11.0]
}

fn y() -> Vec<f64> {
    vec![1.0, 2.0, 2.1, -2.0, 6.0, 4.0, 2.0, 2.0, 3.0, 5.0, 6.0]
}

/// Trapezoidal integrals of `y` between consecutive anchor indices.
fn span_integrals(x: &[f64], y: &[f64], anchors: &[usize]) -> Vec<f64> {
    anchors
        .windows(2)
        .map(|pair| trapezoid_area(&x[pair[0]..=pair[1]], &y[pair[0]..=pair[1]]))
        .collect()
}

// ============================================================================
// Single Span
// ============================================================================

/// Any finite target is hit exactly while the endpoints stay pinned.
#[test]
fn stretch_hits_the_target_and_pins_the_endpoints() {
    for target in [10.0, 23.25, 30.0, -5.0] {
        let stretched = stretch_to_integral(&x(), &y(), target).unwrap();
        assert_abs_diff_eq!(trapezoid_area(&x(), &stretched), target, epsilon = 1e-9);
        assert_eq!(stretched[0], 1.0);
        assert_eq!(stretched[10], 6.0);
    }
}

/// A target of zero forces a sign-changing correction; still exact.
#[test]
fn stretch_reaches_a_zero_integral() {
    let stretched = stretch_to_integral(&x(), &y(), 0.0).unwrap();
    assert_abs_diff_eq!(trapezoid_area(&x(), &stretched), 0.0, epsilon = 1e-9);
}

/// A matching target leaves a two-point span untouched; any other target
/// cannot be reached without moving the pinned endpoints.
#[test]
fn two_point_spans_have_no_interior_freedom() {
    let x = [0.0, 1.0];
    let y = [2.0, 2.0];
    assert_eq!(stretch_to_integral(&x, &y, 2.0).unwrap(), vec![2.0, 2.0]);
    assert_eq!(
        stretch_to_integral(&x, &y, 5.0).unwrap_err(),
        WeaveError::DegenerateSpan { len: 2 }
    );
}

/// Non-finite targets are a configuration error.
#[test]
fn non_finite_targets_are_rejected() {
    assert!(matches!(
        stretch_to_integral(&x(), &y(), f64::NAN).unwrap_err(),
        WeaveError::InvalidNumericValue(_)
    ));
}

// ============================================================================
// Interval Spans
// ============================================================================

/// Each span between consecutive anchors matches its own target, with
/// every anchor value pinned.
#[test]
fn interval_stretch_matches_every_span() {
    let cases: [(&[f64], &[usize]); 2] = [
        (&[20.2, 12.0, 5.0], &[0, 3, 5, 9]),
        (&[23.25, 10.0, 20.0], &[0, 3, 6, 9]),
    ];
    for (targets, anchors) in cases {
        let stretched =
            stretch_to_interval_integrals(&x(), &y(), Some(targets), Some(anchors)).unwrap();
        let got = span_integrals(&x(), &stretched, anchors);
        for (g, t) in got.iter().zip(targets.iter()) {
            assert_abs_diff_eq!(*g, *t, epsilon = 1e-9);
        }
        for &a in anchors {
            assert_eq!(stretched[a], y()[a]);
        }
    }
}

/// Omitted anchors partition the curve into even groups of len/k points;
/// the remainder tail stays untouched.
#[test]
fn omitted_anchors_partition_evenly() {
    let targets = [30.0, 6.0, 2.0];
    let stretched = stretch_to_interval_integrals(&x(), &y(), Some(&targets), None).unwrap();
    let anchors = [0, 3, 6, 9];
    let got = span_integrals(&x(), &stretched, &anchors);
    for (g, t) in got.iter().zip(targets.iter()) {
        assert_abs_diff_eq!(*g, *t, epsilon = 1e-9);
    }
    // The tail past the last even boundary is not part of any span.
    assert_eq!(stretched[10], y()[10]);
}

/// Omitted targets default to a zero integral per span.
#[test]
fn omitted_targets_default_to_zero() {
    let anchors = [0, 3, 10];
    let stretched = stretch_to_interval_integrals(&x(), &y(), None, Some(&anchors)).unwrap();
    for g in span_integrals(&x(), &stretched, &anchors) {
        assert_abs_diff_eq!(g, 0.0, epsilon = 1e-9);
    }
    for &a in anchors.iter() {
        assert_eq!(stretched[a], y()[a]);
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Omitting both targets and anchors leaves the partition undefined.
#[test]
fn omitting_both_targets_and_anchors_is_rejected() {
    assert_eq!(
        stretch_to_interval_integrals(&x(), &y(), None, None).unwrap_err(),
        WeaveError::MissingConservationSpec
    );
}

/// There must be exactly one target per span.
#[test]
fn mismatched_target_and_anchor_counts_are_rejected() {
    let targets = [1.0, 2.0];
    let anchors = [0, 5, 8, 10];
    assert_eq!(
        stretch_to_interval_integrals(&x(), &y(), Some(&targets), Some(&anchors)).unwrap_err(),
        WeaveError::TargetAnchorMismatch {
            targets: 2,
            anchors: 4
        }
    );
}

/// Anchor indices must be strictly increasing and in bounds.
#[test]
fn malformed_anchors_are_rejected() {
    let targets = [1.0];
    assert!(matches!(
        stretch_to_interval_integrals(&x(), &y(), Some(&targets), Some(&[5, 5])).unwrap_err(),
        WeaveError::InvalidBoundaries(_)
    ));
    assert_eq!(
        stretch_to_interval_integrals(&x(), &y(), Some(&targets), Some(&[0, 11])).unwrap_err(),
        WeaveError::IndexOutOfBounds { index: 11, len: 11 }
    );
}

/// An adjacent-anchor span cannot absorb a differing target.
#[test]
fn adjacent_anchor_spans_reject_differing_targets() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 1.0, 1.0, 1.0];
    // Span [0, 1] currently integrates to 1; asking for 4 must fail.
    assert_eq!(
        stretch_to_interval_integrals(&x, &y, Some(&[4.0, 2.0]), Some(&[0, 1, 3])).unwrap_err(),
        WeaveError::DegenerateSpan { len: 2 }
    );
}
