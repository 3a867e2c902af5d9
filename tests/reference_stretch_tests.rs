//! Tests for the reference-driven stretch.
//!
//! These tests verify target/anchor derivation from a coarser reference
//! curve:
//! - Rectangle-rule targets with anchors looked up in the fine grid
//! - Explicit fixed points by value and by index
//! - Trapezoid-rule targets
//! - Fixed-point count validation

use approx::assert_abs_diff_eq;
use reweave::prelude::*;

fn x() -> Vec<f64> {
    vec![-2.0, -1.0, 1.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 11.0]
}

fn y() -> Vec<f64> {
    vec![1.0, 2.0, 2.1, -2.0, 6.0, 4.0, 2.0, 2.0, 3.0, 5.0, 6.0]
}

/// Every other sample of the fine grid as the reference curve.
fn reference() -> (Vec<f64>, Vec<f64>) {
    (
        x().into_iter().step_by(2).collect(),
        vec![1.0, 2.1, 6.0, 2.0, 3.0, 6.0],
    )
}

fn span_integrals(x: &[f64], y: &[f64], anchors: &[usize]) -> Vec<f64> {
    anchors
        .windows(2)
        .map(|pair| trapezoid_area(&x[pair[0]..=pair[1]], &y[pair[0]..=pair[1]]))
        .collect()
}

// ============================================================================
// Rectangle Targets
// ============================================================================

/// With rectangle targets, every adjacent sub-integral equals the area of
/// the corresponding reference step, and the three-point spans admit an
/// exact closed-form check.
#[test]
fn rectangle_reference_matches_every_step_area() {
    let (x_ref, y_ref) = reference();
    let stretched = stretch_to_reference_integrals(
        &x(),
        &y(),
        &x_ref,
        &y_ref,
        ReferenceIntegral::Rectangle,
        None,
    )
    .unwrap();

    // Anchors land on the even indices of the fine grid.
    let anchors = [0, 2, 4, 6, 8, 10];
    let targets = rectangle_integral(&x_ref, &y_ref);
    let got = span_integrals(&x(), &stretched, &anchors);
    for (g, t) in got.iter().zip(targets.iter()) {
        assert_abs_diff_eq!(*g, *t, epsilon = 1e-9);
    }

    // Each span has one interior point, so the correction is fully
    // determined: the anchors keep their values and the midpoints move to
    // absorb the difference.
    let expected = [
        1.0,
        0.266_666_666_666_666_6,
        2.1,
        0.8,
        6.0,
        8.0,
        2.0,
        1.5,
        3.0,
        2.0,
        6.0,
    ];
    for (g, e) in stretched.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*g, *e, epsilon = 1e-9);
    }
}

/// Trapezoid targets use the averaged reference pair instead.
#[test]
fn trapezoid_reference_matches_every_pair_integral() {
    let (x_ref, y_ref) = reference();
    let stretched = stretch_to_reference_integrals(
        &x(),
        &y(),
        &x_ref,
        &y_ref,
        ReferenceIntegral::Trapezoid,
        None,
    )
    .unwrap();
    let anchors = [0, 2, 4, 6, 8, 10];
    let targets = trapezoid_integral(&x_ref, &y_ref);
    let got = span_integrals(&x(), &stretched, &anchors);
    for (g, t) in got.iter().zip(targets.iter()) {
        assert_abs_diff_eq!(*g, *t, epsilon = 1e-9);
    }
}

// ============================================================================
// Explicit Fixed Points
// ============================================================================

/// Anchors supplied by index override the coordinate lookup and must
/// reproduce the looked-up behavior when they coincide.
#[test]
fn fixed_points_by_index_match_the_lookup() {
    let (x_ref, y_ref) = reference();
    let by_lookup = stretch_to_reference_integrals(
        &x(),
        &y(),
        &x_ref,
        &y_ref,
        ReferenceIntegral::Rectangle,
        None,
    )
    .unwrap();
    let indices = [0, 2, 4, 6, 8, 10];
    let by_index = stretch_to_reference_integrals(
        &x(),
        &y(),
        &x_ref,
        &y_ref,
        ReferenceIntegral::Rectangle,
        Some(FixedPoints::ByIndex(&indices)),
    )
    .unwrap();
    assert_eq!(by_lookup, by_index);
}

/// Anchors supplied by value are located with the lower-bracket search.
#[test]
fn fixed_points_by_value_are_located_in_the_fine_grid() {
    let (x_ref, y_ref) = reference();
    let values = [-2.0, 1.0, 4.0, 6.0, 8.0, 11.0];
    let stretched = stretch_to_reference_integrals(
        &x(),
        &y(),
        &x_ref,
        &y_ref,
        ReferenceIntegral::Rectangle,
        Some(FixedPoints::ByValue(&values)),
    )
    .unwrap();
    // The pinned values survive at the located anchors.
    for &a in &[0usize, 2, 4, 6, 8, 10] {
        assert_eq!(stretched[a], y()[a]);
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Explicit fixed points must supply one anchor per reference sample —
/// too few and too many are both rejected.
#[test]
fn fixed_point_counts_must_match_the_reference() {
    let (x_ref, y_ref) = reference();
    let too_few = [-2.0, 11.0];
    assert_eq!(
        stretch_to_reference_integrals(
            &x(),
            &y(),
            &x_ref,
            &y_ref,
            ReferenceIntegral::Rectangle,
            Some(FixedPoints::ByValue(&too_few)),
        )
        .unwrap_err(),
        WeaveError::FixedPointCountMismatch {
            got: 2,
            expected: 6
        }
    );

    let too_many = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    assert_eq!(
        stretch_to_reference_integrals(
            &x(),
            &y(),
            &x_ref,
            &y_ref,
            ReferenceIntegral::Rectangle,
            Some(FixedPoints::ByIndex(&too_many)),
        )
        .unwrap_err(),
        WeaveError::FixedPointCountMismatch {
            got: 13,
            expected: 6
        }
    );
}

/// The reference curve itself is validated like any other input.
#[test]
fn malformed_references_are_rejected() {
    let x_ref = [0.0, 1.0];
    let y_ref = [1.0];
    assert_eq!(
        stretch_to_reference_integrals(
            &x(),
            &y(),
            &x_ref,
            &y_ref,
            ReferenceIntegral::Rectangle,
            None,
        )
        .unwrap_err(),
        WeaveError::MismatchedInputs { x_len: 2, y_len: 1 }
    );
}
