//! Conservation engine: integral-matching stretch.
//!
//! ## Purpose
//!
//! This module perturbs a candidate curve so that its trapezoidal
//! integral over designated spans hits exact target values while the
//! span endpoints stay pinned. It is the mechanism that makes any
//! reconstruction conserve the original interval integrals when
//! re-aggregated.
//!
//! ## Design notes
//!
//! * **Closed form**: Each span gets a parabolic correction
//!   `c * (x - x_first)(x_last - x)`, which vanishes at both endpoints.
//!   `c` is solved directly against the discrete trapezoid rule, so the
//!   match is exact in one pass — no iteration, no convergence, no retry.
//! * **Shape preservation**: The correction is one smooth bump; the
//!   candidate's local features shift but are not re-ordered.
//! * **Independence**: Spans are corrected independently; shared anchors
//!   are pinned by both neighbors, so the spans compose without seams.
//!
//! ## Key concepts
//!
//! * **Anchor**: An index whose value must survive the adjustment.
//! * **Target integral**: The exact trapezoidal integral a span must have
//!   afterwards. Omitted targets default to zero per span.
//! * **Reference targets**: Derived from a coarser reference curve by the
//!   rectangle or trapezoid rule, one per consecutive reference pair.
//!
//! ## Non-goals
//!
//! * This module does not produce least-squares-optimal corrections.
//! * This module does not model measurement uncertainty.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::integrate::{rectangle_integral, trapezoid_area, trapezoid_integral};
use crate::primitives::errors::WeaveError;
use crate::primitives::search::lower_bracket_indices_clamped;

// ============================================================================
// Reference Integral Method
// ============================================================================

/// Approximation used to turn reference samples into target integrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceIntegral {
    /// Left sample times span width; exact for interval-average samples.
    #[default]
    Rectangle,

    /// Trapezoidal rule over each consecutive reference pair.
    Trapezoid,
}

impl ReferenceIntegral {
    /// One target integral per consecutive reference pair.
    pub fn integrals<T: Float>(self, x: &[T], y: &[T]) -> Vec<T> {
        match self {
            Self::Rectangle => rectangle_integral(x, y),
            Self::Trapezoid => trapezoid_integral(x, y),
        }
    }
}

// ============================================================================
// Fixed Points
// ============================================================================

/// Explicit anchor positions for the reference stretch, overriding the
/// positions looked up from the reference coordinates.
#[derive(Debug, Clone, Copy)]
pub enum FixedPoints<'a, T> {
    /// Anchor coordinates, located in `x` by the lower-bracket search.
    ByValue(&'a [T]),

    /// Anchor indices into `x`, used as-is.
    ByIndex(&'a [usize]),
}

// ============================================================================
// Single-Span Stretch
// ============================================================================

/// Stretch `y` so its trapezoidal integral over `x` equals `target`,
/// keeping `y[0]` and `y[last]` untouched.
///
/// Any finite target is reachable, negative values included. A span of
/// fewer than 3 points has no interior freedom: it passes through
/// unchanged when the target already matches and fails with
/// [`WeaveError::DegenerateSpan`] otherwise.
pub fn stretch_to_integral<T: Float>(x: &[T], y: &[T], target: T) -> Result<Vec<T>, WeaveError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_scalar(target, "target integral")?;
    stretch_span(x, y, target)
}

/// Core span correction; inputs already validated.
fn stretch_span<T: Float>(x: &[T], y: &[T], target: T) -> Result<Vec<T>, WeaveError> {
    let current = trapezoid_area(x, y);
    if x.len() < 3 {
        let tolerance = T::epsilon() * (T::one() + current.abs());
        if (target - current).abs() <= tolerance {
            return Ok(y.to_vec());
        }
        return Err(WeaveError::DegenerateSpan { len: x.len() });
    }

    // Parabolic bump vanishing at both endpoints; its own trapezoidal
    // integral is positive for any strictly increasing x with an interior.
    let x_first = x[0];
    let x_last = x[x.len() - 1];
    let bump: Vec<T> = x.iter().map(|&xi| (xi - x_first) * (x_last - xi)).collect();
    let bump_area = trapezoid_area(x, &bump);

    let c = (target - current) / bump_area;
    Ok(y.iter()
        .zip(bump.iter())
        .map(|(&yi, &b)| yi + c * b)
        .collect())
}

// ============================================================================
// Interval Stretch
// ============================================================================

/// Stretch each span between consecutive anchors to its own target
/// integral, pinning every anchor value.
///
/// * Both `targets` and `anchors` omitted is a configuration error —
///   neither can be inferred from the other's absence.
/// * Omitted `targets` default to zero per span.
/// * Omitted `anchors` default to evenly spaced boundaries
///   `[0, s, 2s, .., k*s]` with `s = len / k`; samples past the last
///   boundary are left untouched.
/// * When both are given, there must be exactly one target per span.
pub fn stretch_to_interval_integrals<T: Float>(
    x: &[T],
    y: &[T],
    targets: Option<&[T]>,
    anchors: Option<&[usize]>,
) -> Result<Vec<T>, WeaveError> {
    Validator::validate_inputs(x, y)?;

    let (targets, anchors): (Vec<T>, Vec<usize>) = match (targets, anchors) {
        (None, None) => return Err(WeaveError::MissingConservationSpec),
        (Some(t), Some(a)) => {
            Validator::validate_anchor_indices(a, y.len())?;
            if t.len() + 1 != a.len() {
                return Err(WeaveError::TargetAnchorMismatch {
                    targets: t.len(),
                    anchors: a.len(),
                });
            }
            (t.to_vec(), a.to_vec())
        }
        (Some(t), None) => {
            if t.is_empty() {
                return Err(WeaveError::TargetAnchorMismatch {
                    targets: 0,
                    anchors: 0,
                });
            }
            let step = y.len() / t.len();
            let anchors: Vec<usize> = (0..=t.len()).map(|i| i * step).collect();
            Validator::validate_anchor_indices(&anchors, y.len())?;
            (t.to_vec(), anchors)
        }
        (None, Some(a)) => {
            Validator::validate_anchor_indices(a, y.len())?;
            (vec![T::zero(); a.len() - 1], a.to_vec())
        }
    };
    for &t in &targets {
        Validator::validate_scalar(t, "target integral")?;
    }

    let mut out = y.to_vec();
    for (span, pair) in anchors.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        let stretched = stretch_span(&x[lo..=hi], &y[lo..=hi], targets[span])?;
        out[lo..=hi].copy_from_slice(&stretched);
    }
    Ok(out)
}

// ============================================================================
// Reference Stretch
// ============================================================================

/// Derive targets and anchors from a coarser reference curve, then
/// stretch each span to match.
///
/// Targets come from `method` applied to consecutive reference pairs.
/// Anchors are the reference coordinates located in `x` by the
/// lower-bracket search, unless `fixed_points` supplies them explicitly —
/// in which case their count must equal the reference length exactly.
pub fn stretch_to_reference_integrals<T: Float>(
    x: &[T],
    y: &[T],
    x_ref: &[T],
    y_ref: &[T],
    method: ReferenceIntegral,
    fixed_points: Option<FixedPoints<'_, T>>,
) -> Result<Vec<T>, WeaveError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_inputs(x_ref, y_ref)?;

    let targets = method.integrals(x_ref, y_ref);
    let anchors: Vec<usize> = match fixed_points {
        None => lower_bracket_indices_clamped(x, x_ref)?,
        Some(FixedPoints::ByValue(values)) => {
            if values.len() != x_ref.len() {
                return Err(WeaveError::FixedPointCountMismatch {
                    got: values.len(),
                    expected: x_ref.len(),
                });
            }
            lower_bracket_indices_clamped(x, values)?
        }
        Some(FixedPoints::ByIndex(indices)) => {
            if indices.len() != x_ref.len() {
                return Err(WeaveError::FixedPointCountMismatch {
                    got: indices.len(),
                    expected: x_ref.len(),
                });
            }
            indices.to_vec()
        }
    };

    stretch_to_interval_integrals(x, y, Some(&targets), Some(&anchors))
}
