//! Recreate-from-average strategies.
//!
//! ## Purpose
//!
//! This module synthesizes an oversampled curve from interval-average
//! samples. Each strategy chooses a different first-pass shape; none of
//! them enforces conservation on its own — that is the conservation
//! engine's job afterwards.
//!
//! ## Design notes
//!
//! * **One engine, six strategies**: The strategies form a closed set
//!   dispatched into shared code paths — direct oversampling, spline
//!   evaluation, or the level-transition engine parameterized by window
//!   sizing and easing shape. No per-strategy state.
//! * **Levels, not samples**: The transition strategies read `y[i]` as the
//!   level of the interval starting at `x[i]`, hold that level through the
//!   interval interior, and transition across each shared anchor.
//! * **Anchor pass-through**: Piecewise-constant and spline strategies
//!   reproduce `y` exactly at the original sample positions. The level
//!   strategies do not — their anchors sit mid-transition by construction.
//!
//! ## Key concepts
//!
//! * **Oversampling factor**: Fine samples per original interval, sharing
//!   one boundary sample; output length is `(len - 1) * factor + 1`.
//! * **Fixed vs. adaptive**: Fixed sizing centers every transition window;
//!   adaptive sizing skews it using the neighboring jump magnitudes.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the engine layer).
//! * This module does not enforce integral conservation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::transition::{adaptive_extents, fixed_extents, window_span};
use crate::math::blend::{blend, select_blend, Blend};
use crate::math::spline::CubicSpline;
use crate::primitives::errors::WeaveError;
use crate::primitives::resample::{oversample_linspace, oversample_piecewise};

// ============================================================================
// Strategy
// ============================================================================

/// Shape policy for recreating a fine curve from interval averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Step function holding each interval's value; the only strategy that
    /// re-averages exactly without a conservation pass.
    PiecewiseConstant,

    /// Smooth not-a-knot cubic spline through all samples.
    CubicSpline,

    /// Straight transitions between interval levels, centered on anchors.
    LinearFixed,

    /// Straight transitions with windows skewed by neighboring jumps.
    #[default]
    LinearAdaptive,

    /// Power-law eased transitions, centered on anchors.
    PowerFixed,

    /// Power-law eased transitions with windows skewed by neighboring
    /// jumps.
    PowerAdaptive,
}

impl Strategy {
    /// Smallest accepted oversampling factor.
    ///
    /// Interpolating strategies tolerate factor 1 (a no-op); transition
    /// strategies need at least one interior sample per interval.
    pub fn min_factor(self) -> usize {
        match self {
            Self::PiecewiseConstant | Self::CubicSpline => 1,
            _ => 2,
        }
    }

    #[inline]
    fn is_adaptive(self) -> bool {
        matches!(self, Self::LinearAdaptive | Self::PowerAdaptive)
    }

    #[inline]
    fn is_powered(self) -> bool {
        matches!(self, Self::PowerFixed | Self::PowerAdaptive)
    }
}

// ============================================================================
// Shape Configuration
// ============================================================================

/// Tuning for the transition strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig<T> {
    /// Share of each interval spent transitioning, in [0, 1]. At 1 the
    /// transition windows tile the whole trace; at 0 they shrink to the
    /// two-sample minimum.
    pub alpha: T,

    /// Power-law easing exponent; 2 is quadratic easing.
    pub exponent: T,
}

impl<T: Float> Default for ShapeConfig<T> {
    fn default() -> Self {
        Self {
            alpha: T::one(),
            exponent: T::from(2.0).unwrap(),
        }
    }
}

// ============================================================================
// Curve Synthesis
// ============================================================================

/// Build the first-pass oversampled curve for a validated input.
///
/// Inputs are assumed validated (matched lengths, at least 2 points,
/// strictly increasing x, factor at or above the strategy minimum).
pub fn recreate_curve<T: Float>(
    x: &[T],
    y: &[T],
    factor: usize,
    strategy: Strategy,
    shape: ShapeConfig<T>,
) -> Result<(Vec<T>, Vec<T>), WeaveError> {
    match strategy {
        Strategy::PiecewiseConstant => Ok((
            oversample_linspace(x, factor),
            oversample_piecewise(y, factor),
        )),
        Strategy::CubicSpline => {
            let fine_x = oversample_linspace(x, factor);
            let spline = CubicSpline::new(x.to_vec(), y.to_vec())?;
            let fine_y = spline.evaluate_sorted(&fine_x);
            Ok((fine_x, fine_y))
        }
        _ => Ok(transition_curve(x, y, factor, strategy, shape)),
    }
}

/// Level-transition synthesis shared by the linear and power strategies.
fn transition_curve<T: Float>(
    x: &[T],
    y: &[T],
    factor: usize,
    strategy: Strategy,
    shape: ShapeConfig<T>,
) -> (Vec<T>, Vec<T>) {
    let m = y.len();
    let fine_x = oversample_linspace(x, factor);
    let mut fine_y = oversample_piecewise(y, factor);
    let span = window_span(shape.alpha, factor);
    let last = fine_y.len() - 1;

    for anchor in 1..m {
        let d = y[anchor] - y[anchor - 1];
        if d == T::zero() {
            // Level unchanged: the step base is already the transition.
            continue;
        }
        let extents = if strategy.is_adaptive() {
            adaptive_extents(y, anchor, span)
        } else {
            fixed_extents(span)
        };
        let kind = if strategy.is_powered() {
            let d_prev = if anchor >= 2 {
                y[anchor - 1] - y[anchor - 2]
            } else {
                T::zero()
            };
            let d_next = if anchor + 1 < m {
                y[anchor + 1] - y[anchor]
            } else {
                T::zero()
            };
            select_blend(d_prev, d, d_next)
        } else {
            Blend::Linear
        };

        let center = anchor * factor;
        let start = center - extents.left.min(center);
        let stop = (center + extents.right).min(last);
        let total = T::from(extents.left + extents.right).unwrap();
        for k in start..=stop {
            let t = T::from(k - start).unwrap() / total;
            fine_y[k] = blend(kind, y[anchor - 1], y[anchor], t, shape.exponent);
        }
    }
    (fine_x, fine_y)
}
