//! Easing shapes for level transitions.
//!
//! ## Purpose
//!
//! This module evaluates the parameterized shapes a transition between two
//! levels can take: plain linear, power-law easing at either end, and
//! asymmetric mixes of easing with linear weighted by position. All six
//! reconstruction strategies funnel through the single [`blend`] function;
//! the strategies differ only in which shape they select and how wide the
//! transition is.
//!
//! ## Key concepts
//!
//! * **Normalized position**: `t` runs from 0 (start level) to 1 (end
//!   level) across the transition window.
//! * **Exponent**: `a` controls power-law curvature; 2 is quadratic easing.
//! * **Shape selection**: [`select_blend`] is a stateless function of three
//!   consecutive level differences. Zero differences never produce NaN;
//!   a flat transition degrades to linear.
//!
//! ## Invariants
//!
//! * Every shape passes exactly through both levels: `blend(k, y0, y1, 0, a)
//!   == y0` and `blend(k, y0, y1, 1, a) == y1`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Shapes
// ============================================================================

/// Transition shape between two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Straight line between the levels.
    Linear,

    /// Slow start: `y0 + t^a (y1 - y0)`.
    EaseIn,

    /// Slow end: `y0 + (1 - (1-t)^a)(y1 - y0)`.
    EaseOut,

    /// Ease-in near the start, straightening into linear toward the end.
    EaseInLinear,

    /// Linear at the start, easing out toward the end.
    EaseOutLinear,
}

/// Evaluate a transition shape at normalized position `t` in [0, 1].
pub fn blend<T: Float>(kind: Blend, y0: T, y1: T, t: T, a: T) -> T {
    let d = y1 - y0;
    let one = T::one();
    match kind {
        Blend::Linear => y0 + t * d,
        Blend::EaseIn => y0 + t.powf(a) * d,
        Blend::EaseOut => y0 + (one - (one - t).powf(a)) * d,
        Blend::EaseInLinear => y0 + t.powf(a) * d * (one - t) + t * d * t,
        Blend::EaseOutLinear => y0 + (one - (one - t).powf(a)) * d * t + t * d * (one - t),
    }
}

// ============================================================================
// Shape Selection
// ============================================================================

/// Choose an eased shape for a transition from the signs and magnitudes of
/// the neighboring level differences.
///
/// `d` is the difference this transition spans; `d_prev` and `d_next` are
/// the differences at the previous and next anchors (zero at the series
/// ends).
///
/// * Leaving a local extremum (the trend reverses behind): slow start.
/// * Entering a local extremum (the trend reverses ahead): slow end.
/// * Trend continuing through both anchors: mostly linear, with a mild
///   ease on the side of the smaller neighboring change.
/// * Extrema on both sides (an isolated step): pure easing, oriented
///   toward the larger neighboring change.
pub fn select_blend<T: Float>(d_prev: T, d: T, d_next: T) -> Blend {
    if d == T::zero() {
        return Blend::Linear;
    }
    let through_before = d_prev * d > T::zero();
    let through_after = d * d_next > T::zero();
    match (through_before, through_after) {
        (false, true) => Blend::EaseIn,
        (true, false) => Blend::EaseOut,
        (true, true) => {
            if d_prev.abs() <= d_next.abs() {
                Blend::EaseInLinear
            } else {
                Blend::EaseOutLinear
            }
        }
        (false, false) => {
            if d_prev.abs() <= d_next.abs() {
                Blend::EaseIn
            } else {
                Blend::EaseOut
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
