//! Discrete integrals over sampled curves.
//!
//! Per-pair integrals feed the conservation targets; the total trapezoid
//! is what conservation holds exact. The rectangle rule is exact when the
//! samples are interval averages, which is precisely the reconstruction
//! input convention.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Integral between each consecutive pair using the left sample:
/// `y[i] * (x[i+1] - x[i])`. Exact when `y` holds interval averages.
pub fn rectangle_integral<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len());
    x.windows(2)
        .zip(y.iter())
        .map(|(pair, &yi)| yi * (pair[1] - pair[0]))
        .collect()
}

/// Integral between each consecutive pair using the trapezoidal rule.
pub fn trapezoid_integral<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len());
    let half = T::from(0.5).unwrap();
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xp, yp)| (yp[0] + yp[1]) * half * (xp[1] - xp[0]))
        .collect()
}

/// Total trapezoidal integral of the curve over its full range.
pub fn trapezoid_area<T: Float>(x: &[T], y: &[T]) -> T {
    trapezoid_integral(x, y)
        .into_iter()
        .fold(T::zero(), |acc, v| acc + v)
}
