//! Oversampling and extension utilities for flat sample arrays.
//!
//! ## Purpose
//!
//! This module grows arrays: inserting synthetic samples between existing
//! pairs (oversampling) or past the ends (extension). These are the raw
//! array operations behind the interval view and the reconstruction
//! strategies.
//!
//! ## Key concepts
//!
//! * **Oversampling**: `num` samples per consecutive pair, sharing one
//!   boundary sample, so `n` points become `(n - 1) * num + 1`.
//! * **Extension**: `n` synthetic samples per side, either extrapolating
//!   the local slope or repeating the edge value.
//!
//! ## Invariants
//!
//! * Oversampling with `num < 2` returns the input unchanged.
//! * The first and last samples of the input survive verbatim.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WeaveError;

// ============================================================================
// Direction
// ============================================================================

/// Which side(s) of an array an extension applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Extend only before the first element.
    Left,
    /// Extend only after the last element.
    Right,
    /// Extend on both sides.
    #[default]
    Both,
}

impl Direction {
    #[inline]
    fn left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    #[inline]
    fn right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}

// ============================================================================
// Oversampling
// ============================================================================

/// Oversample by linear interpolation between each consecutive pair.
///
/// `[1, 2, 3]` oversampled by 2 becomes `[1, 1.5, 2, 2.5, 3]`. The result
/// has `(len - 1) * num + 1` elements; `num < 2` (or fewer than 2 input
/// elements) returns the input unchanged.
pub fn oversample_linspace<T: Float>(a: &[T], num: usize) -> Vec<T> {
    if num < 2 || a.len() < 2 {
        return a.to_vec();
    }
    let steps = T::from(num).unwrap();
    let mut out = Vec::with_capacity((a.len() - 1) * num + 1);
    for pair in a.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        for j in 0..num {
            let t = T::from(j).unwrap() / steps;
            out.push(lo + (hi - lo) * t);
        }
    }
    out.push(a[a.len() - 1]);
    out
}

/// Oversample by repeating the left value of each consecutive pair.
///
/// `[1, 2, 3]` oversampled by 2 becomes `[1, 1, 2, 2, 3]`. Same length
/// contract as [`oversample_linspace`].
pub fn oversample_piecewise<T: Float>(a: &[T], num: usize) -> Vec<T> {
    if num < 2 || a.len() < 2 {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity((a.len() - 1) * num + 1);
    for &v in &a[..a.len() - 1] {
        for _ in 0..num {
            out.push(v);
        }
    }
    out.push(a[a.len() - 1]);
    out
}

// ============================================================================
// Extension
// ============================================================================

/// Extend with `n` linearly spaced samples per requested side.
///
/// The left extension runs from `lstart` (inclusive, default
/// `2*a[0] - a[n]`) up to `a[0]` (exclusive); the right extension runs
/// from `a[last]` (exclusive) to `rstop` (inclusive, default
/// `2*a[last] - a[last - n]`). Arrays shorter than `n + 1` fall back to
/// their far edge value for the default endpoints.
pub fn extend_linspace<T: Float>(
    a: &[T],
    n: usize,
    direction: Direction,
    lstart: Option<T>,
    rstop: Option<T>,
) -> Vec<T> {
    if a.is_empty() || n == 0 {
        return a.to_vec();
    }
    let last = a.len() - 1;
    let two = T::from(2.0).unwrap();
    let steps = T::from(n).unwrap();
    let mut out = Vec::with_capacity(a.len() + 2 * n);

    if direction.left() {
        let start = lstart.unwrap_or_else(|| two * a[0] - a[n.min(last)]);
        for j in 0..n {
            let t = T::from(j).unwrap() / steps;
            out.push(start + (a[0] - start) * t);
        }
    }
    out.extend_from_slice(a);
    if direction.right() {
        let stop = rstop.unwrap_or_else(|| two * a[last] - a[last.saturating_sub(n)]);
        for j in 1..=n {
            let t = T::from(j).unwrap() / steps;
            out.push(a[last] + (stop - a[last]) * t);
        }
    }
    out
}

/// Extend with `n` copies of the edge value per requested side.
pub fn extend_constant<T: Float>(a: &[T], n: usize, direction: Direction) -> Vec<T> {
    if a.is_empty() || n == 0 {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity(a.len() + 2 * n);
    if direction.left() {
        for _ in 0..n {
            out.push(a[0]);
        }
    }
    out.extend_from_slice(a);
    if direction.right() {
        for _ in 0..n {
            out.push(a[a.len() - 1]);
        }
    }
    out
}

// ============================================================================
// Appending
// ============================================================================

/// Append one sample to the end of a time series.
///
/// The new x-coordinate continues the trailing spacing
/// (`2*x[last] - x[last - 1]`). The new y-value repeats the last sample,
/// or the first one when `make_periodic` is set, which closes the series
/// into one full period.
pub fn append_one_sample<T: Float>(
    x: &[T],
    y: &[T],
    make_periodic: bool,
) -> Result<(Vec<T>, Vec<T>), WeaveError> {
    if x.len() != y.len() {
        return Err(WeaveError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(WeaveError::TooFewPoints {
            got: x.len(),
            min: 2,
        });
    }
    let two = T::from(2.0).unwrap();
    let mut x_out = x.to_vec();
    let mut y_out = y.to_vec();
    x_out.push(two * x[x.len() - 1] - x[x.len() - 2]);
    y_out.push(if make_periodic { y[0] } else { y[y.len() - 1] });
    Ok((x_out, y_out))
}
