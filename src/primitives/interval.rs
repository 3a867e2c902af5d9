//! Fixed-width window view over a flat sample array.
//!
//! ## Purpose
//!
//! This module projects a flat array into `ceil(len / width)` fixed-width
//! windows. Strategies that treat samples as per-interval aggregates use it
//! to address, materialize, and resize data at window granularity.
//!
//! ## Design notes
//!
//! * **Ownership**: The view owns its backing array; window writes mutate
//!   it in place. This is the one sanctioned mutation point in the crate —
//!   everything else returns freshly allocated arrays.
//! * **Padding**: Materialized forms pad a trailing partial window with
//!   NaN. Aggregations over windows must therefore be NaN-aware, as
//!   [`average`] is.
//! * **Resizing**: Oversampling replaces the backing array and scales the
//!   window width by the same factor, so windows keep covering the
//!   original spans.
//!
//! ## Invariants
//!
//! * `width >= 1`, fixed at construction.
//! * `full_window_count() == len / width`; `window_count()` additionally
//!   counts a trailing partial window.
//!
//! ## Non-goals
//!
//! * This module does not validate window contents (values may be NaN).
//! * This module does not aggregate across windows beyond [`average`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WeaveError;
use crate::primitives::resample::{
    extend_constant, extend_linspace, oversample_linspace, oversample_piecewise, Direction,
};

// ============================================================================
// Interval View
// ============================================================================

/// A flat array viewed as a sequence of fixed-width windows.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalView<T> {
    /// Backing array.
    a: Vec<T>,

    /// Window width, fixed at construction.
    width: usize,
}

impl<T: Float> IntervalView<T> {
    /// Create a view over `a` with windows of `width` elements.
    pub fn new(a: Vec<T>, width: usize) -> Result<Self, WeaveError> {
        if width == 0 {
            return Err(WeaveError::InvalidWindowWidth(width));
        }
        Ok(Self { a, width })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Window width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of elements in the backing array.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the backing array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Number of windows, counting a trailing partial window.
    #[inline]
    pub fn window_count(&self) -> usize {
        (self.a.len() + self.width - 1) / self.width
    }

    /// Number of windows filled to their full width.
    #[inline]
    pub fn full_window_count(&self) -> usize {
        self.a.len() / self.width
    }

    /// Borrow the backing array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.a
    }

    /// Consume the view, returning the backing array.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.a
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Element at a linear position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.a.get(index).copied()
    }

    /// Element at `(window, offset)`; the offset must be below the window
    /// width and the addressed position must exist.
    pub fn at(&self, window: usize, offset: usize) -> Result<T, WeaveError> {
        let index = self.flat_index(window, offset)?;
        Ok(self.a[index])
    }

    /// Write the element at `(window, offset)`, mutating the backing array.
    pub fn set(&mut self, window: usize, offset: usize, value: T) -> Result<(), WeaveError> {
        let index = self.flat_index(window, offset)?;
        self.a[index] = value;
        Ok(())
    }

    fn flat_index(&self, window: usize, offset: usize) -> Result<usize, WeaveError> {
        if offset >= self.width {
            return Err(WeaveError::IndexOutOfBounds {
                index: offset,
                len: self.width,
            });
        }
        let index = window * self.width + offset;
        if index >= self.a.len() {
            return Err(WeaveError::IndexOutOfBounds {
                index,
                len: self.a.len(),
            });
        }
        Ok(index)
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Windows as equal-length rows, padding the final row with NaN.
    pub fn to_windows(&self) -> Vec<Vec<T>> {
        let mut rows = Vec::with_capacity(self.window_count());
        for w in 0..self.window_count() {
            let mut row = Vec::with_capacity(self.width);
            for j in 0..self.width {
                row.push(
                    self.a
                        .get(w * self.width + j)
                        .copied()
                        .unwrap_or_else(T::nan),
                );
            }
            rows.push(row);
        }
        rows
    }

    /// Closed sub-ranges `[w_i, w_{i+1}]` spanning consecutive window
    /// boundaries, each of length `width + 1`.
    ///
    /// A trailing window without a closing boundary sample is dropped when
    /// `drop_last` is set, and NaN-padded otherwise.
    pub fn to_closed_windows(&self, drop_last: bool) -> Vec<Vec<T>> {
        let mut rows = Vec::new();
        for w in 0..self.window_count() {
            let start = w * self.width;
            let end = start + self.width;
            if end < self.a.len() {
                rows.push(self.a[start..=end].to_vec());
            } else {
                if drop_last {
                    break;
                }
                let mut row = self.a[start..].to_vec();
                row.resize(self.width + 1, T::nan());
                rows.push(row);
            }
        }
        rows
    }

    // ========================================================================
    // Resizing
    // ========================================================================

    /// Grow by one synthetic window on each side, extrapolating the local
    /// slope.
    pub fn extend_linspace(&mut self) {
        self.a = extend_linspace(&self.a, self.width, Direction::Both, None, None);
    }

    /// Grow by one synthetic window on each side, repeating the edge values.
    pub fn extend_constant(&mut self) {
        self.a = extend_constant(&self.a, self.width, Direction::Both);
    }

    /// Replace the backing array with an `num`-times finer one by linear
    /// interpolation, scaling the window width accordingly. `num < 2`
    /// returns the view unchanged.
    pub fn oversample_linspace(self, num: usize) -> Self {
        if num < 2 {
            return self;
        }
        Self {
            a: oversample_linspace(&self.a, num),
            width: self.width * num,
        }
    }

    /// Replace the backing array with an `num`-times finer one by value
    /// repetition, scaling the window width accordingly. `num < 2` returns
    /// the view unchanged.
    pub fn oversample_piecewise(self, num: usize) -> Self {
        if num < 2 {
            return self;
        }
        Self {
            a: oversample_piecewise(&self.a, num),
            width: self.width * num,
        }
    }
}

// ============================================================================
// Windowed Aggregation
// ============================================================================

/// Average a time series over windows of `width` samples.
///
/// Returns one `(x, y)` pair per window: the window's first x-coordinate
/// and the NaN-aware mean of its y-values. The inverse direction of
/// reconstruction: averaging a reconstructed curve over the original
/// window width recovers interval-average samples.
pub fn average<T: Float>(x: &[T], y: &[T], width: usize) -> Result<(Vec<T>, Vec<T>), WeaveError> {
    if x.len() != y.len() {
        return Err(WeaveError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(WeaveError::EmptyInput);
    }
    let view = IntervalView::new(y.to_vec(), width)?;

    let mut x_out = Vec::with_capacity(view.window_count());
    let mut y_out = Vec::with_capacity(view.window_count());
    for (w, row) in view.to_windows().into_iter().enumerate() {
        let mut sum = T::zero();
        let mut count = 0;
        for v in row {
            if v.is_finite() {
                sum = sum + v;
                count += 1;
            }
        }
        y_out.push(if count > 0 {
            sum / T::from(count).unwrap()
        } else {
            T::nan()
        });
        x_out.push(x[w * width]);
    }
    Ok((x_out, y_out))
}
