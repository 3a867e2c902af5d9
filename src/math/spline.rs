//! Cubic spline interpolation through anchor points.
//!
//! A smooth interpolant with continuous first and second derivatives and
//! not-a-knot end conditions: the third derivative is also continuous
//! across the second and second-to-last knots, so no artificial flatness
//! is imposed at the ends. With four knots this reproduces the single
//! cubic through them; with three, the single parabola.

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
use crate::primitives::errors::WeaveError;

// ============================================================================
// Cubic Spline
// ============================================================================

/// A not-a-knot cubic spline interpolator.
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    /// Strictly increasing knot coordinates.
    xs: Vec<T>,

    /// Knot values.
    ys: Vec<T>,

    /// Second derivatives at each knot, solved at construction.
    m: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    /// Construct a spline through the given knots.
    ///
    /// `xs` must be strictly increasing and paired with `ys`; two knots
    /// degenerate to the connecting line.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, WeaveError> {
        if xs.len() != ys.len() {
            return Err(WeaveError::MismatchedInputs {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(WeaveError::TooFewPoints {
                got: xs.len(),
                min: 2,
            });
        }
        for (i, pair) in xs.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(WeaveError::NotIncreasing { index: i + 1 });
            }
        }
        let m = second_derivatives(&xs, &ys);
        Ok(Self { xs, ys, m })
    }

    /// Evaluate at a single coordinate; outside the knot range the
    /// boundary polynomial extrapolates.
    pub fn evaluate(&self, x: T) -> T {
        let n = self.xs.len();
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        self.eval_segment(lo, x)
    }

    /// Evaluate at an ascending grid with a single linear co-scan over the
    /// knots; exact at knot coordinates.
    pub fn evaluate_sorted(&self, grid: &[T]) -> Vec<T> {
        let last_seg = self.xs.len() - 2;
        let mut out = Vec::with_capacity(grid.len());
        let mut seg = 0;
        for &x in grid {
            while seg < last_seg && self.xs[seg + 1] < x {
                seg += 1;
            }
            out.push(self.eval_segment(seg, x));
        }
        out
    }

    fn eval_segment(&self, seg: usize, x: T) -> T {
        let six = T::from(6.0).unwrap();
        let (x0, x1) = (self.xs[seg], self.xs[seg + 1]);
        let h = x1 - x0;
        let a = (x1 - x) / h;
        let b = (x - x0) / h;
        a * self.ys[seg]
            + b * self.ys[seg + 1]
            + ((a * a * a - a) * self.m[seg] + (b * b * b - b) * self.m[seg + 1]) * h * h / six
    }
}

// ============================================================================
// Second-Derivative Solve
// ============================================================================

/// Solve the tridiagonal system for knot second derivatives under
/// not-a-knot end conditions.
fn second_derivatives<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    let n = xs.len();
    if n == 2 {
        return vec![T::zero(); 2];
    }

    let three = T::from(3.0).unwrap();
    let six = T::from(6.0).unwrap();
    let h: Vec<T> = xs.windows(2).map(|p| p[1] - p[0]).collect();
    let slope = |i: usize| (ys[i + 1] - ys[i]) / h[i];

    if n == 3 {
        // Not-a-knot with a single interior knot is the parabola through
        // all three points: one shared second derivative.
        let m = (slope(1) - slope(0)) * T::from(2.0).unwrap() / (h[0] + h[1]);
        return vec![m; 3];
    }

    // Continuity equations at interior knots, in the unknowns M_1..M_{n-2}.
    let k = n - 2;
    let mut sub = vec![T::zero(); k];
    let mut diag = vec![T::zero(); k];
    let mut sup = vec![T::zero(); k];
    let mut rhs = vec![T::zero(); k];
    for j in 0..k {
        let i = j + 1;
        sub[j] = h[i - 1] / six;
        diag[j] = (h[i - 1] + h[i]) / three;
        sup[j] = h[i] / six;
        rhs[j] = slope(i) - slope(i - 1);
    }

    // Not-a-knot ties the end derivatives to their neighbors:
    //   M_0 = (1 + h_0/h_1) M_1 - (h_0/h_1) M_2
    //   M_{n-1} = (1 + h_{n-2}/h_{n-3}) M_{n-2} - (h_{n-2}/h_{n-3}) M_{n-3}
    // Substituting folds the corner coefficients into the first/last rows.
    let r0 = h[0] / h[1];
    diag[0] = diag[0] + sub[0] * (T::one() + r0);
    sup[0] = sup[0] - sub[0] * r0;
    sub[0] = T::zero();

    let r1 = h[n - 2] / h[n - 3];
    diag[k - 1] = diag[k - 1] + sup[k - 1] * (T::one() + r1);
    sub[k - 1] = sub[k - 1] - sup[k - 1] * r1;
    sup[k - 1] = T::zero();

    // Thomas sweep.
    for j in 1..k {
        let w = sub[j] / diag[j - 1];
        diag[j] = diag[j] - w * sup[j - 1];
        rhs[j] = rhs[j] - w * rhs[j - 1];
    }
    let mut inner = vec![T::zero(); k];
    inner[k - 1] = rhs[k - 1] / diag[k - 1];
    for j in (0..k - 1).rev() {
        inner[j] = (rhs[j] - sup[j] * inner[j + 1]) / diag[j];
    }

    let mut m = Vec::with_capacity(n);
    m.push((T::one() + r0) * inner[0] - r0 * inner[1]);
    m.extend_from_slice(&inner);
    m.push((T::one() + r1) * inner[k - 1] - r1 * inner[k - 2]);
    m
}

// ============================================================================
// Tests
// ============================================================================
