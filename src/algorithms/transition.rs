//! Transition window sizing around shared anchor points.
//!
//! Level-based strategies place a transition window across each anchor
//! where the curve moves from one interval's level to the next. The
//! window's total span comes from the transition share `alpha`; its split
//! around the anchor is either symmetric (fixed sizing) or skewed toward
//! the flatter neighborhood (adaptive sizing).

// External dependencies
use num_traits::Float;

// ============================================================================
// Window Span
// ============================================================================

/// Total transition span in fine samples: `alpha` of one oversampled
/// interval, never below 2 so a transition always has an interior.
pub fn window_span<T: Float>(alpha: T, factor: usize) -> usize {
    let a = (alpha * T::from(factor).unwrap()).to_usize().unwrap_or(0);
    a.max(2)
}

// ============================================================================
// Extents
// ============================================================================

/// Half-widths of a transition window around its anchor, in fine samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    /// Samples before the anchor.
    pub left: usize,

    /// Samples after the anchor.
    pub right: usize,
}

/// Symmetric split of the span around the anchor.
pub fn fixed_extents(span: usize) -> Extents {
    let left = span / 2;
    Extents {
        left,
        right: span - left,
    }
}

/// Split derived from the jump magnitudes at the neighboring anchors.
///
/// With `G_j = |y_j - y_{j-1}|` the jump at anchor `j` (mirrored past the
/// series ends), each side of the window grows with the *neighboring*
/// jump:
///
/// ```text
/// left  = floor(span * G_{anchor-1} / (G_{anchor-1} + G_anchor))
/// right = floor(span * G_{anchor+1} / (G_anchor + G_{anchor+1}))
/// ```
///
/// so a transition next to a calm region extends into it, while one next
/// to a steep region stays clear. A zero denominator (two flat jumps)
/// degrades to the symmetric split; each side keeps at least one sample.
pub fn adaptive_extents<T: Float>(y: &[T], anchor: usize, span: usize) -> Extents {
    debug_assert!(anchor >= 1 && anchor < y.len());

    let m = y.len();
    let jump = |j: usize| -> T {
        if j == 0 {
            (y[1] - y[0]).abs()
        } else if j >= m {
            (y[m - 1] - y[m - 2]).abs()
        } else {
            (y[j] - y[j - 1]).abs()
        }
    };
    let g_prev = jump(anchor - 1);
    let g = jump(anchor);
    let g_next = jump(anchor + 1);

    let t_span = T::from(span).unwrap();
    let symmetric = fixed_extents(span);
    let left = if g_prev + g > T::zero() {
        (t_span * g_prev / (g_prev + g)).to_usize().unwrap_or(0)
    } else {
        symmetric.left
    };
    let right = if g + g_next > T::zero() {
        (t_span * g_next / (g + g_next)).to_usize().unwrap_or(0)
    } else {
        symmetric.right
    };
    Extents {
        left: left.max(1),
        right: right.max(1),
    }
}

// ============================================================================
// Tests
// ============================================================================
