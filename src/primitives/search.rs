//! Bracket searches and range sums over sorted coordinate arrays.
//!
//! ## Purpose
//!
//! This module maps query coordinates to the indices of their bracketing
//! elements in a sorted array, and aggregates values over contiguous index
//! ranges. Reconstruction and conservation both locate anchors through
//! these lookups.
//!
//! ## Design notes
//!
//! * **Linear co-scan**: Both the array and the queries are ascending, so
//!   every lookup is a single forward scan, O(n + m) total. Reconstruction
//!   calls these once per oversampling factor on large traces; the bound is
//!   part of the contract, not an optimization.
//! * **Out-of-range handling**: Checked variants return `None` for queries
//!   outside the array; clamped variants map them to the nearest end index.
//!
//! ## Invariants
//!
//! * `x` is sorted ascending; queries are sorted ascending.
//! * Exact matches map to their own index (never the neighbor).
//! * For ascending queries, returned indices are non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not sort its inputs.
//! * This module does not interpolate between bracketing elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WeaveError;

// ============================================================================
// Lower Bracket
// ============================================================================

/// For each query, the index of the closest element of `x` that is `<=` the
/// query, or `None` for queries below `x[0]`.
///
/// Exact matches map to their own index.
pub fn lower_bracket_indices<T: Float>(
    x: &[T],
    lookup: &[T],
) -> Result<Vec<Option<usize>>, WeaveError> {
    if x.is_empty() || lookup.is_empty() {
        return Err(WeaveError::EmptyInput);
    }

    let mut indices = Vec::with_capacity(lookup.len());
    let mut idx = 0;
    for &q in lookup {
        if q < x[0] {
            indices.push(None);
            continue;
        }
        while idx + 1 < x.len() && x[idx + 1] <= q {
            idx += 1;
        }
        indices.push(Some(idx));
    }
    Ok(indices)
}

/// [`lower_bracket_indices`] with below-range queries mapped to index 0.
pub fn lower_bracket_indices_clamped<T: Float>(
    x: &[T],
    lookup: &[T],
) -> Result<Vec<usize>, WeaveError> {
    Ok(lower_bracket_indices(x, lookup)?
        .into_iter()
        .map(|i| i.unwrap_or(0))
        .collect())
}

// ============================================================================
// Upper Bracket
// ============================================================================

/// For each query, the index of the closest element of `x` that is `>=` the
/// query, or `None` for queries above `x[last]`.
///
/// Exact matches map to their own index.
pub fn upper_bracket_indices<T: Float>(
    x: &[T],
    lookup: &[T],
) -> Result<Vec<Option<usize>>, WeaveError> {
    if x.is_empty() || lookup.is_empty() {
        return Err(WeaveError::EmptyInput);
    }

    let last = x.len() - 1;
    let mut indices = Vec::with_capacity(lookup.len());
    let mut idx = 0;
    for &q in lookup {
        if q > x[last] {
            indices.push(None);
            continue;
        }
        while x[idx] < q {
            idx += 1;
        }
        indices.push(Some(idx));
    }
    Ok(indices)
}

/// [`upper_bracket_indices`] with above-range queries mapped to the last index.
pub fn upper_bracket_indices_clamped<T: Float>(
    x: &[T],
    lookup: &[T],
) -> Result<Vec<usize>, WeaveError> {
    let last = x.len().saturating_sub(1);
    Ok(upper_bracket_indices(x, lookup)?
        .into_iter()
        .map(|i| i.unwrap_or(last))
        .collect())
}

// ============================================================================
// Nearest Bracket
// ============================================================================

/// For each query, whichever of the lower/upper bracketing indices is
/// numerically closer. Ties resolve to the lower index; out-of-range
/// queries clamp to the nearer end.
pub fn nearest_indices<T: Float>(x: &[T], lookup: &[T]) -> Result<Vec<usize>, WeaveError> {
    if x.is_empty() || lookup.is_empty() {
        return Err(WeaveError::EmptyInput);
    }

    let last = x.len() - 1;
    let mut indices = Vec::with_capacity(lookup.len());
    let mut idx = 0;
    for &q in lookup {
        if q <= x[0] {
            indices.push(0);
            continue;
        }
        while idx + 1 <= last && x[idx + 1] <= q {
            idx += 1;
        }
        if idx == last {
            indices.push(last);
            continue;
        }
        let d_lower = q - x[idx];
        let d_upper = x[idx + 1] - q;
        indices.push(if d_upper < d_lower { idx + 1 } else { idx });
    }
    Ok(indices)
}

// ============================================================================
// Range Sums
// ============================================================================

/// Sum `a` over the contiguous ranges defined by `boundaries`.
///
/// `boundaries` holds k+1 non-decreasing in-bounds indices defining k
/// ranges; each sum covers `[boundaries[i], boundaries[i + 1]]` inclusive
/// of both endpoints, so adjacent ranges share their boundary element.
pub fn sum_over_index_ranges<T: Float>(
    a: &[T],
    boundaries: &[usize],
) -> Result<Vec<T>, WeaveError> {
    if a.is_empty() {
        return Err(WeaveError::EmptyInput);
    }
    if boundaries.len() < 2 {
        return Err(WeaveError::InvalidBoundaries(format!(
            "need at least 2 boundary indices, got {}",
            boundaries.len()
        )));
    }
    for pair in boundaries.windows(2) {
        if pair[1] < pair[0] {
            return Err(WeaveError::InvalidBoundaries(format!(
                "boundary indices must be non-decreasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    let last_boundary = boundaries[boundaries.len() - 1];
    if last_boundary >= a.len() {
        return Err(WeaveError::IndexOutOfBounds {
            index: last_boundary,
            len: a.len(),
        });
    }

    let mut sums = Vec::with_capacity(boundaries.len() - 1);
    for pair in boundaries.windows(2) {
        let sum = a[pair[0]..=pair[1]]
            .iter()
            .fold(T::zero(), |acc, &v| acc + v);
        sums.push(sum);
    }
    Ok(sums)
}
