//! Input validation for reconstruction and conservation.
//!
//! ## Purpose
//!
//! This module provides the validation functions for configuration
//! parameters and input data: array shapes, finite values, coordinate
//! ordering, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the
//!   finite and ordering checks share one loop.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical
//!   constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or correct invalid inputs.
//! * This module does not perform the reconstruction itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WeaveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration and input data.
///
/// Provides static methods returning `Result<(), WeaveError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a coordinate/sample array pair.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), WeaveError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(WeaveError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(WeaveError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: At least one interval
        if n < 2 {
            return Err(WeaveError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: Finite values and strictly increasing x (combined loop)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(WeaveError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(WeaveError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if i > 0 && x[i] <= x[i - 1] {
                return Err(WeaveError::NotIncreasing { index: i });
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), WeaveError> {
        if !val.is_finite() {
            return Err(WeaveError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the oversampling factor against a strategy minimum.
    pub fn validate_factor(factor: usize, min: usize) -> Result<(), WeaveError> {
        if factor < min {
            return Err(WeaveError::InvalidFactor { got: factor, min });
        }
        Ok(())
    }

    /// Validate the transition share.
    pub fn validate_alpha<T: Float>(alpha: T) -> Result<(), WeaveError> {
        if !alpha.is_finite() || alpha < T::zero() || alpha > T::one() {
            return Err(WeaveError::InvalidAlpha(
                alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the easing exponent.
    pub fn validate_exponent<T: Float>(exponent: T) -> Result<(), WeaveError> {
        if !exponent.is_finite() || exponent <= T::zero() {
            return Err(WeaveError::InvalidExponent(
                exponent.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Conservation Validation
    // ========================================================================

    /// Validate anchor indices: at least two, strictly increasing, in
    /// bounds.
    pub fn validate_anchor_indices(anchors: &[usize], len: usize) -> Result<(), WeaveError> {
        if anchors.len() < 2 {
            return Err(WeaveError::InvalidBoundaries(format!(
                "need at least 2 anchor indices, got {}",
                anchors.len()
            )));
        }
        for pair in anchors.windows(2) {
            if pair[1] <= pair[0] {
                return Err(WeaveError::InvalidBoundaries(format!(
                    "anchor indices must be strictly increasing, got {} after {}",
                    pair[1], pair[0]
                )));
            }
        }
        let last = anchors[anchors.len() - 1];
        if last >= len {
            return Err(WeaveError::IndexOutOfBounds { index: last, len });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), WeaveError> {
        if let Some(parameter) = duplicate_param {
            return Err(WeaveError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
