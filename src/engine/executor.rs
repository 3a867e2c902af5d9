//! Reconstruction entry point.
//!
//! ## Purpose
//!
//! This module validates inputs and configuration, then dispatches to the
//! strategy algorithms to build the first-pass oversampled curve. It is
//! the boundary between unchecked caller data and the assumed-valid
//! algorithm layer.
//!
//! ## Invariants
//!
//! * Output arrays have length `(len(x) - 1) * factor + 1`.
//! * The fine x grid is the linear oversampling of the input x, so the
//!   original coordinates appear verbatim at multiples of the factor.
//!
//! ## Non-goals
//!
//! * This module does not enforce conservation (see the stretch engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rfa::{recreate_curve, ShapeConfig, Strategy};
use crate::engine::validator::Validator;
use crate::primitives::errors::WeaveError;

/// Recreate a fine-grained curve from interval-average samples.
///
/// `factor` fine samples are synthesized per original interval, inclusive
/// of one shared boundary sample. Strategies with a transition shape
/// reject `factor < 2`; the interpolating strategies accept `factor == 1`
/// and return the inputs unchanged.
pub fn reconstruct<T: Float>(
    x: &[T],
    y: &[T],
    factor: usize,
    strategy: Strategy,
    shape: ShapeConfig<T>,
) -> Result<(Vec<T>, Vec<T>), WeaveError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_factor(factor, strategy.min_factor())?;
    Validator::validate_alpha(shape.alpha)?;
    Validator::validate_exponent(shape.exponent)?;

    recreate_curve(x, y, factor, strategy, shape)
}
