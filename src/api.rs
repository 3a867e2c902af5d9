//! High-level API for curve reconstruction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder configuring a reconstruction strategy, oversampling factor,
//! shape tuning, and optional conservation, producing a model that
//! recreates fine curves from interval-average samples.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   input data is validated per call to `.recreate()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ReweaveBuilder`] via `Reweave::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.factor()`, ...).
//! 3. Call `.build()` to validate and obtain a [`ReweaveModel`].
//! 4. Call `.recreate(&x, &y)` with the averaged samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::reconstruct;
use crate::engine::stretch::{stretch_to_interval_integrals, ReferenceIntegral};
use crate::engine::validator::Validator;
use crate::primitives::search::lower_bracket_indices_clamped;

// Publicly re-exported types
pub use crate::algorithms::rfa::{ShapeConfig, Strategy};
pub use crate::engine::output::WeaveResult;
pub use crate::engine::stretch::FixedPoints;
pub use crate::primitives::errors::WeaveError;

/// Default oversampling factor.
const DEFAULT_FACTOR: usize = 4;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring curve reconstruction.
#[derive(Debug, Clone)]
pub struct ReweaveBuilder<T> {
    /// Reconstruction strategy.
    pub strategy: Option<Strategy>,

    /// Fine samples per original interval.
    pub factor: Option<usize>,

    /// Transition share in [0, 1].
    pub alpha: Option<T>,

    /// Power-law easing exponent.
    pub exponent: Option<T>,

    /// Conservation method applied against the input samples.
    pub conserve: Option<ReferenceIntegral>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ReweaveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ReweaveBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            factor: None,
            alpha: None,
            exponent: None,
            conserve: None,
            duplicate_param: None,
        }
    }

    /// Set the reconstruction strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the number of fine samples per original interval.
    pub fn factor(mut self, factor: usize) -> Self {
        if self.factor.is_some() {
            self.duplicate_param = Some("factor");
        }
        self.factor = Some(factor);
        self
    }

    /// Set the transition share (fraction of each interval spent
    /// transitioning between levels).
    pub fn alpha(mut self, alpha: T) -> Self {
        if self.alpha.is_some() {
            self.duplicate_param = Some("alpha");
        }
        self.alpha = Some(alpha);
        self
    }

    /// Set the power-law easing exponent.
    pub fn exponent(mut self, exponent: T) -> Self {
        if self.exponent.is_some() {
            self.duplicate_param = Some("exponent");
        }
        self.exponent = Some(exponent);
        self
    }

    /// Enforce conservation: after reconstruction, stretch the curve so
    /// each original interval's integral matches the input samples under
    /// the chosen approximation.
    pub fn conserve(mut self, method: ReferenceIntegral) -> Self {
        if self.conserve.is_some() {
            self.duplicate_param = Some("conserve");
        }
        self.conserve = Some(method);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<ReweaveModel<T>, WeaveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let strategy = self.strategy.unwrap_or_default();
        let factor = self.factor.unwrap_or(DEFAULT_FACTOR);
        let shape = ShapeConfig {
            alpha: self.alpha.unwrap_or_else(|| ShapeConfig::default().alpha),
            exponent: self
                .exponent
                .unwrap_or_else(|| ShapeConfig::default().exponent),
        };

        Validator::validate_factor(factor, strategy.min_factor())?;
        if self.conserve.is_some() {
            // A conserved span needs an interior sample to absorb the
            // correction, so factor 1 cannot be conserved.
            Validator::validate_factor(factor, 2)?;
        }
        Validator::validate_alpha(shape.alpha)?;
        Validator::validate_exponent(shape.exponent)?;

        Ok(ReweaveModel {
            strategy,
            factor,
            shape,
            conserve: self.conserve,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated reconstruction configuration.
#[derive(Debug, Clone, Copy)]
pub struct ReweaveModel<T> {
    strategy: Strategy,
    factor: usize,
    shape: ShapeConfig<T>,
    conserve: Option<ReferenceIntegral>,
}

impl<T: Float> ReweaveModel<T> {
    /// Recreate a fine-grained curve from interval-average samples.
    ///
    /// With conservation configured, the result's integral over every
    /// original interval equals the input sample's integral under the
    /// chosen approximation, so re-integrating the curve over the
    /// original intervals reproduces the inputs.
    pub fn recreate(self, x: &[T], y: &[T]) -> Result<WeaveResult<T>, WeaveError> {
        let (fine_x, fine_y) = reconstruct(x, y, self.factor, self.strategy, self.shape)?;

        let (fine_y, interval_integrals) = match self.conserve {
            None => (fine_y, None),
            Some(method) => {
                let targets = method.integrals(x, y);
                let anchors: Vec<usize> = lower_bracket_indices_clamped(&fine_x, x)?;
                let conserved =
                    stretch_to_interval_integrals(&fine_x, &fine_y, Some(&targets), Some(&anchors))?;
                (conserved, Some(targets))
            }
        };

        Ok(WeaveResult {
            x: fine_x,
            y: fine_y,
            strategy: self.strategy,
            factor: self.factor,
            interval_integrals,
        })
    }
}
