//! Error types for reconstruction and conservation operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while
//! reconstructing fine-grained curves from interval averages, including
//! input validation, parameter constraints, and conservation setup.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected counts).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: Empty arrays, mismatched lengths, non-finite or
//!    non-increasing coordinates.
//! 2. **Configuration errors**: Invalid oversampling factor, transition share,
//!    easing exponent, or mismatched conservation targets/anchors.
//! 3. **Degenerate spans**: Sub-ranges too short to adjust while holding
//!    their endpoint values.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for reconstruction and conservation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WeaveError {
    /// Input arrays are empty; reconstruction requires at least 2 points.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Number of points is below the minimum requirement for the operation.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Coordinate array must be strictly increasing.
    NotIncreasing {
        /// Index of the first element violating the ordering.
        index: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Oversampling factor is below the minimum required by the strategy.
    InvalidFactor {
        /// The factor provided.
        got: usize,
        /// Minimum required factor.
        min: usize,
    },

    /// Transition share must be in the range [0, 1].
    InvalidAlpha(f64),

    /// Easing exponent must be positive and finite.
    InvalidExponent(f64),

    /// Window width must be at least 1.
    InvalidWindowWidth(usize),

    /// Index-based access outside the addressable range.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the addressed range.
        len: usize,
    },

    /// Malformed index boundaries (wrong count, not increasing, or out of range).
    InvalidBoundaries(String),

    /// Number of target integrals must be one less than the number of anchors.
    TargetAnchorMismatch {
        /// Number of target integrals provided.
        targets: usize,
        /// Number of anchor indices provided.
        anchors: usize,
    },

    /// Neither target integrals nor anchor indices were supplied; at least
    /// one is required to define the conservation partition.
    MissingConservationSpec,

    /// Explicit fixed points must supply one anchor per reference sample.
    FixedPointCountMismatch {
        /// Number of fixed points provided.
        got: usize,
        /// Number of reference samples.
        expected: usize,
    },

    /// A span with pinned endpoints and no interior points cannot be
    /// adjusted to a different integral.
    DegenerateSpan {
        /// Number of points in the span.
        len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WeaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::NotIncreasing { index } => {
                write!(f, "x must be strictly increasing: violation at index {index}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidFactor { got, min } => {
                write!(f, "Invalid factor: {got} (must be at least {min})")
            }
            Self::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {alpha} (must be in [0, 1])")
            }
            Self::InvalidExponent(a) => {
                write!(f, "Invalid exponent: {a} (must be positive and finite)")
            }
            Self::InvalidWindowWidth(w) => {
                write!(f, "Invalid window width: {w} (must be at least 1)")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for length {len}")
            }
            Self::InvalidBoundaries(s) => write!(f, "Invalid boundaries: {s}"),
            Self::TargetAnchorMismatch { targets, anchors } => {
                write!(
                    f,
                    "Target/anchor mismatch: {targets} targets need {} anchors, got {anchors}",
                    targets + 1
                )
            }
            Self::MissingConservationSpec => {
                write!(
                    f,
                    "Neither target integrals nor anchor indices were supplied; cannot infer both"
                )
            }
            Self::FixedPointCountMismatch { got, expected } => {
                write!(
                    f,
                    "Fixed point count mismatch: got {got}, need exactly {expected} (one per reference sample)"
                )
            }
            Self::DegenerateSpan { len } => {
                write!(
                    f,
                    "Degenerate span of {len} points: endpoints are pinned and no interior point can absorb the integral change"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WeaveError {}
