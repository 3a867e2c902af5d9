//! # Reweave — recreate fine-grained time series from interval averages
//!
//! Aggregated measurements report one *average* per fixed time interval.
//! Plotting or replaying those averages as if they were samples flattens
//! every feature shorter than the aggregation window, and naive
//! interpolation through them (linear, spline) silently changes the very
//! quantity that was measured: re-averaging the interpolated curve no
//! longer reproduces the original values.
//!
//! This crate recreates a plausible high-resolution curve from
//! interval-average samples and — the hard part — makes it *conserve*
//! them exactly: the integral of the result over every original interval
//! matches the input, so re-aggregation returns the original series.
//!
//! ## How it works
//!
//! 1. A **reconstruction strategy** synthesizes an oversampled first-pass
//!    curve: step function, not-a-knot cubic spline, or level transitions
//!    (linear or power-eased, with fixed or adaptive windows).
//! 2. The **conservation engine** stretches the curve span by span with a
//!    closed-form parabolic correction that pins anchor values and hits
//!    each target integral exactly — no iteration involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use reweave::prelude::*;
//!
//! // Four interval averages.
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![1.0, 3.0, 4.0, 1.0];
//!
//! // Build the model
//! let model = Reweave::new()
//!     .strategy(LinearFixed)  // level transitions between averages
//!     .factor(4)              // 4 fine samples per interval
//!     .conserve(Rectangle)    // re-aggregation reproduces the input
//!     .build()?;
//!
//! // Recreate the fine curve
//! let result = model.recreate(&x, &y)?;
//!
//! assert_eq!(result.y.len(), 13);
//! assert!(result.is_conserved());
//! # Result::<(), WeaveError>::Ok(())
//! ```
//!
//! ## Using the pieces directly
//!
//! The strategies and the conservation engine are plain functions; the
//! builder only sequences them.
//!
//! ```rust
//! use reweave::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 4.0];
//! let y: Vec<f64> = vec![2.0, -1.0, 3.0, 0.5];
//!
//! // Pin the endpoints and hit an exact trapezoidal integral.
//! let stretched = stretch_to_integral(&x, &y, 5.0)?;
//!
//! assert_eq!(stretched[0], y[0]);
//! assert_eq!(stretched[3], y[3]);
//! assert!((trapezoid_area(&x, &stretched) - 5.0).abs() < 1e-12);
//! # Result::<(), WeaveError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, WeaveError>`; malformed
//! inputs (mismatched lengths, non-increasing coordinates, NaN values)
//! and invalid configuration (factor below the strategy minimum,
//! mismatched conservation targets) are rejected before any computation.
//! The engine is deterministic and stateless, so nothing is retried.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! reweave = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - reconstruction strategies.
mod algorithms;

// Layer 4: Engine - validation, conservation, and output.
mod engine;

// High-level fluent API for curve reconstruction.
mod api;

// Standard reconstruction prelude.
pub mod prelude {
    pub use crate::api::{
        FixedPoints, ReweaveBuilder as Reweave, ReweaveModel, ShapeConfig, Strategy,
        Strategy::{
            CubicSpline, LinearAdaptive, LinearFixed, PiecewiseConstant, PowerAdaptive,
            PowerFixed,
        },
        WeaveError, WeaveResult,
    };
    pub use crate::engine::executor::reconstruct;
    pub use crate::engine::stretch::{
        stretch_to_integral, stretch_to_interval_integrals, stretch_to_reference_integrals,
        ReferenceIntegral,
        ReferenceIntegral::{Rectangle, Trapezoid},
    };
    pub use crate::math::integrate::{rectangle_integral, trapezoid_area, trapezoid_integral};
    pub use crate::primitives::interval::{average, IntervalView};
    pub use crate::primitives::resample::{
        append_one_sample, extend_constant, extend_linspace, oversample_linspace,
        oversample_piecewise, Direction,
    };
    pub use crate::primitives::search::{
        lower_bracket_indices, lower_bracket_indices_clamped, nearest_indices,
        sum_over_index_ranges, upper_bracket_indices, upper_bracket_indices_clamped,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
