//! # vecmath-rs — Vector arithmetic and fast exponential for numerical optimization
//!
//! A small, allocation-free numeric kernel for the inner loops of gradient-based
//! training: elementwise updates, sequential reductions and a fast approximate
//! exponential, generic over `f32` and `f64`.
//!
//! ## What is in the kernel?
//!
//! - **Fast exponential**: Cody-Waite argument reduction, a Cephes minimax
//!   rational approximation and direct exponent-bit scaling. Relative error is
//!   about `1e-13`; out-of-range inputs clamp to `0` or `+inf`.
//! - **Vector operations**: fill, copy, (scaled) add/subtract, elementwise
//!   multiply, invert, scale, dot, sum, exp and sum of logarithms, each over an
//!   explicit length `n` of a caller-owned buffer.
//! - **Checked kernel**: a configured front end that validates buffer lengths,
//!   optionally validates element domains, and selects a scalar or SIMD backend.
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use vecmath_rs::vector;
//!
//! let mut w = vec![0.5, -1.0, 2.0];
//! let g = vec![0.1, 0.2, -0.3];
//!
//! // Gradient step: w -= 0.5 * g
//! vector::sub_scaled(&mut w, 0.5, &g, 3);
//!
//! let norm2 = vector::dot(&w, &w, 3);
//! assert!(norm2 > 0.0);
//! ```
//!
//! ### Checked kernel
//!
//! ```rust
//! use vecmath_rs::prelude::*;
//!
//! let kernel = VecMath::new()
//!     .backend(Simd)       // wide lanes for elementwise updates
//!     .exp_mode(Fast)      // fast approximate exponential
//!     .check_domain()      // reject log(<= 0) and 1/0
//!     .build()?;
//!
//! let mut scores = vec![0.0_f64, 1.0, 2.0];
//! kernel.exp(&mut scores, 3)?;
//! let z = kernel.sum(&scores, 3)?;
//! kernel.scale(&mut scores, 1.0 / z, 3)?;
//!
//! assert_eq!(scores.len(), 3);
//! assert!((kernel.sum(&scores, 3)? - 1.0).abs() < 1e-12);
//! # Result::<(), VecMathError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! | Operation    | Effect                               | Notes                                   |
//! |--------------|--------------------------------------|-----------------------------------------|
//! | `zero`       | `x[i] = 0`                           |                                         |
//! | `set`        | `x[i] = a`                           |                                         |
//! | `copy`       | `dest[i] = src[i]`                   |                                         |
//! | `add`        | `y[i] += x[i]`                       |                                         |
//! | `add_scaled` | `y[i] += a * x[i]`                   | product then sum, no hardware FMA       |
//! | `sub`        | `y[i] -= x[i]`                       |                                         |
//! | `sub_scaled` | `y[i] -= a * x[i]`                   |                                         |
//! | `mul`        | `y[i] *= x[i]`                       | elementwise                             |
//! | `invert`     | `y[i] = 1 / y[i]`                    | `1/0` is IEEE infinity                  |
//! | `scale`      | `y[i] *= a`                          |                                         |
//! | `dot`        | `Σ x[i] * y[i]`                      | accumulated in index order              |
//! | `sum`        | `Σ x[i]`                             | accumulated in index order              |
//! | `exp`        | `x[i] = fast_exp(x[i])`              | `x[i] == 0` gives exactly `1`           |
//! | `sum_log`    | `Σ ln(x[i])`                         | standard logarithm, index order         |
//!
//! Every routine touches only indices `0..n`. The free functions panic when a
//! buffer is shorter than `n`; the checked kernel returns
//! [`BufferTooShort`](prelude::VecMathError::BufferTooShort) instead.
//!
//! ## Builder
//!
//! | Parameter        | Default  | Options            | Description                                    |
//! |------------------|----------|--------------------|------------------------------------------------|
//! | **backend**      | `Scalar` | `Scalar`, `Simd`   | Elementwise execution (results bit-identical)  |
//! | **exp_mode**     | `Fast`   | `Fast`, `Exact`    | Approximate or standard exponential            |
//! | **check_domain** | off      | on/off             | Reject `1/0` and `ln(x <= 0)`                  |
//!
//! Setting a parameter twice makes `build()` fail with
//! [`DuplicateParameter`](prelude::VecMathError::DuplicateParameter).
//!
//! ## Precision
//!
//! The element type is a compile-time choice: every routine is generic over
//! [`Floatval`](prelude::Floatval), implemented for `f32` and `f64`. For `f32`
//! the exponential is evaluated in double precision and narrowed.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! vecmath-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the crate uses `libm` through `num-traits` and never
//! allocates.
//!
//! ## Logging
//!
//! Configuration and validation failures are reported through the `log`
//! facade at `debug` level. Numeric loops never log.
//!
//! ## References
//!
//! - Moshier, S. L. (1989). "Methods and Programs for Mathematical Functions" (Cephes)
//! - Cody, W. J. & Waite, W. (1980). "Software Manual for the Elementary Functions"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and backend selection.
mod primitives;

// Layer 2: Math - fast exponential, element type, SIMD lanes.
mod math;

// Layer 3: Algorithms - reference vector routines.
mod algorithms;

// Layer 4: Engine - validation and backend dispatch.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Public Surface
// ============================================================================

pub use algorithms::vector;
pub use math::fastexp::{fast_exp, pow2i};

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use vecmath_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Backend,
        Backend::{Scalar, Simd},
        ExpMode,
        ExpMode::{Exact, Fast},
        Floatval, KernelConfig, VecKernel, VecMathBuilder as VecMath, VecMathError,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal vector routines.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
