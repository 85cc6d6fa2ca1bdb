//! Error types for the checked vector kernel.
//!
//! ## Purpose
//!
//! This module defines `VecMathError`, returned by the checked front end
//! (`VecKernel`) and by the builder. The free functions in `vector` never
//! return errors: they follow IEEE semantics and panic on short slices.
//!
//! ## Design notes
//!
//! * **Allocation-free**: Every variant carries only `Copy` data, so the type
//!   is usable without `alloc`.
//! * **Display**: Messages follow the same "Kind: detail" shape as the builder errors.
//!
//! ## Invariants
//!
//! * An error is returned before any output buffer is mutated.
//!
//! ## Non-goals
//!
//! * This module does not model numeric overflow or NaN production.

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors reported by the checked vector kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VecMathError {
    /// A buffer holds fewer elements than the requested length.
    BufferTooShort {
        /// Argument name of the offending buffer.
        operand: &'static str,
        /// Actual buffer length.
        len: usize,
        /// Requested element count.
        n: usize,
    },

    /// An element is exactly zero where a reciprocal is required.
    ZeroElement {
        /// Position of the first zero element.
        index: usize,
    },

    /// An element is not strictly positive where a logarithm is required.
    NonPositiveElement {
        /// Position of the first offending element.
        index: usize,
        /// The offending value, widened to `f64`.
        value: f64,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for VecMathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { operand, len, n } => write!(
                f,
                "Buffer too short: {} has {} elements, need at least {}",
                operand, len, n
            ),
            Self::ZeroElement { index } => {
                write!(f, "Zero element at index {} (cannot invert)", index)
            }
            Self::NonPositiveElement { index, value } => write!(
                f,
                "Non-positive element at index {}: {} (logarithm undefined)",
                index, value
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VecMathError {}
