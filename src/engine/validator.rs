//! Input validation for the checked vector kernel.
//!
//! ## Purpose
//!
//! This module provides the validation functions behind `VecKernel`: buffer
//! length checks against the requested `n`, optional element-domain checks for
//! `invert` and `sum_log`, and builder duplicate detection.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Length checks are O(1); domain checks are a single pass
//!   and only run when enabled.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free apart from logging.
//!
//! ## Non-goals
//!
//! * This module does not check for NaN or infinity in general inputs.
//! * This module does not repair invalid inputs.

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::VecMathError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel inputs.
///
/// All methods return `Result<(), VecMathError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Length Validation
    // ========================================================================

    /// Validate that a buffer holds at least `n` elements.
    #[inline]
    pub fn validate_len(operand: &'static str, len: usize, n: usize) -> Result<(), VecMathError> {
        if len < n {
            debug!("rejecting {}: len {} < n {}", operand, len, n);
            return Err(VecMathError::BufferTooShort { operand, len, n });
        }
        Ok(())
    }

    /// Validate an output buffer and an input buffer for a binary operation.
    #[inline]
    pub fn validate_pair(
        out_name: &'static str,
        out_len: usize,
        in_name: &'static str,
        in_len: usize,
        n: usize,
    ) -> Result<(), VecMathError> {
        Self::validate_len(out_name, out_len, n)?;
        Self::validate_len(in_name, in_len, n)
    }

    // ========================================================================
    // Domain Validation
    // ========================================================================

    /// Validate that no element is exactly zero.
    pub fn validate_nonzero<T: Float>(values: &[T]) -> Result<(), VecMathError> {
        if let Some(index) = values.iter().position(|v| v.is_zero()) {
            debug!("rejecting invert: zero at index {}", index);
            return Err(VecMathError::ZeroElement { index });
        }
        Ok(())
    }

    /// Validate that every element is strictly positive (NaN is rejected).
    pub fn validate_positive<T: Float>(values: &[T]) -> Result<(), VecMathError> {
        if let Some(index) = values.iter().position(|&v| v.is_nan() || v <= T::zero()) {
            let value = values[index].to_f64().unwrap_or(f64::NAN);
            debug!("rejecting sum_log: x[{}]={}", index, value);
            return Err(VecMathError::NonPositiveElement { index, value });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), VecMathError> {
        if let Some(param) = duplicate_param {
            debug!("rejecting build: '{}' set more than once", param);
            return Err(VecMathError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
