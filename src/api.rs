//! High-level API for the vector kernel.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! configures and validates a [`VecKernel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Duplicate settings are detected when `.build()` is called.
//! * **Precision-agnostic**: The kernel is not tied to an element type; each
//!   call is monomorphized for the buffers it receives.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`VecMathBuilder`] via `VecMath::new()`.
//! 2. Chain configuration methods (`.backend()`, `.exp_mode()`, ...).
//! 3. Call `.build()` to obtain the kernel.

// External dependencies
use log::debug;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::{ExpMode, KernelConfig, VecKernel};
pub use crate::math::floatval::Floatval;
pub use crate::primitives::backend::Backend;
pub use crate::primitives::errors::VecMathError;

/// Fluent builder for configuring the vector kernel.
#[derive(Debug, Clone, Default)]
pub struct VecMathBuilder {
    /// Elementwise backend (default: Scalar).
    pub backend: Option<Backend>,

    /// Exponential mode (default: Fast).
    pub exp_mode: Option<ExpMode>,

    /// Enable element-domain checks (default: false).
    pub check_domain: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl VecMathBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            backend: None,
            exp_mode: None,
            check_domain: None,
            duplicate_param: None,
        }
    }

    /// Set the elementwise execution backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        if self.backend.is_some() {
            self.duplicate_param = Some("backend");
        }
        self.backend = Some(backend);
        self
    }

    /// Set the exponential evaluation mode.
    pub fn exp_mode(mut self, mode: ExpMode) -> Self {
        if self.exp_mode.is_some() {
            self.duplicate_param = Some("exp_mode");
        }
        self.exp_mode = Some(mode);
        self
    }

    /// Reject zeros in `invert` and non-positive values in `sum_log`.
    pub fn check_domain(mut self) -> Self {
        if self.check_domain.is_some() {
            self.duplicate_param = Some("check_domain");
        }
        self.check_domain = Some(true);
        self
    }

    /// Validate the configuration and build the kernel.
    pub fn build(self) -> Result<VecKernel, VecMathError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = KernelConfig {
            backend: self.backend.unwrap_or_default(),
            exp_mode: self.exp_mode.unwrap_or_default(),
            check_domain: self.check_domain.unwrap_or(false),
        };
        debug!(
            "vector kernel configured: backend={:?}, exp_mode={:?}, check_domain={}",
            config.backend, config.exp_mode, config.check_domain
        );

        Ok(VecKernel::from_config(config))
    }
}
