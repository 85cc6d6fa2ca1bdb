//! Checked execution engine for vector operations.
//!
//! ## Purpose
//!
//! This module provides `VecKernel`, the configured front end over the
//! reference routines in `algorithms::vector` and the lane kernels in
//! `math::lanes`. Every operation validates buffer lengths against `n` before
//! touching memory, then dispatches to the selected backend.
//!
//! ## Design notes
//!
//! * **Validate, then run**: An error is always returned before any element is
//!   written, so a failed call leaves every buffer unchanged.
//! * **Backend dispatch**: Only elementwise updates consult the backend.
//!   Fill/copy use slice primitives; reductions and `exp` always run the
//!   sequential scalar path.
//! * **Copy configuration**: The kernel is a small `Copy` value and holds no
//!   buffers, so one instance can be shared across threads.
//!
//! ## Key concepts
//!
//! * **ExpMode**: `Fast` (approximate) or `Exact` (standard `exp`). Both map an
//!   exact zero to exactly one.
//! * **Domain checks**: Optional rejection of zeros in `invert` and
//!   non-positive values in `sum_log`.
//!
//! ## Invariants
//!
//! * Elements at index `n` and beyond are never touched.
//! * Results are bit-identical across backends.
//!
//! ## Non-goals
//!
//! * This module does not allocate or own vectors.

// Internal dependencies
use crate::algorithms::vector;
use crate::engine::validator::Validator;
use crate::math::floatval::Floatval;
use crate::primitives::backend::Backend;
use crate::primitives::errors::VecMathError;

// ============================================================================
// Configuration
// ============================================================================

/// Exponential evaluation mode for [`VecKernel::exp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpMode {
    /// Fast rational approximation with exponent-bit scaling.
    #[default]
    Fast,

    /// Standard library exponential (`Float::exp`).
    Exact,
}

/// Resolved kernel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernelConfig {
    /// Backend for elementwise updates.
    pub backend: Backend,

    /// Exponential evaluation mode.
    pub exp_mode: ExpMode,

    /// Reject zeros in `invert` and non-positive values in `sum_log`.
    pub check_domain: bool,
}

// ============================================================================
// Kernel
// ============================================================================

/// Configured, length-checked vector kernel.
///
/// # Example
///
/// ```
/// use vecmath_rs::prelude::*;
///
/// let kernel = VecMath::new().backend(Simd).build()?;
///
/// let mut y = vec![1.0, 2.0, 3.0];
/// let x = vec![1.0, 1.0, 1.0];
/// kernel.add_scaled(&mut y, 2.0, &x, 3)?;
/// assert_eq!(y, vec![3.0, 4.0, 5.0]);
///
/// assert!(kernel.add(&mut y, &x[..2], 3).is_err());
/// # Result::<(), VecMathError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VecKernel {
    config: KernelConfig,
}

impl VecKernel {
    /// Create a kernel from a resolved configuration.
    ///
    /// ```
    /// use vecmath_rs::prelude::*;
    ///
    /// let kernel = VecKernel::from_config(KernelConfig {
    ///     backend: Simd,
    ///     ..KernelConfig::default()
    /// });
    /// assert_eq!(kernel.config().exp_mode, Fast);
    /// assert!(!kernel.config().check_domain);
    /// ```
    pub fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// The resolved configuration.
    pub fn config(&self) -> KernelConfig {
        self.config
    }

    /// The selected elementwise backend.
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// The selected exponential mode.
    pub fn exp_mode(&self) -> ExpMode {
        self.config.exp_mode
    }

    // ========================================================================
    // Fill and Copy
    // ========================================================================

    /// Set `x[i] = 0` for `i < n`.
    pub fn zero<T: Floatval>(&self, x: &mut [T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_len("x", x.len(), n)?;
        vector::zero(x, n);
        Ok(())
    }

    /// Set `x[i] = a` for `i < n`.
    pub fn set<T: Floatval>(&self, x: &mut [T], a: T, n: usize) -> Result<(), VecMathError> {
        Validator::validate_len("x", x.len(), n)?;
        vector::set(x, a, n);
        Ok(())
    }

    /// Copy `dest[i] = src[i]` for `i < n`.
    pub fn copy<T: Floatval>(
        &self,
        dest: &mut [T],
        src: &[T],
        n: usize,
    ) -> Result<(), VecMathError> {
        Validator::validate_pair("dest", dest.len(), "src", src.len(), n)?;
        vector::copy(dest, src, n);
        Ok(())
    }

    // ========================================================================
    // Elementwise Updates
    // ========================================================================

    /// `y[i] += x[i]`.
    pub fn add<T: Floatval>(&self, y: &mut [T], x: &[T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_pair("y", y.len(), "x", x.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::add(y, x, n),
            Backend::Simd => T::lanes_add(&mut y[..n], &x[..n]),
        }
        Ok(())
    }

    /// `y[i] += a * x[i]`.
    pub fn add_scaled<T: Floatval>(
        &self,
        y: &mut [T],
        a: T,
        x: &[T],
        n: usize,
    ) -> Result<(), VecMathError> {
        Validator::validate_pair("y", y.len(), "x", x.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::add_scaled(y, a, x, n),
            Backend::Simd => T::lanes_add_scaled(&mut y[..n], a, &x[..n]),
        }
        Ok(())
    }

    /// `y[i] -= x[i]`.
    pub fn sub<T: Floatval>(&self, y: &mut [T], x: &[T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_pair("y", y.len(), "x", x.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::sub(y, x, n),
            Backend::Simd => T::lanes_sub(&mut y[..n], &x[..n]),
        }
        Ok(())
    }

    /// `y[i] -= a * x[i]`.
    pub fn sub_scaled<T: Floatval>(
        &self,
        y: &mut [T],
        a: T,
        x: &[T],
        n: usize,
    ) -> Result<(), VecMathError> {
        Validator::validate_pair("y", y.len(), "x", x.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::sub_scaled(y, a, x, n),
            Backend::Simd => T::lanes_sub_scaled(&mut y[..n], a, &x[..n]),
        }
        Ok(())
    }

    /// `y[i] *= x[i]`.
    pub fn mul<T: Floatval>(&self, y: &mut [T], x: &[T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_pair("y", y.len(), "x", x.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::mul(y, x, n),
            Backend::Simd => T::lanes_mul(&mut y[..n], &x[..n]),
        }
        Ok(())
    }

    /// `y[i] = 1 / y[i]`.
    ///
    /// With domain checks enabled an exact zero is rejected; otherwise it
    /// becomes an infinity.
    pub fn invert<T: Floatval>(&self, y: &mut [T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_len("y", y.len(), n)?;
        if self.config.check_domain {
            Validator::validate_nonzero(&y[..n])?;
        }
        match self.config.backend {
            Backend::Scalar => vector::invert(y, n),
            Backend::Simd => T::lanes_invert(&mut y[..n]),
        }
        Ok(())
    }

    /// `y[i] *= a`.
    pub fn scale<T: Floatval>(&self, y: &mut [T], a: T, n: usize) -> Result<(), VecMathError> {
        Validator::validate_len("y", y.len(), n)?;
        match self.config.backend {
            Backend::Scalar => vector::scale(y, a, n),
            Backend::Simd => T::lanes_scale(&mut y[..n], a),
        }
        Ok(())
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Inner product over `0..n`, accumulated in index order.
    pub fn dot<T: Floatval>(&self, x: &[T], y: &[T], n: usize) -> Result<T, VecMathError> {
        Validator::validate_pair("x", x.len(), "y", y.len(), n)?;
        Ok(vector::dot(x, y, n))
    }

    /// Sum over `0..n`, accumulated in index order.
    pub fn sum<T: Floatval>(&self, x: &[T], n: usize) -> Result<T, VecMathError> {
        Validator::validate_len("x", x.len(), n)?;
        Ok(vector::sum(x, n))
    }

    /// Sum of natural logarithms over `0..n`.
    ///
    /// With domain checks enabled a non-positive or NaN element is rejected.
    pub fn sum_log<T: Floatval>(&self, x: &[T], n: usize) -> Result<T, VecMathError> {
        Validator::validate_len("x", x.len(), n)?;
        if self.config.check_domain {
            Validator::validate_positive(&x[..n])?;
        }
        Ok(vector::sum_log(x, n))
    }

    // ========================================================================
    // Exponential
    // ========================================================================

    /// `x[i] = e^x[i]`, with an exact zero mapped to exactly one.
    pub fn exp<T: Floatval>(&self, x: &mut [T], n: usize) -> Result<(), VecMathError> {
        Validator::validate_len("x", x.len(), n)?;
        match self.config.exp_mode {
            ExpMode::Fast => vector::exp(x, n),
            ExpMode::Exact => vector::exp_exact(x, n),
        }
        Ok(())
    }
}
