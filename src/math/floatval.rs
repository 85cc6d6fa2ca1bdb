//! Element-type abstraction for the vector kernel.
//!
//! ## Purpose
//!
//! This module defines `Floatval`, the compile-time precision choice of the
//! kernel. It bridges generic `Float` code to the concrete fast exponential and
//! the concrete `wide` lane kernels for `f32` and `f64`.
//!
//! ## Design notes
//!
//! * **Static dispatch**: Every generic routine is monomorphized per element
//!   type; there is no runtime type switch on the hot path.
//! * **Single exponential**: `f32` evaluates `fast_exp` in `f64` and narrows
//!   the result.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::math::fastexp::fast_exp;
use crate::math::lanes::{lanes_f32, lanes_f64};

// ============================================================================
// Floatval Trait
// ============================================================================

/// Floating-point element type supported by the kernel.
pub trait Floatval: Float + Debug + Send + Sync + 'static {
    /// Approximate e^self with the fast exponential.
    fn fast_exp(self) -> Self;

    /// Lane kernel for `y[i] += x[i]`.
    fn lanes_add(y: &mut [Self], x: &[Self]);
    /// Lane kernel for `y[i] += a * x[i]`.
    fn lanes_add_scaled(y: &mut [Self], a: Self, x: &[Self]);
    /// Lane kernel for `y[i] -= x[i]`.
    fn lanes_sub(y: &mut [Self], x: &[Self]);
    /// Lane kernel for `y[i] -= a * x[i]`.
    fn lanes_sub_scaled(y: &mut [Self], a: Self, x: &[Self]);
    /// Lane kernel for `y[i] *= x[i]`.
    fn lanes_mul(y: &mut [Self], x: &[Self]);
    /// Lane kernel for `y[i] *= a`.
    fn lanes_scale(y: &mut [Self], a: Self);
    /// Lane kernel for `y[i] = 1 / y[i]`.
    fn lanes_invert(y: &mut [Self]);
}

impl Floatval for f64 {
    #[inline]
    fn fast_exp(self) -> Self {
        fast_exp(self)
    }
    #[inline]
    fn lanes_add(y: &mut [Self], x: &[Self]) {
        lanes_f64::add(y, x)
    }
    #[inline]
    fn lanes_add_scaled(y: &mut [Self], a: Self, x: &[Self]) {
        lanes_f64::add_scaled(y, a, x)
    }
    #[inline]
    fn lanes_sub(y: &mut [Self], x: &[Self]) {
        lanes_f64::sub(y, x)
    }
    #[inline]
    fn lanes_sub_scaled(y: &mut [Self], a: Self, x: &[Self]) {
        lanes_f64::sub_scaled(y, a, x)
    }
    #[inline]
    fn lanes_mul(y: &mut [Self], x: &[Self]) {
        lanes_f64::mul(y, x)
    }
    #[inline]
    fn lanes_scale(y: &mut [Self], a: Self) {
        lanes_f64::scale(y, a)
    }
    #[inline]
    fn lanes_invert(y: &mut [Self]) {
        lanes_f64::invert(y)
    }
}

impl Floatval for f32 {
    #[inline]
    fn fast_exp(self) -> Self {
        fast_exp(self as f64) as f32
    }
    #[inline]
    fn lanes_add(y: &mut [Self], x: &[Self]) {
        lanes_f32::add(y, x)
    }
    #[inline]
    fn lanes_add_scaled(y: &mut [Self], a: Self, x: &[Self]) {
        lanes_f32::add_scaled(y, a, x)
    }
    #[inline]
    fn lanes_sub(y: &mut [Self], x: &[Self]) {
        lanes_f32::sub(y, x)
    }
    #[inline]
    fn lanes_sub_scaled(y: &mut [Self], a: Self, x: &[Self]) {
        lanes_f32::sub_scaled(y, a, x)
    }
    #[inline]
    fn lanes_mul(y: &mut [Self], x: &[Self]) {
        lanes_f32::mul(y, x)
    }
    #[inline]
    fn lanes_scale(y: &mut [Self], a: Self) {
        lanes_f32::scale(y, a)
    }
    #[inline]
    fn lanes_invert(y: &mut [Self]) {
        lanes_f32::invert(y)
    }
}
