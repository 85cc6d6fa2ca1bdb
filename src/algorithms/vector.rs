//! Dense-vector operations over caller-owned buffers.
//!
//! ## Purpose
//!
//! This module implements the elementwise and reduction routines used by
//! gradient-based optimizers: gradient accumulation (`add_scaled`), line search
//! (`copy`, `sub`), normalization (`exp`, `sum`, `scale`) and objective
//! evaluation (`dot`, `sum_log`).
//!
//! ## Design notes
//!
//! * **Explicit length**: Every routine takes `n` and touches only `0..n`.
//!   Buffers are sliced to `..n` on entry, so a buffer shorter than `n` panics
//!   there instead of reading or writing out of bounds.
//! * **No allocation**: Outputs are written in place or returned as a scalar.
//! * **Sequential reductions**: `dot`, `sum` and `sum_log` accumulate strictly
//!   in index order, so repeated calls are bit-identical.
//!
//! ## Key concepts
//!
//! * **Scaled update**: `add_scaled`/`sub_scaled` compute `a * x[i]` and then
//!   add or subtract it. No fused multiply-add is used.
//! * **Exact zero in `exp`**: An element equal to zero becomes exactly one
//!   without evaluating the approximation.
//!
//! ## Invariants
//!
//! * Elements at index `n` and beyond are never read or written.
//! * Paired buffers are read over the same `0..n` range.
//!
//! ## Non-goals
//!
//! * This module does not validate element domains (`invert` of zero gives
//!   IEEE infinity, `sum_log` of non-positive values gives NaN or `-inf`).
//! * This module does not vectorize (see `math::lanes`).

// Internal dependencies
use crate::math::floatval::Floatval;

// ============================================================================
// Fill and Copy
// ============================================================================

/// Set `x[i] = 0`.
#[inline]
pub fn zero<T: Floatval>(x: &mut [T], n: usize) {
    x[..n].fill(T::zero());
}

/// Set `x[i] = a`.
#[inline]
pub fn set<T: Floatval>(x: &mut [T], a: T, n: usize) {
    x[..n].fill(a);
}

/// Copy `dest[i] = src[i]`.
#[inline]
pub fn copy<T: Floatval>(dest: &mut [T], src: &[T], n: usize) {
    dest[..n].copy_from_slice(&src[..n]);
}

// ============================================================================
// Elementwise Updates
// ============================================================================

/// `y[i] += x[i]`.
#[inline]
pub fn add<T: Floatval>(y: &mut [T], x: &[T], n: usize) {
    for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
        *yi = *yi + xi;
    }
}

/// `y[i] += a * x[i]`.
#[inline]
pub fn add_scaled<T: Floatval>(y: &mut [T], a: T, x: &[T], n: usize) {
    for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
        *yi = *yi + a * xi;
    }
}

/// `y[i] -= x[i]`.
#[inline]
pub fn sub<T: Floatval>(y: &mut [T], x: &[T], n: usize) {
    for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
        *yi = *yi - xi;
    }
}

/// `y[i] -= a * x[i]`.
#[inline]
pub fn sub_scaled<T: Floatval>(y: &mut [T], a: T, x: &[T], n: usize) {
    for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
        *yi = *yi - a * xi;
    }
}

/// `y[i] *= x[i]` (elementwise, not a dot product).
#[inline]
pub fn mul<T: Floatval>(y: &mut [T], x: &[T], n: usize) {
    for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
        *yi = *yi * xi;
    }
}

/// `y[i] = 1 / y[i]`.
///
/// A zero element becomes an infinity of the same sign.
#[inline]
pub fn invert<T: Floatval>(y: &mut [T], n: usize) {
    for yi in y[..n].iter_mut() {
        *yi = T::one() / *yi;
    }
}

/// `y[i] *= a`.
#[inline]
pub fn scale<T: Floatval>(y: &mut [T], a: T, n: usize) {
    for yi in y[..n].iter_mut() {
        *yi = *yi * a;
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Inner product `Σ x[i] * y[i]`, accumulated in index order.
#[inline]
pub fn dot<T: Floatval>(x: &[T], y: &[T], n: usize) -> T {
    x[..n]
        .iter()
        .zip(&y[..n])
        .fold(T::zero(), |s, (&xi, &yi)| s + xi * yi)
}

/// Sum `Σ x[i]`, accumulated in index order.
#[inline]
pub fn sum<T: Floatval>(x: &[T], n: usize) -> T {
    x[..n].iter().fold(T::zero(), |s, &xi| s + xi)
}

/// Sum of natural logarithms `Σ ln(x[i])`, accumulated in index order.
///
/// Uses the standard (non-approximate) logarithm. Every `x[i]` should be
/// strictly positive.
#[inline]
pub fn sum_log<T: Floatval>(x: &[T], n: usize) -> T {
    x[..n].iter().fold(T::zero(), |s, &xi| s + xi.ln())
}

// ============================================================================
// Exponential
// ============================================================================

/// `x[i] = e^x[i]` using the fast exponential.
///
/// An element exactly equal to zero (either sign) becomes exactly one.
///
/// # Example
///
/// ```
/// use vecmath_rs::vector;
///
/// let mut x = [0.0_f64, 1.0, -800.0];
/// vector::exp(&mut x, 3);
/// assert_eq!(x[0], 1.0);
/// assert!((x[1] - core::f64::consts::E).abs() < 1e-12);
/// assert_eq!(x[2], 0.0);
/// ```
#[inline]
pub fn exp<T: Floatval>(x: &mut [T], n: usize) {
    exp_with(x, n, T::fast_exp);
}

/// `x[i] = e^x[i]` using the standard, correctly-rounded exponential.
///
/// Keeps the exact-zero special case of [`exp`].
#[inline]
pub fn exp_exact<T: Floatval>(x: &mut [T], n: usize) {
    exp_with(x, n, T::exp);
}

#[inline(always)]
fn exp_with<T: Floatval>(x: &mut [T], n: usize, f: impl Fn(T) -> T) {
    for xi in x[..n].iter_mut() {
        *xi = if *xi == T::zero() { T::one() } else { f(*xi) };
    }
}
