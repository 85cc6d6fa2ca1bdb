//! Fast approximate exponential.
//!
//! ## Purpose
//!
//! This module provides `fast_exp`, an approximation of e^x for hot loops
//! (unnormalized probabilities, softmax-like normalization) where a
//! correctly-rounded `exp` is too slow.
//!
//! ## Design notes
//!
//! * **Argument reduction**: `x = n*ln(2) + r`, with ln(2) split into `C1 + C2`
//!   (Cody-Waite) so the reduction loses no precision.
//! * **Rational approximation**: Cephes minimax fit,
//!   `e^r ≈ 1 + 2*r*P(r²) / (Q(r²) - r*P(r²))`.
//! * **Scaling**: 2^n is assembled directly from exponent bits via
//!   `f64::from_bits`; no unions or transmutes.
//!
//! ## Key concepts
//!
//! * **Rounding rule**: `n = trunc(x * log2(e) + 0.5)`. This is round-to-nearest
//!   for positive arguments only; negative arguments truncate toward zero after
//!   the shift, so the reduced `r` can reach about `-1.5 * ln(2)`.
//!
//! ## Invariants
//!
//! * `fast_exp(0.0) == 1.0` exactly.
//! * `x > MAXLOG` yields `+inf`, `x < MINLOG` yields `0.0`.
//! * Inside the range the biased exponent `n + 1023` stays within `[1, 2046]`.
//!
//! ## Non-goals
//!
//! * This module does not produce correctly-rounded results.
//! * This module does not produce subnormal results (they flush to zero).

#![allow(clippy::excessive_precision)]

// ============================================================================
// Constants
// ============================================================================

/// Upper clamp: ln(2^1022).
pub const MAXLOG: f64 = 7.08396418532264106224e2;

/// Lower clamp: ln(2^-1022).
pub const MINLOG: f64 = -7.08396418532264106224e2;

/// 1 / ln(2).
pub const LOG2E: f64 = 1.4426950408889634073599;

/// High part of ln(2); exactly representable with trailing zero bits.
const C1: f64 = 6.93145751953125e-1;

/// Low part of ln(2).
const C2: f64 = 1.42860682030941723212e-6;

// Numerator P(z), highest degree first.
const P0: f64 = 1.26177193074810590878e-4;
const P1: f64 = 3.02994407707441961300e-2;
const P2: f64 = 9.99999999999999999910e-1;

// Denominator Q(z), highest degree first.
const Q0: f64 = 3.00198505138664455042e-6;
const Q1: f64 = 2.52448340349684104192e-3;
const Q2: f64 = 2.27265548208155028766e-1;
const Q3: f64 = 2.00000000000000000009e0;

/// IEEE-754 binary64 exponent bias.
const EXPONENT_BIAS: i32 = 1023;

/// Position of the exponent field in a binary64 bit pattern.
const MANTISSA_BITS: u32 = 52;

// ============================================================================
// Power-of-two Construction
// ============================================================================

/// Build `2^n` from raw exponent bits.
///
/// Returns `None` when `n` is outside the normal exponent range
/// `[-1022, 1023]`.
#[inline]
pub fn pow2i(n: i32) -> Option<f64> {
    if !(1 - EXPONENT_BIAS..=EXPONENT_BIAS).contains(&n) {
        return None;
    }
    Some(pow2i_unchecked(n))
}

/// `2^n` for an exponent already known to be in range.
#[inline(always)]
fn pow2i_unchecked(n: i32) -> f64 {
    debug_assert!((1 - EXPONENT_BIAS..=EXPONENT_BIAS).contains(&n));
    f64::from_bits(((n + EXPONENT_BIAS) as u64) << MANTISSA_BITS)
}

// ============================================================================
// Fast Exponential
// ============================================================================

/// Approximate e^x.
///
/// Relative error is below `1e-12` over the unclamped range. NaN propagates.
///
/// # Example
///
/// ```
/// use vecmath_rs::fast_exp;
///
/// assert_eq!(fast_exp(0.0), 1.0);
/// assert!((fast_exp(1.0) - core::f64::consts::E).abs() < 1e-12);
/// assert_eq!(fast_exp(710.0), f64::INFINITY);
/// assert_eq!(fast_exp(-710.0), 0.0);
/// ```
#[inline]
pub fn fast_exp(x: f64) -> f64 {
    if MAXLOG < x {
        return f64::INFINITY;
    } else if x < MINLOG {
        return 0.0;
    }

    // Step 1: n = trunc(x / ln2 + 0.5)
    let n = (LOG2E * x + 0.5) as i32;
    let nf = n as f64;

    // Step 2: r = x - n*ln2, in two parts
    let mut r = x;
    r -= nf * C1;
    r -= nf * C2;
    let rr = r * r;

    // Step 3: px = r * P(r^2), qx = Q(r^2)
    let mut px = P0;
    px *= rr;
    px += P1;
    px *= rr;
    px += P2;
    px *= r;

    let mut qx = Q0;
    qx *= rr;
    qx += Q1;
    qx *= rr;
    qx += Q2;
    qx *= rr;
    qx += Q3;

    let er = 1.0 + 2.0 * (px / (qx - px));

    // Step 4: scale by 2^n
    er * pow2i_unchecked(n)
}
