//! Execution backend selection for elementwise operations.
//!
//! ## Purpose
//!
//! This module defines the `Backend` enum used by `VecKernel` to choose
//! between the plain scalar loops and the `wide` lane kernels.
//!
//! ## Design notes
//!
//! * **Result-preserving**: Both backends produce bit-identical results, so the
//!   choice is purely a throughput hint.
//! * **Scope**: Only elementwise operations are affected. Reductions and `exp`
//!   always run the scalar path.

/// Execution backend for elementwise vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Plain sequential loops.
    #[default]
    Scalar,

    /// Portable SIMD lanes (`f64x4` / `f32x8`) with a scalar tail.
    Simd,
}
