//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric building blocks used by the vector routines:
//! - The fast approximate exponential
//! - The `Floatval` element-type abstraction
//! - SIMD lane kernels for elementwise operations
//!
//! These are reusable primitives with no knowledge of buffer lengths or
//! validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fast approximate exponential.
pub mod fastexp;

/// Floating-point element type abstraction.
pub mod floatval;

/// SIMD lane kernels.
pub mod lanes;
