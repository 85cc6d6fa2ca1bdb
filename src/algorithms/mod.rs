//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the reference vector routines: explicit-length loops
//! over caller buffers, with the exact floating-point semantics every other
//! backend must reproduce.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense-vector operations.
pub mod vector;
