//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Error types and backend selection shared by every other layer.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for the checked kernel.
pub mod errors;

/// Elementwise execution backend.
pub mod backend;
