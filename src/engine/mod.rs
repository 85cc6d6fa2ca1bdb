//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides the checked execution front end: input validation and
//! backend dispatch for every vector operation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Length-checked kernel and its configuration.
pub mod executor;

/// Input validation.
pub mod validator;
