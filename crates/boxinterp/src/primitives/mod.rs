//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every other layer:
//! error types, the grid axis description and the scratch accumulator.
//! Apart from the index-range helper used by `GridAxis::span`, it has no
//! internal dependencies.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Analysis
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Grid axis description.
pub mod grid;

/// Scratch buffers.
pub mod buffer;
