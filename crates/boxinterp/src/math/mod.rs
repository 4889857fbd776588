//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions:
//! - Cell index ranges covered by a box window
//! - Gaussian smoothing kernel for 1D profiles
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Box-to-cell index ranges.
pub mod index_range;

/// Gaussian smoothing kernel.
pub mod kernel;
