//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the resampling kernel itself.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Box-window averaging onto a regular grid.
pub mod box_average;
