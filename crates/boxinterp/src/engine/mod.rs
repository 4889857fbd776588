//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and data, drives the resampling kernel,
//! and owns the output type handed to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Analysis
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated execution of the resampler.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Owned output grid.
pub mod output;
