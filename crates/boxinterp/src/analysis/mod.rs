//! Layer 5: Analysis
//!
//! # Purpose
//!
//! This layer builds image-level tools on top of the resampler: polar
//! remapping of detector images and radial intensity profiles.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Analysis ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polar geometry and remapping.
pub mod polar;

/// Radial profiles.
pub mod profile;
