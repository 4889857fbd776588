//! # boxinterp — Box-window resampling of scattered data
//!
//! Average irregularly positioned 2D samples onto a regular rectangular grid.
//! Each grid cell receives the mean intensity of every sample whose
//! surrounding box contains the cell centre.
//!
//! ## What is box interpolation?
//!
//! Scattering detectors record intensities at pixel positions that, once
//! converted to reciprocal space or polar coordinates, no longer lie on a
//! regular grid. Box interpolation scatters every sample into the cells within
//! a fixed rectangular window around it and averages what each cell collected.
//! Cells nothing reached stay at zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxinterp::prelude::*;
//!
//! let intensity = vec![2.0, 4.0, 10.0];
//! let x = vec![1.0, 1.05, 3.0];
//! let y = vec![0.0, 0.0, 1.0];
//!
//! // 4 x 2 grid with unit spacing and narrow boxes
//! let interpolator = BoxInterpolation::new()
//!     .x_grid(0.0, 1.0, 4, 0.5)
//!     .y_grid(0.0, 1.0, 2, 0.5)
//!     .build()?;
//!
//! let grid = interpolator.interpolate(&intensity, &x, &y)?;
//!
//! assert_eq!(grid.get(1, 0), Some(3.0));
//! assert_eq!(grid.get(3, 1), Some(10.0));
//! assert_eq!(grid.get(0, 0), Some(0.0));
//! # Result::<(), BoxInterpError>::Ok(())
//! ```
//!
//! ### Flat Arguments
//!
//! ```rust
//! use boxinterp::prelude::*;
//!
//! let grid = resample(
//!     &[1.0], &[0.0], &[0.0],
//!     0.0, 1.0, 3, 0.5, // x: origin, step, count, half-width
//!     0.0, 1.0, 3, 0.5, // y: origin, step, count, half-width
//! )?;
//! assert_eq!(grid.len(), 9);
//! release(grid);
//! # Result::<(), BoxInterpError>::Ok(())
//! ```
//!
//! ## Grid Layout
//!
//! Output is row-major with x as the slow axis: cell (`i`, `j`) lives at
//! `i * y_count + j`. [`Grid::transposed`](prelude::Grid::transposed) gives
//! the y-major layout used for display.
//!
//! ## Box Edges
//!
//! A box whose lower edge lies past the last cell contributes nothing; a box
//! that merely overshoots the last cell is clipped and still reaches it.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! boxinterp = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the resampling kernel.
mod algorithms;

// Layer 4: Engine - validation, execution and output.
mod engine;

// Layer 5: Analysis - polar remapping and radial profiles.
mod analysis;

// High-level fluent API for box interpolation.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Axis, BoxInterpError, BoxInterpolationBuilder as BoxInterpolation, BoxInterpolator,
        CellSpan, Grid, GridAxis, PolarGeometry, PolarImage, PolarRemap, cell_span,
        radial_profile, release, resample,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod analysis {
        pub use crate::analysis::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
