//! High-level API for box interpolation.
//!
//! ## Purpose
//!
//! This module is the user-facing entry point. It offers a fluent builder for
//! configuring the two grid axes once and resampling many sample sets, plus a
//! flat-argument [`resample`] function mirroring the classic
//! allocate-then-release calling convention.
//!
//! ## Design notes
//!
//! * **Ergonomic**: `BoxInterpolation::new().x_grid(..).y_grid(..).build()?`.
//! * **Validated**: Axes are validated on `build()`, sample lengths on every call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BoxInterpolationBuilder`] via `BoxInterpolation::new()`.
//! 2. Set both axes with `.x_grid()`/`.y_grid()` or `.x_axis()`/`.y_axis()`.
//! 3. Call `.build()` to obtain a [`BoxInterpolator`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::BoxExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::analysis::polar::{PolarGeometry, PolarImage, PolarRemap};
pub use crate::analysis::profile::radial_profile;
pub use crate::engine::output::{Grid, release};
pub use crate::math::index_range::{CellSpan, cell_span};
pub use crate::primitives::errors::{Axis, BoxInterpError};
pub use crate::primitives::grid::GridAxis;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a box interpolator.
#[derive(Debug, Clone)]
pub struct BoxInterpolationBuilder<T> {
    /// Grid along x (slow axis of the output).
    pub x_axis: Option<GridAxis<T>>,

    /// Grid along y (fast axis of the output).
    pub y_axis: Option<GridAxis<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BoxInterpolationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BoxInterpolationBuilder<T> {
    /// Create a new builder with no axes configured.
    pub fn new() -> Self {
        Self {
            x_axis: None,
            y_axis: None,
            duplicate_param: None,
        }
    }

    /// Set the x axis.
    pub fn x_axis(mut self, axis: GridAxis<T>) -> Self {
        if self.x_axis.is_some() {
            self.duplicate_param = Some("x_axis");
        }
        self.x_axis = Some(axis);
        self
    }

    /// Set the y axis.
    pub fn y_axis(mut self, axis: GridAxis<T>) -> Self {
        if self.y_axis.is_some() {
            self.duplicate_param = Some("y_axis");
        }
        self.y_axis = Some(axis);
        self
    }

    /// Set the x axis from its origin, step, cell count and box width.
    pub fn x_grid(self, origin: T, step: T, count: usize, half_width: T) -> Self {
        self.x_axis(GridAxis::new(origin, step, count, half_width))
    }

    /// Set the y axis from its origin, step, cell count and box width.
    pub fn y_grid(self, origin: T, step: T, count: usize, half_width: T) -> Self {
        self.y_axis(GridAxis::new(origin, step, count, half_width))
    }

    /// Validate the configuration and build an interpolator.
    pub fn build(self) -> Result<BoxInterpolator<T>, BoxInterpError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let x_axis = self
            .x_axis
            .ok_or(BoxInterpError::MissingAxis { axis: Axis::X })?;
        let y_axis = self
            .y_axis
            .ok_or(BoxInterpError::MissingAxis { axis: Axis::Y })?;

        Ok(BoxInterpolator {
            executor: BoxExecutor::new(x_axis, y_axis)?,
        })
    }
}

// ============================================================================
// Interpolator
// ============================================================================

/// A validated grid ready to resample scattered samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxInterpolator<T> {
    executor: BoxExecutor<T>,
}

impl<T: Float> BoxInterpolator<T> {
    /// The x axis.
    pub fn x_axis(&self) -> &GridAxis<T> {
        self.executor.x_axis()
    }

    /// The y axis.
    pub fn y_axis(&self) -> &GridAxis<T> {
        self.executor.y_axis()
    }

    /// Number of cells in every output grid.
    pub fn cells(&self) -> usize {
        self.executor.cells()
    }

    /// Average `intensity` samples at (`x`, `y`) onto the grid.
    pub fn interpolate(&self, intensity: &[T], x: &[T], y: &[T]) -> Result<Grid<T>, BoxInterpError> {
        self.executor.run(intensity, x, y)
    }
}

// ============================================================================
// Flat Entry Point
// ============================================================================

/// Resample scattered samples onto a grid given as flat per-axis arguments.
///
/// Equivalent to building a [`BoxInterpolator`] and calling
/// [`BoxInterpolator::interpolate`] once. The returned grid is owned by the
/// caller; pass it to [`release`] (or drop it) when done.
#[allow(clippy::too_many_arguments)]
pub fn resample<T: Float>(
    intensity: &[T],
    x: &[T],
    y: &[T],
    x_origin: T,
    x_step: T,
    x_count: usize,
    x_half_width: T,
    y_origin: T,
    y_step: T,
    y_count: usize,
    y_half_width: T,
) -> Result<Grid<T>, BoxInterpError> {
    BoxExecutor::new(
        GridAxis::new(x_origin, x_step, x_count, x_half_width),
        GridAxis::new(y_origin, y_step, y_count, y_half_width),
    )?
    .run(intensity, x, y)
}
