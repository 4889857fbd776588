//! Validated execution of the box resampler.
//!
//! ## Purpose
//!
//! `BoxExecutor` pairs a validated grid with the resampling kernel. It checks
//! the sample arrays on every run, calls the kernel and wraps the result in an
//! owned [`Grid`].
//!
//! ## Design notes
//!
//! * **Validate once, run many**: Axis checks happen at construction; each
//!   run only checks sample lengths.
//! * **Tracing**: Each run emits a `debug` event with sample and grid sizes.
//!
//! ## Invariants
//!
//! * A constructed executor always has finite, nonzero steps and an
//!   addressable cell count.

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::box_average::box_average;
use crate::engine::output::Grid;
use crate::engine::validator::Validator;
use crate::primitives::errors::{Axis, BoxInterpError};
use crate::primitives::grid::GridAxis;

// ============================================================================
// Executor
// ============================================================================

/// A grid configuration that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxExecutor<T> {
    x_axis: GridAxis<T>,
    y_axis: GridAxis<T>,
    cells: usize,
}

impl<T: Float> BoxExecutor<T> {
    /// Validate both axes and the resulting grid size.
    pub fn new(x_axis: GridAxis<T>, y_axis: GridAxis<T>) -> Result<Self, BoxInterpError> {
        Validator::validate_axis(&x_axis, Axis::X)?;
        Validator::validate_axis(&y_axis, Axis::Y)?;
        let cells = Validator::validate_grid_size(x_axis.count, y_axis.count)?;

        Ok(Self {
            x_axis,
            y_axis,
            cells,
        })
    }

    /// The x axis.
    pub fn x_axis(&self) -> &GridAxis<T> {
        &self.x_axis
    }

    /// The y axis.
    pub fn y_axis(&self) -> &GridAxis<T> {
        &self.y_axis
    }

    /// Number of output cells.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Resample one set of scattered samples.
    pub fn run(&self, intensity: &[T], x: &[T], y: &[T]) -> Result<Grid<T>, BoxInterpError> {
        Validator::validate_samples(intensity, x, y)?;

        debug!(
            samples = intensity.len(),
            x_count = self.x_axis.count,
            y_count = self.y_axis.count,
            "box interpolation"
        );

        let data = box_average(intensity, x, y, &self.x_axis, &self.y_axis)?;
        let grid = Grid::from_parts(data, self.x_axis.count, self.y_axis.count);

        trace!(filled = grid.nonzero_cells(), "box interpolation done");
        Ok(grid)
    }
}
