//! Box-window averaging of scattered samples onto a regular grid.
//!
//! ## Purpose
//!
//! This module implements the resampling kernel. Every sample is scattered
//! into all grid cells whose centre lies inside the rectangular box around the
//! sample; each cell then holds the mean of the intensities it received.
//!
//! ## Design notes
//!
//! * **Scatter, then normalize**: One pass over the samples fills per-cell
//!   sums and counts; a second pass over the cells divides.
//! * **Trusting**: Inputs are assumed to be validated by the caller. Sample
//!   arrays are walked in lock-step and never indexed out of bounds.
//!
//! ## Key concepts
//!
//! * **Layout**: Output is row-major with x as the slow axis,
//!   `cell = x_index * y_count + y_index`.
//! * **Empty cells**: A cell no sample reached is exactly zero.
//!
//! ## Invariants
//!
//! * Output length is always `x_axis.count * y_axis.count`.
//! * Results depend only on the inputs; repeated calls are bit-identical.
//!
//! ## Non-goals
//!
//! * This module does not validate steps, half-widths or lengths.
//! * This module does not weight samples by distance inside the box.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::CellAccumulator;
use crate::primitives::errors::BoxInterpError;
use crate::primitives::grid::GridAxis;

// ============================================================================
// Box Averaging
// ============================================================================

/// Average scattered `intensity` samples at (`x`, `y`) onto the grid.
///
/// Fails only when the grid cannot be sized or allocated.
pub fn box_average<T: Float>(
    intensity: &[T],
    x: &[T],
    y: &[T],
    x_axis: &GridAxis<T>,
    y_axis: &GridAxis<T>,
) -> Result<Vec<T>, BoxInterpError> {
    let cells = x_axis
        .count
        .checked_mul(y_axis.count)
        .ok_or(BoxInterpError::GridTooLarge {
            x_count: x_axis.count,
            y_count: y_axis.count,
        })?;

    let mut acc = CellAccumulator::try_new(cells)?;
    let y_count = y_axis.count;

    for ((&value, &xi), &yi) in intensity.iter().zip(x).zip(y) {
        let x_span = x_axis.span(xi);
        let y_span = y_axis.span(yi);

        for l in x_span.indices() {
            let row = l * y_count;
            for k in y_span.indices() {
                acc.add(row + k, value);
            }
        }
    }

    Ok(acc.finish())
}
