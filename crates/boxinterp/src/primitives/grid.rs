//! Grid axis description.
//!
//! ## Purpose
//!
//! A `GridAxis` describes one dimension of the output grid: where the first
//! cell centre sits, the spacing between centres, how many cells there are and
//! how wide the averaging box is along that dimension.
//!
//! ## Key concepts
//!
//! * **Index space**: a coordinate expressed in fractional cells,
//!   `(coordinate - origin) / step`.
//! * **Box width**: `half_width` is halved again before conversion to index
//!   space, so the box spans `half_width / 2` on each side of a sample.
//!
//! ## Non-goals
//!
//! * This module does not validate axis parameters (see the engine validator).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::index_range::{CellSpan, cell_span};

// ============================================================================
// Grid Axis
// ============================================================================

/// One axis of a regular output grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis<T> {
    /// Coordinate of the centre of cell 0.
    pub origin: T,

    /// Distance between neighbouring cell centres.
    pub step: T,

    /// Number of cells along the axis.
    pub count: usize,

    /// Box width parameter; the box extends `half_width / 2` either side.
    pub half_width: T,
}

impl<T: Float> GridAxis<T> {
    /// Create a new axis description.
    pub fn new(origin: T, step: T, count: usize, half_width: T) -> Self {
        Self {
            origin,
            step,
            count,
            half_width,
        }
    }

    /// Convert a coordinate to fractional cell units.
    #[inline]
    pub fn to_index_space(&self, coordinate: T) -> T {
        (coordinate - self.origin) / self.step
    }

    /// The box half-extent in fractional cell units.
    ///
    /// Always non-negative: a negative step mirrors the axis but does not
    /// invert the box.
    #[inline]
    pub fn half_width_in_cells(&self) -> T {
        self.half_width / (T::one() + T::one()) / self.step.abs()
    }

    /// Cells whose centre lies inside the box around `coordinate`.
    #[inline]
    pub fn span(&self, coordinate: T) -> CellSpan {
        cell_span(
            self.to_index_space(coordinate),
            self.half_width_in_cells(),
            self.count,
        )
    }

    /// Coordinate of the centre of cell `index`.
    #[inline]
    pub fn center(&self, index: usize) -> T {
        let i = T::from(index).unwrap_or_else(T::max_value);
        self.origin + i * self.step
    }

    /// All cell centres along the axis.
    pub fn centers(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.count).map(move |i| self.center(i))
    }
}
