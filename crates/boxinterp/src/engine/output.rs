//! Owned output grid.
//!
//! ## Purpose
//!
//! `Grid` is the buffer handed from the resampler to its caller. The caller
//! owns it outright: it can read cells, reshape the layout, take the raw
//! vector, or give it back with [`release`].
//!
//! ## Key concepts
//!
//! * **Layout**: Row-major with x as the slow axis,
//!   `data[x_index * y_count + y_index]`.
//! * **Release**: Ownership replaces the manual free of a raw buffer;
//!   releasing twice or reading after release does not compile.
//!
//! ## Invariants
//!
//! * `data.len() == x_count * y_count`.
//!
//! ## Non-goals
//!
//! * This module does not compute cell values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::BoxInterpError;

// ============================================================================
// Grid
// ============================================================================

/// Averaged intensities on a regular `x_count * y_count` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    x_count: usize,
    y_count: usize,
}

impl<T: Float> Grid<T> {
    /// Wrap a row-major buffer.
    ///
    /// Returns `None` if the buffer length does not match the shape.
    pub fn from_vec(data: Vec<T>, x_count: usize, y_count: usize) -> Option<Self> {
        (x_count.checked_mul(y_count) == Some(data.len())).then_some(Self {
            data,
            x_count,
            y_count,
        })
    }

    /// Wrap a buffer already known to match the shape.
    #[inline]
    pub(crate) fn from_parts(data: Vec<T>, x_count: usize, y_count: usize) -> Self {
        debug_assert_eq!(data.len(), x_count * y_count);
        Self {
            data,
            x_count,
            y_count,
        }
    }

    /// Cells along x (rows).
    #[inline]
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Cells along y (columns).
    #[inline]
    pub fn y_count(&self) -> usize {
        self.y_count
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value of cell (`x_index`, `y_index`), if in range.
    #[inline]
    pub fn get(&self, x_index: usize, y_index: usize) -> Option<T> {
        if x_index < self.x_count && y_index < self.y_count {
            Some(self.data[x_index * self.y_count + y_index])
        } else {
            None
        }
    }

    /// Row-major cell values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `x_index`: all y cells at one x.
    pub fn row(&self, x_index: usize) -> Option<&[T]> {
        (x_index < self.x_count)
            .then(|| &self.data[x_index * self.y_count..(x_index + 1) * self.y_count])
    }

    /// Largest cell value, ignoring NaN.
    pub fn max(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Number of cells holding a nonzero value.
    pub fn nonzero_cells(&self) -> usize {
        self.data.iter().filter(|&&v| v != T::zero()).count()
    }

    /// The same values laid out y-major, `out[y_index * x_count + x_index]`.
    pub fn transposed(&self) -> Result<Vec<T>, BoxInterpError> {
        let mut out = try_with_capacity(self.data.len())?;
        for k in 0..self.y_count {
            for l in 0..self.x_count {
                out.push(self.data[l * self.y_count + k]);
            }
        }
        Ok(out)
    }

    /// Take the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ============================================================================
// Release
// ============================================================================

/// Give a grid back, freeing its buffer.
///
/// Dropping the grid has the same effect; this function exists so callers
/// ported from an explicit allocate/free interface keep a matching call.
pub fn release<T>(grid: Grid<T>) {
    drop(grid);
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Grid:           {} x {}", self.x_count, self.y_count)?;
        writeln!(f, "  Filled cells:   {}", self.nonzero_cells())?;
        if let Some(max) = self.max() {
            writeln!(f, "  Max intensity:  {max}")?;
        }

        const PREVIEW: usize = 8;
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Cells:")?;
        for l in 0..self.x_count.min(PREVIEW) {
            write!(f, "  ")?;
            for k in 0..self.y_count.min(PREVIEW) {
                write!(f, "{:>10.4}", self.data[l * self.y_count + k])?;
            }
            if self.y_count > PREVIEW {
                write!(f, "  ...")?;
            }
            writeln!(f)?;
        }
        if self.x_count > PREVIEW {
            writeln!(f, "  ...")?;
        }
        Ok(())
    }
}
