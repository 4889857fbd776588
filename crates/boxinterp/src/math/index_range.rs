//! Cell index ranges covered by a one-dimensional box.
//!
//! ## Purpose
//!
//! Given a sample position and a box half-extent, both in fractional cell
//! units, compute the inclusive range of cells whose centre falls inside the
//! box. The same function serves both grid axes.
//!
//! ## Key concepts
//!
//! * **Lower bound**: `ceil(center - half_width)`, raised to 0 when negative,
//!   and pushed to `count` (one past the end) when it exceeds the last cell.
//! * **Upper bound**: `floor(center + half_width)`, lowered to -1 when
//!   negative, and clamped to `count - 1` when it exceeds the last cell.
//!
//! ## Invariants
//!
//! * The clamping is asymmetric: a box entirely past the end of the grid
//!   yields an empty span, while a box that only overshoots the end still
//!   covers the last cells.
//! * `min > max` encodes an empty span; no other flag is needed.
//! * Non-representable bounds saturate, and NaN saturates low, which yields
//!   an empty span.

// External dependencies
use core::ops::Range;
use num_traits::Float;

// ============================================================================
// Cell Span
// ============================================================================

/// Inclusive `[min, max]` range of cell indices along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    /// First covered cell, or `count` when nothing is covered past the end.
    pub min: isize,

    /// Last covered cell, or -1 when nothing is covered before the start.
    pub max: isize,
}

impl CellSpan {
    /// Whether the span covers no cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Number of covered cells.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    /// Covered cells as a half-open range.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.min as usize..self.max as usize + 1
        }
    }
}

// ============================================================================
// Span Computation
// ============================================================================

/// Compute the cells covered by a box centred at `center` (in cell units).
pub fn cell_span<T: Float>(center: T, half_width: T, count: usize) -> CellSpan {
    let count = isize::try_from(count).unwrap_or(isize::MAX);
    let last = count - 1;

    let mut min = to_cell_index((center - half_width).ceil());
    if min < 0 {
        min = 0;
    }
    if min > last {
        min = count;
    }

    let mut max = to_cell_index((center + half_width).floor());
    if max < 0 {
        max = -1;
    }
    if max > last {
        max = last;
    }

    CellSpan { min, max }
}

/// Convert an already rounded float to an index, saturating at the bounds.
#[inline]
fn to_cell_index<T: Float>(value: T) -> isize {
    value.to_isize().unwrap_or(if value > T::zero() {
        isize::MAX
    } else {
        isize::MIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_inside_grid() {
        let span = cell_span(3.2_f64, 1.5, 10);
        assert_eq!(span, CellSpan { min: 2, max: 4 });
        assert_eq!(span.indices(), 2..5);
    }

    #[test]
    fn test_span_exact_bounds_are_inclusive() {
        let span = cell_span(2.0_f64, 1.0, 10);
        assert_eq!(span, CellSpan { min: 1, max: 3 });
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_nan_center_is_empty() {
        let span = cell_span(f64::NAN, 0.5, 10);
        assert!(span.is_empty());
        assert_eq!(span.indices(), 0..0);
    }
}
