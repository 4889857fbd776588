//! Scratch memory for box averaging.
//!
//! ## Purpose
//!
//! The resampler needs two grid-sized scratch arrays: a running sum of
//! intensities and a count of contributing samples per cell. `CellAccumulator`
//! owns both and turns them into per-cell means when the pass is over.
//!
//! ## Design notes
//!
//! * **Fallible allocation**: Buffers are reserved with `try_reserve_exact` so
//!   that allocation failure surfaces as `BoxInterpError::OutOfMemory`.
//! * **Reuse of the sum buffer**: `finish` divides in place and hands the sum
//!   buffer back as the output; the count buffer is dropped.
//!
//! ## Invariants
//!
//! * `sums.len() == counts.len()` at all times.
//! * A cell with zero contributions finishes at exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BoxInterpError;

// ============================================================================
// Allocation Helper
// ============================================================================

/// Allocate an empty vector with room for exactly `len` elements.
pub fn try_with_capacity<V>(len: usize) -> Result<Vec<V>, BoxInterpError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| BoxInterpError::OutOfMemory { cells: len })?;
    Ok(v)
}

/// Allocate a vector of `len` copies of `value`, reporting allocation failure.
pub fn try_filled<V: Clone>(len: usize, value: V) -> Result<Vec<V>, BoxInterpError> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, value);
    Ok(v)
}

// ============================================================================
// Cell Accumulator
// ============================================================================

/// Per-cell running sums and contribution counts.
#[derive(Debug, Clone)]
pub struct CellAccumulator<T> {
    sums: Vec<T>,
    counts: Vec<usize>,
}

impl<T: Float> CellAccumulator<T> {
    /// Allocate zeroed scratch space for `cells` grid cells.
    pub fn try_new(cells: usize) -> Result<Self, BoxInterpError> {
        Ok(Self {
            counts: try_filled(cells, 0)?,
            sums: try_filled(cells, T::zero())?,
        })
    }

    /// Add one contribution of `value` to `cell`.
    #[inline]
    pub fn add(&mut self, cell: usize, value: T) {
        self.counts[cell] += 1;
        self.sums[cell] = self.sums[cell] + value;
    }

    /// Convert sums to means and return them; empty cells stay at zero.
    pub fn finish(self) -> Vec<T> {
        let Self { mut sums, counts } = self;
        for (sum, &n) in sums.iter_mut().zip(counts.iter()) {
            if n != 0 {
                *sum = *sum / T::from(n).unwrap_or_else(T::max_value);
            }
        }
        sums
    }
}
