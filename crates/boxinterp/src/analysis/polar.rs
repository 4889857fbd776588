//! Polar remapping of detector images.
//!
//! ## Purpose
//!
//! Scattering images are recorded on a cartesian pixel grid but read in polar
//! coordinates around the beam centre. This module computes per-pixel radius
//! and angle maps and box-resamples an image onto a regular (r, phi) grid.
//!
//! ## Design notes
//!
//! * **Box resampling**: Every pixel is treated as a scattered sample at its
//!   (r, phi) position, so the remap is a direct use of the resampler.
//! * **Axis choice**: r starts at 0 with `r_step = max(r) / r_size`; phi spans
//!   `[min(phi), max(phi))` with `phi_step = (max - min) / phi_size`.
//! * **Normalization**: The result is divided by its maximum so the brightest
//!   cell is 1. A grid whose maximum is not a positive finite number is
//!   returned as is.
//!
//! ## Key concepts
//!
//! * **Layout**: Output is phi-major, `data[phi_index * r_size + r_index]`,
//!   i.e. one row per angle, the way the image is displayed.
//!
//! ## Non-goals
//!
//! * This module does not apply detector corrections or q-space conversion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::executor::BoxExecutor;
use crate::engine::validator::Validator;
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::BoxInterpError;
use crate::primitives::grid::GridAxis;

// ============================================================================
// Polar Geometry
// ============================================================================

/// Per-pixel radius and angle of a row-major image around a beam centre.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarGeometry<T> {
    /// Image rows.
    pub rows: usize,

    /// Image columns.
    pub cols: usize,

    /// Beam centre as (row, column).
    pub beam_center: (T, T),

    /// Distance of each pixel from the beam centre.
    pub r: Vec<T>,

    /// Angle of each pixel, `atan2(row offset, column offset)`, in radians.
    pub phi: Vec<T>,
}

impl<T: Float> PolarGeometry<T> {
    /// Compute radius and angle maps for a `rows x cols` image.
    pub fn new(rows: usize, cols: usize, beam_center: (T, T)) -> Result<Self, BoxInterpError> {
        let n = Validator::validate_grid_size(rows, cols)?;
        let mut r = try_with_capacity(n)?;
        let mut phi = try_with_capacity(n)?;

        for row in 0..rows {
            let yy = T::from(row).unwrap_or_else(T::max_value) - beam_center.0;
            for col in 0..cols {
                let xx = T::from(col).unwrap_or_else(T::max_value) - beam_center.1;
                r.push(xx.hypot(yy));
                phi.push(yy.atan2(xx));
            }
        }

        Ok(Self {
            rows,
            cols,
            beam_center,
            r,
            phi,
        })
    }

    /// Number of pixels covered by the maps.
    pub fn len(&self) -> usize {
        self.r.len()
    }

    /// Whether the geometry covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }
}

// ============================================================================
// Polar Image
// ============================================================================

/// An image resampled onto a regular (r, phi) grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarImage<T> {
    /// Phi-major cell values, `phi_size` rows of `r_size` values.
    pub data: Vec<T>,

    /// Radius of each column.
    pub r_axis: Vec<T>,

    /// Angle of each row.
    pub phi_axis: Vec<T>,

    /// Whether the values were divided by the grid maximum.
    pub normalized: bool,
}

impl<T: Float> PolarImage<T> {
    /// Number of radial cells (columns).
    pub fn r_size(&self) -> usize {
        self.r_axis.len()
    }

    /// Number of angular cells (rows).
    pub fn phi_size(&self) -> usize {
        self.phi_axis.len()
    }

    /// Value at (`phi_index`, `r_index`), if in range.
    pub fn get(&self, phi_index: usize, r_index: usize) -> Option<T> {
        if phi_index < self.phi_size() && r_index < self.r_size() {
            Some(self.data[phi_index * self.r_size() + r_index])
        } else {
            None
        }
    }
}

// ============================================================================
// Polar Remap
// ============================================================================

/// Settings for remapping an image onto a polar grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarRemap<T> {
    /// Number of radial cells.
    pub r_size: usize,

    /// Number of angular cells.
    pub phi_size: usize,

    /// Radial box width, in the units of `r`.
    pub r_window: T,

    /// Angular box width, in the units of `phi`.
    pub phi_window: T,
}

impl<T: Float> Default for PolarRemap<T> {
    fn default() -> Self {
        let half = T::one() / (T::one() + T::one());
        Self {
            r_size: 512,
            phi_size: 512,
            r_window: half,
            phi_window: half,
        }
    }
}

impl<T: Float> PolarRemap<T> {
    /// Create remap settings with the given output shape and default windows.
    pub fn new(r_size: usize, phi_size: usize) -> Self {
        Self {
            r_size,
            phi_size,
            ..Self::default()
        }
    }

    /// Set the radial and angular box widths.
    pub fn windows(mut self, r_window: T, phi_window: T) -> Self {
        self.r_window = r_window;
        self.phi_window = phi_window;
        self
    }

    /// Remap an image using precomputed geometry.
    pub fn remap_image(
        &self,
        image: &[T],
        geometry: &PolarGeometry<T>,
    ) -> Result<PolarImage<T>, BoxInterpError> {
        self.remap(image, &geometry.r, &geometry.phi)
    }

    /// Remap `image` whose pixels sit at radii `r` and angles `phi`.
    pub fn remap(&self, image: &[T], r: &[T], phi: &[T]) -> Result<PolarImage<T>, BoxInterpError> {
        Validator::validate_size(self.r_size, "r_size")?;
        Validator::validate_size(self.phi_size, "phi_size")?;
        Validator::validate_image(image, r.len())?;
        Validator::validate_samples(image, r, phi)?;

        let r_max = r.iter().copied().fold(T::neg_infinity(), Float::max);
        let (phi_min, phi_max) = phi
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });

        let r_size = T::from(self.r_size).unwrap_or_else(T::max_value);
        let phi_size = T::from(self.phi_size).unwrap_or_else(T::max_value);

        let r_axis = GridAxis::new(T::zero(), r_max / r_size, self.r_size, self.r_window);
        let phi_axis = GridAxis::new(
            phi_min,
            (phi_max - phi_min) / phi_size,
            self.phi_size,
            self.phi_window,
        );

        debug!(
            pixels = image.len(),
            r_size = self.r_size,
            phi_size = self.phi_size,
            "polar remap"
        );

        let executor = BoxExecutor::new(r_axis, phi_axis)?;
        let grid = executor.run(image, r, phi)?;

        let mut data = grid.transposed()?;
        let normalized = match grid.max() {
            Some(max) if max.is_finite() && max > T::zero() => {
                for v in data.iter_mut() {
                    *v = *v / max;
                }
                true
            }
            _ => false,
        };

        Ok(PolarImage {
            data,
            r_axis: r_axis.centers().collect(),
            phi_axis: phi_axis.centers().collect(),
            normalized,
        })
    }
}
