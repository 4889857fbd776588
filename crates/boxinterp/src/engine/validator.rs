//! Input validation for box interpolation.
//!
//! ## Purpose
//!
//! The resampling kernel trusts its inputs. This module checks them at the
//! boundary: matching sample lengths, usable grid axes, addressable grid
//! sizes, and the extra constraints of the polar and profile helpers.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Permissive on samples**: Coordinates and intensities are not checked
//!   for finiteness; a NaN coordinate reaches no cell and a NaN intensity
//!   poisons only the cells it lands in.
//!
//! ## Invariants
//!
//! * An axis that passes `validate_axis` never causes a division by zero.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{Axis, BoxInterpError};
use crate::primitives::grid::GridAxis;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for grid configuration and sample data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate that the three sample arrays have the same length.
    ///
    /// Empty arrays are valid and produce an all-zero grid.
    pub fn validate_samples<T>(intensity: &[T], x: &[T], y: &[T]) -> Result<(), BoxInterpError> {
        if intensity.len() != x.len() || intensity.len() != y.len() {
            return Err(BoxInterpError::MismatchedInputs {
                intensity_len: intensity.len(),
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Grid Validation
    // ========================================================================

    /// Validate one grid axis.
    pub fn validate_axis<T: Float>(grid: &GridAxis<T>, axis: Axis) -> Result<(), BoxInterpError> {
        if !grid.origin.is_finite() {
            return Err(BoxInterpError::InvalidOrigin {
                axis,
                origin: grid.origin.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !grid.step.is_finite() || grid.step == T::zero() {
            return Err(BoxInterpError::InvalidStep {
                axis,
                step: grid.step.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !grid.half_width.is_finite() || grid.half_width < T::zero() {
            return Err(BoxInterpError::InvalidHalfWidth {
                axis,
                half_width: grid.half_width.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    /// Validate that the grid has an addressable number of cells.
    pub fn validate_grid_size(x_count: usize, y_count: usize) -> Result<usize, BoxInterpError> {
        x_count
            .checked_mul(y_count)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(BoxInterpError::GridTooLarge { x_count, y_count })
    }

    // ========================================================================
    // Helper Validation
    // ========================================================================

    /// Validate a row-major image against its expected shape.
    pub fn validate_image<T>(image: &[T], expected: usize) -> Result<(), BoxInterpError> {
        if image.is_empty() {
            return Err(BoxInterpError::EmptyInput);
        }
        if image.len() != expected {
            return Err(BoxInterpError::InvalidInput(format!(
                "image has {} values, coordinate maps have {}",
                image.len(),
                expected
            )));
        }
        Ok(())
    }

    /// Validate that every radius is finite, non-negative and has an
    /// integer bin representable as `usize`.
    pub fn validate_radii<T: Float>(r: &[T]) -> Result<(), BoxInterpError> {
        for (i, &ri) in r.iter().enumerate() {
            if !ri.is_finite() || ri < T::zero() || ri.trunc().to_usize().is_none() {
                return Err(BoxInterpError::InvalidNumericValue(format!(
                    "r[{}]={}",
                    i,
                    ri.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a smoothing width.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), BoxInterpError> {
        if !sigma.is_finite() || sigma < T::zero() {
            return Err(BoxInterpError::InvalidNumericValue(format!(
                "sigma={}",
                sigma.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate an output dimension of the polar remap.
    pub fn validate_size(size: usize, name: &str) -> Result<(), BoxInterpError> {
        if size == 0 {
            return Err(BoxInterpError::InvalidInput(format!(
                "{name} must be at least 1"
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BoxInterpError> {
        if let Some(param) = duplicate_param {
            return Err(BoxInterpError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
