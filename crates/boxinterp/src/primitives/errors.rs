//! Error types for box interpolation.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported at the boundary of the
//! box resampler: mismatched sample arrays, degenerate grid axes, grids too
//! large to address, allocation failures and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, steps, axis).
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Numeric payloads are stored as `f64` regardless of the grid float type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Axis Tag
// ============================================================================

/// Identifies one of the two grid axes in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first (slow, row) axis of the output grid.
    X,

    /// The second (fast, column) axis of the output grid.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for box interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxInterpError {
    /// An input that must hold at least one element is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Argument rejected at a foreign-function boundary.
    InvalidArgument(String),

    /// Intensity and coordinate arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of intensities.
        intensity_len: usize,
        /// Number of x coordinates.
        x_len: usize,
        /// Number of y coordinates.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values where finite ones are required.
    InvalidNumericValue(String),

    /// Grid step must be finite and nonzero.
    InvalidStep {
        /// Axis the step belongs to.
        axis: Axis,
        /// The step provided.
        step: f64,
    },

    /// Grid origin must be finite.
    InvalidOrigin {
        /// Axis the origin belongs to.
        axis: Axis,
        /// The origin provided.
        origin: f64,
    },

    /// Box half-width must be finite and non-negative.
    InvalidHalfWidth {
        /// Axis the half-width belongs to.
        axis: Axis,
        /// The half-width provided.
        half_width: f64,
    },

    /// `x_count * y_count` does not fit in `usize`.
    GridTooLarge {
        /// Cells along x.
        x_count: usize,
        /// Cells along y.
        y_count: usize,
    },

    /// The allocator could not provide the grid buffers.
    OutOfMemory {
        /// Number of cells requested.
        cells: usize,
    },

    /// The builder was finalized without configuring an axis.
    MissingAxis {
        /// The axis that was never set.
        axis: Axis,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BoxInterpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::MismatchedInputs {
                intensity_len,
                x_len,
                y_len,
            } => {
                write!(
                    f,
                    "Length mismatch: intensity has {intensity_len} values, x has {x_len}, y has {y_len}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidStep { axis, step } => {
                write!(f, "Invalid {axis} step: {step} (must be finite and nonzero)")
            }
            Self::InvalidOrigin { axis, origin } => {
                write!(f, "Invalid {axis} origin: {origin} (must be finite)")
            }
            Self::InvalidHalfWidth { axis, half_width } => {
                write!(
                    f,
                    "Invalid {axis} half-width: {half_width} (must be finite and >= 0)"
                )
            }
            Self::GridTooLarge { x_count, y_count } => {
                write!(f, "Grid too large: {x_count} x {y_count} cells overflows usize")
            }
            Self::OutOfMemory { cells } => {
                write!(f, "Out of memory: could not allocate a grid of {cells} cells")
            }
            Self::MissingAxis { axis } => write!(f, "Grid {axis} axis was not configured"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BoxInterpError {}
