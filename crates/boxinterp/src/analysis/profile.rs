//! Azimuthally averaged radial profiles.
//!
//! ## Purpose
//!
//! Collapse an image to a 1D intensity-versus-radius curve by averaging all
//! pixels that share an integer radius bin, optionally smoothing the curve.
//!
//! ## Key concepts
//!
//! * **Binning**: A pixel at radius `r` falls into bin `trunc(r)`. Radii
//!   whose bin does not fit in `usize` are rejected.
//! * **Empty bins**: Bins without pixels read as zero.
//! * **Smoothing**: With `sigma > 0` the profile is passed through
//!   [`gaussian_filter1d`].
//!
//! ## Invariants
//!
//! * The profile has `trunc(max(r)) + 1` bins.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::kernel::gaussian_filter1d;
use crate::primitives::buffer::CellAccumulator;
use crate::primitives::errors::BoxInterpError;

/// Mean image intensity per integer radius bin.
pub fn radial_profile<T: Float>(image: &[T], r: &[T], sigma: T) -> Result<Vec<T>, BoxInterpError> {
    Validator::validate_image(image, r.len())?;
    Validator::validate_radii(r)?;
    Validator::validate_sigma(sigma)?;

    let mut bins = 0;
    for &ri in r {
        bins = bins.max(radius_bin(ri)?.saturating_add(1));
    }

    let mut acc = CellAccumulator::try_new(bins)?;
    for (&value, &ri) in image.iter().zip(r) {
        acc.add(radius_bin(ri)?, value);
    }
    let profile = acc.finish();

    if sigma > T::zero() {
        gaussian_filter1d(&profile, sigma)
    } else {
        Ok(profile)
    }
}

/// Integer bin of a validated radius.
#[inline]
fn radius_bin<T: Float>(r: T) -> Result<usize, BoxInterpError> {
    r.trunc().to_usize().ok_or_else(|| {
        BoxInterpError::InvalidNumericValue(format!("r={}", r.to_f64().unwrap_or(f64::NAN)))
    })
}
