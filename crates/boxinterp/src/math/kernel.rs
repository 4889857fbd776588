//! Gaussian smoothing for one-dimensional profiles.
//!
//! ## Purpose
//!
//! Radial profiles are optionally smoothed with a sampled, normalized Gaussian
//! before being returned. This module builds the kernel and applies it.
//!
//! ## Key concepts
//!
//! * **Truncation**: The kernel is cut at `GAUSSIAN_TRUNCATE` standard
//!   deviations, giving a radius of `floor(truncate * sigma + 0.5)` samples.
//! * **Reflect boundary**: Samples beyond either end are mirrored including
//!   the edge sample (`d c b a | a b c d | d c b a`).
//!
//! ## Invariants
//!
//! * Kernel weights are symmetric and sum to one.
//! * A constant signal is left unchanged by the filter.

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
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::BoxInterpError;

// ============================================================================
// Constants
// ============================================================================

/// Number of standard deviations covered on each side of the kernel centre.
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

// ============================================================================
// Kernel Construction
// ============================================================================

/// Kernel radius (in samples) for a given standard deviation.
///
/// Fails when the kernel would not fit in memory addressing, i.e. when
/// `2 * radius + 1` samples are not representable.
pub fn gaussian_radius<T: Float>(sigma: T) -> Result<usize, BoxInterpError> {
    let truncate = T::from(GAUSSIAN_TRUNCATE).unwrap_or_else(T::one);
    let half = T::one() / (T::one() + T::one());
    let radius = (truncate * sigma + half).floor();

    radius
        .to_usize()
        .filter(|&r| kernel_len(r).is_some())
        .ok_or_else(|| {
            BoxInterpError::InvalidNumericValue(format!(
                "sigma={} gives a kernel too wide to index",
                sigma.to_f64().unwrap_or(f64::NAN)
            ))
        })
}

/// Number of kernel samples for `radius`, if addressable.
#[inline]
fn kernel_len(radius: usize) -> Option<usize> {
    radius
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .filter(|&n| n <= isize::MAX as usize)
}

/// Normalized Gaussian weights of length `2 * radius + 1`.
pub fn gaussian_weights<T: Float>(sigma: T) -> Result<Vec<T>, BoxInterpError> {
    let radius = gaussian_radius(sigma)?;
    let len = kernel_len(radius).unwrap_or(usize::MAX);
    let neg_half_inv_var = -(T::one() / (T::one() + T::one())) / (sigma * sigma);
    let center = T::from(radius).unwrap_or_else(T::zero);

    let mut weights = try_with_capacity(len)?;
    weights.extend((0..len).map(|i| {
        let d = T::from(i).unwrap_or_else(T::zero) - center;
        (neg_half_inv_var * d * d).exp()
    }));

    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    for w in weights.iter_mut() {
        *w = *w / total;
    }
    Ok(weights)
}

// ============================================================================
// Filtering
// ============================================================================

/// Map an out-of-range index back into `[0, n)` by half-sample reflection.
#[inline]
pub fn reflect_index(i: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = i.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}

/// Smooth `input` with a Gaussian of standard deviation `sigma`.
///
/// Returns a copy of the input when `sigma` is not positive. Fails when the
/// kernel for `sigma` cannot be indexed or allocated.
pub fn gaussian_filter1d<T: Float>(input: &[T], sigma: T) -> Result<Vec<T>, BoxInterpError> {
    let n = input.len();
    let mut out = try_with_capacity(n)?;
    if n == 0 || sigma.is_nan() || sigma <= T::zero() {
        out.extend_from_slice(input);
        return Ok(out);
    }

    let weights = gaussian_weights(sigma)?;
    let radius = (weights.len() / 2) as isize;

    out.extend((0..n as isize).map(|i| {
        weights
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, &w)| {
                let offset = (j as isize - radius).saturating_add(i);
                acc + w * input[reflect_index(offset, n)]
            })
    }));
    Ok(out)
}
