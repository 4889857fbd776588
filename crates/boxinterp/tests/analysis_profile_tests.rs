#![cfg(feature = "dev")]
//! Tests for azimuthally averaged radial profiles.
//!
//! ## Test Organization
//!
//! 1. **Binning** - Integer radius bins and empty bins
//! 2. **Smoothing** - Gaussian-filtered profiles
//! 3. **Errors** - Invalid images, radii and widths, including radii and
//!    widths too large to bin or smooth

use approx::assert_relative_eq;

use boxinterp::internals::analysis::polar::PolarGeometry;
use boxinterp::internals::analysis::profile::radial_profile;
use boxinterp::internals::primitives::errors::BoxInterpError;

// ============================================================================
// Binning Tests
// ============================================================================

/// Test pixels are averaged per truncated radius and gaps read as zero.
#[test]
fn test_profile_bins_by_truncated_radius() {
    let r = [0.0, 0.5, 1.2, 1.9, 3.0];
    let image = [1.0, 3.0, 4.0, 6.0, 10.0];

    let profile = radial_profile(&image, &r, 0.0).unwrap();

    assert_eq!(profile, vec![2.0, 5.0, 0.0, 10.0]);
}

/// Test a profile of a radially symmetric image.
#[test]
fn test_profile_of_ring_image() {
    let geom = PolarGeometry::new(21, 21, (10.0, 10.0)).unwrap();
    let image: Vec<f64> = geom
        .r
        .iter()
        .map(|&r| if (5.0..6.0).contains(&r) { 1.0 } else { 0.0 })
        .collect();

    let profile = radial_profile(&image, &geom.r, 0.0).unwrap();

    let r_max = geom.r.iter().copied().fold(0.0, f64::max);
    assert_eq!(profile.len(), r_max.trunc() as usize + 1);
    assert_eq!(profile[5], 1.0);
    assert_eq!(profile[4], 0.0);
    assert_eq!(profile[6], 0.0);
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Test smoothing leaves a flat profile flat.
#[test]
fn test_smoothing_preserves_constant_profile() {
    let r: Vec<f64> = (0..20).map(|i| i as f64 + 0.5).collect();
    let image = vec![7.0; 20];

    let profile = radial_profile(&image, &r, 1.5).unwrap();

    assert_eq!(profile.len(), 20);
    for v in profile {
        assert_relative_eq!(v, 7.0, epsilon = 1e-12);
    }
}

/// Test smoothing spreads a spike into its neighbours.
#[test]
fn test_smoothing_spreads_spike() {
    let r: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let mut image = vec![0.0; 11];
    image[5] = 1.0;

    let raw = radial_profile(&image, &r, 0.0).unwrap();
    let smooth = radial_profile(&image, &r, 1.0).unwrap();

    assert_eq!(raw[5], 1.0);
    assert!(smooth[5] < 1.0);
    assert!(smooth[4] > 0.0 && smooth[6] > 0.0);
    assert_relative_eq!(smooth[4], smooth[6], epsilon = 1e-15);
    assert_relative_eq!(smooth.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test invalid inputs are rejected.
#[test]
fn test_profile_errors() {
    let empty: [f64; 0] = [];
    assert_eq!(
        radial_profile(&empty, &empty, 0.0),
        Err(BoxInterpError::EmptyInput)
    );

    assert!(matches!(
        radial_profile(&[1.0, 2.0], &[0.0], 0.0),
        Err(BoxInterpError::InvalidInput(_))
    ));

    assert!(matches!(
        radial_profile(&[1.0], &[-1.0], 0.0),
        Err(BoxInterpError::InvalidNumericValue(_))
    ));

    assert!(matches!(
        radial_profile(&[1.0], &[0.0], -0.5),
        Err(BoxInterpError::InvalidNumericValue(_))
    ));
}

/// Test a radius whose bin does not fit in `usize` is rejected instead of
/// being folded into an existing bin.
#[test]
fn test_profile_rejects_unbinnable_radius() {
    let res = radial_profile(&[1.0, 2.0, 100.0], &[0.0, 1.0, 1e20], 0.0);

    assert_eq!(
        res,
        Err(BoxInterpError::InvalidNumericValue(
            "r[2]=100000000000000000000".into()
        ))
    );
}

/// Test a smoothing width too wide to build a kernel for is reported.
#[test]
fn test_profile_rejects_unusable_sigma() {
    let r = [0.0, 1.0, 2.0, 3.0, 4.0];
    let image = [0.0, 0.0, 10.0, 0.0, 0.0];

    assert!(matches!(
        radial_profile(&image, &r, 1e300),
        Err(BoxInterpError::InvalidNumericValue(_))
    ));

    let flat = radial_profile(&image, &r, 1e3).unwrap();
    for v in flat {
        assert_relative_eq!(v, 2.0, epsilon = 1e-3);
    }
}
