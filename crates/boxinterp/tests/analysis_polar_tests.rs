#![cfg(feature = "dev")]
//! Tests for polar geometry and polar remapping.
//!
//! ## Test Organization
//!
//! 1. **Geometry** - Radius and angle maps around a beam centre, size limits
//! 2. **Remap Settings** - Defaults and builders
//! 3. **Remapping** - Output shape, axes, normalization
//! 4. **Errors** - Invalid sizes and images

use approx::assert_relative_eq;
use core::f64::consts::{FRAC_PI_2, PI};

use boxinterp::internals::analysis::polar::{PolarGeometry, PolarRemap};
use boxinterp::internals::primitives::errors::{Axis, BoxInterpError};

// ============================================================================
// Geometry Tests
// ============================================================================

/// Test radius and angle of selected pixels.
#[test]
fn test_geometry_maps() {
    let geom = PolarGeometry::new(5, 5, (2.0, 2.0)).unwrap();
    assert_eq!(geom.len(), 25);
    assert!(!geom.is_empty());

    // (row, col) → index row * cols + col
    let at = |row: usize, col: usize| row * 5 + col;

    assert_eq!(geom.r[at(2, 2)], 0.0);
    assert_relative_eq!(geom.r[at(2, 4)], 2.0);
    assert_relative_eq!(geom.phi[at(2, 4)], 0.0);
    assert_relative_eq!(geom.phi[at(4, 2)], FRAC_PI_2);
    assert_relative_eq!(geom.phi[at(2, 0)], PI);
    assert_relative_eq!(geom.r[at(0, 0)], 8.0_f64.sqrt());
    assert_relative_eq!(geom.phi[at(0, 0)], -3.0 * PI / 4.0);
}

/// Test an off-grid beam centre.
#[test]
fn test_geometry_fractional_center() {
    let geom = PolarGeometry::new(2, 3, (0.5, 1.0)).unwrap();

    assert_relative_eq!(geom.r[1], 0.5);
    assert_relative_eq!(geom.r[4], 0.5);
    assert_relative_eq!(geom.phi[1], -FRAC_PI_2);
    assert_relative_eq!(geom.phi[4], FRAC_PI_2);
}

/// Test a zero-sized image has empty maps.
#[test]
fn test_geometry_empty() {
    let geom = PolarGeometry::<f64>::new(0, 4, (0.0, 0.0)).unwrap();
    assert!(geom.is_empty());
    assert!(geom.phi.is_empty());
}

/// Test an image shape whose pixel count overflows is rejected up front.
#[test]
fn test_geometry_rejects_oversized_image() {
    let res = PolarGeometry::<f64>::new(usize::MAX, 2, (0.0, 0.0));
    assert!(matches!(
        res,
        Err(BoxInterpError::GridTooLarge {
            x_count: usize::MAX,
            y_count: 2
        })
    ));
}

// ============================================================================
// Remap Settings Tests
// ============================================================================

/// Test the default output shape and windows.
#[test]
fn test_remap_defaults() {
    let remap = PolarRemap::<f64>::default();

    assert_eq!(remap.r_size, 512);
    assert_eq!(remap.phi_size, 512);
    assert_eq!(remap.r_window, 0.5);
    assert_eq!(remap.phi_window, 0.5);

    let custom = PolarRemap::<f64>::new(64, 32).windows(1.0, 0.1);
    assert_eq!((custom.r_size, custom.phi_size), (64, 32));
    assert_eq!((custom.r_window, custom.phi_window), (1.0, 0.1));
}

// ============================================================================
// Remapping Tests
// ============================================================================

/// Test output shape, axes and phi-major layout.
#[test]
fn test_remap_shape_and_axes() {
    let geom = PolarGeometry::new(9, 9, (4.0, 4.0)).unwrap();
    let image = vec![2.0; geom.len()];

    let polar = PolarRemap::new(6, 10)
        .windows(1.5, 0.8)
        .remap_image(&image, &geom)
        .unwrap();

    assert_eq!(polar.r_size(), 6);
    assert_eq!(polar.phi_size(), 10);
    assert_eq!(polar.data.len(), 60);

    let r_max = geom.r.iter().copied().fold(0.0, f64::max);
    let phi_min = geom.phi.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(polar.r_axis[0], 0.0);
    assert_relative_eq!(polar.r_axis[1], r_max / 6.0);
    assert_relative_eq!(polar.phi_axis[0], phi_min);

    assert_eq!(polar.get(9, 5), Some(polar.data[9 * 6 + 5]));
    assert_eq!(polar.get(10, 0), None);
    assert_eq!(polar.get(0, 6), None);
}

/// Test a uniform image remaps to ones after normalization.
#[test]
fn test_remap_uniform_image_normalizes_to_one() {
    let geom = PolarGeometry::new(11, 11, (5.0, 5.0)).unwrap();
    let image = vec![2.0; geom.len()];

    let polar = PolarRemap::new(8, 8)
        .windows(2.0, 1.0)
        .remap_image(&image, &geom)
        .unwrap();

    assert!(polar.normalized);
    let filled: Vec<f64> = polar.data.iter().copied().filter(|&v| v != 0.0).collect();
    assert!(!filled.is_empty());
    for v in filled {
        assert_relative_eq!(v, 1.0, epsilon = 1e-12);
    }
}

/// Test a non-positive maximum leaves values untouched.
#[test]
fn test_remap_skips_normalization_without_positive_max() {
    let geom = PolarGeometry::new(5, 5, (2.0, 2.0)).unwrap();

    let zeros = vec![0.0; geom.len()];
    let polar = PolarRemap::new(4, 4).remap_image(&zeros, &geom).unwrap();
    assert!(!polar.normalized);
    assert!(polar.data.iter().all(|&v| v == 0.0));

    let negative = vec![-3.0; geom.len()];
    let polar = PolarRemap::new(4, 4)
        .windows(2.0, 2.0)
        .remap_image(&negative, &geom)
        .unwrap();
    assert!(!polar.normalized);
    assert!(polar.data.iter().any(|&v| v == -3.0));
}

/// Test remapping explicit coordinate maps matches the geometry form.
#[test]
fn test_remap_with_explicit_maps() {
    let geom = PolarGeometry::new(6, 7, (2.5, 3.0)).unwrap();
    let image: Vec<f64> = (0..geom.len()).map(|i| (i % 5) as f64 + 1.0).collect();
    let remap = PolarRemap::new(5, 7).windows(1.0, 0.6);

    let a = remap.remap_image(&image, &geom).unwrap();
    let b = remap.remap(&image, &geom.r, &geom.phi).unwrap();

    assert_eq!(a, b);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test a zero output dimension is rejected.
#[test]
fn test_remap_zero_size() {
    let geom = PolarGeometry::new(3, 3, (1.0, 1.0)).unwrap();
    let image = vec![1.0; 9];

    let res = PolarRemap::new(0, 4).remap_image(&image, &geom);
    assert_eq!(
        res,
        Err(BoxInterpError::InvalidInput("r_size must be at least 1".into()))
    );
}

/// Test empty and mis-shaped images are rejected.
#[test]
fn test_remap_bad_image() {
    let geom = PolarGeometry::new(3, 3, (1.0, 1.0)).unwrap();

    let res = PolarRemap::new(4, 4).remap_image(&[], &geom);
    assert_eq!(res, Err(BoxInterpError::EmptyInput));

    let res = PolarRemap::new(4, 4).remap_image(&[1.0; 8], &geom);
    assert!(matches!(res, Err(BoxInterpError::InvalidInput(_))));

    let res = PolarRemap::new(4, 4).remap(&[1.0; 9], &geom.r, &geom.phi[..8]);
    assert!(matches!(res, Err(BoxInterpError::MismatchedInputs { .. })));
}

/// Test a single pixel at the beam centre has no radial extent.
#[test]
fn test_remap_single_pixel_has_zero_radial_step() {
    let geom = PolarGeometry::new(1, 1, (0.0, 0.0)).unwrap();

    let res = PolarRemap::new(4, 4).remap_image(&[1.0], &geom);
    assert!(matches!(
        res,
        Err(BoxInterpError::InvalidStep { axis: Axis::X, .. })
    ));
}
