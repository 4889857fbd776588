#![cfg(feature = "dev")]
//! Tests for the fallible scratch buffers used by the resampler.
//!
//! ## Test Organization
//!
//! 1. **Allocation** - Filled and reserved buffers, capacity overflow
//! 2. **Accumulation** - Per-cell sums turned into means

use boxinterp::internals::primitives::buffer::{CellAccumulator, try_filled, try_with_capacity};
use boxinterp::internals::primitives::errors::BoxInterpError;

// ============================================================================
// Allocation Tests
// ============================================================================

/// Test filled buffers hold `len` copies of the value.
#[test]
fn test_try_filled() {
    assert_eq!(try_filled(3, 1.5_f64), Ok(vec![1.5; 3]));
    assert_eq!(try_filled(0, 7_usize), Ok(vec![]));
}

/// Test reserved buffers start empty with the requested room.
#[test]
fn test_try_with_capacity() {
    let v = try_with_capacity::<f32>(16).unwrap();
    assert!(v.is_empty());
    assert!(v.capacity() >= 16);
}

/// Test a request past the address space is reported, not aborted on.
#[test]
fn test_capacity_overflow_is_out_of_memory() {
    assert_eq!(
        try_with_capacity::<u64>(usize::MAX),
        Err(BoxInterpError::OutOfMemory { cells: usize::MAX })
    );
    assert!(matches!(
        CellAccumulator::<f64>::try_new(usize::MAX),
        Err(BoxInterpError::OutOfMemory { .. })
    ));
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test cells average their contributions and untouched cells stay zero.
#[test]
fn test_accumulator_means() {
    let mut acc = CellAccumulator::try_new(3).unwrap();
    acc.add(0, 2.0_f64);
    acc.add(0, 4.0);
    acc.add(2, 1.0);

    assert_eq!(acc.finish(), vec![3.0, 0.0, 1.0]);
}

/// Test an accumulator over no cells finishes empty.
#[test]
fn test_accumulator_empty() {
    let acc = CellAccumulator::<f32>::try_new(0).unwrap();
    assert!(acc.finish().is_empty());
}
