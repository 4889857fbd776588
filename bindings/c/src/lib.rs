//! C bindings for boxinterp.
//!
//! Exposes the box resampler through a flat-array C calling convention.
//! Every grid returned by this library is allocated here and must be released
//! here, exactly once, with the matching free function.

#![allow(unsafe_op_in_unsafe_fn)]

use std::alloc::{Layout, alloc, dealloc};
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_double, c_int, c_ulong};
use std::ptr;
use std::slice;

use boxinterp::prelude::{BoxInterpError, Grid, resample};
use tracing::warn;

/// Grid returned across the FFI boundary together with its shape.
/// `data` is allocated by Rust and must be freed with `box_grid_free_result`.
#[repr(C)]
pub struct BoxGridResult {
    /// Row-major cell values, `data[x_index * y_count + y_index]` (NULL on error)
    pub data: *mut c_double,
    /// Number of cells (`x_count * y_count`)
    pub len: c_ulong,
    /// Cells along x
    pub x_count: c_int,
    /// Cells along y
    pub y_count: c_int,
    /// Error message (NULL if no error)
    pub error: *mut c_char,
}

impl Default for BoxGridResult {
    fn default() -> Self {
        BoxGridResult {
            data: ptr::null_mut(),
            len: 0,
            x_count: 0,
            y_count: 0,
            error: ptr::null_mut(),
        }
    }
}

/// Create an error result with the given message.
fn error_result(msg: &str) -> BoxGridResult {
    let c_string = CString::new(msg).unwrap_or_default();
    BoxGridResult {
        error: c_string.into_raw(),
        ..BoxGridResult::default()
    }
}

// ============================================================================
// Length-prefixed grid allocation
// ============================================================================
//
// Grids are handed out as a bare `double *`. The cell count is stored in a
// header just before the first cell so that the free function needs nothing
// but the pointer.

/// Layout of a grid allocation and the byte offset of its first cell.
fn grid_layout(len: usize) -> Option<(Layout, usize)> {
    let header = Layout::new::<usize>();
    let cells = Layout::array::<c_double>(len).ok()?;
    let (layout, offset) = header.extend(cells).ok()?;
    Some((layout.pad_to_align(), offset))
}

/// Copy `values` into a fresh length-prefixed allocation.
///
/// The source grid stays alive until the copy is made, so peak memory is two
/// grids. Returns NULL if the allocator fails.
fn grid_to_ptr(values: &[f64]) -> *mut c_double {
    let Some((layout, offset)) = grid_layout(values.len()) else {
        return ptr::null_mut();
    };

    // SAFETY: the layout always includes the header, so its size is nonzero.
    unsafe {
        let base = alloc(layout);
        if base.is_null() {
            return ptr::null_mut();
        }
        base.cast::<usize>().write(values.len());
        let data = base.add(offset).cast::<c_double>();
        ptr::copy_nonoverlapping(values.as_ptr(), data, values.len());
        data
    }
}

/// Release an allocation made by `grid_to_ptr`.
///
/// # Safety
/// `data` must come from `grid_to_ptr` and not have been released yet.
unsafe fn free_grid_ptr(data: *mut c_double) {
    let Some((_, offset)) = grid_layout(0) else {
        return;
    };
    let base = data.cast::<u8>().sub(offset);
    let len = base.cast::<usize>().read();
    if let Some((layout, _)) = grid_layout(len) {
        dealloc(base, layout);
    }
}

// ============================================================================
// Argument conversion
// ============================================================================

/// Borrow a caller array of `n` doubles; NULL is accepted only when `n == 0`.
unsafe fn sample_slice<'a>(
    data: *const c_double,
    n: usize,
    name: &str,
) -> Result<&'a [f64], BoxInterpError> {
    if n == 0 {
        Ok(&[])
    } else if data.is_null() {
        Err(BoxInterpError::InvalidArgument(format!(
            "{name} is NULL but ndat is {n}"
        )))
    } else {
        Ok(slice::from_raw_parts(data, n))
    }
}

/// Convert a C count to `usize`, rejecting negatives.
fn count(value: c_int, name: &str) -> Result<usize, BoxInterpError> {
    usize::try_from(value)
        .map_err(|_| BoxInterpError::InvalidArgument(format!("{name} is negative: {value}")))
}

/// Validate raw arguments and run the resampler.
#[allow(clippy::too_many_arguments)]
unsafe fn interpolate(
    inten: *const c_double,
    qx: *const c_double,
    qy: *const c_double,
    ndat: c_int,
    xs: c_double,
    xdel: c_double,
    nx: c_int,
    xhw: c_double,
    ys: c_double,
    ydel: c_double,
    ny: c_int,
    yhw: c_double,
) -> Result<Grid<f64>, BoxInterpError> {
    let n = count(ndat, "ndat")?;
    let nx = count(nx, "nx")?;
    let ny = count(ny, "ny")?;

    let inten = sample_slice(inten, n, "inten")?;
    let qx = sample_slice(qx, n, "qx")?;
    let qy = sample_slice(qy, n, "qy")?;

    resample(inten, qx, qy, xs, xdel, nx, xhw, ys, ydel, ny, yhw)
}

// ============================================================================
// Exported functions
// ============================================================================

/// Average `ndat` scattered samples onto an `nx * ny` grid.
///
/// Returns a row-major grid of `nx * ny` doubles, or NULL when an argument is
/// invalid or the allocation fails. The result must be released with
/// `box_interpolation_free`.
///
/// # Safety
/// `inten`, `qx` and `qy` must each point to `ndat` readable doubles
/// (they may be NULL when `ndat` is 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn box_interpolation(
    inten: *const c_double,
    qx: *const c_double,
    qy: *const c_double,
    ndat: c_int,
    xs: c_double,
    xdel: c_double,
    nx: c_int,
    xhw: c_double,
    ys: c_double,
    ydel: c_double,
    ny: c_int,
    yhw: c_double,
) -> *mut c_double {
    match interpolate(inten, qx, qy, ndat, xs, xdel, nx, xhw, ys, ydel, ny, yhw) {
        Ok(grid) => {
            let data = grid_to_ptr(grid.as_slice());
            if data.is_null() {
                warn!(cells = grid.len(), "box_interpolation could not allocate its result");
            }
            data
        }
        Err(e) => {
            warn!(error = %e, "box_interpolation rejected its arguments");
            ptr::null_mut()
        }
    }
}

/// Free a grid returned by `box_interpolation`.
///
/// # Safety
/// `result` must be NULL or a pointer returned by `box_interpolation` that
/// has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn box_interpolation_free(result: *mut c_double) {
    if !result.is_null() {
        free_grid_ptr(result);
    }
}

/// Like `box_interpolation`, but reports the grid shape and an error message.
///
/// # Safety
/// Same requirements as `box_interpolation`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn box_interpolation_checked(
    inten: *const c_double,
    qx: *const c_double,
    qy: *const c_double,
    ndat: c_int,
    xs: c_double,
    xdel: c_double,
    nx: c_int,
    xhw: c_double,
    ys: c_double,
    ydel: c_double,
    ny: c_int,
    yhw: c_double,
) -> BoxGridResult {
    let grid = match interpolate(inten, qx, qy, ndat, xs, xdel, nx, xhw, ys, ydel, ny, yhw) {
        Ok(grid) => grid,
        Err(e) => return error_result(&e.to_string()),
    };

    let data = grid_to_ptr(grid.as_slice());
    if data.is_null() {
        warn!(cells = grid.len(), "box_interpolation_checked could not allocate its result");
        return error_result(&BoxInterpError::OutOfMemory { cells: grid.len() }.to_string());
    }

    BoxGridResult {
        data,
        len: grid.len() as c_ulong,
        x_count: nx,
        y_count: ny,
        error: ptr::null_mut(),
    }
}

/// Free the buffers owned by a `BoxGridResult`.
///
/// # Safety
/// `result` must be NULL or point to a result from `box_interpolation_checked`
/// whose buffers have not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn box_grid_free_result(result: *mut BoxGridResult) {
    if result.is_null() {
        return;
    }

    let r = &mut *result;
    if !r.data.is_null() {
        free_grid_ptr(r.data);
        r.data = ptr::null_mut();
    }
    if !r.error.is_null() {
        let _ = CString::from_raw(r.error);
        r.error = ptr::null_mut();
    }
    r.len = 0;
}

/// Size in bytes of the header that precedes every grid.
///
/// Exposed for callers that wrap grids in their own allocator bookkeeping.
#[unsafe(no_mangle)]
pub extern "C" fn box_interpolation_header_size() -> c_ulong {
    grid_layout(0).map_or(mem::size_of::<usize>(), |(_, offset)| offset) as c_ulong
}
