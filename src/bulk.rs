//! Block copy, fill and zero primitives.
//!
//! The underlying `memmove`/`memset` style primitives are only asked to
//! handle up to [`MAX_CHUNK_BYTES`] bytes per call. Longer operations are
//! split into maximum-sized chunks followed by a remainder, which lets a span
//! with a pointer-width length be processed by primitives that take a 32-bit
//! length.

use crate::PlainData;
use std::{
    mem::{needs_drop, size_of},
    ptr,
};
use tracing::trace;

/// Largest number of bytes handed to a single copy or fill primitive.
pub const MAX_CHUNK_BYTES: usize = u32::MAX as usize;

/// Copies `count` elements from `src` to `dst`. The regions may overlap; the
/// result is as if `src` were read in full before `dst` is written.
///
/// # Safety
///
/// - `src` must be valid for reads of `count` elements.
/// - `dst` must be valid for writes of `count` elements.
/// - Both pointers must be aligned for `T`.
#[inline]
pub unsafe fn copy<T>(dst: *mut T, src: *const T, count: usize)
where
    T: Copy,
{
    // SAFETY: Forwarded from the caller. The byte length cannot overflow
    // because both regions are valid for `count` elements.
    unsafe { copy_bytes(dst.cast(), src.cast(), count * size_of::<T>()) }
}

/// Copies `len` bytes from `src` to `dst` with `memmove` semantics.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` valid for writes of `len` bytes.
#[inline]
pub unsafe fn copy_bytes(dst: *mut u8, src: *const u8, len: usize) {
    // SAFETY: Forwarded from the caller.
    unsafe { copy_bytes_chunked(dst, src, len, MAX_CHUNK_BYTES) }
}

/// [`copy_bytes`] with an explicit chunk size.
///
/// When the destination starts above the source the chunks are processed
/// from the back, otherwise from the front, so an overlapping source is never
/// overwritten before it has been read.
///
/// # Safety
///
/// As for [`copy_bytes`], and `chunk > 0`.
pub(crate) unsafe fn copy_bytes_chunked(dst: *mut u8, src: *const u8, len: usize, chunk: usize) {
    debug_assert!(chunk > 0);
    if len <= chunk {
        // SAFETY: Forwarded from the caller.
        unsafe { ptr::copy(src, dst, len) };
        return;
    }

    trace!(bytes = len, chunks = len.div_ceil(chunk), "chunked block copy");
    if dst.cast_const() <= src {
        let mut offset = 0;
        while offset < len {
            let n = chunk.min(len - offset);
            // SAFETY: offset + n <= len, so both ranges are in bounds.
            unsafe { ptr::copy(src.add(offset), dst.add(offset), n) };
            offset += n;
        }
    } else {
        let mut remaining = len;
        while remaining > 0 {
            let n = chunk.min(remaining);
            remaining -= n;
            // SAFETY: remaining + n <= len, so both ranges are in bounds.
            unsafe { ptr::copy(src.add(remaining), dst.add(remaining), n) };
        }
    }
}

/// Sets `len` bytes starting at `dst` to `byte`.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` bytes.
#[inline]
pub unsafe fn fill_bytes(dst: *mut u8, byte: u8, len: usize) {
    // SAFETY: Forwarded from the caller.
    unsafe { fill_bytes_chunked(dst, byte, len, MAX_CHUNK_BYTES) }
}

/// [`fill_bytes`] with an explicit chunk size.
///
/// # Safety
///
/// As for [`fill_bytes`], and `chunk > 0`.
pub(crate) unsafe fn fill_bytes_chunked(dst: *mut u8, byte: u8, len: usize, chunk: usize) {
    debug_assert!(chunk > 0);
    if len > chunk {
        trace!(bytes = len, chunks = len.div_ceil(chunk), "chunked block fill");
    }
    let mut offset = 0;
    while offset < len {
        let n = chunk.min(len - offset);
        // SAFETY: offset + n <= len
        unsafe { ptr::write_bytes(dst.add(offset), byte, n) };
        offset += n;
    }
}

/// Assigns `value` to each of the `count` initialized elements at `dst`.
///
/// Single-byte types without drop glue are written once and then replicated
/// with block copies; their `Clone` implementation is not invoked. Other
/// types are assigned one element at a time, dropping the previous values.
///
/// # Safety
///
/// `dst` must be valid for reads and writes of `count` initialized, aligned
/// elements.
pub unsafe fn fill<T>(dst: *mut T, count: usize, value: T)
where
    T: Clone,
{
    if size_of::<T>() == 1 && !needs_drop::<T>() {
        // SAFETY: Forwarded from the caller; count elements are count bytes.
        unsafe { replicate_first(dst.cast(), value, count, MAX_CHUNK_BYTES) };
        return;
    }

    let Some(last) = count.checked_sub(1) else {
        return;
    };
    for i in 0..last {
        // SAFETY: i < count
        unsafe { *dst.add(i) = value.clone() };
    }
    // SAFETY: last < count
    unsafe { *dst.add(last) = value };
}

/// Writes `value` to the first of `len` one-byte slots at `dst` and copies it
/// across the rest, doubling the filled prefix each step. The value is never
/// read as a `u8`, so uninitialized bytes are carried over unchanged.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` bytes, `T` must be one byte wide
/// without drop glue, and `chunk > 0`.
unsafe fn replicate_first<T>(dst: *mut u8, value: T, len: usize, chunk: usize) {
    debug_assert!(size_of::<T>() == 1 && chunk > 0);
    if len == 0 {
        return;
    }
    // SAFETY: len > 0, and T has no drop glue so nothing is leaked.
    unsafe { dst.cast::<T>().write(value) };
    if len > chunk {
        trace!(bytes = len, chunks = len.div_ceil(chunk), "chunked block fill");
    }
    let mut filled = 1;
    while filled < len {
        let n = filled.min(len - filled).min(chunk);
        // SAFETY: [0, filled) is written and [filled, filled + n) is in
        // bounds; n <= filled keeps the two ranges apart.
        unsafe { ptr::copy_nonoverlapping(dst, dst.add(filled), n) };
        filled += n;
    }
}

/// Sets every byte of `count` elements at `dst` to zero.
///
/// # Safety
///
/// `dst` must be valid for writes of `count` aligned elements.
#[inline]
pub unsafe fn zero<T>(dst: *mut T, count: usize)
where
    T: PlainData,
{
    // SAFETY: Forwarded from the caller. All-zero is a valid T.
    unsafe { fill_bytes(dst.cast(), 0, count * size_of::<T>()) }
}

/// Replaces each of the `count` elements at `dst` with `T::default()`,
/// dropping the previous values.
///
/// This is the clearing path for element types that may own or refer to
/// other allocations, for which an all-zero bit pattern is not a valid value.
///
/// # Safety
///
/// `dst` must be valid for reads and writes of `count` initialized, aligned
/// elements.
pub unsafe fn reset<T>(dst: *mut T, count: usize)
where
    T: Default,
{
    for i in 0..count {
        // SAFETY: i < count
        unsafe { *dst.add(i) = T::default() };
    }
}
