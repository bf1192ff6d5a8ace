use crate::{SpanError, error::check_range};
use std::{
    fmt::{self, Debug, Formatter},
    mem::{align_of, needs_drop, size_of},
    ptr::NonNull,
};

/// The address and element count that every span is built on.
///
/// A `RawSpan` is a pointer to the first element of a region packed with the
/// number of elements in it. It neither owns nor borrows the memory: the
/// lifetime is supplied by the span types that wrap it, and the allocator
/// that produced the region remains its owner.
///
/// # Invariants
///
/// - When `len == 0` the pointer may dangle and must not be dereferenced.
/// - `len * size_of::<T>()` does not exceed `isize::MAX`.
/// - The pointer is aligned for `T` and non-null.
pub struct RawSpan<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> Clone for RawSpan<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawSpan<T> {}

impl<T> Debug for RawSpan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSpan")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> RawSpan<T> {
    /// An empty span with a dangling pointer.
    pub const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Binds to the first element of `slice`.
    ///
    /// An empty slice yields an empty span rather than an error. Its pointer
    /// is whatever dangling address the slice carried.
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            ptr: NonNull::from(slice).cast(),
            len: slice.len(),
        }
    }

    /// Binds to the first element of `slice` for writing.
    pub fn from_slice_mut(slice: &mut [T]) -> Self {
        let len = slice.len();
        Self {
            ptr: NonNull::from(slice).cast(),
            len,
        }
    }

    /// Binds to `len` elements of `slice` starting at `start`.
    pub fn from_range(slice: &[T], start: usize, len: usize) -> Result<Self, SpanError> {
        check_range(start, len, slice.len())?;
        // SAFETY: The range was just checked against the slice bounds.
        Ok(unsafe { Self::from_slice(slice).offset(start, len) })
    }

    /// Binds to `len` elements of a mutable `slice` starting at `start`.
    pub fn from_range_mut(slice: &mut [T], start: usize, len: usize) -> Result<Self, SpanError> {
        check_range(start, len, slice.len())?;
        // SAFETY: The range was just checked against the slice bounds.
        Ok(unsafe { Self::from_slice_mut(slice).offset(start, len) })
    }

    /// Binds to `len` elements starting at `ptr`.
    ///
    /// An empty span keeps `ptr` as its address when it is non-null and
    /// aligned, and is dangling otherwise.
    ///
    /// Element types with drop glue are rejected: memory reached through a
    /// bare address has no owner that would run their destructors, and
    /// overwriting such elements through a span would leak or double-drop
    /// whatever they refer to.
    ///
    /// # Errors
    ///
    /// - [`SpanError::UnsupportedType`] if `T` needs to be dropped.
    /// - [`SpanError::NullPointer`] if `ptr` is null and `len > 0`.
    /// - [`SpanError::Misaligned`] if `ptr` is not aligned for `T` and
    ///   `len > 0`.
    /// - [`SpanError::LengthOverflow`] if the byte length exceeds
    ///   `isize::MAX`.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must point to `len` consecutive initialized
    /// values of `T` that stay valid, and are not mutated elsewhere in a way
    /// that conflicts with the span built on top, for as long as that span
    /// is used.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Result<Self, SpanError> {
        if needs_drop::<T>() {
            return Err(SpanError::UnsupportedType {
                type_name: std::any::type_name::<T>(),
            });
        }
        let Some(ptr) = NonNull::new(ptr) else {
            return match len {
                0 => Ok(Self::dangling()),
                _ => Err(SpanError::NullPointer),
            };
        };
        let addr = ptr.as_ptr() as usize;
        if addr % align_of::<T>() != 0 {
            return match len {
                0 => Ok(Self::dangling()),
                _ => Err(SpanError::Misaligned {
                    addr,
                    align: align_of::<T>(),
                }),
            };
        }
        let size = size_of::<T>();
        match len.checked_mul(size) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(Self { ptr, len }),
            _ => Err(SpanError::LengthOverflow { len, size }),
        }
    }

    /// Advances the span by `start` elements and shortens it to `len`.
    ///
    /// # Safety
    ///
    /// `start + len <= self.len()` must hold.
    #[inline]
    pub(crate) unsafe fn offset(self, start: usize, len: usize) -> Self {
        debug_assert!(check_range(start, len, self.len).is_ok());
        Self {
            // SAFETY: start <= self.len, so the result stays inside the region
            // or one past its end.
            ptr: unsafe { self.ptr.add(start) },
            len,
        }
    }

    /// Reinterprets the span as `len` elements of `U` at the same address.
    ///
    /// # Safety
    ///
    /// The region must hold `len` valid, aligned values of `U`.
    #[inline]
    pub(crate) unsafe fn cast<U>(self, len: usize) -> RawSpan<U> {
        RawSpan {
            ptr: self.ptr.cast(),
            len,
        }
    }

    /// Number of elements in the region.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the region has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first element. Dangling when the span is empty.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of bytes covered by the region.
    #[inline]
    pub const fn byte_len(&self) -> usize {
        // Cannot overflow per the type invariants.
        self.len * size_of::<T>()
    }

    /// Pointer to element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()` must hold.
    #[inline]
    pub(crate) unsafe fn at(&self, index: usize) -> *mut T {
        debug_assert!(index < self.len);
        // SAFETY: Caller guarantees index is in bounds.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Views the region as a slice with an unbounded lifetime.
    ///
    /// # Safety
    ///
    /// The caller must bound the lifetime to that of the span that owns this
    /// value and respect the aliasing rules of that span.
    #[inline]
    pub(crate) unsafe fn as_slice<'a>(self) -> &'a [T] {
        // SAFETY: The pointer is non-null, aligned, and covers len elements.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Views the region as a mutable slice with an unbounded lifetime.
    ///
    /// # Safety
    ///
    /// As for [`RawSpan::as_slice`], and no other reference to the region may
    /// be live while the result is used.
    #[inline]
    pub(crate) unsafe fn as_mut_slice<'a>(self) -> &'a mut [T] {
        // SAFETY: The pointer is non-null, aligned, and covers len elements.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Whether two spans start at the same address and have the same length.
    #[inline]
    pub fn same_region(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.len == other.len
    }
}

// SAFETY: RawSpan is a plain address; thread safety is decided by the span
// types that wrap it.
unsafe impl<T> Send for RawSpan<T> where T: Send {}
// SAFETY: As above.
unsafe impl<T> Sync for RawSpan<T> where T: Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_is_unbound() {
        let raw = RawSpan::<u32>::from_slice(&[]);
        assert!(raw.is_empty());
        assert_eq!(raw.byte_len(), 0);
        assert!(RawSpan::<u32>::dangling().same_region(&RawSpan::dangling()));
    }

    #[test]
    fn range_is_checked() {
        let data = [1u8, 2, 3, 4];
        let raw = RawSpan::from_range(&data, 1, 2).unwrap();
        assert_eq!(raw.len(), 2);
        // SAFETY: raw covers data[1..3].
        assert_eq!(unsafe { raw.as_slice() }, &[2, 3]);
        assert_eq!(
            RawSpan::from_range(&data, 3, 2).unwrap_err(),
            SpanError::RangeOutOfBounds {
                start: 3,
                len: 2,
                available: 4
            }
        );
        assert!(RawSpan::from_range(&data, usize::MAX, usize::MAX).is_err());
        assert!(RawSpan::from_range(&data, 4, 0).unwrap().is_empty());
    }

    #[test]
    fn raw_rejects_drop_types() {
        let mut strings = vec![String::new()];
        // SAFETY: Rejected before the pointer is used.
        let err = unsafe { RawSpan::from_raw_parts(strings.as_mut_ptr(), 1) }.unwrap_err();
        assert!(matches!(err, SpanError::UnsupportedType { .. }));
    }

    #[test]
    fn raw_rejects_null_and_overflow() {
        // SAFETY: Rejected before the pointer is used.
        let err = unsafe { RawSpan::<u64>::from_raw_parts(std::ptr::null_mut(), 1) }.unwrap_err();
        assert_eq!(err, SpanError::NullPointer);

        // SAFETY: A null pointer with no elements is never dereferenced.
        let empty = unsafe { RawSpan::<u64>::from_raw_parts(std::ptr::null_mut(), 0) }.unwrap();
        assert!(empty.is_empty());

        let mut value = 0u64;
        // SAFETY: Rejected before the pointer is used.
        let err = unsafe { RawSpan::from_raw_parts(&raw mut value, usize::MAX / 4) }.unwrap_err();
        assert_eq!(
            err,
            SpanError::LengthOverflow {
                len: usize::MAX / 4,
                size: 8
            }
        );
    }

    #[test]
    fn empty_raw_keeps_address() {
        let mut words = [1u32, 2, 3];
        let end = RawSpan::from_range(&words, 3, 0).unwrap();
        // SAFETY: No elements are covered.
        let raw = unsafe { RawSpan::from_raw_parts(words.as_mut_ptr().wrapping_add(3), 0) }.unwrap();
        assert!(raw.same_region(&end));
        assert!(!raw.same_region(&RawSpan::dangling()));

        let ptr = words.as_mut_ptr().cast::<u8>().wrapping_add(1).cast::<u32>();
        // SAFETY: As above.
        let raw = unsafe { RawSpan::from_raw_parts(ptr, 0) }.unwrap();
        assert!(raw.same_region(&RawSpan::dangling()));
    }

    #[test]
    fn raw_rejects_misaligned() {
        let mut words = [0u32; 2];
        let ptr = words.as_mut_ptr().cast::<u8>().wrapping_add(1).cast::<u32>();
        // SAFETY: Rejected before the pointer is used.
        let err = unsafe { RawSpan::from_raw_parts(ptr, 1) }.unwrap_err();
        assert!(matches!(err, SpanError::Misaligned { align: 4, .. }));
    }

    #[test]
    fn offset_moves_base() {
        let data = [10u16, 20, 30];
        let raw = RawSpan::from_slice(&data);
        // SAFETY: 1 + 2 <= 3
        let tail = unsafe { raw.offset(1, 2) };
        // SAFETY: tail covers data[1..].
        assert_eq!(unsafe { *tail.at(0) }, 20);
        assert_eq!(tail.byte_len(), 4);
        assert!(!tail.same_region(&raw));
        // SAFETY: 0 + 3 <= 3
        assert!(unsafe { raw.offset(0, 3) }.same_region(&raw));
    }
}
