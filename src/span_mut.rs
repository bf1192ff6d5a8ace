use crate::{
    ChunksExact, Iter, IterMut, LargeSpan, PlainData, RawSpan, SpanError, SpanIndex, bulk,
    error::{check_range, fail},
    iter_raw::IterRaw,
    narrow::check_native_len,
    span::cast_len,
};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// A mutable view over a contiguous region of `T` with a pointer-width
/// length.
///
/// A `LargeSpanMut` is to a region what `&mut [T]` is to a slice. It applies
/// the same borrowing rules as a mutable reference: while it is alive, the
/// memory it covers can only be reached through it. Methods that hand out
/// subspans either reborrow the span (`slice`, `split_at_mut`) or consume it
/// (`into_slice`, `into_split_at`) to keep the full lifetime `'a`.
///
/// Converting into a read-only [`LargeSpan`] is free.
///
/// # Examples
///
/// ```
/// # use large_span::LargeSpanMut;
/// let mut data = [1, 2, 3, 4, 5];
/// let mut span = LargeSpanMut::new(&mut data);
/// span[0] = 10;
/// span.slice_from(3).fill(0);
/// assert_eq!(data, [10, 2, 3, 0, 0]);
/// ```
pub struct LargeSpanMut<'a, T> {
    pub(crate) raw: RawSpan<T>,
    pub(crate) marker: PhantomData<&'a mut T>,
}

// SAFETY: A LargeSpanMut behaves like &'a mut [T].
unsafe impl<T> Send for LargeSpanMut<'_, T> where T: Send {}
// SAFETY: A LargeSpanMut behaves like &'a mut [T].
unsafe impl<T> Sync for LargeSpanMut<'_, T> where T: Sync {}

impl<'a, T> LargeSpanMut<'a, T> {
    /// Constructs an empty span.
    pub const fn empty() -> Self {
        Self {
            raw: RawSpan::dangling(),
            marker: PhantomData,
        }
    }

    /// Constructs a span over all of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        // SAFETY: The raw span covers the exclusively borrowed slice.
        unsafe { Self::with_raw(RawSpan::from_slice_mut(slice)) }
    }

    /// Constructs a span over `len` elements of `slice` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] if the range does not fit in
    /// `slice`.
    pub fn from_range(slice: &'a mut [T], start: usize, len: usize) -> Result<Self, SpanError> {
        let raw = RawSpan::from_range_mut(slice, start, len)?;
        // SAFETY: The raw span covers part of the exclusively borrowed slice.
        Ok(unsafe { Self::with_raw(raw) })
    }

    /// Constructs a span over `len` elements starting at `ptr`.
    ///
    /// # Errors
    ///
    /// See [`RawSpan::from_raw_parts`]. In particular, element types with
    /// drop glue are rejected with [`SpanError::UnsupportedType`].
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must point to `len` initialized values of `T`
    /// that remain valid for `'a` and are not read or written during `'a`
    /// except through spans created with `from_raw_parts`. Spans created
    /// this way may overlap; copies between them keep `memmove` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::{LargeSpan, LargeSpanMut};
    /// let mut data = [1, 2, 3, 4, 5];
    /// let ptr = data.as_mut_ptr();
    /// // SAFETY: data outlives both spans and is only touched through them.
    /// let (src, mut dst) = unsafe {
    ///     (
    ///         LargeSpan::from_raw_parts(ptr, 4)?,
    ///         LargeSpanMut::from_raw_parts(ptr.add(1), 4)?,
    ///     )
    /// };
    /// src.copy_to(&mut dst)?;
    /// assert_eq!(data, [1, 1, 2, 3, 4]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Result<Self, SpanError> {
        // SAFETY: Forwarded from the caller.
        let raw = unsafe { RawSpan::from_raw_parts(ptr, len) }?;
        // SAFETY: Forwarded from the caller.
        Ok(unsafe { Self::with_raw(raw) })
    }

    /// Wraps a raw span.
    ///
    /// # Safety
    ///
    /// The region must be valid for reads and writes for `'a` and not
    /// otherwise accessed during that time.
    #[inline]
    pub(crate) unsafe fn with_raw(raw: RawSpan<T>) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// The address and length this span is built on.
    #[inline]
    pub fn raw(&self) -> RawSpan<T> {
        self.raw
    }

    /// Returns the number of elements in the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the span contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr().cast_const()
    }

    /// Returns a mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_ptr()
    }

    /// Borrows the span for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> LargeSpanMut<'_, T> {
        // SAFETY: self is exclusively borrowed for the new lifetime.
        unsafe { LargeSpanMut::with_raw(self.raw) }
    }

    /// Returns a read-only view of the same memory.
    #[inline]
    pub fn as_span(&self) -> LargeSpan<'_, T> {
        // SAFETY: self is borrowed for the new lifetime.
        unsafe { LargeSpan::with_raw(self.raw) }
    }

    /// Converts into a read-only view for the full lifetime.
    #[inline]
    pub fn into_span(self) -> LargeSpan<'a, T> {
        // SAFETY: self is consumed, so no mutable access remains.
        unsafe { LargeSpan::with_raw(self.raw) }
    }

    /// Returns a reference to an element or subspan, or `None` if out of
    /// bounds.
    #[inline]
    pub fn get<I>(&self, index: I) -> Option<I::Output<'_>>
    where
        I: SpanIndex<T>,
    {
        index.get(self.as_span())
    }

    /// Returns a mutable reference to an element or subspan, or `None` if
    /// out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 3];
    /// let mut span = LargeSpanMut::new(&mut data);
    /// if let Some(elem) = span.get_mut(1) {
    ///     *elem = 42;
    /// }
    /// if let Some(mut tail) = span.get_mut(2..) {
    ///     tail.fill(7);
    /// }
    /// assert!(span.get_mut(3).is_none());
    /// assert_eq!(data, [1, 42, 7]);
    /// ```
    #[inline]
    pub fn get_mut<I>(&mut self, index: I) -> Option<I::OutputMut<'_>>
    where
        I: SpanIndex<T>,
    {
        index.get_mut(self.reborrow())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, SpanError> {
        self.as_span().try_get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, SpanError> {
        let len = self.len();
        self.get_mut(index)
            .ok_or(SpanError::IndexOutOfBounds { index, len })
    }

    /// Returns the first element, or `None` if the span is empty.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the first element mutably, or `None` if the span is empty.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the last element, or `None` if the span is empty.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns the last element mutably, or `None` if the span is empty.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Consumes the span and returns the subspan of `len` elements starting
    /// at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] unless `start + len <=
    /// self.len()`.
    #[inline]
    pub fn try_into_slice(self, start: usize, len: usize) -> Result<Self, SpanError> {
        check_range(start, len, self.len())?;
        // SAFETY: The range was just checked and self is consumed.
        Ok(unsafe { Self::with_raw(self.raw.offset(start, len)) })
    }

    /// Reborrows the subspan of `len` elements starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] unless `start + len <=
    /// self.len()`.
    #[inline]
    pub fn try_slice(&mut self, start: usize, len: usize) -> Result<LargeSpanMut<'_, T>, SpanError> {
        self.reborrow().try_into_slice(start, len)
    }

    /// Reborrows the subspan from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] if `start > self.len()`.
    #[inline]
    pub fn try_slice_from(&mut self, start: usize) -> Result<LargeSpanMut<'_, T>, SpanError> {
        let available = self.len();
        let len = available.checked_sub(start).ok_or(SpanError::RangeOutOfBounds {
            start,
            len: 0,
            available,
        })?;
        self.try_slice(start, len)
    }

    /// Reborrows the subspan of `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len > self.len()`.
    #[inline]
    #[track_caller]
    pub fn slice(&mut self, start: usize, len: usize) -> LargeSpanMut<'_, T> {
        match self.try_slice(start, len) {
            Ok(span) => span,
            Err(e) => fail(e),
        }
    }

    /// Reborrows the subspan from `start` to the end.
    ///
    /// # Panics
    ///
    /// Panics if `start > self.len()`.
    #[inline]
    #[track_caller]
    pub fn slice_from(&mut self, start: usize) -> LargeSpanMut<'_, T> {
        match self.try_slice_from(start) {
            Ok(span) => span,
            Err(e) => fail(e),
        }
    }

    /// Consumes the span and returns the subspan of `len` elements starting
    /// at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len > self.len()`.
    #[inline]
    #[track_caller]
    pub fn into_slice(self, start: usize, len: usize) -> Self {
        match self.try_into_slice(start, len) {
            Ok(span) => span,
            Err(e) => fail(e),
        }
    }

    /// Divides the span in two mutable halves at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[track_caller]
    pub fn split_at_mut(&mut self, mid: usize) -> (LargeSpanMut<'_, T>, LargeSpanMut<'_, T>) {
        self.reborrow().into_split_at(mid)
    }

    /// Consumes the span and divides it in two at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 3, 4];
    /// let (mut head, tail) = LargeSpanMut::new(&mut data).into_split_at(2);
    /// tail.as_span().copy_to(&mut head)?;
    /// assert_eq!(data, [3, 4, 3, 4]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    #[track_caller]
    pub fn into_split_at(self, mid: usize) -> (Self, Self) {
        if mid > self.len() {
            fail(SpanError::RangeOutOfBounds {
                start: mid,
                len: 0,
                available: self.len(),
            });
        }
        // SAFETY: mid <= len, and the two halves do not overlap.
        unsafe {
            (
                Self::with_raw(self.raw.offset(0, mid)),
                Self::with_raw(self.raw.offset(mid, self.len() - mid)),
            )
        }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_span().iter()
    }

    /// Returns an iterator that allows modifying each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 4];
    /// for elem in LargeSpanMut::new(&mut data).iter_mut() {
    ///     *elem *= 2;
    /// }
    /// assert_eq!(data, [2, 4, 8]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.reborrow().into_iter()
    }

    /// Returns an iterator over non-overlapping read-only subspans of
    /// `chunk_size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[track_caller]
    pub fn chunks_exact(&self, chunk_size: usize) -> ChunksExact<'_, T> {
        self.as_span().chunks_exact(chunk_size)
    }

    /// Assigns `value` to every element.
    ///
    /// Single-byte element types without drop glue are written once and
    /// block-copied over the rest; their `Clone` implementation is not called.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        let len = self.len();
        // SAFETY: The span holds len initialized elements.
        unsafe { bulk::fill(self.as_mut_ptr(), len, value) }
    }

    /// Replaces every element with `T::default()`, dropping the old values.
    ///
    /// This is the clearing path for any element type. For plain data,
    /// [`zero`](LargeSpanMut::zero) clears with a raw byte fill instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut names = vec![String::from("a"), String::from("b")];
    /// LargeSpanMut::new(&mut names).clear();
    /// assert_eq!(names, ["", ""]);
    /// ```
    pub fn clear(&mut self)
    where
        T: Default,
    {
        let len = self.len();
        // SAFETY: The span holds len initialized elements.
        unsafe { bulk::reset(self.as_mut_ptr(), len) }
    }

    /// Sets every byte of the span to zero.
    pub fn zero(&mut self)
    where
        T: PlainData,
    {
        let len = self.len();
        // SAFETY: The span holds len writable elements.
        unsafe { bulk::zero(self.as_mut_ptr(), len) }
    }

    /// Copies every element into the front of `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::DestinationTooShort`] if `dest` is shorter than
    /// `self`.
    pub fn copy_to(&self, dest: &mut LargeSpanMut<'_, T>) -> Result<(), SpanError>
    where
        T: Copy,
    {
        self.as_span().copy_to(dest)
    }

    /// Like [`copy_to`](LargeSpanMut::copy_to), but reports a short
    /// destination by returning `false`.
    pub fn try_copy_to(&self, dest: &mut LargeSpanMut<'_, T>) -> bool
    where
        T: Copy,
    {
        self.as_span().try_copy_to(dest)
    }

    /// Copies `len` elements starting at `src` to the position `dest` within
    /// the same span. The ranges may overlap.
    ///
    /// # Panics
    ///
    /// Panics if either range does not fit in the span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 3, 4, 5];
    /// LargeSpanMut::new(&mut data).copy_within(0, 4, 1);
    /// assert_eq!(data, [1, 1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn copy_within(&mut self, src: usize, len: usize, dest: usize)
    where
        T: Copy,
    {
        if let Err(e) = check_range(src, len, self.len()) {
            fail(e);
        }
        if let Err(e) = check_range(dest, len, self.len()) {
            fail(e);
        }
        // SAFETY: Both ranges were checked and bulk::copy tolerates overlap.
        unsafe {
            let to = self.raw.offset(dest, len);
            let from = self.raw.offset(src, len);
            bulk::copy(to.as_ptr(), from.as_ptr(), len);
        }
    }

    /// Copies the elements into a newly allocated `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::ArrayTooLarge`] if storage for `len` elements
    /// cannot be allocated.
    pub fn to_vec(&self) -> Result<Vec<T>, SpanError>
    where
        T: Clone,
    {
        self.as_span().to_vec()
    }

    /// Compares elements pairwise with `PartialEq`.
    pub fn sequence_eq(&self, other: LargeSpan<'_, T>) -> bool
    where
        T: PartialEq,
    {
        self.as_span().sequence_eq(other)
    }

    /// Compares contents: first by length, then byte by byte.
    pub fn compare_memory(&self, other: LargeSpan<'_, T>) -> Ordering
    where
        T: PlainData,
    {
        self.as_span().compare_memory(other)
    }

    /// Views the same memory as bytes.
    pub fn as_bytes(&self) -> LargeSpan<'_, u8>
    where
        T: PlainData,
    {
        self.as_span().as_bytes()
    }

    /// Views the same memory as mutable bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpanMut;
    /// let mut data = [0u16; 2];
    /// LargeSpanMut::new(&mut data).as_bytes_mut().fill(0xFF);
    /// assert_eq!(data, [0xFFFF; 2]);
    /// ```
    pub fn as_bytes_mut(&mut self) -> LargeSpanMut<'_, u8>
    where
        T: PlainData,
    {
        let len = self.raw.byte_len();
        // SAFETY: Every bit pattern is a valid T, so any bytes written keep
        // the elements valid.
        unsafe { LargeSpanMut::with_raw(self.raw.cast(len)) }
    }

    /// Reinterprets the span as elements of another plain-data type.
    ///
    /// # Errors
    ///
    /// See [`LargeSpan::cast`].
    pub fn cast<U>(&self) -> Result<LargeSpan<'_, U>, SpanError>
    where
        T: PlainData,
        U: PlainData,
    {
        self.as_span().cast()
    }

    /// Reinterprets the span as mutable elements of another plain-data type.
    ///
    /// # Errors
    ///
    /// See [`LargeSpan::cast`].
    pub fn cast_mut<U>(&mut self) -> Result<LargeSpanMut<'_, U>, SpanError>
    where
        T: PlainData,
        U: PlainData,
    {
        let len = cast_len::<T, U>(self.raw)?;
        // SAFETY: The region holds len aligned values of U, and every bit
        // pattern is valid for both T and U.
        Ok(unsafe { LargeSpanMut::with_raw(self.raw.cast(len)) })
    }

    /// Narrows to a native slice.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::UnsupportedSize`] if the span is longer than
    /// [`NATIVE_MAX_LEN`](crate::NATIVE_MAX_LEN).
    pub fn try_as_slice(&self) -> Result<&[T], SpanError> {
        self.as_span().try_as_slice()
    }

    /// Narrows to a native mutable slice.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::UnsupportedSize`] if the span is longer than
    /// [`NATIVE_MAX_LEN`](crate::NATIVE_MAX_LEN).
    pub fn try_as_mut_slice(&mut self) -> Result<&mut [T], SpanError> {
        self.reborrow().try_into_mut_slice()
    }

    /// Consumes the span and narrows it to a native mutable slice.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::UnsupportedSize`] if the span is longer than
    /// [`NATIVE_MAX_LEN`](crate::NATIVE_MAX_LEN).
    pub fn try_into_mut_slice(self) -> Result<&'a mut [T], SpanError> {
        check_native_len(self.len())?;
        // SAFETY: self is consumed, so the slice is the only access for 'a.
        Ok(unsafe { self.raw.as_mut_slice() })
    }
}

impl<T> Index<usize> for LargeSpanMut<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len() {
            fail(SpanError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        // SAFETY: index < len
        unsafe { &*self.raw.at(index) }
    }
}

impl<T> IndexMut<usize> for LargeSpanMut<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len() {
            fail(SpanError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        // SAFETY: index < len, and self is borrowed mutably.
        unsafe { &mut *self.raw.at(index) }
    }
}

impl<'a, T> IntoIterator for LargeSpanMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            iter_raw: IterRaw::new(self.raw),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a LargeSpanMut<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LargeSpanMut<'_, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> From<LargeSpanMut<'a, T>> for LargeSpan<'a, T> {
    fn from(span: LargeSpanMut<'a, T>) -> Self {
        span.into_span()
    }
}

impl<T> Default for LargeSpanMut<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Debug for LargeSpanMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_span().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::mem::MaybeUninit;

    #[test]
    fn copy_to_then_back() {
        let mut a = [1, 2, 3];
        let mut b = [0, 0, 0];
        let mut sa = LargeSpanMut::new(&mut a);
        let mut sb = LargeSpanMut::new(&mut b);
        sa.copy_to(&mut sb).unwrap();
        assert_eq!(sb.to_vec(), Ok(vec![1, 2, 3]));
        sb.fill(9);
        sb.copy_to(&mut sa).unwrap();
        assert_eq!(a, [9, 9, 9]);
    }

    #[test]
    fn copy_to_short_destination() {
        let mut a = [1, 2, 3];
        let mut b = [0, 0];
        let sa = LargeSpanMut::new(&mut a);
        let mut sb = LargeSpanMut::new(&mut b);
        assert_eq!(
            sa.copy_to(&mut sb),
            Err(SpanError::DestinationTooShort {
                needed: 3,
                available: 2
            })
        );
        assert!(!sa.try_copy_to(&mut sb));
        assert_eq!(b, [0, 0]);
    }

    #[test]
    fn copy_into_longer_destination() {
        let a = [1, 2];
        let mut b = [0, 0, 0, 0];
        assert!(LargeSpan::new(&a).try_copy_to(&mut LargeSpanMut::new(&mut b)));
        assert_eq!(b, [1, 2, 0, 0]);
    }

    #[test]
    fn overlapping_raw_spans_copy_like_memmove() {
        let mut data = [1, 2, 3, 4, 5];
        let ptr = data.as_mut_ptr();
        // SAFETY: data outlives both spans and is only accessed through them.
        unsafe {
            let src = LargeSpan::from_raw_parts(ptr, 4).unwrap();
            let mut dst = LargeSpanMut::from_raw_parts(ptr.add(1), 4).unwrap();
            src.copy_to(&mut dst).unwrap();
        }
        assert_eq!(data, [1, 1, 2, 3, 4]);

        let mut data = [1, 2, 3, 4, 5];
        let ptr = data.as_mut_ptr();
        // SAFETY: As above.
        unsafe {
            let src = LargeSpan::from_raw_parts(ptr.add(1), 4).unwrap();
            let mut dst = LargeSpanMut::from_raw_parts(ptr, 4).unwrap();
            src.copy_to(&mut dst).unwrap();
        }
        assert_eq!(data, [2, 3, 4, 5, 5]);
    }

    #[test]
    fn copy_within_overlap() {
        let mut data = [1, 2, 3, 4, 5];
        LargeSpanMut::new(&mut data).copy_within(0, 4, 1);
        assert_eq!(data, [1, 1, 2, 3, 4]);
        LargeSpanMut::new(&mut data).copy_within(1, 4, 0);
        assert_eq!(data, [1, 2, 3, 4, 4]);
        LargeSpanMut::new(&mut data).copy_within(5, 0, 5);
        assert_eq!(data, [1, 2, 3, 4, 4]);
    }

    #[test]
    #[should_panic(expected = "range out of bounds")]
    fn copy_within_out_of_bounds() {
        let mut data = [1, 2, 3];
        LargeSpanMut::new(&mut data).copy_within(0, 2, 2);
    }

    #[test]
    fn fill_with_uninit_bytes() {
        let mut slots = [MaybeUninit::new(1u8); 4];
        LargeSpanMut::new(&mut slots).fill(MaybeUninit::uninit());
        let mut span = LargeSpanMut::new(&mut slots);
        span.slice_from(1).fill(MaybeUninit::new(7));
        // SAFETY: Slots 1.. were just written with an initialized byte.
        assert!(span.iter().skip(1).all(|b| unsafe { b.assume_init() } == 7));
    }

    #[test]
    fn fill_clear_zero() {
        let mut bytes = [1u8; 7];
        let mut span = LargeSpanMut::new(&mut bytes);
        span.fill(0x7F);
        assert!(span.iter().all(|&b| b == 0x7F));
        span.slice(2, 3).zero();
        assert_eq!(bytes, [0x7F, 0x7F, 0, 0, 0, 0x7F, 0x7F]);

        let mut floats = [1.5f64; 3];
        LargeSpanMut::new(&mut floats).zero();
        assert_eq!(floats, [0.0; 3]);

        let mut names = vec![String::from("x"); 3];
        let mut span = LargeSpanMut::new(&mut names);
        span.fill(String::from("y"));
        span.slice_from(1).clear();
        assert_eq!(names, ["y", "", ""]);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut data = [0u32; 4];
        let mut span = LargeSpanMut::new(&mut data);
        span[3] = 8;
        *span.first_mut().unwrap() = 1;
        *span.last_mut().unwrap() += 1;
        assert_eq!(span[0], 1);
        assert_eq!(*span.try_get(3).unwrap(), 9);
        assert!(span.try_get_mut(4).is_err());
        assert_eq!(data, [1, 0, 0, 9]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_mut_past_end() {
        let mut data = [0u32; 4];
        LargeSpanMut::new(&mut data)[4] = 1;
    }

    #[test]
    fn widening_is_free() {
        let mut data = [1, 2, 3];
        let span = LargeSpanMut::new(&mut data);
        let ptr = span.as_ptr();
        let read: LargeSpan<'_, i32> = span.into();
        assert_eq!(read.as_ptr(), ptr);
        assert_eq!(read.len(), 3);
    }

    #[test]
    fn split_halves_are_disjoint() {
        let mut data = [1, 2, 3, 4];
        let mut span = LargeSpanMut::new(&mut data);
        let (mut a, mut b) = span.split_at_mut(1);
        a.fill(0);
        b.fill(5);
        assert_eq!(data, [0, 5, 5, 5]);
    }

    #[test]
    fn cast_mut_writes_bytes() {
        let mut data = [0u32; 2];
        let mut span = LargeSpanMut::new(&mut data);
        let mut halves = span.cast_mut::<u16>().unwrap();
        assert_eq!(halves.len(), 4);
        halves.fill(0xFFFF);
        assert_eq!(data, [u32::MAX; 2]);
    }

    #[test]
    fn iter_mut_and_into_iter() {
        let mut data = [1, 2, 3];
        let mut span = LargeSpanMut::new(&mut data);
        for x in &mut span {
            *x += 1;
        }
        assert_eq!((&span).into_iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
        for x in span {
            *x *= 10;
        }
        assert_eq!(data, [20, 30, 40]);
    }

    proptest! {
        #[test]
        fn copy_round_trip_restores(values in proptest::collection::vec(any::<u16>(), 0..64)) {
            let mut a = values.clone();
            let mut b = vec![0u16; values.len()];
            let mut sa = LargeSpanMut::new(&mut a);
            let mut sb = LargeSpanMut::new(&mut b);
            sa.copy_to(&mut sb).unwrap();
            sa.zero();
            sb.copy_to(&mut sa).unwrap();
            prop_assert_eq!(a, values);
        }
    }
}
