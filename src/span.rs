use crate::{
    ChunksExact, Iter, LargeSpanMut, PlainData, RawSpan, SpanError, SpanIndex, bulk,
    error::{check_range, fail},
    iter_raw::IterRaw,
    narrow::check_native_len,
};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    mem::{align_of, size_of},
    ops::Index,
};

/// A read-only view over a contiguous region of `T` with a pointer-width
/// length.
///
/// A `LargeSpan` is to a region what `&[T]` is to a slice: it borrows the
/// memory for `'a`, never owns it, and cannot outlive the allocation it was
/// created from. It is `Copy`, and slicing it produces new spans over the same
/// memory without copying anything.
///
/// Equality with `==` compares the address and length of two spans, not
/// their contents. Use [`sequence_eq`] or [`compare_memory`] to compare
/// elements.
///
/// # Examples
///
/// ```
/// # use large_span::LargeSpan;
/// let data = [10, 20, 30];
/// let span = LargeSpan::new(&data);
/// assert_eq!(span[1], 20);
/// assert_eq!(span.slice_from(1)[0], 20);
/// assert_eq!(span.slice_from(1).len(), 2);
/// ```
///
/// [`sequence_eq`]: LargeSpan::sequence_eq
/// [`compare_memory`]: LargeSpan::compare_memory
pub struct LargeSpan<'a, T> {
    pub(crate) raw: RawSpan<T>,
    pub(crate) marker: PhantomData<&'a T>,
}

impl<T> Clone for LargeSpan<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LargeSpan<'_, T> {}

// SAFETY: A LargeSpan behaves like &'a [T].
unsafe impl<T> Send for LargeSpan<'_, T> where T: Sync {}
// SAFETY: A LargeSpan behaves like &'a [T].
unsafe impl<T> Sync for LargeSpan<'_, T> where T: Sync {}

impl<'a, T> LargeSpan<'a, T> {
    /// Constructs an empty span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let span = LargeSpan::<u8>::empty();
    /// assert!(span.is_empty());
    /// assert_eq!(span.len(), 0);
    /// ```
    pub const fn empty() -> Self {
        Self {
            raw: RawSpan::dangling(),
            marker: PhantomData,
        }
    }

    /// Constructs a span over all of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        // SAFETY: The raw span covers the borrowed slice.
        unsafe { Self::with_raw(RawSpan::from_slice(slice)) }
    }

    /// Constructs a span over `len` elements of `slice` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] if the range does not fit in
    /// `slice`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [1, 2, 3, 4];
    /// let span = LargeSpan::from_range(&data, 1, 2)?;
    /// assert_eq!(span.to_vec()?, [2, 3]);
    /// assert!(LargeSpan::from_range(&data, 3, 2).is_err());
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub fn from_range(slice: &'a [T], start: usize, len: usize) -> Result<Self, SpanError> {
        let raw = RawSpan::from_range(slice, start, len)?;
        // SAFETY: The raw span covers part of the borrowed slice.
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
    /// that remain valid and unmodified for `'a`, except through other
    /// spans created with this function.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Result<Self, SpanError> {
        // SAFETY: Forwarded from the caller.
        let raw = unsafe { RawSpan::from_raw_parts(ptr.cast_mut(), len) }?;
        // SAFETY: Forwarded from the caller.
        Ok(unsafe { Self::with_raw(raw) })
    }

    /// Wraps a raw span.
    ///
    /// # Safety
    ///
    /// The region must be valid for reads for `'a`.
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
    ///
    /// The pointer may dangle when the span is empty.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr().cast_const()
    }

    /// Returns a reference to an element or a subspan depending on the type
    /// of index, or `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [10, 40, 30];
    /// let span = LargeSpan::new(&data);
    /// assert_eq!(span.get(1), Some(&40));
    /// assert_eq!(span.get(3), None);
    /// assert_eq!(span.get(1..).map(|s| s.len()), Some(2));
    /// assert!(span.get(2..5).is_none());
    /// ```
    #[inline]
    pub fn get<I>(self, index: I) -> Option<I::Output<'a>>
    where
        I: SpanIndex<T>,
    {
        index.get(self)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn try_get(self, index: usize) -> Result<&'a T, SpanError> {
        self.get(index).ok_or(SpanError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns the first element, or `None` if the span is empty.
    pub fn first(self) -> Option<&'a T> {
        self.get(0)
    }

    /// Returns the last element, or `None` if the span is empty.
    pub fn last(self) -> Option<&'a T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns the subspan of `len` elements starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] unless `start + len <=
    /// self.len()`. The check cannot be fooled by `start + len` wrapping
    /// around.
    #[inline]
    pub fn try_slice(self, start: usize, len: usize) -> Result<Self, SpanError> {
        check_range(start, len, self.len())?;
        // SAFETY: The range was just checked.
        Ok(unsafe { Self::with_raw(self.raw.offset(start, len)) })
    }

    /// Returns the subspan from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::RangeOutOfBounds`] if `start > self.len()`.
    #[inline]
    pub fn try_slice_from(self, start: usize) -> Result<Self, SpanError> {
        let len = self.len().checked_sub(start).ok_or(SpanError::RangeOutOfBounds {
            start,
            len: 0,
            available: self.len(),
        })?;
        self.try_slice(start, len)
    }

    /// Returns the subspan of `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [1, 2, 3, 4];
    /// let span = LargeSpan::new(&data).slice(1, 2);
    /// assert_eq!(span.to_vec()?, [2, 3]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    #[inline]
    #[track_caller]
    pub fn slice(self, start: usize, len: usize) -> Self {
        match self.try_slice(start, len) {
            Ok(span) => span,
            Err(e) => fail(e),
        }
    }

    /// Returns the subspan from `start` to the end.
    ///
    /// # Panics
    ///
    /// Panics if `start > self.len()`.
    #[inline]
    #[track_caller]
    pub fn slice_from(self, start: usize) -> Self {
        match self.try_slice_from(start) {
            Ok(span) => span,
            Err(e) => fail(e),
        }
    }

    /// Divides the span in two at `mid`. The first half holds the elements
    /// before `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let tail = self.slice_from(mid);
        // SAFETY: slice_from checked mid <= len.
        let head = unsafe { Self::with_raw(self.raw.offset(0, mid)) };
        (head, tail)
    }

    /// Returns an iterator over the elements.
    ///
    /// A new iterator can be taken at any time; iterators do not lock the
    /// span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [1, 2, 4];
    /// let span = LargeSpan::new(&data);
    /// let mut iter = span.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&4));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(span.iter().sum::<i32>(), 7);
    /// ```
    pub fn iter(self) -> Iter<'a, T> {
        Iter {
            iter_raw: IterRaw::new(self.raw),
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over non-overlapping subspans of `chunk_size`
    /// elements. Trailing elements that do not fill a chunk are available
    /// from [`ChunksExact::remainder`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[track_caller]
    pub fn chunks_exact(self, chunk_size: usize) -> ChunksExact<'a, T> {
        ChunksExact::new(self, chunk_size)
    }

    /// Copies every element into the front of `dest`.
    ///
    /// The source and destination may overlap when they were built from raw
    /// pointers into the same buffer; the result is as if the source were
    /// read in full before anything was written.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::DestinationTooShort`] if `dest` is shorter than
    /// `self`. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::{LargeSpan, LargeSpanMut};
    /// let a = [1, 2, 3];
    /// let mut b = [0, 0, 0];
    /// LargeSpan::new(&a).copy_to(&mut LargeSpanMut::new(&mut b))?;
    /// assert_eq!(b, [1, 2, 3]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub fn copy_to(self, dest: &mut LargeSpanMut<'_, T>) -> Result<(), SpanError>
    where
        T: Copy,
    {
        if dest.len() < self.len() {
            return Err(SpanError::DestinationTooShort {
                needed: self.len(),
                available: dest.len(),
            });
        }
        // SAFETY: dest holds at least len writable elements, self holds len
        // readable ones, and bulk::copy tolerates overlap.
        unsafe { bulk::copy(dest.as_mut_ptr(), self.as_ptr(), self.len()) };
        Ok(())
    }

    /// Like [`copy_to`](LargeSpan::copy_to), but reports a short destination
    /// by returning `false` instead of an error.
    pub fn try_copy_to(self, dest: &mut LargeSpanMut<'_, T>) -> bool
    where
        T: Copy,
    {
        self.copy_to(dest).is_ok()
    }

    /// Copies the elements into a newly allocated `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::ArrayTooLarge`] if storage for `len` elements
    /// cannot be allocated.
    pub fn to_vec(self) -> Result<Vec<T>, SpanError>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        out.try_reserve_exact(self.len())
            .map_err(|_| SpanError::ArrayTooLarge { len: self.len() })?;
        // SAFETY: The slice is bounded by 'a.
        out.extend_from_slice(unsafe { self.raw.as_slice() });
        Ok(out)
    }

    /// Compares elements pairwise with `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let a = [1, 2, 3];
    /// let b = [1, 2, 3];
    /// let (a, b) = (LargeSpan::new(&a), LargeSpan::new(&b));
    /// assert!(a != b);
    /// assert!(a.sequence_eq(b));
    /// ```
    pub fn sequence_eq(self, other: LargeSpan<'_, T>) -> bool
    where
        T: PartialEq,
    {
        // SAFETY: Both slices are bounded by their spans.
        unsafe { self.raw.as_slice() == other.raw.as_slice() }
    }

    /// Views the same memory as bytes.
    ///
    /// The byte span has `len * size_of::<T>()` elements.
    pub fn as_bytes(self) -> LargeSpan<'a, u8>
    where
        T: PlainData,
    {
        let len = self.raw.byte_len();
        // SAFETY: Plain data has no padding, so every byte is initialized.
        unsafe { LargeSpan::with_raw(self.raw.cast(len)) }
    }

    /// Reinterprets the span as elements of another plain-data type.
    ///
    /// The new length is `len * size_of::<T>() / size_of::<U>()`, rounded
    /// down; trailing bytes that do not fill a `U` are not part of the
    /// result.
    ///
    /// # Errors
    ///
    /// - [`SpanError::Misaligned`] if the span does not start on an address
    ///   aligned for `U`.
    /// - [`SpanError::UnsupportedType`] if `U` is zero-sized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [0x0102_0304u32, 0x0506_0708];
    /// let halves = LargeSpan::new(&data).cast::<u16>()?;
    /// assert_eq!(halves.len(), 4);
    /// let bytes = LargeSpan::new(&data).as_bytes();
    /// assert_eq!(bytes.len(), 8);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub fn cast<U>(self) -> Result<LargeSpan<'a, U>, SpanError>
    where
        T: PlainData,
        U: PlainData,
    {
        let len = cast_len::<T, U>(self.raw)?;
        // SAFETY: The region holds len aligned values of U, and every bit
        // pattern is a valid U.
        Ok(unsafe { LargeSpan::with_raw(self.raw.cast(len)) })
    }

    /// Compares the contents of two spans: first by length, then byte by
    /// byte.
    ///
    /// Unlike `==`, this looks at the memory itself, so spans over distinct
    /// buffers with the same contents compare [`Ordering::Equal`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// # use std::cmp::Ordering;
    /// let a = [1u8, 2, 3];
    /// let b = [1u8, 2, 4];
    /// let (a, b) = (LargeSpan::new(&a), LargeSpan::new(&b));
    /// assert_eq!(a.compare_memory(a), Ordering::Equal);
    /// assert_eq!(a.compare_memory(b), Ordering::Less);
    /// assert_eq!(a.slice(0, 2).compare_memory(b), Ordering::Less);
    /// ```
    pub fn compare_memory(self, other: LargeSpan<'_, T>) -> Ordering
    where
        T: PlainData,
    {
        self.len().cmp(&other.len()).then_with(|| {
            // SAFETY: Both byte slices are bounded by their spans.
            unsafe { self.as_bytes().raw.as_slice().cmp(other.as_bytes().raw.as_slice()) }
        })
    }

    /// Narrows to a native slice.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::UnsupportedSize`] if the span is longer than
    /// [`NATIVE_MAX_LEN`].
    ///
    /// [`NATIVE_MAX_LEN`]: crate::NATIVE_MAX_LEN
    pub fn try_as_slice(self) -> Result<&'a [T], SpanError> {
        check_native_len(self.len())?;
        // SAFETY: The slice is bounded by 'a.
        Ok(unsafe { self.raw.as_slice() })
    }
}

/// Number of `U` that fit in the bytes of `raw`, after checking that `U` can
/// be placed at its address.
pub(crate) fn cast_len<T, U>(raw: RawSpan<T>) -> Result<usize, SpanError> {
    if size_of::<U>() == 0 {
        return Err(SpanError::UnsupportedType {
            type_name: std::any::type_name::<U>(),
        });
    }
    let addr = raw.as_ptr() as usize;
    if addr % align_of::<U>() != 0 {
        return Err(SpanError::Misaligned {
            addr,
            align: align_of::<U>(),
        });
    }
    Ok(raw.byte_len() / size_of::<U>())
}

impl<T> Index<usize> for LargeSpan<'_, T> {
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

impl<'a, T> IntoIterator for LargeSpan<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &LargeSpan<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LargeSpan<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Debug for LargeSpan<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
