use crate::{
    LargeSpan,
    iter_raw::{IterRaw, IterRawAdapter, iter_with_raw},
};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Immutable [`LargeSpan`] iterator.
///
/// This struct is created by the [`iter`] method.
///
/// [`iter`]: crate::LargeSpan::iter
pub struct Iter<'a, T>
where
    T: 'a,
{
    pub(crate) iter_raw: IterRaw<T, Self>,
    pub(crate) _marker: PhantomData<&'a T>,
}

// SAFETY: Iter behaves like std::slice::Iter.
unsafe impl<T> Send for Iter<'_, T> where T: Sync {}
// SAFETY: Iter behaves like std::slice::Iter.
unsafe impl<T> Sync for Iter<'_, T> where T: Sync {}

impl<'a, T> Iter<'a, T> {
    /// Returns a span of all elements that have not been yielded yet.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [1, 2, 3];
    /// let mut iter = LargeSpan::new(&data).iter();
    /// iter.next();
    /// assert_eq!(iter.as_span().to_vec()?, [2, 3]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub fn as_span(&self) -> LargeSpan<'a, T> {
        // SAFETY: The remaining elements are borrowed for 'a.
        unsafe { LargeSpan::with_raw(self.iter_raw.raw) }
    }
}

impl<'a, T> Debug for Iter<'a, T>
where
    T: 'a + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_span()).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        LargeSpan::empty().iter()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter_raw: self.iter_raw,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterRawAdapter<T> for Iter<'a, T> {
    type Item = &'a T;

    unsafe fn item_from_ptr(ptr: *mut T) -> Self::Item {
        // SAFETY: Forwarded from the caller.
        unsafe { &*ptr }
    }
}

iter_with_raw!(Iter<'a, T>, 'a);
