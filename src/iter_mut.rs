use crate::{
    LargeSpan, LargeSpanMut,
    iter_raw::{IterRaw, IterRawAdapter, iter_with_raw},
};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Mutable [`LargeSpanMut`] iterator.
///
/// This struct is created by the [`iter_mut`] method.
///
/// [`iter_mut`]: crate::LargeSpanMut::iter_mut
pub struct IterMut<'a, T>
where
    T: 'a,
{
    pub(crate) iter_raw: IterRaw<T, Self>,
    pub(crate) _marker: PhantomData<&'a mut T>,
}

// SAFETY: IterMut behaves like std::slice::IterMut.
unsafe impl<T> Send for IterMut<'_, T> where T: Send {}
// SAFETY: IterMut behaves like std::slice::IterMut.
unsafe impl<T> Sync for IterMut<'_, T> where T: Sync {}

impl<'a, T> IterMut<'a, T> {
    /// Returns a span of all elements that have not been yielded yet.
    pub fn as_span(&self) -> LargeSpan<'_, T> {
        // SAFETY: Borrowing self keeps further items from being yielded.
        unsafe { LargeSpan::with_raw(self.iter_raw.raw) }
    }

    /// Returns a mutable span of all elements that have not been yielded yet.
    ///
    /// To avoid creating `&mut` references that alias, this is forced to
    /// consume the iterator.
    pub fn into_span(self) -> LargeSpanMut<'a, T> {
        // SAFETY: The iterator is consumed and the remaining elements were
        // never handed out.
        unsafe { LargeSpanMut::with_raw(self.iter_raw.raw) }
    }
}

impl<T> Debug for IterMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_span()).finish()
    }
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        LargeSpanMut::empty().into_iter()
    }
}

impl<'a, T> IterRawAdapter<T> for IterMut<'a, T> {
    type Item = &'a mut T;

    unsafe fn item_from_ptr(ptr: *mut T) -> Self::Item {
        // SAFETY: Forwarded from the caller. Each element is yielded at most
        // once.
        unsafe { &mut *ptr }
    }
}

iter_with_raw!(IterMut<'a, T>, 'a);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_as_span() {
        let mut data = [1, 2, 3, 4];
        let mut span = LargeSpanMut::new(&mut data);
        let mut iter = span.iter_mut();
        *iter.next().unwrap() = 10;
        *iter.next_back().unwrap() = 40;
        assert_eq!(iter.as_span().to_vec(), Ok(vec![2, 3]));
        iter.into_span().fill(0);
        assert_eq!(data, [10, 0, 0, 40]);
    }

    #[test]
    fn items_are_disjoint() {
        let mut data = [0u8; 3];
        let mut span = LargeSpanMut::new(&mut data);
        let refs: Vec<&mut u8> = span.iter_mut().collect();
        for (i, r) in refs.into_iter().enumerate() {
            *r = i as u8;
        }
        assert_eq!(data, [0, 1, 2]);
        assert_eq!(IterMut::<u8>::default().len(), 0);
    }
}
