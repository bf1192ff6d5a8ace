use crate::RawSpan;
use std::{iter::FusedIterator, marker::PhantomData};

/// Used by [`IterRaw`] to turn an element pointer into an item of the
/// desired form.
pub trait IterRawAdapter<T> {
    /// The desired form of an element, such as `&T` or `&mut T`.
    type Item;

    /// Converts a pointer to one element into an item.
    ///
    /// # Safety
    ///
    /// `ptr` must point to an initialized element that is valid for the
    /// lifetime of `Self::Item` and not aliased in a way that lifetime
    /// forbids.
    unsafe fn item_from_ptr(ptr: *mut T) -> Self::Item;
}

/// The cursor shared by [`Iter`] and [`IterMut`]: the span of elements that
/// have not been yielded yet.
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
pub struct IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    pub(crate) raw: RawSpan<T>,
    pub(crate) adapter: PhantomData<A>,
}

impl<T, A> IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    pub(crate) fn new(raw: RawSpan<T>) -> Self {
        Self {
            raw,
            adapter: PhantomData,
        }
    }
}

impl<T, A> Clone for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for IterRaw<T, A> where A: IterRawAdapter<T> {}

impl<T, A> Iterator for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.raw.is_empty() {
            None
        } else {
            // SAFETY: Our length is nonzero so the first element exists.
            let out = unsafe { A::item_from_ptr(self.raw.at(0)) };
            // SAFETY: 1 + (len - 1) == len
            self.raw = unsafe { self.raw.offset(1, self.raw.len() - 1) };
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.raw.len()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let len = self.raw.len();
        if n >= len {
            // SAFETY: len + 0 == len
            self.raw = unsafe { self.raw.offset(len, 0) };
            None
        } else {
            // SAFETY: n < len
            let out = unsafe { A::item_from_ptr(self.raw.at(n)) };
            // nth(n) consumes item n so we need to advance one more
            // SAFETY: (n + 1) + (len - n - 1) == len
            self.raw = unsafe { self.raw.offset(n + 1, len - n - 1) };
            Some(out)
        }
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        for i in 0..self.raw.len() {
            // SAFETY: i < len
            acc = f(acc, unsafe { A::item_from_ptr(self.raw.at(i)) });
        }
        acc
    }
}

impl<T, A> DoubleEndedIterator for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let len = self.raw.len().checked_sub(1)?;
        // SAFETY: len now indexes the last element.
        let out = unsafe { A::item_from_ptr(self.raw.at(len)) };
        // SAFETY: 0 + len <= len + 1
        self.raw = unsafe { self.raw.offset(0, len) };
        Some(out)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let len = self.raw.len();
        if n >= len {
            // SAFETY: 0 + 0 <= len
            self.raw = unsafe { self.raw.offset(0, 0) };
            None
        } else {
            let index = len - n - 1;
            // SAFETY: index < len
            let out = unsafe { A::item_from_ptr(self.raw.at(index)) };
            // SAFETY: 0 + index <= len
            self.raw = unsafe { self.raw.offset(0, index) };
            Some(out)
        }
    }
}

impl<T, A> FusedIterator for IterRaw<T, A> where A: IterRawAdapter<T> {}

impl<T, A> ExactSizeIterator for IterRaw<T, A> where A: IterRawAdapter<T> {}

macro_rules! iter_with_raw {
    ($t:ty, $lifetime:lifetime) => {
        impl<$lifetime, T> Iterator for $t
        where
            T: $lifetime,
        {
            type Item = <$t as IterRawAdapter<T>>::Item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter_raw.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter_raw.size_hint()
            }

            fn count(self) -> usize
            where
                Self: Sized,
            {
                self.iter_raw.count()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth(n)
            }

            fn last(self) -> Option<Self::Item>
            where
                Self: Sized,
            {
                self.iter_raw.last()
            }

            fn fold<B, F>(self, init: B, f: F) -> B
            where
                Self: Sized,
                F: FnMut(B, Self::Item) -> B,
            {
                self.iter_raw.fold(init, f)
            }
        }

        impl<$lifetime, T> DoubleEndedIterator for $t
        where
            T: $lifetime,
        {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter_raw.next_back()
            }

            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth_back(n)
            }
        }

        impl<$lifetime, T> FusedIterator for $t where T: $lifetime {}
        impl<$lifetime, T> ExactSizeIterator for $t where T: $lifetime {}
    };
}

pub(crate) use iter_with_raw;
