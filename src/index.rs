use crate::{LargeSpan, LargeSpanMut};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A helper trait for indexing operations.
///
/// Positions yield element references and ranges yield subspans. Every
/// implementation returns `None` rather than panicking when out of bounds.
pub trait SpanIndex<T> {
    /// The output type returned by non-`mut` methods.
    type Output<'a>
    where
        T: 'a;

    /// The output type returned by `mut` methods.
    type OutputMut<'a>
    where
        T: 'a;

    /// Returns the output at this location, if in bounds.
    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>>;

    /// Returns the mutable output at this location, if in bounds.
    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>>;
}

impl<T> SpanIndex<T> for usize {
    type Output<'a>
        = &'a T
    where
        T: 'a;

    type OutputMut<'a>
        = &'a mut T
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        if self < span.len() {
            // SAFETY: self < len, and the element is borrowed for 'a.
            Some(unsafe { &*span.raw.at(self) })
        } else {
            None
        }
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        if self < span.len() {
            // SAFETY: self < len, and the span was consumed, so the element is
            // exclusively borrowed for 'a.
            Some(unsafe { &mut *span.raw.at(self) })
        } else {
            None
        }
    }
}

impl<T> SpanIndex<T> for Range<usize> {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        let len = self.end.checked_sub(self.start)?;
        span.try_slice(self.start, len).ok()
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        let len = self.end.checked_sub(self.start)?;
        span.try_into_slice(self.start, len).ok()
    }
}

impl<T> SpanIndex<T> for RangeInclusive<usize> {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        let end = self.end().checked_add(1)?;
        (*self.start()..end).get(span)
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        let end = self.end().checked_add(1)?;
        (*self.start()..end).get_mut(span)
    }
}

impl<T> SpanIndex<T> for RangeFrom<usize> {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        span.try_slice_from(self.start).ok()
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        let len = span.len().checked_sub(self.start)?;
        span.try_into_slice(self.start, len).ok()
    }
}

impl<T> SpanIndex<T> for RangeTo<usize> {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        (0..self.end).get(span)
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        (0..self.end).get_mut(span)
    }
}

impl<T> SpanIndex<T> for RangeToInclusive<usize> {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        (0..=self.end).get(span)
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        (0..=self.end).get_mut(span)
    }
}

impl<T> SpanIndex<T> for RangeFull {
    type Output<'a>
        = LargeSpan<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = LargeSpanMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, span: LargeSpan<'a, T>) -> Option<Self::Output<'a>> {
        Some(span)
    }

    fn get_mut<'a>(self, span: LargeSpanMut<'a, T>) -> Option<Self::OutputMut<'a>> {
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        let data = [0, 1, 2, 3, 4];
        let span = LargeSpan::new(&data);
        assert_eq!(span.get(1..3).map(|s| s.len()), Some(2));
        assert_eq!(span.get(1..=3).map(|s| s.len()), Some(3));
        assert_eq!(span.get(..2).map(|s| s.len()), Some(2));
        assert_eq!(span.get(..=4).map(|s| s.len()), Some(5));
        assert_eq!(span.get(5..).map(|s| s.len()), Some(0));
        assert_eq!(span.get(..), Some(span));
        assert!(span.get(3..2).is_none());
        assert!(span.get(..=5).is_none());
        assert!(span.get(6..).is_none());
        assert!(span.get(0..=usize::MAX).is_none());
    }

    #[test]
    fn ranges_mut() {
        let mut data = [0, 1, 2, 3, 4];
        let mut span = LargeSpanMut::new(&mut data);
        span.get_mut(1..=2).unwrap().fill(9);
        span.get_mut(..1).unwrap().fill(7);
        assert!(span.get_mut(4..6).is_none());
        *span.get_mut(4).unwrap() = 8;
        assert_eq!(data, [7, 9, 9, 3, 8]);
    }
}
