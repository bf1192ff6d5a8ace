use crate::LargeSpan;
use std::iter::FusedIterator;

/// An iterator over a [`LargeSpan`] in (non-overlapping) chunks of
/// `chunk_size` elements.
///
/// When the span len is not evenly divided by the chunk size, the last up to
/// `chunk_size-1` elements will be omitted but can be retrieved from the
/// [`remainder`] function from the iterator.
///
/// This struct is created by the [`chunks_exact`] method.
///
/// [`remainder`]: ChunksExact::remainder
/// [`chunks_exact`]: LargeSpan::chunks_exact
#[derive(Debug)]
pub struct ChunksExact<'a, T> {
    span: LargeSpan<'a, T>,
    remainder: LargeSpan<'a, T>,
    chunk_size: usize,
}

impl<'a, T> ChunksExact<'a, T> {
    #[track_caller]
    pub(crate) fn new(span: LargeSpan<'a, T>, chunk_size: usize) -> Self {
        assert!(chunk_size != 0, "chunk size must be non-zero");
        let whole = span.len() - span.len() % chunk_size;
        let (span, remainder) = span.split_at(whole);
        Self {
            span,
            remainder,
            chunk_size,
        }
    }

    /// Returns the remainder of the original span that will not be yielded
    /// by the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use large_span::LargeSpan;
    /// let data = [1, 2, 3, 4, 5];
    /// let chunks = LargeSpan::new(&data).chunks_exact(2);
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks.remainder().to_vec()?, [5]);
    /// # Ok::<(), large_span::SpanError>(())
    /// ```
    pub fn remainder(&self) -> LargeSpan<'a, T> {
        self.remainder
    }
}

impl<T> Clone for ChunksExact<'_, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            remainder: self.remainder,
            chunk_size: self.chunk_size,
        }
    }
}

impl<'a, T> Iterator for ChunksExact<'a, T> {
    type Item = LargeSpan<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.span.len() < self.chunk_size {
            None
        } else {
            let (out, rest) = self.span.split_at(self.chunk_size);
            self.span = rest;
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.span.len() / self.chunk_size;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for ChunksExact<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.span.len() < self.chunk_size {
            None
        } else {
            let (rest, out) = self.span.split_at(self.span.len() - self.chunk_size);
            self.span = rest;
            Some(out)
        }
    }
}

impl<T> ExactSizeIterator for ChunksExact<'_, T> {}
impl<T> FusedIterator for ChunksExact<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_and_remainder() {
        let data: Vec<u16> = (0..10).collect();
        let span = LargeSpan::new(&data);
        let firsts: Vec<u16> = span.chunks_exact(3).map(|c| c[0]).collect();
        assert_eq!(firsts, [0, 3, 6]);
        assert_eq!(span.chunks_exact(3).remainder().len(), 1);
        assert_eq!(span.chunks_exact(3).next_back().map(|c| c[0]), Some(6));
        assert_eq!(span.chunks_exact(5).remainder().len(), 0);
        assert_eq!(span.chunks_exact(11).next(), None);
        assert_eq!(LargeSpan::<u8>::empty().chunks_exact(4).len(), 0);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn zero_chunk_size() {
        let data = [1];
        let _ = LargeSpan::new(&data).chunks_exact(0);
    }
}
