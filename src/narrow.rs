//! Conversions between spans and native slices.
//!
//! Widening a slice into a span always succeeds. Narrowing a span back into a
//! slice is limited to [`NATIVE_MAX_LEN`] elements, the largest length that
//! consumers indexing with a signed 32-bit integer can address.

use crate::{LargeSpan, LargeSpanMut, SpanError};

/// Longest span that narrows into a native slice.
pub const NATIVE_MAX_LEN: usize = i32::MAX as usize;

/// Checks that `len` elements fit in a native slice.
pub(crate) fn check_native_len(len: usize) -> Result<(), SpanError> {
    if len > NATIVE_MAX_LEN {
        return Err(SpanError::UnsupportedSize {
            len,
            max: NATIVE_MAX_LEN,
        });
    }
    Ok(())
}

impl<'a, T> TryFrom<LargeSpan<'a, T>> for &'a [T] {
    type Error = SpanError;

    fn try_from(span: LargeSpan<'a, T>) -> Result<Self, Self::Error> {
        span.try_as_slice()
    }
}

impl<'a, T> TryFrom<LargeSpanMut<'a, T>> for &'a mut [T] {
    type Error = SpanError;

    fn try_from(span: LargeSpanMut<'a, T>) -> Result<Self, Self::Error> {
        span.try_into_mut_slice()
    }
}

impl<'a, T> TryFrom<LargeSpanMut<'a, T>> for &'a [T] {
    type Error = SpanError;

    fn try_from(span: LargeSpanMut<'a, T>) -> Result<Self, Self::Error> {
        span.into_span().try_as_slice()
    }
}

impl<'a, T> From<&'a [T]> for LargeSpan<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T> From<&'a mut [T]> for LargeSpan<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for LargeSpan<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T> From<&'a Vec<T>> for LargeSpan<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<'a, T> From<&'a mut [T]> for LargeSpanMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for LargeSpanMut<'a, T> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for LargeSpanMut<'a, T> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        Self::new(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_widen_round_trip() {
        let data = [1u32, 2, 3];
        let span = LargeSpan::from(&data);
        let slice: &[u32] = span.try_into().unwrap();
        assert_eq!(slice, &data);
        assert_eq!(LargeSpan::from(slice), span);
    }

    #[test]
    fn narrow_mut_round_trip() {
        let mut data = vec![1u32, 2, 3];
        let span = LargeSpanMut::from(&mut data);
        let ptr = span.as_ptr();
        let slice: &mut [u32] = span.try_into().unwrap();
        slice[0] = 9;
        let back = LargeSpanMut::from(slice);
        assert_eq!(back.as_ptr(), ptr);
        assert_eq!(back.len(), 3);
        assert_eq!(data, [9, 2, 3]);
    }

    #[test]
    fn native_len_limit() {
        assert_eq!(NATIVE_MAX_LEN, 2_147_483_647);
        assert_eq!(check_native_len(0), Ok(()));
        assert_eq!(check_native_len(NATIVE_MAX_LEN), Ok(()));
        assert_eq!(
            check_native_len(NATIVE_MAX_LEN + 1),
            Err(SpanError::UnsupportedSize {
                len: NATIVE_MAX_LEN + 1,
                max: NATIVE_MAX_LEN
            })
        );
        assert!(check_native_len(usize::MAX).is_err());
    }

    #[test]
    fn empty_narrows() {
        let span = LargeSpan::<u64>::empty();
        let slice: &[u64] = span.try_into().unwrap();
        assert!(slice.is_empty());
    }
}
