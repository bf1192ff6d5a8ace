use crate::{LargeSpan, LargeSpanMut};

/// Similar to `AsRef<[T]>`, but returns a [`LargeSpan`] value rather than a
/// reference.
///
/// # Examples
///
/// ```
/// # use large_span::{AsSpan, LargeSpan};
/// fn total<S: AsSpan<Item = u32> + ?Sized>(source: &S) -> u32 {
///     source.as_large_span().iter().sum()
/// }
///
/// assert_eq!(total(&[1, 2, 3]), 6);
/// assert_eq!(total(&vec![4, 5]), 9);
/// ```
pub trait AsSpan {
    /// The type that the span contains.
    type Item;

    /// Returns a [`LargeSpan`] over all of the elements.
    fn as_large_span(&self) -> LargeSpan<'_, Self::Item>;
}

/// Similar to `AsMut<[T]>`, but returns a [`LargeSpanMut`] value rather than a
/// mutable reference.
pub trait AsSpanMut: AsSpan {
    /// Returns a [`LargeSpanMut`] over all of the elements.
    fn as_large_span_mut(&mut self) -> LargeSpanMut<'_, Self::Item>;
}

macro_rules! as_span_for {
    ($t:ty $(, $($b:tt)+)?) => {
        impl<T $(, $($b)+)?> AsSpan for $t {
            type Item = T;

            fn as_large_span(&self) -> LargeSpan<'_, T> {
                LargeSpan::new(self)
            }
        }

        impl<T $(, $($b)+)?> AsSpanMut for $t {
            fn as_large_span_mut(&mut self) -> LargeSpanMut<'_, T> {
                LargeSpanMut::new(self)
            }
        }
    };
}

as_span_for!([T]);
as_span_for!([T; N], const N: usize);
as_span_for!(Vec<T>);
as_span_for!(Box<[T]>);

impl<T> AsSpan for LargeSpan<'_, T> {
    type Item = T;

    fn as_large_span(&self) -> LargeSpan<'_, T> {
        *self
    }
}

impl<T> AsSpan for LargeSpanMut<'_, T> {
    type Item = T;

    fn as_large_span(&self) -> LargeSpan<'_, T> {
        self.as_span()
    }
}

impl<T> AsSpanMut for LargeSpanMut<'_, T> {
    fn as_large_span_mut(&mut self) -> LargeSpanMut<'_, T> {
        self.reborrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_all<S: AsSpanMut<Item = u8> + ?Sized>(target: &mut S, byte: u8) {
        target.as_large_span_mut().fill(byte);
    }

    #[test]
    fn containers() {
        let mut array = [0u8; 3];
        let mut vec = vec![0u8; 4];
        let mut boxed: Box<[u8]> = vec![0u8; 2].into_boxed_slice();
        fill_all(&mut array, 1);
        fill_all(&mut vec, 2);
        fill_all(&mut boxed, 3);
        fill_all(&mut vec[1..3], 4);
        assert_eq!(array, [1; 3]);
        assert_eq!(vec, [2, 4, 4, 2]);
        assert_eq!(*boxed, [3, 3]);
        assert_eq!(vec.as_large_span().len(), 4);
        assert_eq!(vec.as_large_span(), LargeSpan::new(&vec));
    }

    #[test]
    fn spans_forward() {
        let mut data = [5u8; 2];
        let mut span = LargeSpanMut::new(&mut data);
        fill_all(&mut span, 6);
        assert_eq!(span.as_large_span().to_vec(), Ok(vec![6, 6]));
        let read = span.into_span();
        assert_eq!(read.as_large_span(), read);
    }
}
