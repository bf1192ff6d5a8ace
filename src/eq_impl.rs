//! Identity equality for the span types.
//!
//! Two spans are equal when they start at the same address and have the same
//! length, whatever their contents. Comparing contents is done with
//! `sequence_eq` or `compare_memory`.

use crate::{LargeSpan, LargeSpanMut};
use std::hash::{Hash, Hasher};

macro_rules! uni {
    ($t:ty, $u:ty) => {
        impl<T> PartialEq<$u> for $t {
            fn eq(&self, other: &$u) -> bool {
                self.raw.same_region(&other.raw)
            }
        }
    };
}

macro_rules! impl_for {
    ($t:ty) => {
        $crate::eq_impl::uni!($t, LargeSpan<'_, T>);
        $crate::eq_impl::uni!($t, LargeSpanMut<'_, T>);

        impl<T> Eq for $t {}

        impl<T> Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.raw.as_ptr().hash(state);
                self.raw.len().hash(state);
            }
        }
    };
}

pub(crate) use uni;

impl_for!(LargeSpan<'_, T>);
impl_for!(LargeSpanMut<'_, T>);
