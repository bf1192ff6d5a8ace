//! Bounds-checked, borrowed views over contiguous memory with pointer-width
//! lengths.
//!
//! [`LargeSpan`] and [`LargeSpanMut`] play the roles of `&[T]` and `&mut [T]`
//! for regions that may be longer than a 32-bit length can describe. They
//! never own memory: a span borrows from a slice, or is built from a raw
//! address and element count that some other allocator is responsible for.
//! The lifetime parameter ties every span to the memory it came from, so a
//! span cannot outlive its source or be used while the source is mutated.
//!
//! ```
//! use large_span::{LargeSpan, LargeSpanMut};
//!
//! let source = [1, 2, 3, 4];
//! let mut target = [0; 4];
//! let span = LargeSpan::new(&source).slice(1, 2);
//! let mut dest = LargeSpanMut::new(&mut target);
//! span.copy_to(&mut dest)?;
//! assert_eq!(target, [2, 3, 0, 0]);
//! # Ok::<(), large_span::SpanError>(())
//! ```
//!
//! # Bulk operations
//!
//! Copies and fills go through the [`bulk`] module, which splits any region
//! longer than [`MAX_CHUNK_BYTES`] into several calls to the underlying
//! primitives. Copies always behave like `memmove`: the source is read in
//! full before the destination is written, even if the two overlap.
//!
//! # Equality
//!
//! `==` on spans compares the address and the length, never the elements.
//! Two spans over distinct buffers with equal contents are not `==`. Use
//! [`LargeSpan::sequence_eq`] to compare elements, or
//! [`LargeSpan::compare_memory`] to order plain-data spans by their bytes.
//!
//! # Plain data
//!
//! Reinterpreting a span as bytes, casting between element types and zeroing
//! need the element type to implement [`PlainData`]. It is implemented for the
//! numeric primitives and arrays of them, and can be derived:
//!
//! ```
//! use large_span::{LargeSpan, PlainData};
//!
//! #[derive(PlainData, Clone, Copy)]
//! #[repr(C)]
//! struct Pixel {
//!     r: u8,
//!     g: u8,
//!     b: u8,
//!     a: u8,
//! }
//!
//! let pixels = [Pixel { r: 1, g: 2, b: 3, a: 4 }; 2];
//! assert_eq!(LargeSpan::new(&pixels).as_bytes().len(), 8);
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` for both span types as a sequence of
//!   elements.

extern crate self as large_span;

mod as_span;
pub use as_span::{AsSpan, AsSpanMut};

mod borrow_tests;

pub mod bulk;
pub use bulk::MAX_CHUNK_BYTES;

mod chunks_exact;
pub use chunks_exact::ChunksExact;


mod eq_impl;

mod error;
pub use error::SpanError;

mod index;
pub use index::SpanIndex;

mod iter;
pub use iter::Iter;

mod iter_mut;
pub use iter_mut::IterMut;

mod iter_raw;

mod narrow;
pub use narrow::NATIVE_MAX_LEN;

mod plain;
pub use plain::PlainData;

/// Derives [`PlainData`](trait@PlainData) for a `#[repr(C)]` or
/// `#[repr(transparent)]` struct whose fields are all plain data and which
/// has no padding.
pub use large_span_derive::PlainData;

mod raw;
pub use raw::RawSpan;

#[cfg(feature = "serde")]
mod serde;

mod span;
pub use span::LargeSpan;

mod span_mut;
pub use span_mut::LargeSpanMut;

#[cfg(test)]
mod tests {
    use crate::{LargeSpan, LargeSpanMut, PlainData, SpanError};
    use std::cmp::Ordering;

    #[derive(PlainData, Clone, Copy, Debug, PartialEq, Eq, Default)]
    #[repr(C)]
    struct Sample {
        id: u32,
        value: i32,
    }

    #[test]
    fn index_into_view() {
        let data = [10, 20, 30];
        assert_eq!(LargeSpan::new(&data)[1], 20);
    }

    #[test]
    fn slice_from_offset() {
        let data = [10, 20, 30];
        let tail = LargeSpan::new(&data).slice_from(1);
        assert_eq!(tail[0], 20);
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn slice_to_vec() {
        let data = [1, 2, 3, 4];
        assert_eq!(LargeSpan::new(&data).slice(1, 2).to_vec(), Ok(vec![2, 3]));
    }

    #[test]
    fn copy_between_views() {
        let a = [1, 2, 3];
        let mut b = [0, 0, 0];
        let mut dest = LargeSpanMut::new(&mut b);
        LargeSpan::new(&a).copy_to(&mut dest).unwrap();
        assert_eq!(dest.to_vec(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn overlapping_self_copy() {
        let mut data = [1, 2, 3, 4, 5];
        let base = data.as_mut_ptr();
        // SAFETY: data outlives both views and is only accessed through them
        // until they are done.
        unsafe {
            let src = LargeSpan::from_raw_parts(base, 5).unwrap().slice(0, 4);
            let mut dst = LargeSpanMut::from_raw_parts(base, 5)
                .unwrap()
                .into_slice(1, 4);
            src.copy_to(&mut dst).unwrap();
        }
        assert_eq!(data, [1, 1, 2, 3, 4]);

        let mut data = [1, 2, 3, 4, 5];
        LargeSpanMut::new(&mut data).copy_within(0, 4, 1);
        assert_eq!(data, [1, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_byte_view() {
        let data: [u8; 0] = [];
        let span = LargeSpan::new(&data);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn derived_plain_data() {
        let mut samples = [
            Sample { id: 1, value: -1 },
            Sample { id: 2, value: -2 },
        ];
        let mut span = LargeSpanMut::new(&mut samples);
        assert_eq!(span.as_bytes().len(), 16);
        let words = span.cast::<u32>().unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(words[2], 2);
        span.slice(1, 1).zero();
        assert_eq!(samples[1], Sample::default());
    }

    #[test]
    fn compare_after_copy() {
        let a = [Sample { id: 7, value: 8 }; 3];
        let mut b = [Sample::default(); 3];
        let src = LargeSpan::new(&a);
        let mut dst = LargeSpanMut::new(&mut b);
        assert_eq!(src.compare_memory(dst.as_span()), Ordering::Greater);
        src.copy_to(&mut dst).unwrap();
        assert_eq!(src.compare_memory(dst.as_span()), Ordering::Equal);
        assert!(src.sequence_eq(dst.as_span()));
        assert!(src != dst);
    }

    #[test]
    fn raw_view_rejects_owned_elements() {
        let mut names = vec![String::from("a")];
        // SAFETY: Rejected before the pointer is used.
        let result = unsafe { LargeSpanMut::from_raw_parts(names.as_mut_ptr(), 1) };
        assert!(matches!(result, Err(SpanError::UnsupportedType { .. })));
    }
}
