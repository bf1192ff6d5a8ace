use thiserror::Error;

/// Errors reported by large span construction, access and conversion.
///
/// Every variant describes a caller programming error. None of them are
/// transient, so there is nothing to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpanError {
    /// An element index was not less than the span length.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the span.
        len: usize,
    },

    /// A range `start..start + len` did not fit inside the source.
    #[error("range out of bounds: {len} elements starting at {start} exceed the length {available}")]
    RangeOutOfBounds {
        /// First element of the requested range.
        start: usize,
        /// Number of elements requested.
        len: usize,
        /// Number of elements available in the source.
        available: usize,
    },

    /// The destination of a copy is shorter than the source.
    #[error("destination too short: {needed} elements needed but only {available} available")]
    DestinationTooShort {
        /// Number of elements in the source.
        needed: usize,
        /// Number of elements in the destination.
        available: usize,
    },

    /// An owned array of the requested length could not be allocated.
    #[error("array of {len} elements exceeds the maximum allocation size")]
    ArrayTooLarge {
        /// Requested number of elements.
        len: usize,
    },

    /// A raw length does not describe an addressable region.
    #[error("{len} elements of {size} bytes overflow the address space")]
    LengthOverflow {
        /// Requested number of elements.
        len: usize,
        /// Size of one element in bytes.
        size: usize,
    },

    /// A null pointer was passed with a non-zero length.
    #[error("null pointer with non-zero length")]
    NullPointer,

    /// A pointer is not aligned for the element type.
    #[error("address {addr:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// The offending address.
        addr: usize,
        /// Alignment required by the element type.
        align: usize,
    },

    /// The element type cannot be used in this position.
    #[error("unsupported element type `{type_name}`")]
    UnsupportedType {
        /// Name of the rejected type.
        type_name: &'static str,
    },

    /// A span is too long for the requested conversion.
    #[error("span of {len} elements exceeds the maximum of {max}")]
    UnsupportedSize {
        /// Length of the span.
        len: usize,
        /// Largest length the conversion accepts.
        max: usize,
    },
}

/// Panics with the message of `error`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(error: SpanError) -> ! {
    panic!("{error}")
}

/// Checks that `start..start + len` lies inside `0..available` without
/// risking overflow in `start + len`.
#[inline]
pub(crate) fn check_range(start: usize, len: usize, available: usize) -> Result<(), SpanError> {
    if start <= available && len <= available - start {
        Ok(())
    } else {
        Err(SpanError::RangeOutOfBounds {
            start,
            len,
            available,
        })
    }
}
