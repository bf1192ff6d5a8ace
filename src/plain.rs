/// Marker for element types that can be viewed as raw bytes.
///
/// A plain-data type holds no references to other allocations, has no drop
/// glue and no padding, and accepts every bit pattern (including all zeros)
/// as a valid value. That makes it sound to reinterpret a span of it as bytes
/// or as a span of another plain-data type, and to clear it with a raw zero
/// fill.
///
/// Implement it with `#[derive(PlainData)]`, which checks these requirements
/// at compile time for `#[repr(C)]` and `#[repr(transparent)]` structs.
///
/// # Safety
///
/// Implementors must guarantee that
///
/// - the type is `Copy` and `'static`,
/// - the type contains no padding bytes,
/// - every bit pattern of `size_of::<Self>()` bytes is a valid value.
pub unsafe trait PlainData: Copy + 'static {}

macro_rules! plain_data {
    ($($t:ty),* $(,)?) => {
        $(
            // SAFETY: Primitive integers and floats have no padding and
            // accept every bit pattern.
            unsafe impl PlainData for $t {}
        )*
    };
}

plain_data!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

// SAFETY: An array of plain data has no padding between elements.
unsafe impl<T, const N: usize> PlainData for [T; N] where T: PlainData {}

// SAFETY: Wrapping integers are `repr(transparent)`.
unsafe impl<T> PlainData for std::num::Wrapping<T> where T: PlainData {}

#[cfg(test)]
mod tests {
    use super::PlainData;

    fn assert_plain<T: PlainData>() {}

    #[test]
    fn primitives_and_arrays() {
        assert_plain::<u8>();
        assert_plain::<f64>();
        assert_plain::<[u32; 4]>();
        assert_plain::<[[i16; 2]; 3]>();
        assert_plain::<std::num::Wrapping<u64>>();
    }
}
