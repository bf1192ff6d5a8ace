/// ```
/// use large_span::LargeSpan;
/// let span = {
///     let data = vec![1, 2, 3];
///     LargeSpan::new(&data).len()
/// };
/// assert_eq!(span, 3);
/// ```
mod span_outlives_source {
    /// ```compile_fail
    /// use large_span::LargeSpan;
    /// let span = {
    ///     let data = vec![1, 2, 3];
    ///     LargeSpan::new(&data)
    /// };
    /// println!("{:?}", span);
    /// ```
    mod fail {}
}

/// ```
/// use large_span::LargeSpanMut;
/// let mut data = [1, 2, 3];
/// let mut span = LargeSpanMut::new(&mut data);
/// span[0] = 10;
/// ```
mod write_through_read_only_span {
    /// ```compile_fail
    /// use large_span::LargeSpan;
    /// let data = [1, 2, 3];
    /// let mut span = LargeSpan::new(&data);
    /// span[0] = 10;
    /// ```
    mod fail {}
}

/// ```
/// use large_span::LargeSpanMut;
/// let mut data = [1, 2, 3];
/// let mut span = LargeSpanMut::new(&mut data);
/// let (mut a, mut b) = span.split_at_mut(1);
/// a.fill(0);
/// b.fill(0);
/// ```
mod multiple_mutable_borrows {
    /// ```compile_fail
    /// use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 3];
    /// let mut a = LargeSpanMut::new(&mut data);
    /// let mut b = LargeSpanMut::new(&mut data);
    /// a.fill(0);
    /// b.fill(0);
    /// ```
    mod fail {}
}

/// ```
/// use large_span::LargeSpanMut;
/// let mut data = [1, 2, 3];
/// let mut span = LargeSpanMut::new(&mut data);
/// let first = span.slice(0, 1);
/// drop(first);
/// span.fill(0);
/// ```
mod subspan_keeps_parent_borrowed {
    /// ```compile_fail
    /// use large_span::LargeSpanMut;
    /// let mut data = [1, 2, 3];
    /// let mut span = LargeSpanMut::new(&mut data);
    /// let mut first = span.slice(0, 1);
    /// span.fill(0);
    /// first.fill(1);
    /// ```
    mod fail {}
}

/// ```
/// use large_span::{LargeSpan, LargeSpanMut};
/// let mut data = [1, 2, 3];
/// let span = LargeSpanMut::new(&mut data);
/// let read: LargeSpan<'_, i32> = span.into();
/// println!("{:?}", read);
/// ```
mod widened_span_is_read_only {
    /// ```compile_fail
    /// use large_span::{LargeSpan, LargeSpanMut};
    /// let mut data = [1, 2, 3];
    /// let span = LargeSpanMut::new(&mut data);
    /// let read: LargeSpan<'_, i32> = span.into();
    /// data[0] = 5;
    /// println!("{:?}", read);
    /// ```
    mod fail {}
}
