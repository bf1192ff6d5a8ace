#![cfg(test)]

use large_span::{AsSpan, AsSpanMut, LargeSpan, LargeSpanMut, PlainData, SpanError};
use std::{cell::Cell, cmp::Ordering, rc::Rc};

#[derive(PlainData, Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[repr(C)]
struct Record {
    key: u32,
    flags: [u8; 4],
}

#[derive(PlainData, Debug, Default, Clone, Copy, PartialEq)]
#[repr(transparent)]
struct Meters(f64);

#[derive(Debug, Clone)]
struct Tracked {
    drops: Rc<Cell<usize>>,
    id: u8,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn tracked(drops: &Rc<Cell<usize>>, id: u8) -> Tracked {
    Tracked {
        drops: drops.clone(),
        id,
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Owner {
    name: String,
}

#[test]
fn derive_record() {
    let mut records = [Record {
        key: 0x0102_0304,
        flags: [5, 6, 7, 8],
    }; 3];
    let mut span = records.as_large_span_mut();
    assert_eq!(span.as_bytes().len(), 24);
    span.slice(1, 1).zero();
    assert_eq!(records[1], Record::default());
    assert_eq!(records[2].flags, [5, 6, 7, 8]);
}

#[test]
fn derive_transparent_casts() {
    let distances = [Meters(1.5), Meters(2.5)];
    let floats = distances.as_large_span().cast::<f64>().unwrap();
    assert_eq!(floats.to_vec(), Ok(vec![1.5, 2.5]));
}

#[test]
fn serialize_span() {
    let records = [
        Record {
            key: 1,
            flags: [0; 4],
        },
        Record {
            key: 2,
            flags: [1, 2, 3, 4],
        },
    ];
    let span = LargeSpan::new(&records);
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(
        json,
        r#"[{"key":1,"flags":[0,0,0,0]},{"key":2,"flags":[1,2,3,4]}]"#
    );
    assert_eq!(json, serde_json::to_string(&records).unwrap());
}

#[test]
fn serialize_span_mut() {
    let mut numbers = vec![3u16, 1, 4];
    let mut span = LargeSpanMut::new(&mut numbers);
    span.slice_from(1).fill(9);
    assert_eq!(serde_json::to_string(&span).unwrap(), "[3,9,9]");
    assert_eq!(
        serde_json::to_string(&LargeSpan::<u16>::empty()).unwrap(),
        "[]"
    );
}

#[test]
fn fill_drops_each_old_value_once() {
    let drops = Rc::new(Cell::new(0));
    let mut items: Vec<_> = (0..4).map(|i| tracked(&drops, i)).collect();
    let mut span = LargeSpanMut::new(&mut items);
    span.slice(1, 2).fill(tracked(&drops, 9));
    // Two old values dropped; the clone-source was moved into the last slot.
    assert_eq!(drops.get(), 2);
    let ids: Vec<_> = span.iter().map(|t| t.id).collect();
    assert_eq!(ids, [0, 9, 9, 3]);
    drop(items);
    assert_eq!(drops.get(), 6);
}

#[test]
fn clear_resets_owned_values() {
    let mut owners = vec![
        Owner {
            name: "left".into(),
        },
        Owner {
            name: "right".into(),
        },
    ];
    owners.as_large_span_mut().clear();
    assert_eq!(owners, [Owner::default(), Owner::default()]);
}

#[test]
fn owned_elements_through_safe_views() {
    let source = vec![
        Owner {
            name: "a".into(),
        },
        Owner {
            name: "b".into(),
        },
    ];
    let span = LargeSpan::new(&source);
    let copy = span.to_vec().unwrap();
    assert_eq!(copy, source);
    assert!(span.sequence_eq(LargeSpan::new(&copy)));
    assert_ne!(span, LargeSpan::new(&copy));
}

#[test]
fn raw_views_reject_owned_elements() {
    let mut owners = vec![Owner::default()];
    // SAFETY: Rejected before the pointer is used.
    let read = unsafe { LargeSpan::from_raw_parts(owners.as_ptr(), 1) };
    assert!(matches!(read, Err(SpanError::UnsupportedType { .. })));
    // SAFETY: As above.
    let write = unsafe { LargeSpanMut::from_raw_parts(owners.as_mut_ptr(), 1) };
    assert!(matches!(write, Err(SpanError::UnsupportedType { .. })));
}

#[test]
fn memory_from_another_allocator() {
    use std::alloc::{Layout, alloc_zeroed, dealloc};

    let len = 1000;
    let layout = Layout::array::<u64>(len).unwrap();
    // SAFETY: The layout has a non-zero size.
    let ptr = unsafe { alloc_zeroed(layout) }.cast::<u64>();
    assert!(!ptr.is_null());
    {
        // SAFETY: ptr holds len zeroed u64 and outlives the span.
        let mut span = unsafe { LargeSpanMut::from_raw_parts(ptr, len) }.unwrap();
        assert!(span.iter().all(|&x| x == 0));
        for (i, x) in span.iter_mut().enumerate() {
            *x = i as u64;
        }
        let (head, tail) = span.split_at_mut(500);
        assert_eq!(head.compare_memory(tail.as_span()), Ordering::Less);
        assert_eq!(tail[0], 500);
    }
    // SAFETY: Allocated above with the same layout.
    unsafe { dealloc(ptr.cast(), layout) };
}

#[test]
fn narrowing_round_trip() {
    let mut data = vec![0u8; 64];
    let span = LargeSpanMut::new(&mut data);
    let slice: &mut [u8] = span.try_into().unwrap();
    slice[63] = 1;
    let span = LargeSpan::from(&*slice);
    let back: &[u8] = span.try_into().unwrap();
    assert_eq!(back.as_ptr(), data.as_ptr());
    assert_eq!(data[63], 1);
}
