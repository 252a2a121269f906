#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_sequence() {
    let mut buf = Buffer::new();
    assert_eq!(buf.cap(), 0, "A fresh Buffer should allocate nothing.");

    buf.push(10);
    assert_eq!(buf.cap(), 1, "The first growth from zero should be a single slot.");
    buf.push(20);
    assert_eq!(buf.cap(), 2);
    buf.push(30);
    assert_eq!(buf.cap(), 4, "Each further growth should double the capacity.");

    assert_eq!(buf.len(), 3);
    assert_eq!(buf.pop(), 30, "Values should pop in reverse push order.");
    assert_eq!(buf.pop(), 20);
    assert_eq!(buf.pop(), 10);
    assert!(buf.is_empty());
}

#[test]
fn test_push_beyond_initial_cap() {
    let mut buf = Buffer::with_cap(2);
    for i in 0..7 {
        buf.push(i);
    }

    assert_eq!(buf.cap(), 8, "Growth should double 2 -> 4 -> 8.");
    assert_eq!(buf.len(), 7);
    for i in 0..7 {
        assert_eq!(*buf.at(i), i, "All values should be retrievable in push order.");
    }
}

#[test]
fn test_exact_capacity() {
    let mut buf: Buffer<u8> = Buffer::with_cap(5);
    assert_eq!(buf.cap(), 5);

    buf.extend([1, 2, 3, 4, 5]);
    assert_eq!(buf.cap(), 5, "Filling to exactly the capacity shouldn't reallocate.");

    buf.push(6);
    assert_eq!(buf.cap(), 10, "Doubling should start from the requested capacity.");
}

#[test]
fn test_push_pop_round_trip() {
    let mut buf = Buffer::from_iter(0..4);
    let len = buf.len();

    buf.push(99);
    assert_eq!(buf.pop(), 99, "An immediate pop should return the pushed value.");
    assert_eq!(buf.len(), len, "A push-pop pair should restore the previous length.");
    assert_eq!(&*buf, &[0, 1, 2, 3]);
}

#[test]
fn test_at_and_set() {
    let mut buf = Buffer::from_iter([1_u8, 2, 3]);

    assert_eq!(*buf.at(0), 1);
    *buf.at_mut(1) = 20;
    assert_eq!(*buf.at(1), 20);

    assert_eq!(buf.set(2, 30), 3, "set should hand back the previous occupant.");
    assert_eq!(&*buf, &[1, 20, 30]);
    assert_eq!(buf.len(), 3, "Neither access nor overwrite should change the length.");
}

#[test]
fn test_bounds_violations() {
    let buf = Buffer::from_iter(0..3);
    assert_eq!(buf.try_at(2), Some(&2));
    assert_eq!(buf.try_at(3), None, "Reading one past the end should be rejected.");

    let mut buf = buf;
    let error = buf.try_set(5, 50).unwrap_err();
    assert_eq!((error.index, error.len), (5, 3));
    assert_eq!(&*buf, &[0, 1, 2], "A rejected set should leave the Buffer unchanged.");

    assert_panics!({
        let buf = Buffer::from_iter(0..3);
        buf.at(3);
    });
    assert_panics!({
        let mut buf = Buffer::from_iter(0..3);
        buf.set(3, 30);
    });
    assert_panics!({
        let mut buf: Buffer<u8> = Buffer::new();
        buf.pop();
    });
}

#[test]
fn test_try_pop() {
    let mut buf = Buffer::from_iter(0..1);
    assert_eq!(buf.try_pop(), Some(0));
    assert_eq!(buf.try_pop(), None, "try_pop on an empty Buffer should be quiet.");
}

#[test]
fn test_resize() {
    let mut buf = Buffer::from_iter(0_u8..4);

    buf.resize(8).unwrap();
    assert_eq!((buf.len(), buf.cap()), (4, 8));
    assert_eq!(&*buf, &[0, 1, 2, 3], "Growing should preserve all values.");

    buf.resize(8).unwrap();
    assert_eq!(buf.cap(), 8, "Resizing to the current capacity should be a no-op.");

    buf.resize(4).unwrap();
    assert_eq!((buf.len(), buf.cap()), (4, 4), "Shrinking to len should keep every value.");

    buf.resize(0).unwrap();
    assert_eq!((buf.len(), buf.cap()), (0, 0));
}

#[test]
fn test_resize_truncation_drops() {
    let counter = DropCounter::new();
    let mut buf = Buffer::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    buf.resize(4).unwrap();
    assert_eq!(
        counter.count(),
        6,
        "Shrinking below len should release the out-of-range values."
    );
    assert_eq!((buf.len(), buf.cap()), (4, 4), "len should clamp to the new capacity.");

    drop(buf);
    assert_eq!(counter.count(), 10, "The surviving values should be released on drop.");
}

#[test]
fn test_allocation_failure_is_recoverable() {
    let result: Result<Buffer<u64>, _> = Buffer::try_with_cap(usize::MAX);
    let error = result.unwrap_err();
    assert_eq!(error.cap, usize::MAX);

    let mut buf = Buffer::from_iter(0_u64..3);
    assert!(buf.resize(usize::MAX).is_err());
    assert_eq!(
        (&*buf, buf.cap()),
        (&[0, 1, 2][..], 3),
        "A failed resize should leave the Buffer unchanged."
    );
}

#[test]
fn test_growth_overflow_is_recoverable() {
    // Only reachable for zero-sized types, where capacity bookkeeping can
    // climb without allocating.
    let mut buf: Buffer<ZeroSizedType> = Buffer::with_cap(usize::MAX);

    assert!(buf.grow().is_err(), "Doubling past usize::MAX should fail cleanly.");
    assert_eq!(buf.cap(), usize::MAX, "A failed growth should leave the capacity alone.");
}

#[test]
fn test_zst_support() {
    let mut buf = Buffer::new();
    for _ in 0..9 {
        buf.push(ZeroSizedType);
    }

    assert_eq!(buf.len(), 9);
    assert_eq!(
        buf.cap(),
        16,
        "Capacity bookkeeping should follow doubling even when nothing is allocated."
    );
    assert_eq!(buf.pop(), ZeroSizedType);
    assert_eq!(buf.len(), 8);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let buf = Buffer::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(buf);

    assert_eq!(counter.count(), 10, "10 values should have been released.");
}

#[test]
fn test_into_iter() {
    let buf = Buffer::from_iter(0..5);
    let collected: Buffer<_> = buf.into_iter().collect();
    assert_eq!(&*collected, &[0, 1, 2, 3, 4], "Draining should preserve order.");

    let counter = DropCounter::new();
    let buf = Buffer::from_iter(iter::repeat_with(|| counter.clone()).take(6));
    let mut iter = buf.into_iter();
    drop(iter.next());
    drop(iter.next());
    assert_eq!(counter.count(), 2);

    drop(iter);
    assert_eq!(
        counter.count(),
        6,
        "Unconsumed values should be released exactly once with the iterator."
    );
}

#[test]
fn test_equality_and_clone() {
    let buf = Buffer::from_iter(0_u8..5);
    let other = buf.clone();

    assert_eq!(buf, other, "A clone should compare equal to the original.");
    assert_eq!(other.cap(), buf.cap(), "A clone should preserve the exact capacity.");
    assert_ne!(buf, Buffer::from_iter(1_u8..6));
    assert_eq!(Buffer::<u8>::default(), Buffer::new());
}
