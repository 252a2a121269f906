#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_append_order() {
    let mut list = SinglyLinkedList::new();
    let mut ids = [None; 5];
    for i in 0..5 {
        ids[i] = Some(list.append(i));
    }

    assert_eq!(list.len(), 5, "Length should equal the number of appends.");
    for i in 0..5 {
        assert_eq!(list.get(i), Some(&i), "Values should sit in append order.");
        assert_eq!(
            list.node_at(i),
            ids[i],
            "node_at should return the i-th appended node."
        );
        assert_eq!(list.index_of(ids[i].unwrap()), Some(i));
    }
    assert_eq!(list.node_at(5), None, "Walking past the end is not an error.");
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_empty_list() {
    let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.get(0), None);
    assert_eq!(list.node_at(0), None);
}

#[test]
fn test_insert() {
    let mut list = SinglyLinkedList::new();

    list.insert(7, 'b');
    assert_eq!(
        list.get(0),
        Some(&'b'),
        "Inserting into an empty list should ignore the index."
    );

    let id = list.insert(0, 'a');
    assert_eq!(list.get(0), Some(&'a'), "Index 0 should make the new node the head.");
    assert_eq!(list.get(1), Some(&'b'), "The previous order should shift up by one.");
    assert_eq!(list.index_of(id), Some(0));

    list.insert(1, 'x');
    assert_eq!(
        list.iter().collect::<String>(),
        "axb",
        "A body insert should occupy exactly the requested position."
    );

    list.insert(100, 'z');
    assert_eq!(
        list.back(),
        Some(&'z'),
        "An index overshoot should silently clamp to append."
    );
    assert_eq!(list.len(), 4);
}

#[test]
fn test_remove() {
    let mut list = SinglyLinkedList::new();
    let ids: [_; 4] = std::array::from_fn(|i| list.append(i));

    assert_eq!(list.remove(ids[1]), 1, "A body removal should return the value.");
    assert_eq!(
        list.index_of(ids[1]),
        None,
        "A removed node should no longer be found."
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&2), "The chain should be spliced around the removal.");

    assert_eq!(list.remove(ids[3]), 3, "Removing the tail should walk to its predecessor.");
    assert_eq!(list.back(), Some(&2));

    assert_eq!(list.remove(ids[0]), 0, "Removing the head should promote its successor.");
    assert_eq!(list.front(), Some(&2));

    assert_eq!(list.remove(ids[2]), 2);
    assert!(list.is_empty(), "Removing the last node should empty the list.");
}

#[test]
fn test_remove_errors() {
    let mut list = SinglyLinkedList::new();
    let id = list.append(1);
    list.remove(id);

    let error = list.try_remove(id).unwrap_err();
    assert!(error.is_empty_list(), "Removal from an empty list should be rejected.");

    list.append(2);
    let error = list.try_remove(id).unwrap_err();
    assert!(
        error.is_node_not_found(),
        "A stale id should fail the membership walk, not corrupt the chain."
    );
    assert_eq!(list.len(), 1, "A failed removal should leave the list unchanged.");

    assert_panics!({
        let mut list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        let id = list.append(1);
        list.remove(id);
        list.remove(id);
    });
}

#[test]
fn test_stale_id_survives_allocation_reuse() {
    // Removing the sole node and appending straight after makes it likely
    // that the allocator hands the new node the old node's slot, so an
    // address comparison alone would revive the stale id.
    let mut list = SinglyLinkedList::new();
    let stale = list.append(1);
    list.remove(stale);
    let fresh = list.append(2);

    assert_ne!(stale, fresh, "A recycled allocation should not revive an old id.");
    assert_eq!(list.index_of(stale), None);
    let error = list.try_remove(stale).unwrap_err();
    assert!(error.is_node_not_found());
    assert_eq!(list.get(0), Some(&2), "The new node should be untouched.");
    assert_eq!(list.remove(fresh), 2, "The new node's own id should still work.");
}

#[test]
fn test_remove_at() {
    let mut list: SinglyLinkedList<_> = (0..4).collect();

    assert_eq!(list.remove_at(2), Some(2));
    assert_eq!(
        list.remove_at(10),
        None,
        "An index past the end should report nothing removed."
    );
    assert_eq!(list.len(), 3);

    assert_eq!(list.try_remove_at(0).unwrap(), Some(0));
    assert_eq!(list.remove_at(1), Some(3));
    assert_eq!(list.remove_at(0), Some(1));

    assert!(
        list.try_remove_at(0).is_err(),
        "remove_at on an empty list violates its precondition."
    );
    assert_panics!({
        let mut list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        list.remove_at(0);
    });
}

#[test]
fn test_pop_back() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();

    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.back(), Some(&1), "The predecessor should become the new tail.");
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), Some(0));
    assert_eq!(list.pop_back(), None, "pop_back on an empty list should be quiet.");
}

#[test]
fn test_replace_at() {
    let counter = DropCounter::new();
    let mut list: SinglyLinkedList<_> =
        iter::repeat_with(|| counter.clone()).take(3).collect();
    let len = list.len();

    let old = list.replace_at(1, DropCounter::new());
    assert!(old.is_some(), "Replacing an occupied position should return the old value.");
    drop(old);
    assert_eq!(counter.count(), 1, "Only the replaced occupant should be released.");
    assert_eq!(list.len(), len, "Replacement should not change the length.");

    drop(list);
    assert_eq!(counter.count(), 3, "The remaining original values should drop with the list.");
}

#[test]
fn test_replace_at_positions() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();

    assert_eq!(list.replace_at(0, 10), Some(0), "Replacing the head should work.");
    assert_eq!(list.replace_at(2, 12), Some(2), "Replacing the tail should work.");
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&10));
    assert_eq!(list.get(1), Some(&1));
    assert_eq!(list.get(2), Some(&12));
    assert_eq!(list.back(), Some(&12), "The tail pointer should follow a tail replacement.");

    let error = list.try_replace_at(3, 99).unwrap_err();
    assert_eq!(
        (error.index, error.len),
        (3, 3),
        "Out of range replacement on a populated list should be rejected."
    );
    assert_panics!({
        let mut list: SinglyLinkedList<_> = (0..3).collect();
        list.replace_at(3, 99);
    });

    let mut empty = SinglyLinkedList::new();
    assert_eq!(
        empty.replace_at(9, 'q'),
        None,
        "Replacing in an empty list should install the sole node."
    );
    assert_eq!(empty.get(0), Some(&'q'));
}

#[test]
fn test_replace_by_id() {
    let mut list = SinglyLinkedList::new();
    list.append("a");
    let target = list.append("b");
    list.append("c");

    assert_eq!(list.replace(target, "B"), "b");
    assert_eq!(list.get(1), Some(&"B"));
    assert_eq!(list.len(), 3);

    assert!(
        list.try_replace(target, "!").is_err(),
        "The replaced node's id should no longer be a member."
    );
    assert_panics!({
        let mut list = SinglyLinkedList::new();
        let id = list.append(0);
        list.remove(id);
        list.replace(id, 1);
    });
}

#[test]
fn test_iteration() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();

    for item in list.iter_mut() {
        *item *= 10;
    }
    assert!(list.iter().copied().eq([0, 10, 20, 30, 40]));

    let counter = DropCounter::new();
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let mut into_iter = list.into_iter();
    drop(into_iter.next());
    assert_eq!(counter.count(), 1);
    drop(into_iter);
    assert_eq!(
        counter.count(),
        4,
        "Unconsumed nodes should be released exactly once with the iterator."
    );
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);

    assert_eq!(counter.count(), 10, "10 values should have been released.");
}

#[test]
fn test_display() {
    let list: SinglyLinkedList<_> = (1..=3).collect();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{}", SinglyLinkedList::<u8>::new()), "");
}

#[test]
fn test_equality() {
    let list: SinglyLinkedList<_> = (0..4).collect();
    let mut other = SinglyLinkedList::new();
    other.extend(0..4);

    assert_eq!(list, other, "Construction method shouldn't affect equality.");
    other.append(4);
    assert_ne!(list, other);
}
