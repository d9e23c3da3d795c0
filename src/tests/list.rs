extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::anchor::Anchor;
use crate::link::Link;
use crate::list::LinkedList;

struct Item {
    value: i32,
    node: Link,
}

impl Item {
    fn new(value: i32) -> Self {
        Self {
            value,
            node: Link::new(),
        }
    }
}

crate::anchor!(ByNode for Item => node);

unsafe fn values<A: Anchor<Owner = Item>>(list: &LinkedList<A>) -> Vec<i32> {
    unsafe { list.iter().map(|item| item.as_ref().value).collect() }
}

#[test]
fn push_back_keeps_push_order() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    assert!(list.is_empty());

    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(unsafe { values(&list) }, vec![1, 2, 3]);
}

#[test]
fn push_front_prepends() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item2));
    list.push_front(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item3));

    assert_eq!(unsafe { values(&list) }, vec![1, 2, 3]);
}

#[test]
fn reverse_traversal_mirrors_forward() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    let forward = unsafe { values(&list) };
    let backward: Vec<i32> =
        unsafe { list.iter().rev().map(|item| item.as_ref().value).collect() };

    let mut expected = forward.clone();
    expected.reverse();
    assert_eq!(backward, expected);
}

#[test]
fn pop_both_ends() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    let popped = list.pop_front().unwrap();
    assert_eq!(unsafe { popped.as_ref().value }, 1);

    let popped = list.pop_back().unwrap();
    assert_eq!(unsafe { popped.as_ref().value }, 3);

    assert_eq!(unsafe { values(&list) }, vec![2]);

    assert!(list.pop_back().is_some());
    assert!(list.pop_front().is_none());
    assert!(list.pop_back().is_none());
    assert!(list.is_empty());
}

#[test]
fn erased_member_can_rejoin() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));

    unsafe { list.erase(list.begin()) };
    assert_eq!(unsafe { values(&list) }, vec![2]);

    list.push_back(NonNull::from(&mut item1));
    assert_eq!(unsafe { values(&list) }, vec![2, 1]);
}

#[test]
fn draining_restores_fresh_state() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    while list.begin() != list.end() {
        unsafe { list.erase(list.begin()) };
    }

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.begin() == list.end());

    // the drained list is fully reusable
    list.push_back(NonNull::from(&mut item2));
    assert_eq!(unsafe { values(&list) }, vec![2]);
}

#[test]
fn insert_after_positions() {
    let mut item0 = Item::new(0);
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item3));

    unsafe { list.insert_after(list.begin(), NonNull::from(&mut item2)) };
    assert_eq!(unsafe { values(&list) }, vec![1, 2, 3]);

    // inserting after the sentinel lands at the front of the cycle
    unsafe { list.insert_after(list.end(), NonNull::from(&mut item0)) };
    assert_eq!(unsafe { values(&list) }, vec![0, 1, 2, 3]);
}

#[test]
fn cursor_walks_both_directions() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    let mut cursor = list.begin();
    assert_eq!(unsafe { cursor.owner().as_ref().value }, 1);

    unsafe {
        cursor.move_next();
        cursor.move_next();
    }
    assert_eq!(unsafe { cursor.owner().as_ref().value }, 3);

    unsafe { cursor.move_next() };
    assert!(cursor.is_end());
    assert!(cursor == list.end());

    unsafe { cursor.move_prev() };
    assert_eq!(unsafe { cursor.owner().as_ref().value }, 3);
}

#[test]
fn erase_during_traversal_with_saved_cursor() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    // drop every even member while walking
    let mut cursor = list.begin();
    while cursor != list.end() {
        let doomed = cursor;
        unsafe { cursor.move_next() };
        if unsafe { doomed.owner().as_ref().value } % 2 == 0 {
            unsafe { list.erase(doomed) };
        }
    }

    assert_eq!(unsafe { values(&list) }, vec![1, 3]);
}

#[test]
fn cursor_of_points_at_member() {
    let mut item1 = Item::new(1);
    let mut item2 = Item::new(2);
    let mut item3 = Item::new(3);

    let mut list = LinkedList::<ByNode>::new();
    list.push_back(NonNull::from(&mut item1));
    list.push_back(NonNull::from(&mut item2));
    list.push_back(NonNull::from(&mut item3));

    let cursor = unsafe { list.cursor_of(NonNull::from(&mut item2)) };
    assert_eq!(unsafe { cursor.owner().as_ref().value }, 2);

    unsafe { list.erase(cursor) };
    assert_eq!(unsafe { values(&list) }, vec![1, 3]);
}

#[test]
fn checked_drop_unlinks_members() {
    let mut item = Item::new(1);

    {
        let mut list = LinkedList::<ByNode>::new();
        list.push_back(NonNull::from(&mut item));
        assert!(item.node.is_linked());
    }

    if cfg!(any(debug_assertions, feature = "checked")) {
        assert!(!item.node.is_linked());
    }
}
