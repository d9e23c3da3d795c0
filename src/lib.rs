//! # Intrusive circular doubly linked list
//!
//! The link state lives directly inside the record that joins a list: a
//! record embeds one [`link::Link`] per list family it can belong to, and a
//! [`list::LinkedList`] manages exactly one such field, selected at the type
//! level by an [`anchor::Anchor`] tag. No list operation allocates, and the
//! list never owns, copies, or frees a record.
//!
//! ## Core Components
//!
//! - [`link::Link`]: the embeddable two-pointer primitive.
//! - [`anchor::Anchor`]: ties a list family to one `Link` field of a record
//!   type; declared with [`anchor!`] or `#[derive(Anchored)]`.
//! - [`list::LinkedList`]: the sentinel-rooted circular list.
//! - [`cursor::Cursor`]: a position handle supporting bidirectional steps and
//!   owner recovery.
//! - [`iter::Iter`]: a double-ended borrowing iterator over the members.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this crate is responsible for upholding several invariants:
//!
//! - A record must stay at a stable address and outlive every list it is
//!   linked into; unlink it from all of them before invalidating its storage.
//! - A `Link` field must not be linked into a second list without being
//!   unlinked first.
//! - Lists must not be mutated while an iterator over them is alive, and a
//!   cursor dies with the member it points at.
//! - A non-empty list must not be moved; relocation goes through
//!   [`list::LinkedList::relocate_from`], which re-roots the cycle.
//! - All access is single-threaded or externally synchronized.
//!
//! Violations are caught by assertions under `debug_assertions` or the
//! `checked` feature, and are undefined behavior otherwise.
//!
//! # Examples
//!
//! ```
//! use core::ptr::NonNull;
//! use ring_list::{anchor, link::Link, list::LinkedList};
//!
//! struct Task {
//!     value: i32,
//!     queue: Link,
//! }
//!
//! anchor!(ByQueue for Task => queue);
//!
//! let mut first = Task { value: 1, queue: Link::new() };
//! let mut second = Task { value: 2, queue: Link::new() };
//!
//! let mut list = LinkedList::<ByQueue>::new();
//! list.push_back(NonNull::from(&mut first));
//! list.push_back(NonNull::from(&mut second));
//!
//! let values: Vec<i32> = unsafe { list.iter().map(|t| t.as_ref().value).collect() };
//! assert_eq!(values, vec![1, 2]);
//!
//! while list.pop_front().is_some() {}
//! assert!(list.is_empty());
//! ```
#![no_std]

// Precondition checks stay on in debug builds and can be kept in release
// builds through the `checked` feature.
macro_rules! checked_assert {
    ($($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($($arg)*);
        }
    };
}

pub mod anchor;
pub mod cursor;
pub mod iter;
pub mod link;
pub mod list;

#[cfg(test)]
mod tests;

pub use ring_list_derive::Anchored;
