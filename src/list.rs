use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::anchor::Anchor;
use crate::cursor::Cursor;
use crate::iter::Iter;
use crate::link::Link;

/// An intrusive circular doubly linked list, rooted at its own sentinel.
///
/// `A` selects, at the type level, the record type and the embedded [`Link`]
/// field this list family manages; see [`Anchor`]. The list owns only the
/// cycle topology: records are caller-owned, and one record may sit in
/// several lists at once through several anchored fields.
///
/// All operations are O(1) and allocation-free. There are no recoverable
/// errors: every precondition is a caller contract, asserted in checked
/// builds and undefined behavior otherwise.
///
/// While the list is empty its sentinel holds no pointers, so an empty list
/// may be moved freely. A non-empty list must stay put; transfer its members
/// to a new location with [`relocate_from`](Self::relocate_from).
pub struct LinkedList<A: Anchor> {
    root: Link,
    len: usize,
    _marker: PhantomData<A>,
}

impl<A: Anchor> LinkedList<A> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            root: Link::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of members currently linked.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root_ref(&self) -> &Link {
        &self.root
    }

    fn root_ptr(&mut self) -> NonNull<Link> {
        NonNull::from(&mut self.root)
    }

    // The sentinel self-links lazily on the first push; the lazy form keeps
    // `new` const and an empty list movable.
    fn rooted(&mut self) -> NonNull<Link> {
        let root = self.root_ptr();
        if !self.root.is_linked() {
            self.root.root_self(root);
        }
        root
    }

    // An emptied cycle collapses back to the pointer-free form, so a drained
    // list is indistinguishable from a fresh one.
    fn normalize_empty(&mut self) {
        if self.len == 0 {
            self.root.reset();
        }
    }

    /// Links `owner`'s anchored link as the first member.
    ///
    /// The anchored link must currently be unlinked, and `owner` must stay at
    /// a stable address for as long as it is a member.
    pub fn push_front(&mut self, owner: NonNull<A::Owner>) {
        let root = self.rooted();
        unsafe { (*root.as_ptr()).link_next(A::link_of(owner)) };
        self.len += 1;
    }

    /// Links `owner`'s anchored link as the last member.
    ///
    /// Same contract as [`push_front`](Self::push_front).
    pub fn push_back(&mut self, owner: NonNull<A::Owner>) {
        let root = self.rooted();
        let last = unsafe { root.as_ref() }.prev_ptr();
        unsafe { (*last.as_ptr()).link_next(A::link_of(owner)) };
        self.len += 1;
    }

    /// Unlinks and returns the first member, or `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<NonNull<A::Owner>> {
        if self.is_empty() {
            return None;
        }
        let first = self.root.next_ptr();
        unsafe { (*first.as_ptr()).unlink() };
        self.len -= 1;
        self.normalize_empty();
        Some(unsafe { A::owner_of(first) })
    }

    /// Unlinks and returns the last member, or `None` on an empty list.
    pub fn pop_back(&mut self) -> Option<NonNull<A::Owner>> {
        if self.is_empty() {
            return None;
        }
        let last = self.root.prev_ptr();
        unsafe { (*last.as_ptr()).unlink() };
        self.len -= 1;
        self.normalize_empty();
        Some(unsafe { A::owner_of(last) })
    }

    /// Cursor at the first member; equals [`end`](Self::end) when the list
    /// is empty.
    pub fn begin(&self) -> Cursor<A> {
        let root = NonNull::from(&self.root);
        let node = if self.is_empty() {
            root
        } else {
            self.root.next_ptr()
        };
        Cursor::new(node, root)
    }

    /// Cursor at the sentinel, one past the last member.
    pub fn end(&self) -> Cursor<A> {
        let root = NonNull::from(&self.root);
        Cursor::new(root, root)
    }

    /// Cursor at `owner`'s current position.
    ///
    /// # Safety
    ///
    /// `owner` must currently be a member of this list.
    pub unsafe fn cursor_of(&self, owner: NonNull<A::Owner>) -> Cursor<A> {
        Cursor::new(A::link_of(owner), NonNull::from(&self.root))
    }

    /// Links `owner` immediately after `pos`. With `pos == end()` the new
    /// member lands at the front, the cycle slot immediately after the
    /// sentinel.
    ///
    /// # Safety
    ///
    /// `pos` must be a live cursor into this list, and `owner` follows the
    /// [`push_front`](Self::push_front) contract.
    pub unsafe fn insert_after(&mut self, pos: Cursor<A>, owner: NonNull<A::Owner>) {
        checked_assert!(pos.root() == self.root_ptr(), "cursor belongs to another list");
        let node = if pos.is_end() { self.rooted() } else { pos.node() };
        unsafe { (*node.as_ptr()).link_next(A::link_of(owner)) };
        self.len += 1;
    }

    /// Unlinks the member at `pos`. The cursor, and every copy pointing at
    /// the same member, is dead afterwards; when erasing during traversal,
    /// advance a saved copy past the member first.
    ///
    /// # Safety
    ///
    /// `pos` must be a live cursor into this list and must not be the
    /// sentinel.
    pub unsafe fn erase(&mut self, pos: Cursor<A>) {
        checked_assert!(pos.root() == self.root_ptr(), "cursor belongs to another list");
        checked_assert!(!pos.is_end(), "cannot erase the sentinel");
        let node = pos.node();
        unsafe { (*node.as_ptr()).unlink() };
        self.len -= 1;
        self.normalize_empty();
    }

    /// Iterates the members front to back.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while iterating.
    pub unsafe fn iter(&self) -> Iter<'_, A> {
        unsafe { Iter::new(self) }
    }

    /// Takes every member of `donor`, in order, leaving `donor` empty.
    ///
    /// This is the relocation path for a list header: the cycle is re-rooted
    /// onto `self`'s sentinel without touching any member's links except the
    /// two that flanked `donor`'s sentinel. `self` must be empty. Cursors
    /// obtained from `donor` before the call must not be used afterwards.
    pub fn relocate_from(&mut self, donor: &mut Self) {
        checked_assert!(self.is_empty(), "relocation target must be empty");
        if donor.is_empty() {
            return;
        }
        unsafe { self.root.replace_root(&mut donor.root) };
        self.len = donor.len;
        donor.len = 0;
    }
}

impl<A: Anchor> Default for LinkedList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Anchor> Drop for LinkedList<A> {
    // Checked builds unlink every remaining member, so records left chained
    // to a dead sentinel fail loudly on their next list operation instead of
    // corrupting a cycle that no longer exists.
    fn drop(&mut self) {
        if cfg!(any(debug_assertions, feature = "checked")) {
            while self.pop_front().is_some() {}
        }
    }
}

unsafe impl<A: Anchor> Send for LinkedList<A> where A::Owner: Send {}

unsafe impl<A: Anchor> Sync for LinkedList<A> where A::Owner: Sync {}
