use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::anchor::Anchor;
use crate::link::Link;

/// A position inside a [`LinkedList`](crate::list::LinkedList): either a
/// live member or the list's sentinel (`end()`).
///
/// Cursors are `Copy` and compare equal when they sit on the same position.
/// A cursor dies when the member it points at is erased and when its list is
/// relocated or dropped; when erasing during traversal, advance a saved copy
/// past the member first and erase through the old one.
pub struct Cursor<A: Anchor> {
    node: NonNull<Link>,
    root: NonNull<Link>,
    _marker: PhantomData<A>,
}

impl<A: Anchor> Cursor<A> {
    pub(crate) fn new(node: NonNull<Link>, root: NonNull<Link>) -> Self {
        Self {
            node,
            root,
            _marker: PhantomData,
        }
    }

    pub(crate) fn node(&self) -> NonNull<Link> {
        self.node
    }

    pub(crate) fn root(&self) -> NonNull<Link> {
        self.root
    }

    /// Returns `true` when the cursor sits on the sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node == self.root
    }

    /// Recovers the record at this position.
    ///
    /// # Safety
    ///
    /// The cursor must be live and must not sit on the sentinel.
    #[inline]
    pub unsafe fn owner(&self) -> NonNull<A::Owner> {
        checked_assert!(!self.is_end(), "cannot dereference the end cursor");
        unsafe { A::owner_of(self.node) }
    }

    /// Steps to the next position. Stepping past the last member lands on
    /// the sentinel.
    ///
    /// # Safety
    ///
    /// The cursor must be live.
    #[inline]
    pub unsafe fn move_next(&mut self) {
        self.node = unsafe { self.node.as_ref() }.next_ptr();
    }

    /// Steps to the previous position. Stepping back from the first member
    /// lands on the sentinel; stepping back from there again is a contract
    /// violation.
    ///
    /// # Safety
    ///
    /// The cursor must be live.
    #[inline]
    pub unsafe fn move_prev(&mut self) {
        self.node = unsafe { self.node.as_ref() }.prev_ptr();
    }
}

impl<A: Anchor> Clone for Cursor<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Anchor> Copy for Cursor<A> {}

impl<A: Anchor> PartialEq for Cursor<A> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<A: Anchor> Eq for Cursor<A> {}
