use core::ptr::NonNull;

use crate::anchor::Anchor;
use crate::link::Link;
use crate::list::LinkedList;

/// A double-ended iterator over the members of a list, yielding pointers to
/// the owning records front to back.
pub struct Iter<'a, A: Anchor> {
    head: NonNull<Link>,
    tail: NonNull<Link>,
    remaining: usize,
    _list: &'a LinkedList<A>,
}

impl<'a, A: Anchor> Iter<'a, A> {
    /// Creates a new iterator over the given list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the
    /// iterator is alive.
    pub(crate) unsafe fn new(list: &'a LinkedList<A>) -> Self {
        let root = NonNull::from(list.root_ref());
        let (head, tail) = if list.is_empty() {
            (root, root)
        } else {
            (list.root_ref().next_ptr(), list.root_ref().prev_ptr())
        };
        Self {
            head,
            tail,
            remaining: list.len(),
            _list: list,
        }
    }
}

impl<'a, A: Anchor> Iterator for Iter<'a, A> {
    type Item = NonNull<A::Owner>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.head;
        self.head = unsafe { node.as_ref() }.next_ptr();
        Some(unsafe { A::owner_of(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A: Anchor> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.tail;
        self.tail = unsafe { node.as_ref() }.prev_ptr();
        Some(unsafe { A::owner_of(node) })
    }
}

impl<'a, A: Anchor> ExactSizeIterator for Iter<'a, A> {}

unsafe impl<'a, A: Anchor> Send for Iter<'a, A> where A::Owner: Send {}

unsafe impl<'a, A: Anchor> Sync for Iter<'a, A> where A::Owner: Sync {}
