use core::ptr::NonNull;

/// A link in a circular doubly linked list.
///
/// Embed one `Link` per list family the owning record can join. A link is
/// either unlinked (both pointers absent) or part of exactly one cycle, a
/// cycle that always contains exactly one list sentinel. The link carries no
/// payload and does not know which record embeds it; address translation is
/// the anchor's job.
#[derive(Debug)]
pub struct Link {
    next: Option<NonNull<Link>>,
    prev: Option<NonNull<Link>>,
}

impl Link {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    /// Returns `true` while this link is part of a cycle.
    ///
    /// Only meaningful under `debug_assertions` or the `checked` feature:
    /// unchecked builds leave the stale pointers behind after an unlink.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    #[inline]
    pub(crate) fn next_ptr(&self) -> NonNull<Link> {
        self.next.expect("link is not a member of any list")
    }

    #[inline]
    pub(crate) fn prev_ptr(&self) -> NonNull<Link> {
        self.prev.expect("link is not a member of any list")
    }

    /// Splices `self` into a cycle with itself. `this` must be the address
    /// of `self`; used only to root a list's sentinel.
    #[inline]
    pub(crate) fn root_self(&mut self, this: NonNull<Link>) {
        self.next = Some(this);
        self.prev = Some(this);
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.next = None;
        self.prev = None;
    }

    /// Splices the unlinked `node` into the cycle immediately after `self`.
    ///
    /// # Safety
    ///
    /// `self` must be part of a cycle whose links are all live, and `node`
    /// must not alias `self`.
    pub(crate) unsafe fn link_next(&mut self, node: NonNull<Link>) {
        let this = NonNull::from(&mut *self);
        let node_ref = unsafe { &mut *node.as_ptr() };
        checked_assert!(
            !node_ref.is_linked(),
            "record is already linked into a list"
        );
        node_ref.next = self.next;
        node_ref.prev = Some(this);
        unsafe { &mut *self.next_ptr().as_ptr() }.prev = Some(node);
        self.next = Some(node);
    }

    /// Removes `self` from its cycle by connecting its two neighbors to each
    /// other. Checked builds reset `self` to the unlinked state so that a
    /// reuse-after-unlink fails loudly; unchecked builds leave the stale
    /// pointers behind.
    ///
    /// # Safety
    ///
    /// `self` must be linked and both its neighbors must be live.
    pub(crate) unsafe fn unlink(&mut self) {
        let next = self.next_ptr();
        let prev = self.prev_ptr();
        unsafe { &mut *prev.as_ptr() }.next = Some(next);
        unsafe { &mut *next.as_ptr() }.prev = Some(prev);
        if cfg!(any(debug_assertions, feature = "checked")) {
            self.reset();
        }
    }

    /// Splices `self` into `old`'s cycle in `old`'s place, leaving every
    /// other member untouched, then resets `old` to the unlinked state. Used
    /// only when a list relocates its sentinel.
    ///
    /// # Safety
    ///
    /// `old` must be a rooted sentinel with live neighbors, and `self` must
    /// be unlinked.
    pub(crate) unsafe fn replace_root(&mut self, old: &mut Link) {
        checked_assert!(!self.is_linked(), "new root is already part of a cycle");
        let this = NonNull::from(&mut *self);
        let next = old.next_ptr();
        let prev = old.prev_ptr();
        unsafe { &mut *prev.as_ptr() }.next = Some(this);
        unsafe { &mut *next.as_ptr() }.prev = Some(this);
        self.next = Some(next);
        self.prev = Some(prev);
        old.reset();
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Send for Link {}
unsafe impl Sync for Link {}
