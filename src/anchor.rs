use core::ptr::NonNull;

use crate::link::Link;

/// Ties a list family to one embedded [`Link`] field of a record type.
///
/// Implementations are zero-sized tag types declared with [`anchor!`] or
/// `#[derive(Anchored)]`. A record carrying several `Link` fields gets one
/// tag per field; each tag instantiates an independent
/// [`LinkedList`](crate::list::LinkedList) family, and membership in one is
/// completely independent of membership in the others.
///
/// # Safety
///
/// `OFFSET` must be the byte offset of a `Link` field inside `Owner`, fixed
/// for the whole program. The provided address translation is only sound
/// under that contract, which is why the trait is `unsafe` to implement and
/// why the macro and the derive are the expected implementors.
pub unsafe trait Anchor {
    /// The record type that embeds the anchored link field.
    type Owner;

    /// Byte offset of the anchored link field inside `Owner`.
    const OFFSET: usize;

    /// Returns the anchored link of `owner`.
    #[inline]
    fn link_of(owner: NonNull<Self::Owner>) -> NonNull<Link> {
        unsafe { NonNull::new_unchecked(owner.as_ptr().cast::<u8>().add(Self::OFFSET).cast()) }
    }

    /// Recovers the owning record from its anchored link.
    ///
    /// # Safety
    ///
    /// `link` must be the field selected by this anchor inside a live
    /// `Owner`; in particular it must not be a list's sentinel.
    #[inline]
    unsafe fn owner_of(link: NonNull<Link>) -> NonNull<Self::Owner> {
        unsafe { NonNull::new_unchecked(link.as_ptr().cast::<u8>().sub(Self::OFFSET).cast()) }
    }
}

/// Declares an [`Anchor`] tag type for one [`Link`] field of a record.
///
/// ```
/// use ring_list::{anchor, link::Link};
///
/// struct Job {
///     nice: u8,
///     run_queue: Link,
/// }
///
/// anchor!(ByRunQueue for Job => run_queue);
/// ```
#[macro_export]
macro_rules! anchor {
    ($vis:vis $name:ident for $owner:ty => $field:ident) => {
        $vis enum $name {}

        unsafe impl $crate::anchor::Anchor for $name {
            type Owner = $owner;
            const OFFSET: usize = ::core::mem::offset_of!($owner, $field);
        }
    };
}
