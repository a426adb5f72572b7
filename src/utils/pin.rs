use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index` of a pinned
/// `Vec` or array, or `None` if the index is out of bounds.
#[inline]
pub(crate) fn get_pin_mut<C, T>(collection: Pin<&mut C>, index: usize) -> Option<Pin<&mut T>>
where
    C: AsMut<[T]> + ?Sized,
{
    // SAFETY: only called with `Vec<T>` and `[T; N]`, whose `as_mut` never
    // moves elements. `x` is guaranteed to be pinned because it comes from
    // `collection` which is pinned.
    unsafe {
        collection
            .get_unchecked_mut()
            .as_mut()
            .get_mut(index)
            .map(|x| Pin::new_unchecked(x))
    }
}
