/// Context type for the sift operations and everything built on them.
///
/// The heap is a max-heap under [`lt`](Self::lt): no element compares
/// greater than its parent.
pub trait HeapCtx<Element> {
    /// Return `true` iff `x < y`.
    ///
    /// Must be a strict weak ordering. The complexity bounds of this crate
    /// are stated in calls to this method.
    fn lt(&mut self, x: &Element, y: &Element) -> bool;

    /// Called when the element `e` is moved to the new position `new_index`.
    fn on_move(&mut self, e: &mut Element, new_index: usize) {
        let _ = (e, new_index);
    }
}

impl<T: Ord> HeapCtx<T> for () {
    fn lt(&mut self, x: &T, y: &T) -> bool {
        *x < *y
    }
}

impl<Element, C: HeapCtx<Element> + ?Sized> HeapCtx<Element> for &mut C {
    #[inline]
    fn lt(&mut self, x: &Element, y: &Element) -> bool {
        (**self).lt(x, y)
    }

    #[inline]
    fn on_move(&mut self, e: &mut Element, new_index: usize) {
        (**self).on_move(e, new_index)
    }
}

/// Wraps a less-than closure as a [`HeapCtx`].
#[derive(Debug, Clone, Copy)]
pub struct ByLess<F>(pub F);

impl<Element, F> HeapCtx<Element> for ByLess<F>
where
    F: FnMut(&Element, &Element) -> bool,
{
    #[inline]
    fn lt(&mut self, x: &Element, y: &Element) -> bool {
        (self.0)(x, y)
    }
}
