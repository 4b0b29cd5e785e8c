use arrayvec::ArrayVec;
use core::ops::DerefMut;

/// Growable backing store of a [`BinaryHeap`](super::BinaryHeap).
///
/// The heap region is the whole slice the store dereferences to; the store
/// only has to add and remove elements at the end of it.
pub trait HeapStorage: DerefMut<Target = [<Self as HeapStorage>::Item]> {
    type Item;

    /// Append `item`, or give it back if the store is at capacity.
    fn try_append(&mut self, item: Self::Item) -> Result<(), Self::Item>;

    /// Remove and return the last element.
    fn take_last(&mut self) -> Option<Self::Item>;
}

impl<T, const N: usize> HeapStorage for ArrayVec<T, N> {
    type Item = T;

    fn try_append(&mut self, item: T) -> Result<(), T> {
        self.try_push(item).map_err(|e| e.element())
    }

    fn take_last(&mut self) -> Option<T> {
        self.pop()
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> HeapStorage for alloc::vec::Vec<T> {
    type Item = T;

    fn try_append(&mut self, item: T) -> Result<(), T> {
        self.push(item);
        Ok(())
    }

    fn take_last(&mut self) -> Option<T> {
        self.pop()
    }
}
