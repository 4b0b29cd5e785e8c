//! Heap operations built on the primitives in [`crate::sift`]
//!
//! The slice functions mirror the classic array-heap operations. The
//! [`BinaryHeap`] trait packages them for growable containers.
mod storage;
pub use self::storage::*;

use crate::{sift, HeapCtx};

/// Rearrange `v` into a heap by sifting down every internal node, last one
/// first.
pub fn make_heap<T, C: HeapCtx<T>>(v: &mut [T], mut ctx: C) {
    log::trace!("make_heap: len = {}", v.len());

    for start in (0..v.len() / 2).rev() {
        sift::sift_down(v, start, &mut ctx);
    }
}

/// Rearrange `v` into a heap using Floyd's descent for every internal node
/// followed by a bubble-up that stops at that node.
pub fn make_heap_floyd<T, C: HeapCtx<T>>(v: &mut [T], mut ctx: C) {
    log::trace!("make_heap_floyd: len = {}", v.len());

    for start in (0..v.len() / 2).rev() {
        let descent = sift::floyd_sift_down_from(v, start, &mut ctx);
        sift::sift_up(v, start, descent.hole, &mut ctx);
    }
}

/// Add the last element of `v` to the heap `v[..v.len() - 1]`. Returns its
/// final position.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn push_heap<T, C: HeapCtx<T>>(v: &mut [T], ctx: C) -> usize {
    assert!(!v.is_empty(), "push_heap on an empty slice");
    let last = v.len() - 1;
    sift::sift_up(v, 0, last, ctx)
}

/// Move the greatest element of the heap `v` to the end and restore the heap
/// invariant for `v[..v.len() - 1]`.
pub fn pop_heap<T, C: HeapCtx<T>>(v: &mut [T], mut ctx: C) {
    let len = v.len();
    if len < 2 {
        return;
    }

    v.swap(0, len - 1);
    ctx.on_move(&mut v[len - 1], len - 1);

    // The element now at the root came from the bottom, so it most likely
    // belongs near the bottom again
    let rest = &mut v[..len - 1];
    let descent = sift::floyd_sift_down(rest, &mut ctx);
    sift::sift_up(rest, 0, descent.hole, &mut ctx);
}

/// Turn the heap `v` into a sorted sequence, ascending under `ctx`.
pub fn sort_heap<T, C: HeapCtx<T>>(v: &mut [T], mut ctx: C) {
    log::trace!("sort_heap: len = {}", v.len());

    for end in (2..=v.len()).rev() {
        pop_heap(&mut v[..end], &mut ctx);
    }
}

/// Sort `v`, ascending under `ctx`. This sort is not stable.
pub fn heap_sort<T, C: HeapCtx<T>>(v: &mut [T], mut ctx: C) {
    make_heap(v, &mut ctx);
    sort_heap(v, &mut ctx);
}

/// Returns the length of the longest prefix of `v` that is a heap.
pub fn is_heap_until<T, C: HeapCtx<T>>(v: &[T], mut ctx: C) -> usize {
    (1..v.len())
        .find(|&i| ctx.lt(&v[(i - 1) / 2], &v[i]))
        .unwrap_or(v.len())
}

/// Returns `true` iff no element of `v` compares greater than its parent.
pub fn is_heap<T, C: HeapCtx<T>>(v: &[T], ctx: C) -> bool {
    is_heap_until(v, ctx) == v.len()
}

/// Max-heap kept in a [`HeapStorage`].
pub trait BinaryHeap: HeapStorage {
    /// Return the greatest item.
    fn heap_peek(&self) -> Option<&Self::Item>;

    /// Remove the greatest item from the heap and return it.
    fn heap_pop(&mut self, ctx: impl HeapCtx<Self::Item>) -> Option<Self::Item>;

    /// Remove the item at position `i` and return it.
    fn heap_remove(&mut self, i: usize, ctx: impl HeapCtx<Self::Item>) -> Option<Self::Item>;

    /// Push an item onto the heap and return its position. A full store hands
    /// the item back.
    fn heap_push(
        &mut self,
        item: Self::Item,
        ctx: impl HeapCtx<Self::Item>,
    ) -> Result<usize, Self::Item>;
}

impl<S: HeapStorage> BinaryHeap for S {
    fn heap_peek(&self) -> Option<&Self::Item> {
        self.first()
    }

    fn heap_pop(&mut self, ctx: impl HeapCtx<Self::Item>) -> Option<Self::Item> {
        pop_heap(&mut **self, ctx);
        self.take_last()
    }

    fn heap_remove(&mut self, i: usize, mut ctx: impl HeapCtx<Self::Item>) -> Option<Self::Item> {
        let last = self.len().checked_sub(1)?;
        if i > last {
            return None;
        }

        // The last item fills the gap at `i` and goes whichever way restores
        // the invariant
        self.swap(i, last);
        let item = self.take_last();

        let region = &mut **self;
        if i < region.len() {
            ctx.on_move(&mut region[i], i);
            if sift::sift_up(region, 0, i, &mut ctx) == i {
                sift::sift_down(region, i, &mut ctx);
            }
        }

        item
    }

    fn heap_push(
        &mut self,
        item: Self::Item,
        ctx: impl HeapCtx<Self::Item>,
    ) -> Result<usize, Self::Item> {
        self.try_append(item)?;
        Ok(push_heap(&mut **self, ctx))
    }
}
