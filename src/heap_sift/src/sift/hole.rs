use core::{mem::ManuallyDrop, ptr};

use crate::HeapCtx;

/// A vacant slot travelling through a heap region.
///
/// `lift` takes one element out into `held`. Each `pull` moves a neighbour
/// into the vacancy, reports it through [`HeapCtx::on_move`], and leaves the
/// vacancy where the neighbour was. `settle` reports the held element's
/// final position. Whichever way the guard goes out of scope, including
/// unwinding from a comparator, `Drop` writes `held` into the vacancy.
pub(super) struct Hole<'a, T> {
    region: &'a mut [T],
    held: ManuallyDrop<T>,
    vacant: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Take the element at `at` out of `region`.
    ///
    /// # Safety
    ///
    /// `at < region.len()`.
    #[inline]
    pub(super) unsafe fn lift(region: &'a mut [T], at: usize) -> Self {
        debug_assert!(at < region.len());
        let held = unsafe { ptr::read(region.as_ptr().add(at)) };
        Self {
            region,
            held: ManuallyDrop::new(held),
            vacant: at,
        }
    }

    #[inline]
    pub(super) fn vacant(&self) -> usize {
        self.vacant
    }

    /// The element that was lifted out.
    #[inline]
    pub(super) fn held(&self) -> &T {
        &self.held
    }

    /// # Safety
    ///
    /// `index` must be within the region and not the vacancy.
    #[inline]
    pub(super) unsafe fn peek(&self, index: usize) -> &T {
        debug_assert!(index < self.region.len() && index != self.vacant);
        unsafe { &*self.region.as_ptr().add(index) }
    }

    /// Move the element at `from` into the vacancy and report its new
    /// position. The vacancy moves to `from`.
    ///
    /// # Safety
    ///
    /// `from` must be within the region and not the vacancy.
    #[inline]
    pub(super) unsafe fn pull(&mut self, from: usize, ctx: &mut impl HeapCtx<T>) {
        debug_assert!(from < self.region.len() && from != self.vacant);
        let to = self.vacant;
        unsafe {
            let base = self.region.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(from), base.add(to), 1);
            ctx.on_move(&mut *base.add(to), to);
        }
        self.vacant = from;
    }

    /// Report the held element at the vacancy and give the position back.
    /// The write itself happens in `Drop`.
    #[inline]
    pub(super) fn settle(mut self, ctx: &mut impl HeapCtx<T>) -> usize {
        let at = self.vacant;
        ctx.on_move(&mut self.held, at);
        at
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        unsafe {
            let slot = self.region.as_mut_ptr().add(self.vacant);
            ptr::copy_nonoverlapping(&*self.held, slot, 1);
        }
    }
}
