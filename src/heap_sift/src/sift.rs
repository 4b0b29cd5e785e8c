//! Sift primitives maintaining the max-heap invariant
//!
//! The children of position `i` are at `2 * i + 1` and `2 * i + 2`. Every
//! routine treats the whole slice it's given as the heap region; restrict the
//! region by re-slicing.
//!
//! Each routine lifts one element out of the region, pulls the elements on
//! its path over the vacancy one by one, and drops the lifted element into
//! the final vacancy. That is one move per level instead of the three a swap
//! costs.
mod hole;

use self::hole::Hole;
use crate::HeapCtx;

/// Read access to the elements of a region that may contain a hole.
trait Elements<T> {
    /// # Safety
    ///
    /// `index` must be within the region and must not be the hole.
    unsafe fn at(&self, index: usize) -> &T;
}

impl<T> Elements<T> for [T] {
    #[inline]
    unsafe fn at(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> Elements<T> for Hole<'_, T> {
    #[inline]
    unsafe fn at(&self, index: usize) -> &T {
        unsafe { self.peek(index) }
    }
}

/// Choose the greater of the children of some node. The left child is at
/// `left`; the right child is considered only if `ASSUME_BOTH` is set or
/// `left < bound`.
///
/// # Safety
///
/// `left` must point to an element of `elements` that isn't the hole. So
/// must `left + 1` if the right child is considered.
#[inline]
unsafe fn choose_child<const ASSUME_BOTH: bool, T, E, C>(
    elements: &E,
    left: usize,
    bound: usize,
    ctx: &mut C,
) -> (usize, bool)
where
    E: Elements<T> + ?Sized,
    C: HeapCtx<T>,
{
    if ASSUME_BOTH || left < bound {
        let use_right = unsafe { ctx.lt(elements.at(left), elements.at(left + 1)) };
        (left + use_right as usize, use_right)
    } else {
        (left, false)
    }
}

/// Choose the greater of the two children whose left one is at `left`.
///
/// The right child (`left + 1`) exists iff `ASSUME_BOTH` is set or
/// `left < bound`. If it does, the comparator is called exactly once, and
/// the right child is chosen only if the left one compares less than it.
/// Otherwise the left child is chosen without calling the comparator.
///
/// Returns the chosen index and whether it's the right child.
///
/// # Panics
///
/// Panics if either considered child is out of bounds of `v`.
pub fn select_child<const ASSUME_BOTH: bool, T, C: HeapCtx<T>>(
    v: &[T],
    left: usize,
    bound: usize,
    mut ctx: C,
) -> (usize, bool) {
    assert!(left < v.len(), "left child out of bounds");
    if ASSUME_BOTH || left < bound {
        assert!(left + 1 < v.len(), "right child out of bounds");
    }

    // Safety: Both considered children are within `v`
    unsafe { choose_child::<ASSUME_BOTH, T, _, _>(v, left, bound, &mut ctx) }
}

/// Restore the heap invariant for the subtree rooted at `start`, assuming
/// the subtrees rooted at its children are already heaps.
///
/// The element at `start` sinks along the path of greater children and
/// stops as soon as the greater child compares less than it. This takes at
/// most `⌊log2 n⌋` moves and `2⌊log2 n⌋` comparator calls. When the subtree
/// is already in heap order, it returns after at most two comparator calls
/// and no moves.
pub fn sift_down<T, C: HeapCtx<T>>(v: &mut [T], start: usize, ctx: C) {
    // In an odd-length region, every node with a child has two children
    if v.len() % 2 == 1 {
        sift_down_inner::<true, T, C>(v, start, ctx)
    } else {
        sift_down_inner::<false, T, C>(v, start, ctx)
    }
}

fn sift_down_inner<const ASSUME_BOTH: bool, T, C: HeapCtx<T>>(
    v: &mut [T],
    start: usize,
    mut ctx: C,
) {
    let len = v.len();
    if len < 2 {
        return;
    }

    debug_assert!(start < len, "start out of bounds");
    if start >= len / 2 {
        // `start` is a leaf
        return;
    }

    // Safety: `start < len / 2`, so `start` has a left child. A node's
    // children are visited only after checking it has any, and a right
    // child is only read if `left < len - 1` or `len` is odd.
    unsafe {
        let (mut child, _) =
            choose_child::<ASSUME_BOTH, T, _, _>(&*v, 2 * start + 1, len - 1, &mut ctx);

        // check if we are in heap-order
        if ctx.lt(v.get_unchecked(child), v.get_unchecked(start)) {
            return;
        }

        let mut hole = Hole::lift(v, start);
        loop {
            // we are not in heap-order, move the greater child up
            hole.pull(child, &mut ctx);

            if len / 2 - 1 < child {
                break;
            }

            (child, _) =
                choose_child::<ASSUME_BOTH, T, _, _>(&hole, 2 * child + 1, len - 1, &mut ctx);

            // compare against the held element; the vacancy's slot is stale
            if ctx.lt(hole.peek(child), hole.held()) {
                break;
            }
        }

        hole.settle(&mut ctx);
    }
}

/// Where a [`floyd_sift_down`] left the displaced element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descent {
    /// The leaf where the hole came to rest. The element displaced from the
    /// starting position has been written here.
    pub hole: usize,
    /// The number of levels the hole descended.
    pub depth: usize,
}

impl Descent {
    /// The child counter the descent ends with: the 1-based position of the
    /// final hole, `hole + 1`. A bubble-up can use it directly, since the
    /// parent of 1-based position `k` is `k / 2`.
    #[inline]
    pub fn child(&self) -> usize {
        self.hole + 1
    }

    /// Returns `true` iff the hole stopped at a leaf of a region of length
    /// `len`.
    #[inline]
    pub fn is_leaf_of(&self, len: usize) -> bool {
        self.hole < len && self.hole >= len / 2
    }
}

/// Sink a hole from the root to a leaf, always moving the greater child up,
/// without comparing against the displaced element.
///
/// The displaced element ends up at the returned leaf. Finish the restore
/// with [`sift_up`] from there; the two phases together trade extra moves
/// for fewer comparator calls than [`sift_down`] when the displaced element
/// is likely to belong near the bottom.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn floyd_sift_down<T, C: HeapCtx<T>>(v: &mut [T], ctx: C) -> Descent {
    floyd_sift_down_from(v, 0, ctx)
}

/// [`floyd_sift_down`] for the subtree rooted at `start`.
///
/// # Panics
///
/// Panics if `start` is out of bounds.
pub fn floyd_sift_down_from<T, C: HeapCtx<T>>(v: &mut [T], start: usize, mut ctx: C) -> Descent {
    let len = v.len();
    assert!(start < len, "floyd_sift_down needs a non-empty region");

    let mut depth = 0;

    // Safety: `start < len`. The right child is read only while it's within
    // `v` (`vacant < (len - 1) / 2`), the lone left child only if
    // `vacant < len / 2`.
    unsafe {
        let mut hole = Hole::lift(v, start);

        while hole.vacant() < (len - 1) / 2 {
            let left = 2 * hole.vacant() + 1;
            let (child, _) = choose_child::<true, T, _, _>(&hole, left, len, &mut ctx);
            hole.pull(child, &mut ctx);
            depth += 1;
        }

        // An even-length region ends in a lone left child
        if hole.vacant() < len / 2 {
            let left = 2 * hole.vacant() + 1;
            hole.pull(left, &mut ctx);
            depth += 1;
        }

        Descent {
            hole: hole.settle(&mut ctx),
            depth,
        }
    }
}

/// Move the element at `pos` toward `top` while its parent compares less
/// than it. Returns the element's final position.
///
/// `top` must be `pos` or one of its ancestors.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
pub fn sift_up<T, C: HeapCtx<T>>(v: &mut [T], top: usize, pos: usize, mut ctx: C) -> usize {
    assert!(pos < v.len(), "pos out of bounds");
    debug_assert!(top <= pos);

    // Safety: `pos` is within `v`, and so is every ancestor of it
    unsafe {
        let mut hole = Hole::lift(v, pos);

        while hole.vacant() > top {
            let parent = (hole.vacant() - 1) / 2;
            if !ctx.lt(hole.peek(parent), hole.held()) {
                break;
            }
            hole.pull(parent, &mut ctx);
        }

        hole.settle(&mut ctx)
    }
}
