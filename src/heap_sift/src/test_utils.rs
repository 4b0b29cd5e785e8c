//! Helpers shared by the unit tests
use crate::HeapCtx;

/// Compares by `Ord`, counting comparator calls and reported moves.
#[derive(Debug, Default)]
pub(crate) struct Counting {
    pub(crate) lt_calls: usize,
    pub(crate) moves: usize,
}

impl<T: Ord> HeapCtx<T> for Counting {
    fn lt(&mut self, x: &T, y: &T) -> bool {
        self.lt_calls += 1;
        *x < *y
    }

    fn on_move(&mut self, _: &mut T, _: usize) {
        self.moves += 1;
    }
}

/// Every sequence of length `len` over the digits `0..radix`.
pub(crate) fn all_sequences(len: usize, radix: usize) -> impl Iterator<Item = Vec<u8>> {
    (0..radix.pow(len as u32)).map(move |mut code| {
        (0..len)
            .map(|_| {
                let digit = (code % radix) as u8;
                code /= radix;
                digit
            })
            .collect()
    })
}

/// A fixed pseudo-random sequence (xorshift32).
pub(crate) fn pseudo_random(len: usize, mut seed: u32) -> Vec<u32> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        })
        .collect()
}

pub(crate) fn sorted<T: Ord + Clone>(x: &[T]) -> Vec<T> {
    let mut x = x.to_vec();
    x.sort();
    x
}

pub(crate) fn assert_same_elements<T: Ord + Clone + std::fmt::Debug>(x: &[T], y: &[T]) {
    assert_eq!(sorted(x), sorted(y));
}
