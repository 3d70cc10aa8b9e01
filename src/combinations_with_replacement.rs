use crate::pick::pick;
use crate::seq::Seq;

#[derive(Clone, Debug)]
pub struct CombinationsWithReplacement<T> {
    pool: Vec<T>,
    r: usize,
}

/// Every `r`-element multiset of `pool`, in lexicographic order of the
/// pool's indices. Elements may repeat within a tuple, so the index array is
/// non-decreasing rather than strictly increasing.
///
/// Advance rule: find the rightmost index below `n - 1`, increment it, and
/// set every index from there rightward to the new value.
///
/// An empty pool emits nothing, for every `r`. Note the `r == 0` corner:
/// a non-empty pool emits the empty tuple once, but an empty pool emits
/// nothing at all rather than a single empty tuple.
///
/// # Examples
///
/// ```rust
/// use kumiko::Seq;
/// use kumiko::combinations_with_replacement;
///
/// let pairs: Vec<Vec<u8>> =
///     combinations_with_replacement(vec![0, 1], 2).collect();
/// assert_eq!(pairs, vec![vec![0, 0], vec![0, 1], vec![1, 1]]);
/// ```
pub fn combinations_with_replacement<T>(
    pool: Vec<T>,
    r: usize,
) -> CombinationsWithReplacement<T> {
    CombinationsWithReplacement { pool, r }
}

impl<T: Clone> Seq<Vec<T>> for CombinationsWithReplacement<T> {
    fn each(self, mut consumer: impl FnMut(Vec<T>) -> bool) {
        let CombinationsWithReplacement { pool, r } = self;
        let n = pool.len();
        if n == 0 {
            return;
        }
        let mut indices = vec![0_usize; r];
        if !consumer(pick(&pool, &indices)) {
            return;
        }
        loop {
            let Some(i) = (0..r).rev().find(|&i| indices[i] != n - 1) else {
                return;
            };
            let next = indices[i] + 1;
            for j in i..r {
                indices[j] = next;
            }
            if !consumer(pick(&pool, &indices)) {
                return;
            }
        }
    }
}
