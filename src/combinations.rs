use crate::pick::pick;
use crate::seq::Seq;

#[derive(Clone, Debug)]
pub struct Combinations<T> {
    pool: Vec<T>,
    r: usize,
}

/// Every `r`-element subset of `pool`, in lexicographic order of the pool's
/// indices.
///
/// The working state is a strictly increasing index array of length `r`,
/// advanced in place: find the rightmost index with room to move, bump it,
/// and reset everything to its right to consecutive successors. Each emitted
/// tuple is freshly allocated.
///
/// `r` larger than the pool produces an empty sequence; `r == 0` produces
/// exactly one empty tuple.
///
/// # Examples
///
/// ```rust
/// use kumiko::Seq;
/// use kumiko::combinations;
///
/// let pairs: Vec<Vec<char>> = combinations(vec!['a', 'b', 'c'], 2).collect();
/// assert_eq!(pairs, vec![
///     vec!['a', 'b'],
///     vec!['a', 'c'],
///     vec!['b', 'c'],
/// ]);
/// ```
pub fn combinations<T>(pool: Vec<T>, r: usize) -> Combinations<T> {
    Combinations { pool, r }
}

impl<T: Clone> Seq<Vec<T>> for Combinations<T> {
    fn each(self, mut consumer: impl FnMut(Vec<T>) -> bool) {
        let Combinations { pool, r } = self;
        let n = pool.len();
        if r > n {
            return;
        }
        let mut indices: Vec<usize> = (0..r).collect();
        if !consumer(pick(&pool, &indices)) {
            return;
        }
        loop {
            // rightmost index not yet at its highest allowed position
            let Some(i) = (0..r).rev().find(|&i| indices[i] != i + n - r) else {
                return;
            };
            indices[i] += 1;
            for j in i + 1..r {
                indices[j] = indices[j - 1] + 1;
            }
            if !consumer(pick(&pool, &indices)) {
                return;
            }
        }
    }
}
