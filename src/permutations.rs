use crate::pick::pick;
use crate::seq::Seq;

#[derive(Clone, Debug)]
pub struct Permutations<T> {
    pool: Vec<T>,
    r: usize,
}

/// Every ordered `r`-element arrangement of `pool`, in lexicographic order
/// of the pool's indices.
///
/// Uses the cycle-countdown algorithm: an `n`-length index buffer plus an
/// `r`-length countdown buffer, where `cycles[i]` starts at `n - i`. Each
/// advance walks from position `r - 1` leftward, decrementing the countdown;
/// a position that hits zero rotates its index to the back of the buffer and
/// resets, while a live position swaps with the index `cycles[i]` places
/// from the end and emits. The walk running out without a swap is
/// exhaustion. Every advance is in-place index arithmetic; nothing recurses
/// and nothing rescans the pool.
///
/// `r` larger than the pool produces an empty sequence; `r == 0` produces
/// exactly one empty tuple, even over an empty pool.
///
/// # Examples
///
/// ```rust
/// use kumiko::Seq;
/// use kumiko::permutations;
///
/// let arrangements: Vec<Vec<i32>> = permutations(vec![1, 2, 3], 2).collect();
/// assert_eq!(arrangements, vec![
///     vec![1, 2],
///     vec![1, 3],
///     vec![2, 1],
///     vec![2, 3],
///     vec![3, 1],
///     vec![3, 2],
/// ]);
/// ```
pub fn permutations<T>(pool: Vec<T>, r: usize) -> Permutations<T> {
    Permutations { pool, r }
}

impl<T: Clone> Seq<Vec<T>> for Permutations<T> {
    fn each(self, mut consumer: impl FnMut(Vec<T>) -> bool) {
        let Permutations { pool, r } = self;
        let n = pool.len();
        if r > n {
            return;
        }
        let mut indices: Vec<usize> = (0..n).collect();
        // countdowns n, n-1, .., n-r+1 for the r tracked positions
        let mut cycles: Vec<usize> = (n - r + 1..=n).rev().collect();
        if !consumer(pick(&pool, &indices[..r])) {
            return;
        }
        if n == 0 {
            return;
        }
        loop {
            let mut advanced = false;
            for i in (0..r).rev() {
                cycles[i] -= 1;
                if cycles[i] == 0 {
                    let index = indices.remove(i);
                    indices.push(index);
                    cycles[i] = n - i;
                } else {
                    let j = n - cycles[i];
                    indices.swap(i, j);
                    if !consumer(pick(&pool, &indices[..r])) {
                        return;
                    }
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                return;
            }
        }
    }
}
