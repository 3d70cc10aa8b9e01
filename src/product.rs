use crate::seq::Seq;

#[derive(Clone, Debug)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
}

/// The cartesian product of `pools`, emitted odometer-style: the rightmost
/// position varies fastest, carrying leftward on overflow.
///
/// Each emission picks one element from every pool into a fresh tuple. An
/// empty list of pools emits the empty tuple exactly once; a list containing
/// any zero-length pool emits nothing, since no cross-selection through that
/// pool exists.
///
/// # Examples
///
/// ```rust
/// use kumiko::Seq;
/// use kumiko::product;
///
/// let cross: Vec<Vec<char>> =
///     product(vec![vec!['1', '2'], vec!['a', 'b']]).collect();
/// assert_eq!(cross, vec![
///     vec!['1', 'a'],
///     vec!['1', 'b'],
///     vec!['2', 'a'],
///     vec!['2', 'b'],
/// ]);
/// ```
pub fn product<T>(pools: Vec<Vec<T>>) -> Product<T> {
    Product { pools }
}

/// The cartesian product of `repeat` copies of one pool; `product()` over
/// the pool list `[pool; repeat]`.
pub fn product_repeat<T: Clone>(pool: Vec<T>, repeat: usize) -> Product<T> {
    product(vec![pool; repeat])
}

impl<T: Clone> Seq<Vec<T>> for Product<T> {
    fn each(self, mut consumer: impl FnMut(Vec<T>) -> bool) {
        let Product { pools } = self;
        if pools.iter().any(|pool| pool.is_empty()) {
            return;
        }
        let maxed: Vec<usize> = pools.iter().map(|pool| pool.len() - 1).collect();
        let mut indices = vec![0_usize; pools.len()];
        loop {
            let picked: Vec<T> = indices
                .iter()
                .zip(&pools)
                .map(|(&i, pool)| pool[i].clone())
                .collect();
            if !consumer(picked) {
                return;
            }
            if indices == maxed {
                return;
            }
            for i in (0..indices.len()).rev() {
                if indices[i] < maxed[i] {
                    indices[i] += 1;
                    break;
                }
                indices[i] = 0;
            }
        }
    }
}
