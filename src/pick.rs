/// Copies the pool elements at `indices` into a fresh tuple. Every emission
/// from the combinatorial generators goes through here, so emitted tuples
/// never alias the generator's working state.
pub(crate) fn pick<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| pool[i].clone()).collect()
}
