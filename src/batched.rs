use crate::seq::Seq;

pub struct Batched<S> {
    seq: S,
    size: usize,
}

impl<S> Batched<S> {
    pub fn new(seq: S, size: usize) -> Self {
        assert!(size > 0, "batch size must be positive");
        Batched { seq, size }
    }
}

impl<T, S> Seq<Vec<T>> for Batched<S>
where
    S: Seq<T>,
{
    fn each(self, mut consumer: impl FnMut(Vec<T>) -> bool) {
        let Batched { seq, size } = self;
        let mut batch = Vec::with_capacity(size);
        let mut stopped = false;
        seq.each(|value| {
            batch.push(value);
            if batch.len() == size {
                let full = std::mem::replace(&mut batch, Vec::with_capacity(size));
                let keep = consumer(full);
                stopped = !keep;
                keep
            } else {
                true
            }
        });
        if !stopped && !batch.is_empty() {
            consumer(batch);
        }
    }
}
