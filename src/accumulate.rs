use crate::seq::Seq;

pub struct Accumulate<T, S, F> {
    seq: S,
    op: F,
    initial: T,
}

impl<T, S, F> Accumulate<T, S, F> {
    pub fn new(seq: S, op: F, initial: T) -> Self
    where
        S: Seq<T>,
        F: FnMut(T, T) -> T,
    {
        Accumulate { seq, op, initial }
    }
}

impl<T, S, F> Seq<T> for Accumulate<T, S, F>
where
    T: Clone,
    S: Seq<T>,
    F: FnMut(T, T) -> T,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        let Accumulate {
            seq,
            mut op,
            initial,
        } = self;
        let mut total = initial;
        seq.each(|value| {
            total = op(total.clone(), value);
            consumer(total.clone())
        })
    }
}
