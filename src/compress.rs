use crate::seq::Seq;

pub struct Compress<S, M> {
    seq: S,
    selectors: M,
}

impl<S, M> Compress<S, M> {
    pub fn new(seq: S, selectors: M) -> Self
    where
        M: Iterator<Item = bool>,
    {
        Compress { seq, selectors }
    }
}

impl<T, S, M> Seq<T> for Compress<S, M>
where
    S: Seq<T>,
    M: Iterator<Item = bool>,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        let Compress { seq, mut selectors } = self;
        seq.each(|value| match selectors.next() {
            Some(true) => consumer(value),
            Some(false) => true,
            None => false,
        })
    }
}
