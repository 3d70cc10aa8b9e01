use crate::seq::Seq;

pub struct Enumerate<S> {
    seq: S,
}

impl<S> Enumerate<S> {
    pub fn new(seq: S) -> Self {
        Enumerate { seq }
    }
}

impl<T, S> Seq<(usize, T)> for Enumerate<S>
where
    S: Seq<T>,
{
    fn each(self, mut consumer: impl FnMut((usize, T)) -> bool) {
        let mut index = 0_usize;
        self.seq.each(|value| {
            let i = index;
            index += 1;
            consumer((i, value))
        })
    }
}
