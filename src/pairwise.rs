use crate::cursor::Cursor;
use crate::seq::Seq;

pub struct Pairwise<S> {
    seq: S,
}

impl<S> Pairwise<S> {
    pub fn new(seq: S) -> Self {
        Pairwise { seq }
    }
}

impl<T, S> Seq<(T, T)> for Pairwise<S>
where
    T: Clone + Send + 'static,
    S: Seq<T> + Send + 'static,
{
    fn each(self, mut consumer: impl FnMut((T, T)) -> bool) {
        let mut cursor = Cursor::new(self.seq);
        let Some(mut previous) = cursor.advance() else {
            return;
        };
        while let Some(value) = cursor.advance() {
            if !consumer((previous, value.clone())) {
                return;
            }
            previous = value;
        }
    }
}
