use crate::cursor::Cursor;
use crate::seq::Seq;

pub struct Take<S> {
    seq: S,
    n: usize,
}

impl<S> Take<S> {
    pub fn new(seq: S, n: usize) -> Self {
        Take { seq, n }
    }
}

impl<T, S> Seq<T> for Take<S>
where
    T: Send + 'static,
    S: Seq<T> + Send + 'static,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        let Take { seq, n } = self;
        let mut cursor = Cursor::new(seq);
        for _ in 0..n {
            let Some(value) = cursor.advance() else {
                break;
            };
            if !consumer(value) {
                break;
            }
        }
        cursor.release();
    }
}
