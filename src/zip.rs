use crate::cursor::Cursor;
use crate::seq::Seq;

pub struct Zip<S0, S1> {
    left: S0,
    right: S1,
}

impl<S0, S1> Zip<S0, S1> {
    pub fn new(left: S0, right: S1) -> Self {
        Zip { left, right }
    }
}

impl<A, B, S0, S1> Seq<(A, B)> for Zip<S0, S1>
where
    A: Send + 'static,
    B: Send + 'static,
    S0: Seq<A> + Send + 'static,
    S1: Seq<B> + Send + 'static,
{
    fn each(self, mut consumer: impl FnMut((A, B)) -> bool) {
        let Zip { left, right } = self;
        let mut left = Cursor::new(left);
        let mut right = Cursor::new(right);
        loop {
            // both cursors advance each step, even once one is finished
            let (a, b) = (left.advance(), right.advance());
            let (Some(a), Some(b)) = (a, b) else {
                return;
            };
            if !consumer((a, b)) {
                return;
            }
        }
    }
}
