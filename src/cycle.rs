use crate::seq::Seq;

#[derive(Clone, Debug)]
pub struct Cycle<S> {
    seq: S,
}

impl<S> Cycle<S> {
    pub fn new(seq: S) -> Self {
        Cycle { seq }
    }
}

impl<T, S> Seq<T> for Cycle<S>
where
    S: Seq<T> + Clone,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        loop {
            let mut yielded = false;
            let mut stopped = false;
            self.seq.clone().each(|value| {
                yielded = true;
                let keep = consumer(value);
                stopped = !keep;
                keep
            });
            if stopped || !yielded {
                // an empty source would otherwise spin here forever
                return;
            }
        }
    }
}
