use core::ops::Bound;
use core::ops::RangeBounds;

use crate::seq::Seq;

pub struct Slice<S> {
    seq: S,
    start: usize,
    end: Option<usize>,
}

impl<S> Slice<S> {
    pub fn new(seq: S, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => Some(end + 1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => None,
        };
        Slice { seq, start, end }
    }
}

impl<T, S> Seq<T> for Slice<S>
where
    S: Seq<T>,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        let Slice { seq, start, end } = self;
        let mut position = 0_usize;
        seq.each(|value| {
            let index = position;
            position += 1;
            if let Some(end) = end {
                // past the window; stop the source instead of scanning on
                if index >= end {
                    return false;
                }
            }
            if index < start {
                return true;
            }
            consumer(value)
        })
    }
}
