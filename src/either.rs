use ::either::Either;

use crate::seq::Seq;

/// Implement the `Seq` trait for the `Either` type when both variants
/// themselves implement `Seq` for the same element type. This lets a
/// function return one of two different sequence types from its branches.
impl<T, L, R> Seq<T> for Either<L, R>
where
    L: Seq<T>,
    R: Seq<T>,
{
    fn each(self, consumer: impl FnMut(T) -> bool) {
        match self {
            Either::Left(seq) => seq.each(consumer),
            Either::Right(seq) => seq.each(consumer),
        }
    }
}
