use core::ops::RangeBounds;

use crate::accumulate::Accumulate;
use crate::batched::Batched;
use crate::chain::Chain;
use crate::compress::Compress;
use crate::cursor::Cursor;
use crate::cycle::Cycle;
use crate::drop_while::DropWhile;
use crate::enumerate::Enumerate;
use crate::filter_false::FilterFalse;
use crate::group_by::GroupBy;
use crate::map::Map;
use crate::pairwise::Pairwise;
use crate::slice::Slice;
use crate::take::Take;
use crate::take_while::TakeWhile;
use crate::zip::Zip;

/// A lazy, single-pass, possibly infinite sequence of values of type `T`.
///
/// A sequence is a *producer*: driving it with `each()` hands every element,
/// in order, to a consumer callback. The consumer answers each element with a
/// `bool` that means "keep going". The moment the consumer answers `false`,
/// the producer stops emitting and unwinds. Running out of elements and being
/// stopped early look the same from the outside; neither is an error.
///
/// The `each()` method consumes `self`. This is the same move-semantics trick
/// that lets a coroutine library promise "no yields after returning" at
/// compile time: here it promises that a sequence is traversed at most once.
/// There is no way to accidentally iterate a spent sequence, because the
/// spent sequence no longer exists. Sources that are cheap to replay say so
/// by implementing `Clone`, which is what replay-hungry combinators like
/// `cycle()` and `tee()` require.
///
/// Most of the time you will not implement this trait by hand. Collections
/// come in through [`IntoSeq`](crate::IntoSeq), unbounded sources through
/// [`count()`](crate::count) and [`repeat()`](crate::repeat), hand-rolled
/// producers through [`from_fn()`](crate::from_fn), and everything else is
/// built by chaining the combinator methods below.
///
/// # Examples
///
/// ```rust
/// use kumiko::IntoSeq;
/// use kumiko::Seq;
///
/// let mut seen = Vec::new();
/// [1, 2, 3].into_seq().each(|x| {
///     seen.push(x);
///     true
/// });
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
///
/// Answering `false` stops the producer mid-stream:
///
/// ```rust
/// use kumiko::IntoSeq;
/// use kumiko::Seq;
///
/// let mut seen = Vec::new();
/// [1, 2, 3, 4, 5].into_seq().each(|x| {
///     seen.push(x);
///     x < 3
/// });
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub trait Seq<T>: Sized {
    /// Drives the sequence, invoking `consumer` once per element until the
    /// sequence is exhausted or the consumer returns `false`.
    ///
    /// Implementations must stop promptly once the consumer declines: no
    /// element may be handed over after a `false`, and no element may be
    /// handed over twice.
    fn each(self, consumer: impl FnMut(T) -> bool);

    /// Transforms each element with `f`, yielding the results.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let doubled: Vec<i32> = [1, 2, 3].into_seq().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<U, F>(self, f: F) -> Map<T, Self, F>
    where
        F: FnMut(T) -> U,
    {
        Map::new(self, f)
    }

    /// Yields only the elements for which `predicate` answers `false`.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let odd: Vec<i32> = [1, 2, 3, 4]
    ///     .into_seq()
    ///     .filter_false(|x| x % 2 == 0)
    ///     .collect();
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    fn filter_false<F>(self, predicate: F) -> FilterFalse<Self, F>
    where
        F: FnMut(&T) -> bool,
    {
        FilterFalse::new(self, predicate)
    }

    /// Yields elements while `predicate` holds, then stops the source.
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&T) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips elements while `predicate` holds, then yields everything that
    /// follows. The predicate is not consulted again once it has failed.
    fn drop_while<F>(self, predicate: F) -> DropWhile<Self, F>
    where
        F: FnMut(&T) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Yields the running totals of folding the sequence with `op`, starting
    /// from `initial`. The initial value itself is not yielded.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let sums: Vec<i32> = [1, 2, 3, 4]
    ///     .into_seq()
    ///     .accumulate(|total, x| total + x, 0)
    ///     .collect();
    /// assert_eq!(sums, vec![1, 3, 6, 10]);
    /// ```
    fn accumulate<F>(self, op: F, initial: T) -> Accumulate<T, Self, F>
    where
        F: FnMut(T, T) -> T,
    {
        Accumulate::new(self, op, initial)
    }

    /// Collects elements into `Vec`s of `size` elements and yields each batch
    /// as it fills. The final batch may be shorter. A fresh `Vec` is
    /// allocated per batch, so batches may outlive the iteration.
    ///
    /// Panics if `size` is zero.
    fn batched(self, size: usize) -> Batched<Self> {
        Batched::new(self, size)
    }

    /// Yields the elements whose matching selector is `true`, stopping as
    /// soon as the selectors run out.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let kept: Vec<char> = ['a', 'b', 'c', 'd']
    ///     .into_seq()
    ///     .compress([true, false, true])
    ///     .collect();
    /// assert_eq!(kept, vec!['a', 'c']);
    /// ```
    fn compress<M>(self, selectors: M) -> Compress<Self, M::IntoIter>
    where
        M: IntoIterator<Item = bool>,
    {
        Compress::new(self, selectors.into_iter())
    }

    /// Yields the elements whose zero-based positions fall inside `range`,
    /// stopping the source once the window is past rather than scanning it to
    /// exhaustion. This makes `slice()` safe over infinite sequences.
    ///
    /// ```rust
    /// use kumiko::Seq;
    /// use kumiko::count;
    ///
    /// let window: Vec<usize> = count().slice(2..5).collect();
    /// assert_eq!(window, vec![2, 3, 4]);
    /// ```
    fn slice(self, range: impl RangeBounds<usize>) -> Slice<Self> {
        Slice::new(self, range)
    }

    /// Pairs each element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Yields every element of this sequence, then every element of `other`.
    /// If the consumer stops inside this sequence, `other` is never started.
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        S: Seq<T>,
    {
        Chain::new(self, other)
    }

    /// Replays the sequence forever. Each pass runs over a fresh clone of
    /// the source, which is why `Self: Clone` is required; an empty source
    /// yields nothing at all.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let looped: Vec<i32> = [1, 2].into_seq().cycle().take(5).collect();
    /// assert_eq!(looped, vec![1, 2, 1, 2, 1]);
    /// ```
    fn cycle(self) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle::new(self)
    }

    /// Splits the sequence into two identical sequences. This is only honest
    /// when the source is cheap to replay, which is what the `Clone` bound
    /// says; each half iterates independently from the beginning.
    fn tee(self) -> (Self, Self)
    where
        Self: Clone,
    {
        (self.clone(), self)
    }

    /// Yields at most `n` elements, pulled one at a time through a cursor.
    /// The cursor is released as soon as the loop exits, whether because `n`
    /// elements were delivered, the source ran out, or the consumer stopped.
    ///
    /// ```rust
    /// use kumiko::Seq;
    /// use kumiko::count;
    ///
    /// let first: Vec<usize> = count().take(3).collect();
    /// assert_eq!(first, vec![0, 1, 2]);
    /// ```
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Pairs up this sequence with `other` element by element, stopping the
    /// moment either input is exhausted. The longer input is silently
    /// truncated; both inputs are advanced each step.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let pairs: Vec<(i32, char)> = [1, 2, 3]
    ///     .into_seq()
    ///     .zip(['a', 'b'].into_seq())
    ///     .collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    /// ```
    fn zip<U, S>(self, other: S) -> Zip<Self, S>
    where
        S: Seq<U>,
    {
        Zip::new(self, other)
    }

    /// Yields consecutive overlapping pairs: `(a0, a1), (a1, a2), ..`. A
    /// source with fewer than two elements yields nothing.
    fn pairwise(self) -> Pairwise<Self> {
        Pairwise::new(self)
    }

    /// Groups consecutive equal elements. See [`GroupBy`] for the shape of
    /// the grouping loop and the rules a consumer must follow.
    fn group_by(self) -> GroupBy<Self> {
        GroupBy::new(self)
    }

    /// Bridges this push-style sequence into a pull-style [`Cursor`] that
    /// can be advanced on demand and released early. The cursor also
    /// implements `Iterator`, so this is the doorway into the std iterator
    /// ecosystem.
    ///
    /// ```rust
    /// use kumiko::IntoSeq;
    /// use kumiko::Seq;
    ///
    /// let mut cursor = [1, 2, 3].into_seq().into_cursor();
    /// assert_eq!(cursor.advance(), Some(1));
    /// assert_eq!(cursor.advance(), Some(2));
    /// cursor.release();
    /// assert_eq!(cursor.advance(), None);
    /// ```
    fn into_cursor(self) -> Cursor<T>
    where
        T: Send + 'static,
        Self: Send + 'static,
    {
        Cursor::new(self)
    }

    /// Drains the sequence into any collection that implements `Default`
    /// and `Extend`.
    fn collect<C>(self) -> C
    where
        C: Default + Extend<T>,
    {
        let mut collection = C::default();
        self.each(|value| {
            collection.extend(core::iter::once(value));
            true
        });
        collection
    }

    /// Drives the sequence to exhaustion, handing every element to `f`.
    /// This never returns if the sequence is infinite.
    fn for_each<F>(self, mut f: F)
    where
        F: FnMut(T),
    {
        self.each(|value| {
            f(value);
            true
        });
    }
}
