use crate::cursor::Cursor;
use crate::seq::Seq;

/// Three cursors advanced in lockstep, exposed as a pull interface rather
/// than wrapped back into a sequence.
///
/// Every call to [`advance()`](PullZip3::advance) pulls one element from
/// each input; the result is `Some` only while all three inputs produce.
/// Dropping the zip releases all three cursors, and
/// [`release()`](PullZip3::release) does the same explicitly and
/// idempotently.
pub struct PullZip3<A, B, C> {
    first: Cursor<A>,
    second: Cursor<B>,
    third: Cursor<C>,
}

/// Pulls three sequences in lockstep. See [`PullZip3`].
///
/// ```rust
/// use kumiko::IntoSeq;
/// use kumiko::pull_zip3;
///
/// let mut zipped = pull_zip3(
///     [1, 2, 3].into_seq(),
///     ['a', 'b'].into_seq(),
///     ["x", "y", "z"].into_seq(),
/// );
/// assert_eq!(zipped.advance(), Some((1, 'a', "x")));
/// assert_eq!(zipped.advance(), Some((2, 'b', "y")));
/// assert_eq!(zipped.advance(), None);
/// zipped.release();
/// ```
pub fn pull_zip3<A, B, C>(
    s0: impl Seq<A> + Send + 'static,
    s1: impl Seq<B> + Send + 'static,
    s2: impl Seq<C> + Send + 'static,
) -> PullZip3<A, B, C>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    PullZip3 {
        first: Cursor::new(s0),
        second: Cursor::new(s1),
        third: Cursor::new(s2),
    }
}

impl<A, B, C> PullZip3<A, B, C> {
    /// Advances every input once, returning the zipped element while all
    /// inputs are still producing.
    pub fn advance(&mut self) -> Option<(A, B, C)> {
        let a = self.first.advance();
        let b = self.second.advance();
        let c = self.third.advance();
        Some((a?, b?, c?))
    }

    /// Releases all three cursors. Idempotent.
    pub fn release(&mut self) {
        self.first.release();
        self.second.release();
        self.third.release();
    }
}

/// Four cursors advanced in lockstep; the four-input sibling of
/// [`PullZip3`].
pub struct PullZip4<A, B, C, D> {
    first: Cursor<A>,
    second: Cursor<B>,
    third: Cursor<C>,
    fourth: Cursor<D>,
}

/// Pulls four sequences in lockstep. See [`PullZip4`].
pub fn pull_zip4<A, B, C, D>(
    s0: impl Seq<A> + Send + 'static,
    s1: impl Seq<B> + Send + 'static,
    s2: impl Seq<C> + Send + 'static,
    s3: impl Seq<D> + Send + 'static,
) -> PullZip4<A, B, C, D>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
{
    PullZip4 {
        first: Cursor::new(s0),
        second: Cursor::new(s1),
        third: Cursor::new(s2),
        fourth: Cursor::new(s3),
    }
}

impl<A, B, C, D> PullZip4<A, B, C, D> {
    /// Advances every input once, returning the zipped element while all
    /// inputs are still producing.
    pub fn advance(&mut self) -> Option<(A, B, C, D)> {
        let a = self.first.advance();
        let b = self.second.advance();
        let c = self.third.advance();
        let d = self.fourth.advance();
        Some((a?, b?, c?, d?))
    }

    /// Releases all four cursors. Idempotent.
    pub fn release(&mut self) {
        self.first.release();
        self.second.release();
        self.third.release();
        self.fourth.release();
    }
}
