use crate::cursor::Cursor;
use crate::seq::Seq;

/// Groups consecutive equal elements of a sequence.
///
/// Grouping runs as a single forward pass over one shared cursor with
/// exactly one element of lookahead. Each group is handed to the consumer as
/// a key plus a [`Group`], a member-subsequence that yields the key's run of
/// equal elements. The `Group` borrows the shared cursor, so it is only
/// usable inside the consumer invocation that received it; the borrow
/// checker enforces the "consume a group before asking for the next one"
/// rule that a garbage-collected rendition of this state machine can only
/// document.
///
/// A consumer is free to ignore a group's members, or to stop partway
/// through them. The grouping loop drains whatever was left unconsumed
/// before moving on, so boundary detection stays correct either way.
///
/// Boundaries are determined by equality of consecutive elements. There is
/// no key function; callers that want key-based grouping map their elements
/// to equal keys first.
///
/// # Examples
///
/// ```rust
/// use kumiko::IntoSeq;
/// use kumiko::Seq;
///
/// let mut groups = Vec::new();
/// [1, 1, 2, 2, 2, 3].into_seq().group_by().each(|key, members| {
///     groups.push((key, members.collect::<Vec<i32>>()));
///     true
/// });
/// assert_eq!(
///     groups,
///     vec![(1, vec![1, 1]), (2, vec![2, 2, 2]), (3, vec![3])],
/// );
/// ```
pub struct GroupBy<S> {
    seq: S,
}

struct GroupFeed<T> {
    cursor: Cursor<T>,
    pending: Option<T>,
    exhausted: bool,
}

/// The member-subsequence of one group: the group key's run of consecutive
/// equal elements, starting with the already-pulled key itself.
///
/// Shares its parent's cursor and lookahead slot, which is why it borrows
/// rather than owns. Consume it inside the grouping consumer or not at all.
pub struct Group<'a, T> {
    key: T,
    feed: &'a mut GroupFeed<T>,
}

impl<S> GroupBy<S> {
    pub fn new(seq: S) -> Self {
        GroupBy { seq }
    }

    /// Drives the grouping loop, invoking `consumer` once per group until
    /// the source is exhausted or the consumer returns `false`.
    pub fn each<T>(self, mut consumer: impl FnMut(T, Group<'_, T>) -> bool)
    where
        T: Clone + PartialEq + Send + 'static,
        S: Seq<T> + Send + 'static,
    {
        let mut feed = GroupFeed {
            cursor: Cursor::new(self.seq),
            pending: None,
            exhausted: false,
        };
        let Some(mut current) = feed.cursor.advance() else {
            return;
        };
        loop {
            let key = current.clone();
            let group = Group {
                key: current,
                feed: &mut feed,
            };
            if !consumer(key.clone(), group) {
                return;
            }
            if feed.exhausted {
                return;
            }
            current = match feed.pending.take() {
                // the group ran to its boundary and parked the next key
                Some(next) => next,
                // the group was abandoned or stopped early; drain its
                // leftover members so the next boundary is detected
                None => loop {
                    match feed.cursor.advance() {
                        None => return,
                        Some(value) if value != key => break value,
                        Some(_) => {}
                    }
                },
            };
        }
    }
}

impl<T> Seq<T> for Group<'_, T>
where
    T: Clone + PartialEq,
{
    fn each(self, mut consumer: impl FnMut(T) -> bool) {
        let Group { key, feed } = self;
        if !consumer(key.clone()) {
            return;
        }
        loop {
            match feed.cursor.advance() {
                None => {
                    feed.exhausted = true;
                    return;
                }
                Some(value) => {
                    if value != key {
                        feed.pending = Some(value);
                        return;
                    }
                    if !consumer(value) {
                        return;
                    }
                }
            }
        }
    }
}
