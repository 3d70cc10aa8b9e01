//! The `kumiko` crate is a lazy sequence toolkit in the itertools tradition,
//! built on a cooperative *push* protocol rather than the *pull* protocol of
//! `Iterator`.
//!
//! A sequence here is a value implementing one method:
//!
//! ```rust
//! pub trait Seq<T>: Sized {
//!     fn each(self, consumer: impl FnMut(T) -> bool);
//! }
//! ```
//!
//! The producer calls the consumer once per element; the consumer's `bool`
//! answer means "keep going". The moment the consumer answers `false`, the
//! producer stops and unwinds. That is the whole protocol: no buffering, no
//! restarts, no error channel. Exhaustion and early stop are both silent.
//!
//! Note the following differences from `Iterator`:
//!
//!   * Control lives with the producer, so a producer is just a loop over
//!     whatever it captured. There is no suspended state to store between
//!     elements, which is why a closure over `&mut dyn FnMut` is enough to
//!     write one by hand (see [`from_fn()`]).
//!   * The `each` method takes `self` by value. A sequence is single-pass by
//!     construction: once driven, the value is gone, and the type system
//!     will not let you iterate it again. Replayable sources opt in through
//!     `Clone`.
//!   * Pull semantics are not primitive. When an operator genuinely needs
//!     "give me the next element on demand", it bridges through a
//!     [`Cursor`], which suspends the producer in its own execution context
//!     and resumes it one rendezvous at a time.
//!
//! # Examples
//!
//! ## Pipelines
//!
//! Sources come from collections ([`IntoSeq`]), unbounded generators
//! ([`count()`], [`repeat()`]), or hand-written producers ([`from_fn()`]),
//! and compose through the combinator methods on [`Seq`]:
//!
//! ```rust
//! use kumiko::Seq;
//! use kumiko::count;
//!
//! let squares_of_evens: Vec<usize> = count()
//!     .filter_false(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .take(4)
//!     .collect();
//! assert_eq!(squares_of_evens, vec![0, 4, 16, 36]);
//! ```
//!
//! ## Combinatorial enumeration
//!
//! The four generators ([`combinations()`], [`combinations_with_replacement()`],
//! [`permutations()`], [`product()`]) enumerate discrete spaces from a
//! materialized pool, lazily and in a fixed canonical order, advancing an
//! owned index buffer in place rather than recursing or materializing the
//! output space:
//!
//! ```rust
//! use kumiko::Seq;
//! use kumiko::permutations;
//!
//! let mut arrangements = Vec::new();
//! permutations(vec!['a', 'b', 'c'], 2).each(|arrangement| {
//!     arrangements.push(arrangement);
//!     arrangements.len() < 4 // stop early; the generator unwinds
//! });
//! assert_eq!(arrangements.len(), 4);
//! ```
//!
//! ## Bridging to pull
//!
//! A [`Cursor`] turns any sequence into an on-demand source, which is also
//! how multi-input operators like `zip()` and `group_by()` coordinate their
//! inputs internally. Cursors release their producer deterministically, on
//! `release()` or on drop, whichever comes first:
//!
//! ```rust
//! use kumiko::Seq;
//! use kumiko::count;
//!
//! let mut cursor = count().into_cursor();
//! assert_eq!(cursor.advance(), Some(0));
//! assert_eq!(cursor.advance(), Some(1));
//! cursor.release(); // the unbounded producer is unwound here
//! assert_eq!(cursor.advance(), None);
//! ```
//!
//! # Theory
//!
//! Push and pull iteration are dual: a push sequence is a function from a
//! consumer capability to nothing, a pull cursor is a function from nothing
//! to a value. Everything single-pass composes more simply on the push side,
//! because the producer's loop *is* the state and the borrow checker can see
//! straight through it. Everything that coordinates several sequences needs
//! the pull side, because someone has to interleave the producers, and that
//! someone needs each producer suspended between elements.
//!
//! This crate keeps the push protocol primitive and makes the pull side an
//! explicit, scoped resource. The cursor's producer runs in a dedicated
//! execution context synchronized by a rendezvous with room for exactly one
//! in-flight value, so only one side ever runs at a time and a released
//! cursor cannot leak a suspended producer. Single-pass-ness, the other
//! invariant worth enforcing, is expressed with move semantics: `each()`
//! consumes the sequence value, the same way a consuming-`resume` coroutine
//! makes "yield after return" unrepresentable.
//!
//! # FAQ
//!
//! ## Why is it called `kumiko`?
//!
//! Kumiko is the Japanese craft of assembling lattices from small
//! interlocking pieces of wood, without nails. A combinatorics library
//! assembles large structured spaces from small interlocking index moves,
//! without materializing anything, and the name also nods at 組み合わせ
//! (*kumiawase*), "combination".
//!
//! But also the name happened to be free on crates.io.
//!
//! ## Why push rather than pull?
//!
//! Producers are strictly easier to write: a `for` loop and an early
//! `return`. Single-loop transforms (map, filter, the take/drop family) are
//! consumer adapters and need no state machine at all. The price is that
//! pulling becomes a bridging operation with a real cost, which this crate
//! pays only in the operators that genuinely need it (`take`, `zip`,
//! `pairwise`, `group_by`, and the `pull_zip` family).
//!
//! ## Why does `advance()` keep returning `None` instead of panicking?
//!
//! Exhaustion, early release, and "released twice" are all ordinary ends of
//! iteration, not bugs, and every operator's cleanup path crosses at least
//! one of them. Making them no-ops keeps release-on-every-exit-path free of
//! case analysis.
//!
//! ## Can I share a sequence or cursor between threads?
//!
//! No. The composition model is a single logical thread of control; the
//! cursor's producer thread is an implementation detail that never runs
//! concurrently with its caller. Share at a higher level, or synchronize
//! externally.

mod accumulate;
mod batched;
mod chain;
mod combinations;
mod combinations_with_replacement;
mod compress;
mod count;
mod cursor;
mod cycle;
mod drop_while;
mod either;
mod enumerate;
mod filter_false;
mod from_fn;
mod group_by;
mod into_seq;
mod map;
mod pairwise;
mod permutations;
mod pick;
mod product;
mod pull_zip;
mod repeat;
mod seq;
mod slice;
mod take;
mod take_while;
mod zip;

pub use combinations::Combinations;
pub use combinations::combinations;
pub use combinations_with_replacement::CombinationsWithReplacement;
pub use combinations_with_replacement::combinations_with_replacement;
pub use count::Count;
pub use count::count;
pub use cursor::Cursor;
pub use from_fn::FromFn;
pub use from_fn::from_fn;
pub use group_by::Group;
pub use group_by::GroupBy;
pub use into_seq::IntoSeq;
pub use into_seq::IterSeq;
pub use permutations::Permutations;
pub use permutations::permutations;
pub use product::Product;
pub use product::product;
pub use product::product_repeat;
pub use pull_zip::PullZip3;
pub use pull_zip::PullZip4;
pub use pull_zip::pull_zip3;
pub use pull_zip::pull_zip4;
pub use repeat::Repeat;
pub use repeat::repeat;
pub use repeat::repeat_n;
pub use seq::Seq;

#[cfg(test)]
mod test;
