use std::sync::mpsc::Receiver;
use std::sync::mpsc::sync_channel;
use std::thread::JoinHandle;

use crate::seq::Seq;

/// A pull-style handle over a push-style sequence.
///
/// A [`Seq`] runs its whole iteration inside one call to `each()`, which is
/// the wrong shape for callers that need to interleave several sequences or
/// stop and resume on their own schedule. A `Cursor` inverts control: the
/// producer runs in its own execution context, parked at a rendezvous, and
/// each call to [`advance()`](Cursor::advance) wakes it for exactly one
/// element.
///
/// The execution context is a dedicated thread per cursor, synchronized
/// through a rendezvous channel with no buffer, so at most one value is ever
/// in flight and only one side runs at a time. The producer's consumer
/// callback is "send and report whether anyone is still listening", which
/// means dropping the receiving end is exactly the consumer-said-stop path
/// of the push protocol: the producer observes `false` at its next emission
/// and unwinds.
///
/// # Lifecycle
///
/// * `advance()` blocks until the producer emits or finishes. Once the
///   sequence is exhausted it keeps returning `None` forever and never wakes
///   the producer again.
/// * `release()` permanently stops the producer, waits for its thread to
///   unwind, and is safe to call any number of times. After a release,
///   `advance()` reports `None`.
/// * Dropping a cursor releases it, so every operator that opens a cursor
///   releases it on every exit path without any discipline beyond scoping.
///
/// A cursor is a single-caller object: it is not safe to share one across
/// threads without external synchronization, and there is at most one
/// outstanding `advance()` at a time by construction (`&mut self`).
pub struct Cursor<T> {
    slot: Option<Receiver<T>>,
    producer: Option<JoinHandle<()>>,
}

impl<T> Cursor<T> {
    /// Spawns the producer for `seq` and parks it at the rendezvous, ready
    /// for the first `advance()`.
    pub fn new(seq: impl Seq<T> + Send + 'static) -> Self
    where
        T: Send + 'static,
    {
        let (sender, receiver) = sync_channel(0);
        let producer = std::thread::spawn(move || {
            seq.each(move |value| sender.send(value).is_ok());
        });
        Cursor {
            slot: Some(receiver),
            producer: Some(producer),
        }
    }

    /// Resumes the producer until it emits its next element or finishes.
    /// Returns `None` once the sequence has ended, and keeps returning
    /// `None` on every later call.
    pub fn advance(&mut self) -> Option<T> {
        match self.slot.as_ref()?.recv() {
            Ok(value) => Some(value),
            Err(_) => {
                // producer finished on its own; reap the thread now
                self.release();
                None
            }
        }
    }

    /// Permanently stops the producer and waits for its execution context to
    /// unwind. Idempotent; calling it on an exhausted or already-released
    /// cursor does nothing.
    pub fn release(&mut self) {
        // dropping the receiver makes any pending or future send fail,
        // which the producer observes as the consumer declining
        self.slot = None;
        if let Some(producer) = self.producer.take() {
            if let Err(panic) = producer.join() {
                if !std::thread::panicking() {
                    std::panic::resume_unwind(panic);
                }
            }
        }
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }
}
