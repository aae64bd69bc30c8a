//! Minimal abstraction for an asynchronous source of sentence lines. Lets the
//! decoder plug into any feed (serial port, UDP socket, log file replay).
use futures_util::Future;

/// Contract to pull raw sentence lines asynchronously.
pub trait LineSource {
    type Error: core::fmt::Debug;
    /// Retrieve the next line, `Ok(None)` once the source is exhausted.
    /// Asynchronously waits until data arrives.
    fn next_line<'a>(
        &'a mut self,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + 'a;
}
