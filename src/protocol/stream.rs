//! Asynchronous adapter: pulls lines from a [`LineSource`] and yields decoded
//! messages, skipping pending fragments and rejected lines.
use embassy_time::Instant;
use futures_util::stream::{self, Stream};

use crate::protocol::decoder::{AisDecoder, DecodeResult};
use crate::protocol::messages::AisMessage;
use crate::protocol::transport::traits::line_source::LineSource;

/// Decoder bound to one line source.
pub struct AisStream<S: LineSource> {
    source: S,
    decoder: AisDecoder,
}

impl<S: LineSource> AisStream<S> {
    pub fn new(source: S, decoder: AisDecoder) -> Self {
        Self { source, decoder }
    }

    pub fn decoder(&self) -> &AisDecoder {
        &self.decoder
    }

    /// Release the source and the decoder (with its pending fragments).
    pub fn into_parts(self) -> (S, AisDecoder) {
        (self.source, self.decoder)
    }

    /// Wait for the next decoded message; `Ok(None)` once the source is
    /// exhausted. Lines are stamped with `Instant::now()` when the decoder
    /// has a fragment age limit.
    pub async fn next_message(&mut self) -> Result<Option<AisMessage>, S::Error> {
        loop {
            let Some(line) = self.source.next_line().await? else {
                return Ok(None);
            };
            // Age eviction needs a clock; read it only when a limit is set.
            let result = match self.decoder.config().fragment_age_limit() {
                Some(_) => self.decoder.decode_at(&line, Instant::now()),
                None => self.decoder.decode(&line),
            };
            if let DecodeResult::Decoded(message) = result {
                return Ok(Some(message));
            }
        }
    }

    /// Turn the adapter into a `Stream` of messages. Source errors are
    /// yielded and do not end the stream.
    pub fn into_messages(self) -> impl Stream<Item = Result<AisMessage, S::Error>> {
        stream::unfold(self, |mut this| async move {
            match this.next_message().await {
                Ok(Some(message)) => Some((Ok(message), this)),
                Ok(None) => None,
                Err(error) => Some((Err(error), this)),
            }
        })
    }
}
