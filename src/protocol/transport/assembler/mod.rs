//! AIVDM fragment assembler: rebuilds a message bit sequence from the
//! sentences of a multi-fragment message.
//!
//! In-flight messages are kept in a bounded pool of sessions keyed by
//! `(channel, sequence id)`, so fragments from interleaved channels and
//! sequences do not disturb each other.
use embassy_time::{Duration, Instant};

use crate::infra::codec::armor::{dearmor, extend_dearmored};
use crate::infra::codec::bits::BitSequence;
use crate::protocol::sentence::RawSentence;

//==================================================================================Constants

/// Default number of multi-fragment messages reassembled in parallel.
pub const DEFAULT_MAX_PENDING_MESSAGES: usize = 16;

//==================================================================================Enums and Structs
#[derive(Debug, PartialEq)]
pub enum ProcessResult {
    /// Fragment discarded: no session for its key, fragment count differing
    /// from the session, or a slot already filled.
    Ignored,
    /// Fragment stored; other fragments are still missing.
    FragmentConsumed,
    /// Every fragment was received; the complete bit sequence is available.
    MessageComplete(CompletedMessage),
}

/// Reassembled message handed out once all fragments are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMessage {
    /// Concatenated payload bits, in fragment order.
    pub bits: BitSequence,
    pub fragment_count: u8,
    pub sequence_id: Option<u8>,
    pub channel: Option<char>,
    /// Original lines, in fragment order.
    pub raw: Vec<String>,
}

/// Reassembly key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct SessionKey {
    channel: Option<char>,
    sequence_id: Option<u8>,
}

impl SessionKey {
    fn of(sentence: &RawSentence) -> Self {
        Self {
            channel: sentence.channel,
            sequence_id: sentence.sequence_id,
        }
    }
}

#[derive(Debug, Clone)]
struct Fragment {
    payload: String,
    line: String,
}

/// One in-flight multi-fragment message.
#[derive(Debug, Clone)]
struct Session {
    key: SessionKey,
    fragment_count: u8,
    /// One slot per fragment, indexed by `fragment_number - 1`.
    fragments: Vec<Option<Fragment>>,
    received: u8,
    /// Opening order, used to pick the eviction victim.
    opened: u64,
    /// Arrival time of fragment 1, when the caller supplied a clock.
    started_at: Option<Instant>,
}

impl Session {
    fn open(sentence: &RawSentence, opened: u64, started_at: Option<Instant>) -> Self {
        let mut fragments = vec![None; usize::from(sentence.fragment_count)];
        fragments[0] = Some(Fragment {
            payload: sentence.payload.clone(),
            line: sentence.line.clone(),
        });
        Self {
            key: SessionKey::of(sentence),
            fragment_count: sentence.fragment_count,
            fragments,
            received: 1,
            opened,
            started_at,
        }
    }

    fn is_complete(&self) -> bool {
        self.received == self.fragment_count
    }

    fn is_expired(&self, now: Instant, max_age: Duration) -> bool {
        self.started_at
            .is_some_and(|started| now.saturating_duration_since(started) > max_age)
    }

    /// Concatenate the stored fragments in index order.
    fn into_completed(self) -> CompletedMessage {
        let mut bits = BitSequence::new();
        let mut raw = Vec::with_capacity(self.fragments.len());
        for fragment in self.fragments.into_iter().flatten() {
            extend_dearmored(&mut bits, &fragment.payload);
            raw.push(fragment.line);
        }
        CompletedMessage {
            bits,
            fragment_count: self.fragment_count,
            sequence_id: self.key.sequence_id,
            channel: self.key.channel,
            raw,
        }
    }
}

/// Main assembler: owns a bounded pool of sessions.
#[derive(Debug, Clone)]
pub struct FragmentAssembler {
    sessions: Vec<Session>,
    max_sessions: usize,
    max_age: Option<Duration>,
    opened: u64,
}

impl Default for FragmentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentAssembler {
    /// Assembler with the default capacity and no age limit.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_PENDING_MESSAGES, None)
    }

    /// Assembler keeping at most `max_sessions` in-flight messages (at least
    /// one), each for at most `max_age` when a clock is supplied.
    pub fn with_limits(max_sessions: usize, max_age: Option<Duration>) -> Self {
        let max_sessions = max_sessions.max(1);
        Self {
            sessions: Vec::with_capacity(max_sessions),
            max_sessions,
            max_age,
            opened: 0,
        }
    }

    /// Number of messages awaiting fragments.
    pub fn pending(&self) -> usize {
        self.sessions.len()
    }

    /// Drop every in-flight message.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    //==================================================================================Process Functions
    /// Process one sentence.
    ///
    /// * `sentence` – parsed fragment
    /// * `now` – arrival time; when given, messages older than the age limit
    ///   are evicted first and the new session is timestamped
    ///
    /// Single-fragment sentences complete immediately without touching the
    /// session pool.
    pub fn process(&mut self, sentence: &RawSentence, now: Option<Instant>) -> ProcessResult {
        if let Some(now) = now {
            self.purge_expired(now);
        }

        // `RawSentence::parse` rejects a zero count, but the fields are public.
        if sentence.fragment_count == 0 {
            return ProcessResult::Ignored;
        }
        if sentence.is_single_fragment() {
            return ProcessResult::MessageComplete(CompletedMessage {
                bits: dearmor(&sentence.payload),
                fragment_count: 1,
                sequence_id: sentence.sequence_id,
                channel: sentence.channel,
                raw: vec![sentence.line.clone()],
            });
        }

        let key = SessionKey::of(sentence);

        if sentence.fragment_number == 1 {
            // Fragment 1 always (re)starts the message for its key.
            if let Some(index) = self.sessions.iter().position(|s| s.key == key) {
                #[cfg(feature = "defmt")]
                defmt::debug!("AIS: restarting sequence {:?}", key.sequence_id);
                self.sessions.swap_remove(index);
            }
            if self.sessions.len() >= self.max_sessions {
                self.evict_oldest();
            }
            self.opened = self.opened.wrapping_add(1);
            self.sessions.push(Session::open(sentence, self.opened, now));
            return ProcessResult::FragmentConsumed;
        }

        let Some(index) = self.sessions.iter().position(|s| s.key == key) else {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "AIS: fragment {} for unknown sequence {:?} dropped",
                sentence.fragment_number,
                key.sequence_id
            );
            return ProcessResult::Ignored;
        };

        let session = &mut self.sessions[index];
        if session.fragment_count != sentence.fragment_count {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "AIS: fragment count {} differs from session ({}), dropped",
                sentence.fragment_count,
                session.fragment_count
            );
            return ProcessResult::Ignored;
        }

        let Some(slot) = usize::from(sentence.fragment_number)
            .checked_sub(1)
            .and_then(|index| session.fragments.get_mut(index))
        else {
            return ProcessResult::Ignored;
        };
        if slot.is_some() {
            #[cfg(feature = "defmt")]
            defmt::debug!("AIS: duplicate fragment {} dropped", sentence.fragment_number);
            return ProcessResult::Ignored;
        }
        *slot = Some(Fragment {
            payload: sentence.payload.clone(),
            line: sentence.line.clone(),
        });
        session.received += 1;

        if session.is_complete() {
            let session = self.sessions.swap_remove(index);
            return ProcessResult::MessageComplete(session.into_completed());
        }

        ProcessResult::FragmentConsumed
    }

    /// Evict messages whose first fragment arrived more than the age limit
    /// before `now`. Returns the number of evicted messages.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let Some(max_age) = self.max_age else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|session| !session.is_expired(now, max_age));
        let evicted = before - self.sessions.len();
        #[cfg(feature = "defmt")]
        if evicted > 0 {
            defmt::debug!("AIS: {} stale message(s) evicted", evicted);
        }
        evicted
    }

    fn evict_oldest(&mut self) {
        if let Some(index) = self
            .sessions
            .iter()
            .enumerate()
            .min_by_key(|(_, session)| session.opened)
            .map(|(index, _)| index)
        {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "AIS: reassembly pool full, evicting sequence {:?}",
                self.sessions[index].key.sequence_id
            );
            self.sessions.swap_remove(index);
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
