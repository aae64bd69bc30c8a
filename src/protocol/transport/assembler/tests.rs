//! Fragment reassembly tests covering ordering, keys, eviction and ageing.
use super::*;
use crate::infra::codec::armor::dearmor;

const VOYAGE_PART_1: &str = "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8";
const VOYAGE_PART_2: &str = "88888888880";

fn sentence(count: u8, number: u8, sequence_id: Option<u8>, channel: char, payload: &str) -> RawSentence {
    let sequence_id = sequence_id.map(|id| id.to_string()).unwrap_or_default();
    let line = format!("!AIVDM,{count},{number},{sequence_id},{channel},{payload},0");
    RawSentence::parse(&line).expect("valid test sentence")
}

fn completed(result: ProcessResult) -> CompletedMessage {
    match result {
        ProcessResult::MessageComplete(message) => message,
        other => panic!("expected a complete message, got {other:?}"),
    }
}

#[test]
/// A single-fragment sentence completes at once and leaves the pool empty.
fn test_single_fragment_bypass() {
    let mut assembler = FragmentAssembler::new();
    let position = sentence(1, 1, None, 'A', "144iRPgP001N;PjOb:@F1?vj0PSB");

    let message = completed(assembler.process(&position, None));
    assert_eq!(message.bits.len(), 168);
    assert_eq!(message.fragment_count, 1);
    assert_eq!(message.raw, vec![position.line.clone()]);
    assert_eq!(assembler.pending(), 0);
}

#[test]
fn test_two_fragment_reassembly() {
    let mut assembler = FragmentAssembler::new();
    let first = sentence(2, 1, Some(4), 'A', VOYAGE_PART_1);
    let second = sentence(2, 2, Some(4), 'A', VOYAGE_PART_2);

    assert_eq!(assembler.process(&first, None), ProcessResult::FragmentConsumed);
    assert_eq!(assembler.pending(), 1);

    let message = completed(assembler.process(&second, None));
    assert_eq!(message.bits, dearmor(&format!("{VOYAGE_PART_1}{VOYAGE_PART_2}")));
    assert_eq!(message.bits.len(), 426);
    assert_eq!(message.sequence_id, Some(4));
    assert_eq!(message.channel, Some('A'));
    assert_eq!(message.raw, vec![first.line, second.line]);
    assert_eq!(assembler.pending(), 0);
}

#[test]
/// A fragment with another sequence id never joins the session.
fn test_sequence_mismatch_is_ignored() {
    let mut assembler = FragmentAssembler::new();
    assembler.process(&sentence(2, 1, Some(4), 'A', VOYAGE_PART_1), None);

    let stray = sentence(2, 2, Some(5), 'A', VOYAGE_PART_2);
    assert_eq!(assembler.process(&stray, None), ProcessResult::Ignored);
    assert_eq!(assembler.pending(), 1);

    // The original session still completes with its own fragment.
    let second = sentence(2, 2, Some(4), 'A', VOYAGE_PART_2);
    completed(assembler.process(&second, None));
}

#[test]
/// Same sequence id on two channels: two independent messages.
fn test_channels_are_separate_keys() {
    let mut assembler = FragmentAssembler::new();
    assembler.process(&sentence(2, 1, Some(1), 'A', VOYAGE_PART_1), None);
    assembler.process(&sentence(2, 1, Some(1), 'B', "5"), None);
    assert_eq!(assembler.pending(), 2);

    let b = completed(assembler.process(&sentence(2, 2, Some(1), 'B', "8"), None));
    assert_eq!(b.bits, dearmor("58"));
    let a = completed(assembler.process(&sentence(2, 2, Some(1), 'A', VOYAGE_PART_2), None));
    assert_eq!(a.bits.len(), 426);
}

#[test]
/// Middle fragments may arrive in any order; payloads are joined by index.
fn test_out_of_order_continuations() {
    let mut assembler = FragmentAssembler::new();
    assembler.process(&sentence(3, 1, Some(7), 'B', "55?MbV02;H;s<HtKR20EHE:0@T4@Dn22222222"), None);
    assert_eq!(
        assembler.process(&sentence(3, 3, Some(7), 'B', VOYAGE_PART_2), None),
        ProcessResult::FragmentConsumed
    );
    let message = completed(assembler.process(&sentence(3, 2, Some(7), 'B', "16L961O5Gf0NSQEp6ClRp8"), None));

    assert_eq!(message.bits, dearmor(&format!("{VOYAGE_PART_1}{VOYAGE_PART_2}")));
    assert_eq!(message.raw.len(), 3);
    assert!(message.raw[2].contains(VOYAGE_PART_2));
}

#[test]
fn test_continuation_without_start_is_ignored() {
    let mut assembler = FragmentAssembler::new();
    let orphan = sentence(2, 2, Some(3), 'A', VOYAGE_PART_2);
    assert_eq!(assembler.process(&orphan, None), ProcessResult::Ignored);
    assert_eq!(assembler.pending(), 0);
}

#[test]
fn test_duplicate_and_count_mismatch_are_ignored() {
    let mut assembler = FragmentAssembler::new();
    assembler.process(&sentence(3, 1, Some(2), 'A', "55"), None);
    assembler.process(&sentence(3, 2, Some(2), 'A', "66"), None);

    assert_eq!(
        assembler.process(&sentence(3, 2, Some(2), 'A', "77"), None),
        ProcessResult::Ignored
    );
    assert_eq!(
        assembler.process(&sentence(2, 2, Some(2), 'A', "77"), None),
        ProcessResult::Ignored
    );

    // The stored slot kept its first payload.
    let message = completed(assembler.process(&sentence(3, 3, Some(2), 'A', "88"), None));
    assert_eq!(message.bits, dearmor("556688"));
}

#[test]
/// A new fragment 1 for a pending key discards the stale message.
fn test_restart_discards_previous_fragments() {
    let mut assembler = FragmentAssembler::new();
    assembler.process(&sentence(2, 1, Some(4), 'A', "11"), None);
    assembler.process(&sentence(2, 1, Some(4), 'A', "22"), None);
    assert_eq!(assembler.pending(), 1);

    let message = completed(assembler.process(&sentence(2, 2, Some(4), 'A', "33"), None));
    assert_eq!(message.bits, dearmor("2233"));
}

#[test]
/// A full pool evicts the message opened first.
fn test_capacity_evicts_oldest() {
    let mut assembler = FragmentAssembler::with_limits(2, None);
    assembler.process(&sentence(2, 1, Some(1), 'A', "11"), None);
    assembler.process(&sentence(2, 1, Some(2), 'A', "22"), None);
    assembler.process(&sentence(2, 1, Some(3), 'A', "33"), None);
    assert_eq!(assembler.pending(), 2);

    assert_eq!(
        assembler.process(&sentence(2, 2, Some(1), 'A', "44"), None),
        ProcessResult::Ignored
    );
    completed(assembler.process(&sentence(2, 2, Some(2), 'A', "44"), None));
    completed(assembler.process(&sentence(2, 2, Some(3), 'A', "44"), None));
}

#[test]
fn test_age_eviction() {
    let mut assembler = FragmentAssembler::with_limits(4, Some(Duration::from_secs(60)));
    let t0 = Instant::from_secs(1_000);

    assembler.process(&sentence(2, 1, Some(1), 'A', "11"), Some(t0));
    assembler.process(&sentence(2, 1, Some(2), 'A', "22"), Some(t0 + Duration::from_secs(50)));
    assert_eq!(assembler.purge_expired(t0 + Duration::from_secs(60)), 0);
    assert_eq!(assembler.purge_expired(t0 + Duration::from_secs(61)), 1);
    assert_eq!(assembler.pending(), 1);

    // Processing with a clock purges before looking the key up.
    let late = sentence(2, 2, Some(2), 'A', "33");
    assert_eq!(
        assembler.process(&late, Some(t0 + Duration::from_secs(200))),
        ProcessResult::Ignored
    );
    assert_eq!(assembler.pending(), 0);
}

#[test]
/// Messages opened without a clock are only subject to the capacity bound.
fn test_untimed_sessions_never_expire() {
    let mut assembler = FragmentAssembler::with_limits(4, Some(Duration::from_secs(1)));
    assembler.process(&sentence(2, 1, Some(1), 'A', "11"), None);
    assert_eq!(assembler.purge_expired(Instant::from_secs(1_000_000)), 0);
    assert_eq!(assembler.pending(), 1);

    assembler.clear();
    assert_eq!(assembler.pending(), 0);
}

#[test]
/// Hand-built sentences with a zero fragment count leave the pool untouched.
fn test_zero_fragment_count_is_ignored() {
    let mut assembler = FragmentAssembler::new();
    let mut empty = sentence(2, 1, Some(4), 'A', VOYAGE_PART_1);
    empty.fragment_count = 0;

    assert_eq!(assembler.process(&empty, None), ProcessResult::Ignored);
    assert_eq!(assembler.pending(), 0);
}
