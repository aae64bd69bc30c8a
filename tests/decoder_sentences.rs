//! End-to-end decoding of reference sentences through the public API.
mod helpers;

use helpers::{armor_fields, position_report, single_sentence};
use korri_ais::core::AisValue;
use korri_ais::infra::codec::traits::FieldAccess;
use korri_ais::protocol::decoder::{AisDecoder, DecodeResult, DecoderConfig};
use korri_ais::protocol::lookups::TurnRate;
use korri_ais::protocol::messages::{AisMessage, MessageBody};

const POSITION: &str = "!AIVDM,1,1,,A,144iRPgP001N;PjOb:@F1?vj0PSB,0*47";
const VOYAGE_1: &str =
    "!AIVDM,2,1,4,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*19";
const VOYAGE_2: &str = "!AIVDM,2,2,4,A,88888888880,2*20";
const VOYAGE_2_OTHER_SEQUENCE: &str = "!AIVDM,2,2,5,A,88888888880,2*21";

const SINGLE_FRAGMENT_LINES: [&str; 8] = [
    POSITION,
    "!AIVDM,1,1,,B,403OviQuMGCqWrRO9>E6fE700@GO,0*4E",
    "!AIVDM,1,1,,B,91b55wi;hbOS@OdQAC062Ch2089h,0*30",
    "!AIVDM,1,1,,B,B6CdCm0t3`tba35f@V9faHi7kP06,0*5B",
    "!AIVDM,1,1,,B,C5N3SRgPEnJGEBT>NhWAwwo862PaLELTBJ:V00000000S0D:R220,0*0B",
    "!AIVDM,1,1,,A,H42O55i18tMET00000000000000,2*6D",
    "!AIVDM,1,1,,A,H42O55lti4hhhilD3nink000?050,0*40",
    "!AIVDM,1,1,,B,E>jHC=c6:W2h22R`@1:WdP00000Opa@H?KTcc0000Hh@100,4*69",
];

fn decode_one(line: &str) -> AisMessage {
    match AisDecoder::default().decode(line) {
        DecodeResult::Decoded(message) => message,
        other => panic!("{line} gave {other:?}"),
    }
}

fn strict_decoder() -> AisDecoder {
    AisDecoder::new(DecoderConfig::new().validate_checksum(true))
}

#[test]
fn reference_position_report() {
    let message = decode_one(POSITION);

    assert_eq!(message.field("type"), Some(AisValue::Unsigned(1)));
    assert_eq!(message.mmsi.to_string(), "273441410");
    assert_eq!(message.field("lat"), Some(AisValue::Float(55.3277)));
    assert_eq!(message.field("lon"), Some(AisValue::Float(20.5739)));
    assert_eq!(message.field("speed"), Some(AisValue::Float(0.0)));
    assert_eq!(message.field("course"), Some(AisValue::Float(154.0)));
    assert_eq!(
        message.field("status").map(|status| status.to_string()),
        Some("15".to_string())
    );
    assert_eq!(message.nationality, Some("Russian Federation"));
}

#[test]
/// Reference lines all carry valid checksums.
fn reference_sentences_pass_checksum_validation() {
    let mut decoder = strict_decoder();
    for line in SINGLE_FRAGMENT_LINES {
        assert!(decoder.decode(line).is_decoded(), "{line}");
    }
    assert_eq!(decoder.decode(VOYAGE_1), DecodeResult::Pending);
    assert!(decoder.decode(VOYAGE_2).is_decoded());
}

#[test]
/// Decoding the same line twice with fresh decoders gives the same output.
fn single_fragment_decoding_is_idempotent() {
    for line in SINGLE_FRAGMENT_LINES {
        let first = decode_one(line);
        let second = decode_one(line);
        assert_eq!(first, second, "{line}");
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.raw, Some(vec![line.to_string()]));
    }
}

#[test]
fn two_fragment_voyage_data() {
    let mut decoder = AisDecoder::default();

    assert_eq!(decoder.decode(VOYAGE_1), DecodeResult::Pending);
    let message = decoder
        .decode(VOYAGE_2)
        .into_message()
        .expect("complete after the second fragment");

    assert_eq!(message.field("imo"), Some(AisValue::Unsigned(9_134_270)));
    assert_eq!(message.field("callsign"), Some(AisValue::Text("3FOF8".into())));
    assert_eq!(
        message.field("shipname"),
        Some(AisValue::Text("EVER DIADEM".into()))
    );
    assert_eq!(
        message.field("shiptype_text"),
        Some(AisValue::Label("Cargo, all ships of this type"))
    );
    assert_eq!(message.field("eta"), Some(AisValue::Text("05-15T14:00Z".into())));
    assert_eq!(message.field("draught"), Some(AisValue::Float(12.2)));
    assert_eq!(
        message.field("destination"),
        Some(AisValue::Text("NEW YORK".into()))
    );
    assert_eq!(message.sequence_id, Some(4));
    assert_eq!(message.fragment_count, 2);
    assert_eq!(message.raw.as_ref().map(Vec::len), Some(2));
}

#[test]
/// A second fragment with another sequence id never completes the message.
fn mismatched_sequence_stays_incomplete() {
    let mut decoder = AisDecoder::default();

    assert_eq!(decoder.decode(VOYAGE_1), DecodeResult::Pending);
    assert_eq!(decoder.decode(VOYAGE_2_OTHER_SEQUENCE), DecodeResult::Ignored);
    for line in SINGLE_FRAGMENT_LINES {
        let result = decoder.decode(line);
        assert!(!matches!(
            result.message().map(|m| &m.body),
            Some(MessageBody::StaticVoyage(_))
        ));
    }
    assert_eq!(decoder.decode(VOYAGE_2_OTHER_SEQUENCE), DecodeResult::Ignored);
    assert_eq!(decoder.pending(), 1);
}

#[test]
/// Fragments from both radio channels interleave without interference.
fn interleaved_channels() {
    let mut decoder = AisDecoder::default();
    let on_b = |line: &str| line.replacen(",A,", ",B,", 1);

    assert_eq!(decoder.decode(VOYAGE_1), DecodeResult::Pending);
    assert_eq!(decoder.decode(&on_b(VOYAGE_1)), DecodeResult::Pending);
    assert!(decoder.decode(POSITION).is_decoded());

    let from_b = decoder.decode(&on_b(VOYAGE_2)).into_message().expect("B");
    let from_a = decoder.decode(VOYAGE_2).into_message().expect("A");
    assert_eq!(from_b.channel, Some('B'));
    assert_eq!(from_a.channel, Some('A'));
    assert_eq!(from_a.body, from_b.body);
}

#[test]
/// Type 8 is recognized and rejected, never partially decoded.
fn unsupported_binary_broadcast() {
    let line = "!AIVDM,1,1,,A,85Mwp`1Kf3aCnsNvBWLi=wQuNhA5t43N`5nCuI=p<IBfVqnMgPGs,0*47";
    assert_eq!(
        AisDecoder::default().decode(line),
        DecodeResult::Unsupported { message_type: 8 }
    );
}

#[test]
fn turn_rate_sentinels() {
    let cases = [
        (127, TurnRate::FastRight, "fastright"),
        (-127, TurnRate::FastLeft, "fastleft"),
        (-128, TurnRate::NotAvailable, "not available"),
        (0, TurnRate::Rate(0.0), "0"),
        (4, TurnRate::Rate(4.733 * 2.0), "9.466"),
    ];
    for (raw, expected, text) in cases {
        let message = decode_one(&position_report(244_123_456, 0, raw, 1));
        let MessageBody::Position(report) = &message.body else {
            panic!("unexpected body {:?}", message.body);
        };
        assert_eq!(report.turn, expected, "raw {raw}");
        assert_eq!(report.turn.to_string(), text, "raw {raw}");
    }
}

#[test]
/// Port turns keep the NaN produced by the square root of a negative value.
fn negative_turn_rate_is_nan() {
    let message = decode_one(&position_report(244_123_456, 0, -4, 1));
    let MessageBody::Position(report) = &message.body else {
        panic!("unexpected body {:?}", message.body);
    };
    assert!(report.turn.rate().is_some_and(f64::is_nan));
}

#[test]
/// Out-of-range codes fall back to the default label instead of failing.
fn out_of_range_codes_are_coerced() {
    let message = decode_one(&position_report(244_123_456, 8, 0, 3));
    assert_eq!(message.field("maneuver"), Some(AisValue::Unsigned(0)));
    assert_eq!(
        message.field("maneuver_text"),
        Some(AisValue::Label("Not available (default)"))
    );
    assert_eq!(
        message.field("status_text"),
        Some(AisValue::Label("Under way sailing"))
    );

    // Type 19 with ship type 150 and EPFD 12.
    let (payload, fill) = armor_fields(&[
        (19, 6),
        (0, 2),
        (367_059_850, 30),
        (0, 101),
        (0, 4),
        (0, 120),
        (150, 8),
        (0, 30),
        (12, 4),
        (0, 7),
    ]);
    let message = decode_one(&single_sentence('B', &payload, fill));
    assert_eq!(message.field("shiptype"), Some(AisValue::Unsigned(0)));
    assert_eq!(
        message.field("shiptype_text"),
        Some(AisValue::Label("Not available (default)"))
    );
    assert_eq!(
        message.field("epfd_text"),
        Some(AisValue::Label("Undefined (default)"))
    );
    // All-padding name decodes to an empty string.
    assert_eq!(message.field("shipname"), Some(AisValue::Text(String::new())));
}

#[test]
/// Type 27 uses 1/10 minute coordinates and unscaled speed and course.
fn long_range_broadcast() {
    let (payload, fill) = armor_fields(&[
        (27, 6),
        (0, 2),
        (273_441_410, 30),
        (1, 1),
        (0, 1),
        (5, 4),
        (12_345, 18),
        (-3_000, 17),
        (12, 6),
        (300, 9),
        (0, 1),
        (0, 1),
    ]);
    let message = decode_one(&single_sentence('A', &payload, fill));
    let MessageBody::LongRange(report) = &message.body else {
        panic!("unexpected body {:?}", message.body);
    };
    assert_eq!(report.lon, 20.575);
    assert_eq!(report.lat, -5.0);
    assert_eq!(report.speed, 12);
    assert_eq!(report.course, 300);
    assert_eq!(report.status_text(), Some("Moored"));
    assert!(report.accuracy);
    assert!(!report.gnss);
}

#[test]
/// Type 27 course is whole degrees, like its speed: raw 300 stays 300, not 30.0.
fn long_range_course_is_unscaled() {
    let (payload, fill) = armor_fields(&[
        (27, 6),
        (0, 2),
        (273_441_410, 30),
        (0, 6),
        (0, 18),
        (0, 17),
        (0, 6),
        (359, 9),
        (0, 2),
    ]);
    let message = decode_one(&single_sentence('A', &payload, fill));
    assert_eq!(message.field("course"), Some(AisValue::Unsigned(359)));
}

#[test]
fn nationality_resolution_rules() {
    let coastal = decode_one("!AIVDM,1,1,,B,403OviQuMGCqWrRO9>E6fE700@GO,0*4E");
    assert_eq!(coastal.mid.map(|mid| mid.to_string()), Some("366".into()));
    assert_eq!(coastal.nationality, Some("United States of America"));

    let mob = decode_one(&position_report(972_123_456, 14, -128, 0));
    assert_eq!(mob.mid, None);
    assert_eq!(mob.nationality, Some(""));
    assert_eq!(mob.field("nationality"), Some(AisValue::Label("")));
}

#[test]
/// Body field ids line up with the values `FieldAccess` returns.
fn body_fields_are_consistent() {
    for line in SINGLE_FRAGMENT_LINES {
        let message = decode_one(line);
        for (id, value) in message.body.fields() {
            assert_eq!(message.field(id), Some(value), "{line}: {id}");
        }
    }
}
