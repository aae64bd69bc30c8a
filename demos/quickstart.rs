//! # Quickstart Example
//!
//! Minimal tour of korri-ais:
//! - Decode a single-fragment position report
//! - Reassemble a two-fragment voyage report
//! - Inspect fields by id and print the `key=value` form
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use korri_ais::protocol::decoder::{AisDecoder, DecodeResult, DecoderConfig};
use korri_ais::protocol::messages::MessageBody;

const FEED: [&str; 5] = [
    "!AIVDM,1,1,,A,144iRPgP001N;PjOb:@F1?vj0PSB,0*47",
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    "!AIVDM,2,1,4,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*19",
    "!AIVDM,2,2,4,A,88888888880,2*20",
    "!AIVDM,1,1,,A,85Mwp`1Kf3aCnsNvBWLi=wQuNhA5t43N`5nCuI=p<IBfVqnMgPGs,0*47",
];

fn main() {
    println!("=== korri-ais Quickstart ===\n");

    // ======================================================================
    // 1. Configure a decoder
    // ======================================================================
    let config = DecoderConfig::new()
        .include_raw(false) // Keep the output short
        .validate_checksum(true); // Drop corrupted lines
    let mut decoder = AisDecoder::new(config);

    // ======================================================================
    // 2. Feed lines one at a time
    // ======================================================================
    for line in FEED {
        match decoder.decode(line) {
            DecodeResult::Decoded(message) => {
                println!("Type {} from {}", message.message_type, message.mmsi);
                println!("   {}", message);

                match &message.body {
                    MessageBody::Position(report) => {
                        println!(
                            "   Position: {:.4}, {:.4} ({})",
                            report.lat,
                            report.lon,
                            report.status_text().unwrap_or("unknown status")
                        );
                    }
                    MessageBody::StaticVoyage(voyage) => {
                        let (length, beam) = voyage.dimensions.size();
                        println!(
                            "   {} ({}), {} m x {} m, bound for {} ETA {}",
                            voyage.shipname,
                            voyage.shiptype.label(),
                            length,
                            beam,
                            voyage.destination,
                            voyage.eta
                        );
                    }
                    _ => {}
                }
                println!();
            }
            DecodeResult::Pending => println!("Fragment stored, waiting for the rest\n"),
            DecodeResult::Unsupported { message_type } => {
                println!("Type {} is not decoded\n", message_type)
            }
            DecodeResult::NotAis => println!("Skipped a non-AIS line\n"),
            other => println!("Dropped: {:?}\n", other),
        }
    }

    // ======================================================================
    // 3. Look fields up by id
    // ======================================================================
    if let Some(message) = decoder.decode(FEED[0]).into_message() {
        for id in ["mmsi", "nationality", "speed", "course", "turn"] {
            if let Some(value) = message.field(id) {
                println!("{:>12}: {}", id, value);
            }
        }
    }
}
