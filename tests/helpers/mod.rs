//! Test doubles feeding sentence lines, and a payload builder for crafted
//! messages.
use korri_ais::infra::codec::armor::armor_char;
use korri_ais::protocol::sentence::checksum;
use korri_ais::protocol::transport::traits::line_source::LineSource;
use tokio::sync::mpsc;

#[allow(dead_code)]
/// In-memory line feed reproducing the `LineSource` trait behavior.
pub struct MockLineSource {
    rx: mpsc::UnboundedReceiver<Result<String, MockFeedError>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
/// Error injected by the feed side.
pub struct MockFeedError(pub &'static str);

#[allow(dead_code)]
impl MockLineSource {
    /// Construct a feed handle and the source it drives. The source ends when
    /// every handle is dropped.
    pub fn create() -> (mpsc::UnboundedSender<Result<String, MockFeedError>>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Source replaying `lines`, then exhausted.
    pub fn from_lines(lines: &[&str]) -> Self {
        let (tx, source) = Self::create();
        for line in lines {
            let _ = tx.send(Ok(line.to_string()));
        }
        source
    }
}

impl LineSource for MockLineSource {
    type Error = MockFeedError;

    async fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        match self.rx.recv().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(error)) => Err(error),
            None => Ok(None),
        }
    }
}

#[allow(dead_code)]
/// Pack `(value, width)` fields MSB first and armor them.
///
/// Negative values are written in two's complement on their width. Returns
/// the payload and the fill bits needed to reach a whole character.
pub fn armor_fields(fields: &[(i64, usize)]) -> (String, u8) {
    let mut bits = Vec::new();
    for &(value, width) in fields {
        for shift in (0..width).rev() {
            let bit = if shift < 64 { (value >> shift) & 1 } else { 0 };
            bits.push(bit as u8);
        }
    }
    let fill = (6 - bits.len() % 6) % 6;
    bits.extend(std::iter::repeat(0).take(fill));

    let payload = bits
        .chunks(6)
        .map(|chunk| armor_char(chunk.iter().fold(0, |acc, bit| (acc << 1) | bit)))
        .collect();
    (payload, fill as u8)
}

#[allow(dead_code)]
/// Single-fragment `!AIVDM` sentence with a valid checksum.
pub fn single_sentence(channel: char, payload: &str, fill: u8) -> String {
    let body = format!("AIVDM,1,1,,{channel},{payload},{fill}");
    format!("!{}*{:02X}", body, checksum(&body))
}

#[allow(dead_code)]
/// Class A position report with the given status, turn indicator and
/// maneuver code; every other field fixed.
pub fn position_report(mmsi: u32, status: i64, turn: i64, maneuver: i64) -> String {
    let (payload, fill) = armor_fields(&[
        (1, 6),
        (0, 2),
        (i64::from(mmsi), 30),
        (status, 4),
        (turn, 8),
        (123, 10),
        (1, 1),
        (12_344_345, 28),
        (33_196_609, 27),
        (1540, 12),
        (511, 9),
        (25, 6),
        (maneuver, 2),
        (0, 3),
        (0, 1),
        (0, 19),
    ]);
    single_sentence('A', &payload, fill)
}
