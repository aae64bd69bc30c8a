//! `AisStream` driven by an in-memory line feed.
mod helpers;

use embassy_time::Duration;
use futures_util::StreamExt;
use helpers::{MockFeedError, MockLineSource};
use korri_ais::protocol::decoder::{AisDecoder, DecoderConfig};
use korri_ais::protocol::messages::MessageBody;
use korri_ais::protocol::stream::AisStream;

const POSITION: &str = "!AIVDM,1,1,,A,144iRPgP001N;PjOb:@F1?vj0PSB,0*47";
const VOYAGE_1: &str =
    "!AIVDM,2,1,4,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*19";
const VOYAGE_2: &str = "!AIVDM,2,2,4,A,88888888880,2*20";
const BINARY: &str = "!AIVDM,1,1,,A,85Mwp`1Kf3aCnsNvBWLi=wQuNhA5t43N`5nCuI=p<IBfVqnMgPGs,0*47";

#[tokio::test]
/// Pending fragments, garbage and unsupported types never surface.
async fn test_next_message_skips_non_messages() {
    let source = MockLineSource::from_lines(&[
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        VOYAGE_1,
        "!AIVDM,x,1,,A,144iRPgP001N;PjOb:@F1?vj0PSB,0",
        BINARY,
        VOYAGE_2,
        POSITION,
    ]);
    let mut stream = AisStream::new(source, AisDecoder::default());

    let first = stream.next_message().await.unwrap().expect("voyage data");
    assert!(matches!(first.body, MessageBody::StaticVoyage(_)));
    let second = stream.next_message().await.unwrap().expect("position");
    assert_eq!(second.message_type, 1);
    assert_eq!(stream.next_message().await, Ok(None));
    assert_eq!(stream.decoder().pending(), 0);
}

#[tokio::test]
/// Feed errors reach the caller and the stream keeps going.
async fn test_error_passthrough() {
    let (tx, source) = MockLineSource::create();
    tx.send(Err(MockFeedError("link down"))).unwrap();
    tx.send(Ok(POSITION.to_string())).unwrap();
    drop(tx);

    let mut stream = AisStream::new(source, AisDecoder::default());
    assert_eq!(stream.next_message().await, Err(MockFeedError("link down")));
    assert!(stream.next_message().await.unwrap().is_some());
    assert_eq!(stream.next_message().await, Ok(None));
}

#[tokio::test]
/// A fragment left pending at the end of the feed stays in the decoder.
async fn test_into_parts_keeps_pending_fragments() {
    let source = MockLineSource::from_lines(&[VOYAGE_1]);
    let mut stream = AisStream::new(source, AisDecoder::default());

    assert_eq!(stream.next_message().await, Ok(None));
    let (_source, mut decoder) = stream.into_parts();
    assert_eq!(decoder.pending(), 1);
    assert!(decoder.decode(VOYAGE_2).is_decoded());
}

#[tokio::test]
async fn test_into_messages_collects() {
    let (tx, source) = MockLineSource::create();
    let producer = tokio::spawn(async move {
        for line in [POSITION, VOYAGE_1, VOYAGE_2] {
            tx.send(Ok(line.to_string())).unwrap();
            tokio::task::yield_now().await;
        }
        tx.send(Err(MockFeedError("parity"))).unwrap();
        tx.send(Ok(POSITION.to_string())).unwrap();
    });

    let items: Vec<_> = AisStream::new(source, AisDecoder::default())
        .into_messages()
        .collect()
        .await;
    producer.await.unwrap();

    assert_eq!(items.len(), 4);
    assert!(items[0].as_ref().is_ok_and(|m| m.message_type == 1));
    assert!(items[1].as_ref().is_ok_and(|m| m.message_type == 5));
    assert_eq!(items[2], Err(MockFeedError("parity")));
    assert!(items[3].is_ok());
}

#[tokio::test]
/// With an age limit, a first fragment left waiting too long is evicted and
/// its late second fragment is dropped.
async fn test_stale_fragment_evicted() {
    let config = DecoderConfig::new().max_fragment_age(Some(Duration::from_millis(50)));
    let (tx, source) = MockLineSource::create();
    let producer = tokio::spawn(async move {
        tx.send(Ok(VOYAGE_1.to_string())).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        tx.send(Ok(VOYAGE_2.to_string())).unwrap();
        tx.send(Ok(POSITION.to_string())).unwrap();
    });

    let mut stream = AisStream::new(source, AisDecoder::new(config));
    let message = stream.next_message().await.unwrap().expect("position");
    assert_eq!(message.message_type, 1);
    assert_eq!(stream.next_message().await, Ok(None));
    assert_eq!(stream.decoder().pending(), 0);
    producer.await.unwrap();
}

#[tokio::test]
/// Without an age limit, a slow second fragment still completes the message.
async fn test_slow_fragment_kept_without_age_limit() {
    let (tx, source) = MockLineSource::create();
    let producer = tokio::spawn(async move {
        tx.send(Ok(VOYAGE_1.to_string())).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        tx.send(Ok(VOYAGE_2.to_string())).unwrap();
    });

    let mut stream = AisStream::new(source, AisDecoder::default());
    let message = stream.next_message().await.unwrap().expect("voyage data");
    assert!(matches!(message.body, MessageBody::StaticVoyage(_)));
    producer.await.unwrap();
}
