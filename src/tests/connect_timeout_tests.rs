//! Guarded-connect behavior under a paused tokio clock

use std::time::Duration;

use super::mock_collaborators::{MockBuilder, MockOracle, MockSource, MockWallet};
use crate::sender::{
    connect_with_timeout, send_funds, SendOptions, SendRequest, SenderError,
};

#[tokio::test(start_paused = true)]
async fn hung_connect_times_out_at_the_limit() {
    let source = MockSource::never_connecting();

    let err = connect_with_timeout(&source, Duration::from_secs(30))
        .await
        .unwrap_err();

    match err {
        SenderError::ConnectionTimedOut(limit) => {
            assert_eq!(limit, Duration::from_secs(30));
        }
        other => panic!("expected ConnectionTimedOut, got {other:?}"),
    }
    assert_eq!(source.connect_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn timed_out_pipeline_reports_the_configured_limit() {
    let wallet = MockWallet::mainnet();
    let oracle = MockOracle::with_feerate(1.0);
    let source = MockSource::never_connecting();
    let builder = MockBuilder::yielding(Vec::new(), 0);
    let options = SendOptions {
        connect_timeout: Duration::from_secs(5),
        ..SendOptions::default()
    };

    let err = send_funds(
        &wallet,
        &oracle,
        &source,
        &builder,
        SendRequest::new("kaspa:qq2efzv5g573dsmcrah2", 100_000_000),
        &options,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SenderError::ConnectionTimedOut(d) if d == Duration::from_secs(5)));
    assert!(err.to_string().contains("5s"));
    // The connection never opened, so it is never released.
    assert_eq!(source.disconnect_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn fast_connect_is_unaffected_by_the_guard() {
    let source = MockSource::synced(Vec::new());
    connect_with_timeout(&source, Duration::from_secs(30))
        .await
        .unwrap();
    assert_eq!(source.connect_calls(), 1);
}
