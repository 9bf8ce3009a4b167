//! Provider contract: options expansion, single-id confirms, deadline
//! translation, idempotent teardown.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gcp_pubsub_adapter::errors::{ProviderError, TransportError};
use gcp_pubsub_adapter::{
    PubsubTransportDatasource, ReceivedMessage, SubscriptionOptions, SubscriptionPath,
    SubscriptionProvider, SubscriptionProviderImpl,
};
use tokio::sync::Notify;

use common::{sample_message, FakeBehavior, FakeTransport};

fn provider(
    transport: FakeTransport,
    options: SubscriptionOptions,
) -> SubscriptionProviderImpl<FakeTransport> {
    SubscriptionProviderImpl::with_transport(
        transport,
        SubscriptionPath::new("xablau-xebleu-123456", "sample-sub"),
        options,
    )
}

#[tokio::test]
async fn fetch_messages_applies_options_on_every_call() {
    let transport = FakeTransport::new(FakeBehavior::Messages(vec![
        sample_message(b"{}"),
        sample_message(b"{}"),
    ]));
    let provider = provider(
        transport.clone(),
        SubscriptionOptions {
            deadline: 123,
            max_messages: 3,
        },
    );

    let messages = provider.fetch_messages().await.unwrap();
    assert_eq!(messages.len(), 2);

    let pulls = transport.pulls.lock().unwrap();
    assert_eq!(
        pulls.as_slice(),
        &[(
            "projects/xablau-xebleu-123456/subscriptions/sample-sub".to_owned(),
            3,
            Duration::from_secs(123),
        )]
    );
}

#[tokio::test]
async fn empty_pull_is_not_an_error() {
    let transport = FakeTransport::new(FakeBehavior::Messages(vec![]));
    let provider = provider(transport, SubscriptionOptions::default());
    let messages = provider.fetch_messages().await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn pull_deadline_exhaustion_becomes_provider_error() {
    let transport = FakeTransport::new(FakeBehavior::DeadlineExceeded);
    let provider = provider(transport, SubscriptionOptions::default());

    let err = provider.fetch_messages().await.unwrap_err();
    assert!(matches!(err, ProviderError::DeadlineExceeded(_)));
    assert!(err.to_string().contains("504 Deadline Exceeded"));
}

#[tokio::test]
async fn confirm_sends_exactly_one_ack_id() {
    let transport = FakeTransport::new(FakeBehavior::Messages(vec![]));
    let provider = provider(
        transport.clone(),
        SubscriptionOptions {
            deadline: 45,
            max_messages: 10,
        },
    );

    provider
        .confirm_message(&sample_message(b"{}"))
        .await
        .unwrap();

    let acks = transport.acks.lock().unwrap();
    assert_eq!(
        acks.as_slice(),
        &[(
            "projects/xablau-xebleu-123456/subscriptions/sample-sub".to_owned(),
            vec!["123abc".to_owned()],
            Duration::from_secs(45),
        )]
    );
}

#[tokio::test]
async fn confirm_deadline_exhaustion_becomes_provider_error() {
    let transport = FakeTransport::new(FakeBehavior::DeadlineExceeded);
    let provider = provider(transport, SubscriptionOptions::default());

    let err = provider
        .confirm_message(&sample_message(b"{}"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::DeadlineExceeded(_)));
    assert!(err.to_string().contains("504 Deadline Exceeded"));
}

#[tokio::test]
async fn non_deadline_transport_errors_pass_through_unmodified() {
    let transport = FakeTransport::new(FakeBehavior::NotFound);
    let provider = provider(transport, SubscriptionOptions::default());

    let err = provider.fetch_messages().await.unwrap_err();
    match err {
        ProviderError::Transport(TransportError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Resource not found");
        }
        other => panic!("expected pass-through transport error, got {other:?}"),
    }
}

/// Transport whose pull parks on a notification until the test releases it,
/// so teardown can be interleaved with an in-flight call.
struct ParkedTransport {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl PubsubTransportDatasource for ParkedTransport {
    async fn pull(
        &self,
        _subscription: &SubscriptionPath,
        _max_messages: i32,
        _retry_deadline: Duration,
    ) -> Result<Vec<ReceivedMessage>, TransportError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(vec![sample_message(b"{}")])
    }

    async fn acknowledge(
        &self,
        _subscription: &SubscriptionPath,
        _ack_ids: &[String],
        _retry_deadline: Duration,
    ) -> Result<(), TransportError> {
        Ok(())
    }
}

#[tokio::test]
async fn stop_during_an_in_flight_fetch_lets_the_fetch_finish() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let provider = Arc::new(SubscriptionProviderImpl::with_transport(
        ParkedTransport {
            entered: entered.clone(),
            release: release.clone(),
        },
        SubscriptionPath::new("xablau-xebleu-123456", "sample-sub"),
        SubscriptionOptions::default(),
    ));

    let in_flight = tokio::spawn({
        let provider = provider.clone();
        async move { provider.fetch_messages().await }
    });

    // Tear down while the pull is parked inside the transport.
    entered.notified().await;
    provider.stop();
    release.notify_one();

    let messages = in_flight.await.unwrap().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].ack_id, "123abc");

    let err = provider.fetch_messages().await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Transport(TransportError::ChannelClosed)
    ));
}

#[tokio::test]
async fn stop_is_idempotent_and_terminal() {
    let transport = FakeTransport::new(FakeBehavior::Messages(vec![]));
    let provider = provider(transport, SubscriptionOptions::default());

    provider.stop();
    provider.stop();

    let err = provider.fetch_messages().await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Transport(TransportError::ChannelClosed)
    ));
}

#[tokio::test]
async fn default_options_match_the_documented_defaults() {
    let transport = FakeTransport::new(FakeBehavior::Messages(vec![]));
    let provider = provider(transport.clone(), SubscriptionOptions::default());

    provider.fetch_messages().await.unwrap();

    let pulls = transport.pulls.lock().unwrap();
    assert_eq!(pulls[0].1, 1);
    assert_eq!(pulls[0].2, Duration::from_secs(300));
}
