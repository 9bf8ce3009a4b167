#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Timelike, Utc};
use gcp_pubsub_adapter::errors::TransportError;
use gcp_pubsub_adapter::{PubsubTransportDatasource, ReceivedMessage, SubscriptionPath};

/// A received message matching the canonical fixture used across the suite:
/// published 2021-10-11T21:02:49.951000000Z, ack id `123abc`.
pub fn sample_message(data: &[u8]) -> ReceivedMessage {
    ReceivedMessage {
        ack_id: "123abc".to_owned(),
        data: data.to_vec(),
        message_id: "3175906331341274".to_owned(),
        attributes: Default::default(),
        ordering_key: String::new(),
        publish_time: Utc
            .with_ymd_and_hms(2021, 10, 11, 21, 2, 49)
            .unwrap()
            .with_nanosecond(951_000_000)
            .unwrap(),
        delivery_attempt: None,
    }
}

/// What the fake transport should do on each call.
pub enum FakeBehavior {
    Messages(Vec<ReceivedMessage>),
    DeadlineExceeded,
    NotFound,
}

/// Scripted transport recording every call it receives. Clones share the
/// recorders, so tests can hand one clone to the provider and keep another
/// for assertions.
#[derive(Clone)]
pub struct FakeTransport {
    behavior: Arc<FakeBehavior>,
    // (subscription, max_messages, deadline)
    pub pulls: Arc<Mutex<Vec<(String, i32, Duration)>>>,
    // (subscription, ack_ids, deadline)
    pub acks: Arc<Mutex<Vec<(String, Vec<String>, Duration)>>>,
}

impl FakeTransport {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior: Arc::new(behavior),
            pulls: Arc::new(Mutex::new(Vec::new())),
            acks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn fail(&self) -> Option<TransportError> {
        match *self.behavior {
            FakeBehavior::Messages(_) => None,
            FakeBehavior::DeadlineExceeded => Some(TransportError::Status {
                status: 504,
                message: "Deadline Exceeded".to_owned(),
            }),
            FakeBehavior::NotFound => Some(TransportError::Status {
                status: 404,
                message: "Resource not found".to_owned(),
            }),
        }
    }
}

#[async_trait]
impl PubsubTransportDatasource for FakeTransport {
    async fn pull(
        &self,
        subscription: &SubscriptionPath,
        max_messages: i32,
        retry_deadline: Duration,
    ) -> Result<Vec<ReceivedMessage>, TransportError> {
        self.pulls.lock().unwrap().push((
            subscription.as_str().to_owned(),
            max_messages,
            retry_deadline,
        ));
        if let Some(err) = self.fail() {
            return Err(err);
        }
        match &*self.behavior {
            FakeBehavior::Messages(messages) => Ok(messages.clone()),
            _ => unreachable!(),
        }
    }

    async fn acknowledge(
        &self,
        subscription: &SubscriptionPath,
        ack_ids: &[String],
        retry_deadline: Duration,
    ) -> Result<(), TransportError> {
        self.acks.lock().unwrap().push((
            subscription.as_str().to_owned(),
            ack_ids.to_vec(),
            retry_deadline,
        ));
        match self.fail() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
