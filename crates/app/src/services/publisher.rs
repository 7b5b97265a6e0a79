//! Event publisher port and in-memory implementation.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::Context;
use domain::OrderError;
use domain::error::Result;

/// Queue carrying order-creation events.
pub const ORDER_CREATED_QUEUE: &str = "order.created";

/// A message bound for a named delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub content_type: &'static str,
    pub persistent: bool,
    pub body: Vec<u8>,
}

impl OutboundMessage {
    /// A JSON message with persistent delivery intent.
    pub fn json(body: Vec<u8>) -> Self {
        Self {
            content_type: "application/json",
            persistent: true,
            body,
        }
    }
}

/// Capability that durably emits named domain events.
///
/// Callers declare the queue before publishing; declaring an existing queue
/// is a no-op. The message-broker adapter lives outside this core.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Ensures the named queue exists.
    async fn declare_queue(&self, name: &str) -> Result<()>;

    /// Publishes a message to the named queue with at-least-once intent.
    async fn publish(&self, ctx: &Context, queue: &str, message: OutboundMessage) -> Result<()>;
}

#[derive(Debug, Default)]
struct InMemoryPublisherState {
    queues: HashSet<String>,
    published: Vec<(String, OutboundMessage)>,
    fail_on_publish: bool,
}

/// In-memory publisher for tests and local wiring.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    state: Arc<RwLock<InMemoryPublisherState>>,
}

impl InMemoryPublisher {
    /// Creates a new in-memory publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail publish calls.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns true if the named queue was declared.
    pub fn is_declared(&self, queue: &str) -> bool {
        self.state.read().unwrap().queues.contains(queue)
    }

    /// Returns the total number of published messages.
    pub fn published_count(&self) -> usize {
        self.state.read().unwrap().published.len()
    }

    /// Returns the messages published to the given queue, in order.
    pub fn messages_for(&self, queue: &str) -> Vec<OutboundMessage> {
        self.state
            .read()
            .unwrap()
            .published
            .iter()
            .filter(|(q, _)| q == queue)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPublisher {
    async fn declare_queue(&self, name: &str) -> Result<()> {
        self.state.write().unwrap().queues.insert(name.to_string());
        Ok(())
    }

    async fn publish(&self, _ctx: &Context, queue: &str, message: OutboundMessage) -> Result<()> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_publish {
            return Err(OrderError::Upstream("broker unavailable".to_string()));
        }
        if !state.queues.contains(queue) {
            return Err(OrderError::Upstream(format!("queue not declared: {queue}")));
        }

        state.published.push((queue.to_string(), message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn declare_is_idempotent() {
        let publisher = InMemoryPublisher::new();
        publisher.declare_queue(ORDER_CREATED_QUEUE).await.unwrap();
        publisher.declare_queue(ORDER_CREATED_QUEUE).await.unwrap();
        assert!(publisher.is_declared(ORDER_CREATED_QUEUE));
    }

    #[tokio::test]
    async fn publish_records_the_message() {
        let publisher = InMemoryPublisher::new();
        publisher.declare_queue(ORDER_CREATED_QUEUE).await.unwrap();

        let message = OutboundMessage::json(b"{}".to_vec());
        publisher
            .publish(&Context::new(), ORDER_CREATED_QUEUE, message.clone())
            .await
            .unwrap();

        assert_eq!(publisher.published_count(), 1);
        assert_eq!(publisher.messages_for(ORDER_CREATED_QUEUE), vec![message]);
    }

    #[tokio::test]
    async fn publish_to_undeclared_queue_fails() {
        let publisher = InMemoryPublisher::new();
        let result = publisher
            .publish(
                &Context::new(),
                "missing.queue",
                OutboundMessage::json(vec![]),
            )
            .await;
        assert!(matches!(result, Err(OrderError::Upstream(_))));
    }

    #[tokio::test]
    async fn fail_toggle_rejects_publishes() {
        let publisher = InMemoryPublisher::new();
        publisher.declare_queue(ORDER_CREATED_QUEUE).await.unwrap();
        publisher.set_fail_on_publish(true);

        let result = publisher
            .publish(
                &Context::new(),
                ORDER_CREATED_QUEUE,
                OutboundMessage::json(vec![]),
            )
            .await;

        assert!(matches!(result, Err(OrderError::Upstream(_))));
        assert_eq!(publisher.published_count(), 0);
    }
}
