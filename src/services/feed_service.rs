use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::dto::message_dto::MessageResponse;
use crate::models::{batch::Batch, camp::Camp};
use crate::services::message_view::MessageFilter;

const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    Created {
        message: MessageResponse,
    },
    Deleted {
        id: Uuid,
        camp: Option<Camp>,
        batch: Option<Batch>,
    },
}

impl FeedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FeedEvent::Created { .. } => "created",
            FeedEvent::Deleted { .. } => "deleted",
        }
    }

    pub fn matches(&self, filter: &MessageFilter) -> bool {
        let (camp, batch) = match self {
            FeedEvent::Created { message } => (message.camp, message.batch),
            FeedEvent::Deleted { camp, batch, .. } => (*camp, *batch),
        };
        let camp_ok = filter.camp.map_or(true, |wanted| camp == Some(wanted));
        let batch_ok = filter.batch.map_or(true, |wanted| batch == Some(wanted));
        camp_ok && batch_ok
    }
}

/// Fan-out of message changes to live subscribers.
#[derive(Clone)]
pub struct FeedService {
    sender: broadcast::Sender<FeedEvent>,
}

impl Default for FeedService {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedService {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Subscribers that fall more than `capacity` events behind skip ahead.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event; having no subscribers is not an error.
    pub fn publish(&self, event: FeedEvent) {
        let kind = event.name();
        match self.sender.send(event) {
            Ok(receivers) => tracing::debug!(kind, receivers, "feed event published"),
            Err(_) => tracing::trace!(kind, "feed event dropped, no subscribers"),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::message_view::tests::message;

    fn created(camp: &str, batch: i16) -> FeedEvent {
        FeedEvent::Created {
            message: MessageResponse::from(message(camp, batch, "hello")),
        }
    }

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let feed = FeedService::new();
        let mut rx = feed.subscribe();
        feed.publish(created("BACK", 3));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.name(), "created");
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let feed = FeedService::new();
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(created("BACK", 3));
    }

    #[test]
    fn cohort_filter_applies_to_events() {
        let cohort = MessageFilter::cohort(Camp::Back, Batch::new(3).unwrap());
        assert!(created("BACK", 3).matches(&cohort));
        assert!(created("1", 3).matches(&cohort));
        assert!(!created("FRNT", 3).matches(&cohort));
        assert!(!created("BACK", 4).matches(&cohort));
        assert!(created("FRNT", 9).matches(&MessageFilter::default()));

        let deleted = FeedEvent::Deleted {
            id: Uuid::new_v4(),
            camp: Some(Camp::Back),
            batch: Batch::new(3).ok(),
        };
        assert!(deleted.matches(&cohort));
    }
}
