use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::dto::message_dto::MessageResponse;
use crate::services::feed_service::FeedEvent;
use crate::services::message_view::MessageFilter;

/// Server-sent event stream: one `snapshot` event with the current query
/// result, then every matching `created` / `deleted` event.
///
/// Subscribe before loading the snapshot so nothing written in between is
/// missed; a change may then show up both in the snapshot and as an event.
pub fn live_feed(
    rx: broadcast::Receiver<FeedEvent>,
    filter: MessageFilter,
    snapshot: Vec<MessageResponse>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let first = stream::once(async move { Event::default().event("snapshot").json_data(&snapshot) });

    let updates = stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) if event.matches(&filter) => {
                    let sse = Event::default().event(event.name()).json_data(&event);
                    return Some((sse, rx));
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "live feed subscriber lagged");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(first.chain(updates)).keep_alive(KeepAlive::default())
}
