//! Server-sent events feed of the task collection.

use crate::AppState;

use cutover_core::{TaskSnapshot, TaskSubscription};

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;

pub const TASKS_EVENT: &str = "tasks";
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// GET /api/tasks/events
///
/// Sends the current collection right away and again after every mutation.
pub async fn task_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.notifier.subscribe();
    log::debug!(
        "SSE subscriber connected ({} active)",
        state.notifier.subscriber_count()
    );

    let initial = subscription.current();
    let stream = stream::unfold(
        (subscription, Some(initial)),
        |(mut subscription, pending): (TaskSubscription, Option<TaskSnapshot>)| async move {
            let snapshot = match pending {
                Some(snapshot) => snapshot,
                None => subscription.changed().await?,
            };
            Some((encode_event(snapshot.as_slice()), (subscription, None)))
        },
    )
    // A collection that fails to encode is skipped, never sent as empty
    .filter_map(|event| async move { event.map(Ok::<_, Infallible>) });

    let stream = stream.take_until(async move { state.shutdown_started().await });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
}

/// A `tasks` event carrying `data` as JSON; `None` if it cannot be encoded.
pub(crate) fn encode_event<T: Serialize + ?Sized>(data: &T) -> Option<Event> {
    match Event::default().event(TASKS_EVENT).json_data(data) {
        Ok(event) => Some(event),
        Err(e) => {
            log::error!("Failed to encode tasks event, skipping it: {}", e);
            None
        }
    }
}
