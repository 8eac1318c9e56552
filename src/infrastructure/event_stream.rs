// Server-Sent Events stream of chart slot updates
use crate::application::figure_board::{FigureBoard, SlotState};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

const SLOT_EVENT: &str = "slot";

/// Current state of every slot, followed by each update as it is published.
///
/// A client that falls behind the broadcast buffer is sent a fresh snapshot
/// instead of the updates it missed.
pub fn slot_updates(board: Arc<FigureBoard>) -> impl Stream<Item = SlotState> + Send + 'static {
    async_stream::stream! {
        // Subscribe before the snapshot so nothing published in between is lost
        let mut rx = board.subscribe();
        for state in board.snapshot().await {
            yield state;
        }

        loop {
            match rx.recv().await {
                Ok(state) => {
                    yield state;
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Event stream lagged by {} updates, resending snapshot", skipped);
                    for state in board.snapshot().await {
                        yield state;
                    }
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

fn to_event(state: &SlotState) -> Option<Event> {
    match Event::default().event(SLOT_EVENT).json_data(state) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Failed to serialize {} update: {}", state.slot.id(), e);
            None
        }
    }
}

/// Create an SSE response from the board's update stream
pub fn sse_from_board(
    board: Arc<FigureBoard>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
    let stream = slot_updates(board)
        .filter_map(|state| async move { to_event(&state).map(Ok) });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
