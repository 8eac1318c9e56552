// Latest figure per chart slot, broadcast to subscribers on every publish
use crate::application::error::DashboardError;
use crate::domain::figure::Figure;
use crate::domain::slot::ChartSlot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::{broadcast, RwLock};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotError {
    pub code: &'static str,
    pub message: String,
}

impl From<&DashboardError> for SlotError {
    fn from(err: &DashboardError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// What a chart region should currently show.
///
/// After a failed refresh `figure` still holds the last good figure (if any)
/// and `error` explains the failure; the next successful refresh clears it.
#[derive(Debug, Clone, Serialize)]
pub struct SlotState {
    pub slot: ChartSlot,
    pub tick: u64,
    pub figure: Option<Figure>,
    pub error: Option<SlotError>,
    pub updated_at: DateTime<Utc>,
}

pub struct FigureBoard {
    slots: RwLock<HashMap<ChartSlot, SlotState>>,
    updates: broadcast::Sender<SlotState>,
}

impl FigureBoard {
    pub fn new(capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(capacity);
        Self {
            slots: RwLock::new(HashMap::new()),
            updates,
        }
    }

    pub async fn publish_figure(&self, slot: ChartSlot, tick: u64, figure: Figure) {
        let state = SlotState {
            slot,
            tick,
            figure: Some(figure),
            error: None,
            updated_at: Utc::now(),
        };
        self.store(state).await;
    }

    pub async fn publish_error(&self, slot: ChartSlot, tick: u64, err: &DashboardError) {
        let previous = self
            .slots
            .read()
            .await
            .get(&slot)
            .and_then(|s| s.figure.clone());

        let state = SlotState {
            slot,
            tick,
            figure: previous,
            error: Some(SlotError::from(err)),
            updated_at: Utc::now(),
        };
        self.store(state).await;
    }

    async fn store(&self, state: SlotState) {
        self.slots.write().await.insert(state.slot, state.clone());
        // No connected clients is fine
        let _ = self.updates.send(state);
    }

    pub async fn get(&self, slot: ChartSlot) -> Option<SlotState> {
        self.slots.read().await.get(&slot).cloned()
    }

    /// Every computed slot, in page layout order
    pub async fn snapshot(&self) -> Vec<SlotState> {
        let slots = self.slots.read().await;
        ChartSlot::ALL
            .iter()
            .filter_map(|slot| slots.get(slot).cloned())
            .collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SlotState> {
        self.updates.subscribe()
    }
}

impl Default for FigureBoard {
    fn default() -> Self {
        Self::new(64)
    }
}
