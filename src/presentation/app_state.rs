// Application state for HTTP handlers
use crate::application::figure_board::FigureBoard;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<FigureBoard>,
    pub refresh_interval: Duration,
}
