// Dashboard wiring - one board, one refresh controller, three chart pipelines
use crate::application::chart_producers::{PhishingThreatsChart, PhishingVictimsChart, ThreatMapChart};
use crate::application::figure_board::FigureBoard;
use crate::application::refresh_controller::RefreshController;
use crate::application::security_repository::SecurityDataRepository;
use crate::domain::slot::ChartSlot;
use std::sync::Arc;
use std::time::Duration;

const UPDATE_BUFFER: usize = 64;

pub struct Dashboard {
    pub board: Arc<FigureBoard>,
    pub controller: RefreshController,
}

impl Dashboard {
    pub fn new(repository: Arc<dyn SecurityDataRepository>, refresh_interval: Duration) -> Self {
        let board = Arc::new(FigureBoard::new(UPDATE_BUFFER));

        let controller = RefreshController::new(refresh_interval, board.clone())
            .register(
                ChartSlot::PhishingVictims,
                Arc::new(PhishingVictimsChart::new(repository.clone())),
            )
            .register(
                ChartSlot::ThreatMap,
                Arc::new(ThreatMapChart::new(repository.clone())),
            )
            .register(
                ChartSlot::PhishingThreats,
                Arc::new(PhishingThreatsChart::new(repository)),
            );

        Self { board, controller }
    }
}
