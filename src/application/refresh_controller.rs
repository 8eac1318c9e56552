// Fixed-interval refresh of every chart slot
use crate::application::chart_producers::FigureProducer;
use crate::application::figure_board::FigureBoard;
use crate::domain::slot::ChartSlot;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

struct ChartPipeline {
    slot: ChartSlot,
    producer: Arc<dyn FigureProducer>,
}

pub struct RefreshController {
    interval: Duration,
    pipelines: Vec<ChartPipeline>,
    board: Arc<FigureBoard>,
}

impl RefreshController {
    pub fn new(interval: Duration, board: Arc<FigureBoard>) -> Self {
        Self {
            interval,
            pipelines: Vec::new(),
            board,
        }
    }

    pub fn register(mut self, slot: ChartSlot, producer: Arc<dyn FigureProducer>) -> Self {
        self.pipelines.push(ChartPipeline { slot, producer });
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Recompute every registered chart once. A failing chart is published as
    /// an error on its own slot and never affects the others.
    pub async fn tick(&self, tick: u64) {
        let start = Instant::now();
        join_all(self.pipelines.iter().map(|p| self.refresh(p, tick))).await;
        tracing::debug!(
            "Tick {} refreshed {} charts in {:?}",
            tick,
            self.pipelines.len(),
            start.elapsed()
        );
    }

    async fn refresh(&self, pipeline: &ChartPipeline, tick: u64) {
        match pipeline.producer.produce().await {
            Ok(figure) => {
                tracing::debug!("Published {} for tick {}", pipeline.slot.id(), tick);
                self.board.publish_figure(pipeline.slot, tick, figure).await;
            }
            Err(e) => {
                tracing::warn!("Error refreshing {}: {}", pipeline.slot.id(), e);
                self.board.publish_error(pipeline.slot, tick, &e).await;
            }
        }
    }

    /// Tick forever, starting immediately. Ticks never overlap: a tick that
    /// overruns the interval causes the missed ticks to be skipped.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut tick: u64 = 0;
        loop {
            ticker.tick().await;
            self.tick(tick).await;
            tick += 1;
        }
    }
}
