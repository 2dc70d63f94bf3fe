use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::executor::{Event, EventSink};

#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    pub run_id: Option<Uuid>,
    pub items_total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub aborted_at: Option<usize>,
    pub started_at: Option<Instant>,
    pub duration: Option<Duration>,
}

impl BatchMetrics {
    /// Items that produced an output record.
    pub fn emitted(&self) -> usize {
        // the failure that aborts a strict run has no record
        (self.succeeded + self.failed).saturating_sub(usize::from(self.aborted_at.is_some()))
    }
}

/// Event sink that tallies the most recent batch.
#[derive(Default)]
pub struct MetricsCollector {
    metrics: Mutex<BatchMetrics>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> BatchMetrics {
        self.metrics.lock().await.clone()
    }
}

#[async_trait]
impl EventSink for MetricsCollector {
    async fn emit(&self, event: Event) {
        let mut m = self.metrics.lock().await;
        match event {
            Event::BatchStarted { run_id, items, .. } => {
                *m = BatchMetrics {
                    run_id: Some(run_id),
                    items_total: items,
                    started_at: Some(Instant::now()),
                    ..Default::default()
                };
            }
            Event::ItemSkipped { .. } => m.skipped += 1,
            Event::ItemSucceeded { .. } => m.succeeded += 1,
            Event::ItemFailed { .. } => m.failed += 1,
            Event::BatchAborted { index, .. } => {
                m.aborted_at = Some(index);
                m.duration = m.started_at.map(|s| s.elapsed());
            }
            Event::BatchFinished { .. } => {
                m.duration = m.started_at.map(|s| s.elapsed());
            }
        }
    }
}
