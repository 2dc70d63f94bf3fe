use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BatchStarted {
        run_id: Uuid,
        items: usize,
        continue_on_fail: bool,
    },
    ItemSkipped {
        run_id: Uuid,
        index: usize,
    },
    ItemSucceeded {
        run_id: Uuid,
        index: usize,
    },
    ItemFailed {
        run_id: Uuid,
        index: usize,
        message: String,
    },
    BatchFinished {
        run_id: Uuid,
        emitted: usize,
        failed: usize,
        skipped: usize,
    },
    BatchAborted {
        run_id: Uuid,
        index: usize,
        message: String,
    },
}

impl Event {
    pub fn run_id(&self) -> Uuid {
        match self {
            Event::BatchStarted { run_id, .. }
            | Event::ItemSkipped { run_id, .. }
            | Event::ItemSucceeded { run_id, .. }
            | Event::ItemFailed { run_id, .. }
            | Event::BatchFinished { run_id, .. }
            | Event::BatchAborted { run_id, .. } => *run_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::BatchStarted { .. } => "batch.started",
            Event::ItemSkipped { .. } => "item.skipped",
            Event::ItemSucceeded { .. } => "item.succeeded",
            Event::ItemFailed { .. } => "item.failed",
            Event::BatchFinished { .. } => "batch.finished",
            Event::BatchAborted { .. } => "batch.aborted",
        }
    }

    pub fn to_json(&self) -> JsonValue {
        let mut v = match self {
            Event::BatchStarted {
                items,
                continue_on_fail,
                ..
            } => json!({ "items": items, "continue_on_fail": continue_on_fail }),
            Event::ItemSkipped { index, .. } | Event::ItemSucceeded { index, .. } => {
                json!({ "index": index })
            }
            Event::ItemFailed { index, message, .. } | Event::BatchAborted { index, message, .. } => {
                json!({ "index": index, "message": message })
            }
            Event::BatchFinished {
                emitted,
                failed,
                skipped,
                ..
            } => json!({ "emitted": emitted, "failed": failed, "skipped": skipped }),
        };
        if let Some(map) = v.as_object_mut() {
            map.insert("type".to_string(), json!(self.kind()));
            map.insert("run_id".to_string(), json!(self.run_id().to_string()));
        }
        v
    }
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

#[async_trait]
impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    async fn emit(&self, event: Event) {
        (**self).emit(event).await
    }
}

#[derive(Default)]
pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

/// JSON lines on stdout.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        println!("{}", serde_json::to_string(&event.to_json()).unwrap_or_default());
    }
}

pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: Event) {
        let run_id = event.run_id();
        match &event {
            Event::BatchStarted {
                items,
                continue_on_fail,
                ..
            } => tracing::info!(%run_id, items, continue_on_fail, "batch started"),
            Event::ItemSkipped { index, .. } => {
                tracing::debug!(%run_id, index, "item skipped: no request for resource/operation")
            }
            Event::ItemSucceeded { index, .. } => tracing::debug!(%run_id, index, "item succeeded"),
            Event::ItemFailed { index, message, .. } => {
                tracing::warn!(%run_id, index, error = %message, "item failed")
            }
            Event::BatchFinished {
                emitted,
                failed,
                skipped,
                ..
            } => tracing::info!(%run_id, emitted, failed, skipped, "batch finished"),
            Event::BatchAborted { index, message, .. } => {
                tracing::error!(%run_id, index, error = %message, "batch aborted")
            }
        }
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_type_and_run_id() {
        let run_id = Uuid::new_v4();
        let v = Event::ItemFailed {
            run_id,
            index: 2,
            message: "boom".to_string(),
        }
        .to_json();
        assert_eq!(v["type"], "item.failed");
        assert_eq!(v["run_id"], run_id.to_string());
        assert_eq!(v["index"], 2);
        assert_eq!(v["message"], "boom");
    }
}
