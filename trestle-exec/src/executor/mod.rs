pub mod api;
pub mod events;
pub mod http;
pub mod metrics;
pub mod preview;
mod result;
mod runner;
mod types;
pub mod worker;

pub use api::{ApiTransport, RemoteError, TrestleClient};
pub use events::{
    CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink, TracingEventSink,
};
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
pub use metrics::{BatchMetrics, MetricsCollector};
pub use preview::{preview_requests, RequestPreview};
pub use result::{BatchAborted, ItemError};
pub use runner::BatchRunner;
pub use types::ExecConfig;
pub use worker::ItemOutcome;
