use trestle_core::{Item, ParameterResolver, ResultRecord};
use uuid::Uuid;

use crate::executor::api::ApiTransport;
use crate::executor::events::{Event, EventSink};
use crate::executor::result::BatchAborted;
use crate::executor::types::ExecConfig;
use crate::executor::worker::{process_item, ItemOutcome};

/// Runs a batch one item at a time.
///
/// Item `i + 1` is not built until the call for item `i` has resolved. The runner keeps no
/// state between runs.
pub struct BatchRunner<'a> {
    pub transport: &'a dyn ApiTransport,
    pub events: &'a dyn EventSink,
    pub config: &'a ExecConfig,
}

impl BatchRunner<'_> {
    pub async fn run(
        &self,
        items: &[Item],
        params: &dyn ParameterResolver,
    ) -> Result<Vec<ResultRecord>, BatchAborted> {
        let run_id = Uuid::new_v4();
        self.events
            .emit(Event::BatchStarted {
                run_id,
                items: items.len(),
                continue_on_fail: self.config.continue_on_fail,
            })
            .await;

        let mut out = Vec::with_capacity(items.len());
        let mut failed = 0;
        let mut skipped = 0;

        for (index, item) in items.iter().enumerate() {
            let outcome =
                process_item(self.transport, &self.config.base_url, params, item, index).await;

            match outcome {
                ItemOutcome::Succeeded(json) => {
                    out.push(ResultRecord::success(json, index));
                    self.events.emit(Event::ItemSucceeded { run_id, index }).await;
                }
                ItemOutcome::Skipped => {
                    skipped += 1;
                    self.events.emit(Event::ItemSkipped { run_id, index }).await;
                }
                ItemOutcome::Failed(error) => {
                    let message = error.to_string();
                    self.events
                        .emit(Event::ItemFailed {
                            run_id,
                            index,
                            message: message.clone(),
                        })
                        .await;

                    if !self.config.continue_on_fail {
                        self.events
                            .emit(Event::BatchAborted {
                                run_id,
                                index,
                                message,
                            })
                            .await;
                        return Err(BatchAborted {
                            index,
                            error,
                            completed: out,
                        });
                    }

                    failed += 1;
                    out.push(ResultRecord::failure(error.cause(), index));
                }
            }
        }

        self.events
            .emit(Event::BatchFinished {
                run_id,
                emitted: out.len(),
                failed,
                skipped,
            })
            .await;
        Ok(out)
    }
}
