//! Background task worker
//!
//! The picker's only background work is the search debounce timer. Tasks are
//! sent from the effect executor over an unbounded channel; results flow back
//! to the main loop, which turns them into actions.

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

/// Work items executed off the UI loop
#[derive(Debug, Clone)]
pub enum BackgroundTask {
    /// Sleep for the quiet period, then report the query as settled
    DebounceSearch {
        generation: u64,
        query: String,
        delay_ms: u64,
    },
}

/// Results sent back to the main loop
#[derive(Debug, Clone)]
pub enum TaskResult {
    SearchSettled { generation: u64, query: String },
}

/// Spawn the worker that executes background tasks
///
/// Each timer runs on its own tokio task so a pending debounce never delays a
/// newer one; the reducer discards settled timers whose generation is stale.
pub fn start_task_worker(
    mut task_rx: mpsc::UnboundedReceiver<BackgroundTask>,
    result_tx: mpsc::UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(task) = task_rx.recv().await {
            match task {
                BackgroundTask::DebounceSearch {
                    generation,
                    query,
                    delay_ms,
                } => {
                    let result_tx = result_tx.clone();
                    tokio::spawn(async move {
                        sleep(Duration::from_millis(delay_ms)).await;
                        debug!("search debounce fired (generation {generation})");
                        let _ = result_tx.send(TaskResult::SearchSettled { generation, query });
                    });
                }
            }
        }
    })
}
