//! Helper functions for UI operations.
//!
//! Background task spawning and panic containment shared by the loop.

use crate::app::{AppEvent, DataSource};
use crate::faq::{fetch_faqs, load_file};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// Instead of the task silently disappearing (caught by Tokio's runtime but not
/// handled), panics are converted to `Err(String)` containing the panic message.
///
/// # Example
///
/// ```ignore
/// tokio::spawn(async move {
///     match catch_task_panic(async { do_work().await }).await {
///         Ok(result) => handle_result(result),
///         Err(panic_msg) => {
///             let _ = tx.send(AppEvent::TaskPanicked { task: "work", error: panic_msg }).await;
///         }
///     }
/// });
/// ```
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Spawn the one-shot FAQ load.
///
/// The result comes back as `AppEvent::FaqsLoaded`; input keeps flowing while
/// the request is in flight.
pub(super) fn spawn_initial_load(
    source: DataSource,
    client: reqwest::Client,
    event_tx: mpsc::Sender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tracing::debug!(source = %source.describe(), "Spawning initial FAQ load");

    tokio::spawn(async move {
        let outcome = catch_task_panic(async {
            match &source {
                DataSource::Remote { url, timeout } => fetch_faqs(&client, url, *timeout).await,
                DataSource::File(path) => load_file(path).await,
            }
        })
        .await;

        let event = match outcome {
            Ok(result) => AppEvent::FaqsLoaded(result),
            Err(panic_msg) => {
                tracing::error!(error = %panic_msg, "FAQ load task panicked");
                AppEvent::TaskPanicked {
                    task: "faq_load",
                    error: panic_msg,
                }
            }
        };

        if event_tx.send(event).await.is_err() {
            tracing::warn!("Failed to deliver FAQ load result (receiver dropped)");
        }
    })
}
