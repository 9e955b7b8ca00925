use std::sync::Arc;
use std::time::Duration;

use aedict_core::preprocess::{DefaultPreprocessor, Preprocessor};
use aedict_lang_japanese::JapaneseProcessor;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, run_blocking};
use crate::state::AppState;

pub async fn handle_search(
    query: String,
    exact: bool,
    state: &AppState,
    processor: &Arc<JapaneseProcessor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let query = DefaultPreprocessor.process(&query);
    let (ui, timeout) = {
        let config = state.config.read().await;
        (
            config.ui.clone(),
            Duration::from_millis(config.analysis_timeout_ms),
        )
    };

    let processor = processor.clone();
    let result = run_blocking(cancel, timeout, move || processor.search(&query, exact, &ui)).await;

    let event = match result {
        Some(Ok(Ok(entries))) if entries.is_empty() => AppEvent::Status("No matches".to_string()),
        Some(Ok(Ok(entries))) => AppEvent::ShowEntries(entries),
        Some(Ok(Err(e))) => {
            tracing::warn!("Search failed: {}", e);
            AppEvent::Status(format!("Search failed: {e}"))
        }
        Some(Err(e)) => {
            tracing::error!("Search task failed: {}", e);
            AppEvent::Status(format!("Search failed: {e}"))
        }
        None => {
            tracing::debug!("Search cancelled, result discarded");
            return Ok(());
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}
