use std::sync::Arc;
use std::time::Duration;

use aedict_core::preprocess::{AnalysisPreprocessor, Preprocessor};
use aedict_core::types::{DictEntry, SegmentMode};
use aedict_lang_japanese::JapaneseProcessor;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, run_blocking};
use crate::state::AppState;

pub async fn handle_text_input(
    text: String,
    state: &AppState,
    processor: &Arc<JapaneseProcessor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let normalized = AnalysisPreprocessor.process(&text);
    if normalized.is_empty() {
        return Ok(());
    }
    tracing::debug!("Normalized: '{}'", normalized);

    let timeout = Duration::from_millis(state.config.read().await.analysis_timeout_ms);
    match run_analysis(processor.clone(), normalized, state.mode(), timeout, cancel).await {
        Some(entries) => {
            tracing::debug!("Sending {} entries", entries.len());
            app_to_ui_tx.send(AppEvent::ShowEntries(entries)).await?;
        }
        None => tracing::debug!("Analysis cancelled, result discarded"),
    }

    Ok(())
}

/// Analysis on the blocking pool. A failed or timed-out task becomes the
/// same single error row a failed lookup produces.
pub async fn run_analysis(
    processor: Arc<JapaneseProcessor>,
    text: String,
    mode: SegmentMode,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Option<Vec<DictEntry>> {
    let result = run_blocking(cancel, timeout, move || processor.analyze(&text, mode)).await?;

    Some(result.unwrap_or_else(|e| {
        tracing::error!("Analysis task failed: {}", e);
        vec![DictEntry::error_message(format!("Analysis failed: {e}"))]
    }))
}
