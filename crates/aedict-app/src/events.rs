use std::sync::Arc;
use std::time::Duration;

use aedict_core::types::{DictEntry, SegmentMode};
use aedict_lang_japanese::{InflectionGroup, JapaneseProcessor};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod analyze;
pub mod inflect;
pub mod search;

use analyze::handle_text_input;
use inflect::handle_inflect;
use search::handle_search;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Analyze the text in the current mode
    TextInput(String),
    SetMode(SegmentMode),
    ToggleRomaji,
    ToggleBasic,
    Inflect {
        reading: String,
        ichidan: bool,
    },
    Search {
        query: String,
        exact: bool,
    },
    ShowEntries(Vec<DictEntry>),
    ShowInflections(Vec<InflectionGroup>),
    Status(String),
    Quit,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    processor: Arc<JapaneseProcessor>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", std::mem::discriminant(&event));
        if let AppEvent::Quit = event {
            app_to_ui_tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        handle_events(&state, &processor, &app_to_ui_tx, &cancel, event).await?;
    }
}

async fn handle_events(
    state: &AppState,
    processor: &Arc<JapaneseProcessor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} bytes", text.len());
            handle_text_input(text, state, processor, app_to_ui_tx, cancel).await?;
        }
        AppEvent::SetMode(mode) => {
            state.set_mode(mode);
            let name = match mode {
                SegmentMode::PerCharacter => "per character",
                SegmentMode::PerWord => "per word",
            };
            app_to_ui_tx
                .send(AppEvent::Status(format!("Analysis mode: {name}")))
                .await?;
        }
        AppEvent::ToggleRomaji => {
            let use_romaji = {
                let mut config = state.config.write().await;
                config.ui.use_romaji = !config.ui.use_romaji;
                config.ui.use_romaji
            };
            let shown = if use_romaji { "romaji" } else { "kana" };
            app_to_ui_tx
                .send(AppEvent::Status(format!("Showing {shown}")))
                .await?;
        }
        AppEvent::ToggleBasic => {
            let basic_only = {
                let mut config = state.config.write().await;
                config.ui.basic_inflections_only = !config.ui.basic_inflections_only;
                config.ui.basic_inflections_only
            };
            let shown = if basic_only { "basic" } else { "all" };
            app_to_ui_tx
                .send(AppEvent::Status(format!("Showing {shown} inflections")))
                .await?;
        }
        AppEvent::Inflect { reading, ichidan } => {
            handle_inflect(reading, ichidan, state, processor, app_to_ui_tx, cancel).await?;
        }
        AppEvent::Search { query, exact } => {
            handle_search(query, exact, state, processor, app_to_ui_tx, cancel).await?;
        }
        AppEvent::Status(message) => {
            // Reader-side notices pass straight through
            app_to_ui_tx.send(AppEvent::Status(message)).await?;
        }
        AppEvent::ShowEntries(_) | AppEvent::ShowInflections(_) | AppEvent::Quit => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

/// Runs blocking dictionary work off the async threads. `None` when the
/// token fires first; the work is abandoned and its result discarded.
pub async fn run_blocking<T, F>(
    cancel: &CancellationToken,
    timeout: Duration,
    work: F,
) -> Option<anyhow::Result<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);

    tokio::select! {
        _ = cancel.cancelled() => None,
        result = tokio::time::timeout(timeout, task) => Some(match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(anyhow::anyhow!("task failed: {e}")),
            Err(_) => Err(anyhow::anyhow!("timed out after {} ms", timeout.as_millis())),
        }),
    }
}
