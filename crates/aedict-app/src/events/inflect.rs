use std::sync::Arc;
use std::time::Duration;

use aedict_config::ui::UiConfig;
use aedict_core::types::DictEntry;
use aedict_lang_japanese::kana::{contains_japanese, is_kana_word};
use aedict_lang_japanese::{InflectionOptions, JapaneseProcessor, Romanize};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, run_blocking};
use crate::state::AppState;

pub async fn handle_inflect(
    reading: String,
    ichidan: bool,
    state: &AppState,
    processor: &Arc<JapaneseProcessor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let (ui, timeout) = {
        let config = state.config.read().await;
        (
            config.ui.clone(),
            Duration::from_millis(config.analysis_timeout_ms),
        )
    };
    let options = InflectionOptions::from_config(&ui);

    let processor = processor.clone();
    let result = run_blocking(cancel, timeout, move || {
        let entry = resolve_verb(&processor, &reading, ichidan, &ui);
        processor.inflections(&entry, options)
    })
    .await;

    match result {
        Some(Ok(groups)) => app_to_ui_tx.send(AppEvent::ShowInflections(groups)).await?,
        Some(Err(e)) => {
            tracing::error!("Inflection task failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::Status(format!("Inflection failed: {e}")))
                .await?
        }
        None => tracing::debug!("Inflection cancelled, result discarded"),
    }

    Ok(())
}

/// The dictionary's verb entry for the input when there is one, otherwise
/// a bare entry classified from the reading and the ichidan flag. Romaji
/// input is read in the configured romanization.
pub fn resolve_verb(processor: &JapaneseProcessor, input: &str, ichidan: bool, ui: &UiConfig) -> DictEntry {
    let input = input.trim();
    let word = if contains_japanese(input) {
        input.to_string()
    } else {
        ui.romanization.to_hiragana(input)
    };

    let found = match processor.search(&word, true, ui) {
        Ok(entries) => entries
            .into_iter()
            .find(|e| e.is_verb() && (!ichidan || e.is_ichidan())),
        Err(e) => {
            tracing::warn!("Verb lookup for '{}' failed: {}", word, e);
            None
        }
    };

    match found {
        Some(mut entry) => {
            if is_kana_word(&word) {
                entry.reading = word;
            }
            entry
        }
        None => {
            if !is_kana_word(&word) {
                tracing::warn!("'{}' is not in the dictionary and has no kana reading", word);
            }
            DictEntry::new(word.as_str(), word.as_str(), if ichidan { "(v1)" } else { "" })
        }
    }
}
