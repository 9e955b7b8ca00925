use std::fmt::Write as _;
use std::sync::Arc;

use aedict_config::Config;
use aedict_config::ui::UiConfig;
use aedict_core::types::DictEntry;
use aedict_lang_japanese::{InflectionGroup, Romanize};
use kanal::AsyncReceiver;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::events::AppEvent;

/// Renders results to stdout until told to quit
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>, config: Arc<RwLock<Config>>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    loop {
        let event = app_to_ui_rx.recv().await?;
        let output = match event {
            AppEvent::ShowEntries(entries) => {
                let ui = config.read().await.ui.clone();
                render_entries(&entries, &ui)
            }
            AppEvent::ShowInflections(groups) => render_inflections(&groups),
            AppEvent::Status(message) => format!("-- {message}\n"),
            AppEvent::Quit => {
                tracing::info!("UI loop stopping");
                return Ok(());
            }
            other => {
                tracing::debug!("Ignoring backend event in UI: {:?}", std::mem::discriminant(&other));
                continue;
            }
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }
}

/// One line per entry: `japanese [reading] gloss`, with kanji metadata
/// when present. Readings are romanized when romaji display is on.
/// Every entry is rendered; search results arrive already capped.
pub fn render_entries(entries: &[DictEntry], ui: &UiConfig) -> String {
    let mut out = String::new();

    for entry in entries {
        if !entry.is_valid() {
            let _ = writeln!(out, "{}", entry.japanese);
            continue;
        }

        let reading = match ui.display_romanization() {
            Some(scheme) => scheme.to_romaji(&entry.reading),
            None => entry.reading.clone(),
        };
        let _ = write!(out, "{} [{}]", entry.japanese, reading);
        if !entry.english.is_empty() {
            let _ = write!(out, " {}", entry.english);
        }

        let mut meta = Vec::new();
        if let Some(strokes) = entry.strokes {
            meta.push(format!("strokes {strokes}"));
        }
        if let Some(radical) = entry.radical {
            meta.push(format!("radical {radical}"));
        }
        if let Some(grade) = entry.grade {
            meta.push(format!("grade {grade}"));
        }
        if let Some(skip) = &entry.skip {
            meta.push(format!("SKIP {skip}"));
        }
        if !meta.is_empty() {
            let _ = write!(out, " ({})", meta.join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn render_inflections(groups: &[InflectionGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}\t{}", group.japanese, group.english);
        for example in &group.examples {
            let _ = writeln!(out, "    {}\t{}", example.japanese, example.english);
        }
    }
    out
}
