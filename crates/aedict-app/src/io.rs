use aedict_core::types::SegmentMode;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// Reads stdin line by line and forwards each line as an event. End of
/// input counts as `:quit`.
pub async fn input_loop(cancel: CancellationToken, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Reading input from stdin");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    event_tx.send(AppEvent::Quit).await?;
                    break;
                };
                let Some(event) = parse_command(&line) else {
                    continue;
                };
                let quit = matches!(event, AppEvent::Quit);
                event_tx.send(event).await?;
                if quit {
                    break;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                break;
            }
        }
    }

    Ok(())
}

/// `:`-prefixed lines are commands, anything else is text to analyze.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::TextInput(line.to_string()));
    };

    let mut args = command.split_whitespace();
    let event = match args.next().unwrap_or_default() {
        "chars" => AppEvent::SetMode(SegmentMode::PerCharacter),
        "words" => AppEvent::SetMode(SegmentMode::PerWord),
        "romaji" => AppEvent::ToggleRomaji,
        "basic" => AppEvent::ToggleBasic,
        "inflect" => match args.next() {
            Some(reading) => AppEvent::Inflect {
                reading: reading.to_string(),
                ichidan: args.next() == Some("v1"),
            },
            None => AppEvent::Status("Usage: :inflect <reading> [v1]".to_string()),
        },
        "search" => {
            let query = args.collect::<Vec<_>>().join(" ");
            if query.is_empty() {
                AppEvent::Status("Usage: :search <query>".to_string())
            } else {
                AppEvent::Search { query, exact: true }
            }
        }
        "quit" | "q" => AppEvent::Quit,
        other => AppEvent::Status(format!("Unknown command :{other}")),
    };
    Some(event)
}
