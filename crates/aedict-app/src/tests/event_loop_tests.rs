//! Event loop round trips over kanal channels

use std::sync::Arc;
use std::time::Duration;

use aedict_config::Config;
use aedict_core::dictionary::{DictionaryIndex, DictionaryKind, DictionaryLookup, SearchQuery};
use aedict_core::error::LookupError;
use aedict_lang_japanese::{InMemoryIndex, JapaneseProcessor};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::state::AppState;

struct Harness {
    to_app: AsyncSender<AppEvent>,
    from_app: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

fn spawn_loop(config: Config, processor: JapaneseProcessor) -> Harness {
    let (to_app, app_rx) = kanal::bounded_async(16);
    let (app_tx, from_app) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(event_loop(
        Arc::new(AppState::new(config)),
        app_rx,
        app_tx,
        Arc::new(processor),
        cancel.clone(),
    ));
    Harness {
        to_app,
        from_app,
        cancel,
        handle,
    }
}

fn edict_processor() -> JapaneseProcessor {
    let edict = InMemoryIndex::from_lines(
        DictionaryKind::Edict,
        [
            "母 [はは] /(n) (hum) mother/(P)/",
            "お母さん [おかあさん] /(n) (hon) mother/(P)/",
            "食べる [たべる] /(v1,vt) to eat/(P)/",
        ],
    );
    JapaneseProcessor::with_sources(Box::new(edict), None)
}

async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

struct SlowLookup;

impl DictionaryLookup for SlowLookup {
    fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, LookupError> {
        std::thread::sleep(Duration::from_millis(300));
        Ok(Vec::new())
    }
}

struct SlowIndex;

impl DictionaryIndex for SlowIndex {
    fn kind(&self) -> DictionaryKind {
        DictionaryKind::Edict
    }

    fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
        Ok(Box::new(SlowLookup))
    }
}

struct BrokenIndex;

impl DictionaryIndex for BrokenIndex {
    fn kind(&self) -> DictionaryKind {
        DictionaryKind::Edict
    }

    fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
        Err(LookupError::Io(std::io::Error::other("index corrupted")))
    }
}

#[tokio::test]
async fn test_text_input_round_trip() {
    let h = spawn_loop(Config::default(), edict_processor());

    h.to_app
        .send(AppEvent::TextInput("お母さん".to_string()))
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => {
            assert_eq!(entries.len(), 4);
            assert_eq!(entries[1].reading, "はは");
        }
        other => panic!("unexpected event {other:?}"),
    }

    h.to_app
        .send(AppEvent::SetMode(aedict_core::types::SegmentMode::PerWord))
        .await
        .unwrap();
    assert!(matches!(next_event(&h.from_app).await, AppEvent::Status(_)));

    h.to_app
        .send(AppEvent::TextInput("お母さん".to_string()))
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].reading, "おかあさん");
        }
        other => panic!("unexpected event {other:?}"),
    }

    h.to_app.send(AppEvent::Quit).await.unwrap();
    assert!(matches!(next_event(&h.from_app).await, AppEvent::Quit));
    assert!(h.handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_broken_index_yields_error_row() {
    let h = spawn_loop(
        Config::default(),
        JapaneseProcessor::with_sources(Box::new(BrokenIndex), None),
    );

    h.to_app
        .send(AppEvent::TextInput("母".to_string()))
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => {
            assert_eq!(entries.len(), 1);
            assert!(entries[0].japanese.contains("Analysis failed"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_analysis_times_out() {
    let config = Config {
        analysis_timeout_ms: 50,
        ..Config::default()
    };
    let h = spawn_loop(
        config,
        JapaneseProcessor::with_sources(Box::new(SlowIndex), None),
    );

    h.to_app
        .send(AppEvent::TextInput("母".to_string()))
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => {
            assert_eq!(entries.len(), 1);
            assert!(entries[0].japanese.starts_with("Analysis failed: timed out"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_discards_in_flight_analysis() {
    let h = spawn_loop(
        Config::default(),
        JapaneseProcessor::with_sources(Box::new(SlowIndex), None),
    );

    h.to_app
        .send(AppEvent::TextInput("母".to_string()))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    h.cancel.cancel();

    let result = timeout(Duration::from_secs(2), h.handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
    assert!(h.from_app.try_recv().unwrap_or(None).is_none());
}

#[tokio::test]
async fn test_toggles_and_inflect() {
    let h = spawn_loop(Config::default(), edict_processor());

    h.to_app.send(AppEvent::ToggleRomaji).await.unwrap();
    assert!(matches!(next_event(&h.from_app).await, AppEvent::Status(s) if s == "Showing romaji"));

    h.to_app
        .send(AppEvent::Inflect {
            reading: "taberu".to_string(),
            ichidan: false,
        })
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowInflections(groups) => {
            assert!(groups.iter().any(|g| g.japanese == "tabenai"));
            assert!(groups.iter().all(|g| g.japanese != "taberareru"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    h.to_app.send(AppEvent::ToggleBasic).await.unwrap();
    assert!(matches!(next_event(&h.from_app).await, AppEvent::Status(_)));
    h.to_app
        .send(AppEvent::Inflect {
            reading: "taberu".to_string(),
            ichidan: false,
        })
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowInflections(groups) => {
            assert!(groups.iter().any(|g| g.japanese == "taberareru"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_search_event() {
    let h = spawn_loop(Config::default(), edict_processor());

    h.to_app
        .send(AppEvent::Search {
            query: "mother".to_string(),
            exact: true,
        })
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => assert_eq!(entries.len(), 2),
        other => panic!("unexpected event {other:?}"),
    }

    h.to_app
        .send(AppEvent::Search {
            query: "xyzzy".to_string(),
            exact: true,
        })
        .await
        .unwrap();
    assert!(matches!(next_event(&h.from_app).await, AppEvent::Status(s) if s == "No matches"));
}

#[tokio::test]
async fn test_analysis_keeps_typed_characters() {
    let h = spawn_loop(Config::default(), edict_processor());

    h.to_app
        .send(AppEvent::TextInput(" ㈱母\n".to_string()))
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].japanese, "㈱");
            assert_eq!(entries[1].reading, "はは");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn test_full_width_search_is_normalized() {
    let h = spawn_loop(Config::default(), edict_processor());

    h.to_app
        .send(AppEvent::Search {
            query: "ｍｏｔｈｅｒ".to_string(),
            exact: true,
        })
        .await
        .unwrap();
    match next_event(&h.from_app).await {
        AppEvent::ShowEntries(entries) => assert_eq!(entries.len(), 2),
        other => panic!("unexpected event {other:?}"),
    }
}
