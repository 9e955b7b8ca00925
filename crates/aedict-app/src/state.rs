use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use aedict_config::Config;
use aedict_core::types::SegmentMode;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    per_word: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            per_word: AtomicBool::new(false),
        }
    }

    pub fn mode(&self) -> SegmentMode {
        if self.per_word.load(Ordering::Relaxed) {
            SegmentMode::PerWord
        } else {
            SegmentMode::PerCharacter
        }
    }

    pub fn set_mode(&self, mode: SegmentMode) {
        self.per_word
            .store(mode == SegmentMode::PerWord, Ordering::Relaxed);
    }
}
