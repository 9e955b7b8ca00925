use std::env;

use aedict_core::types::RomanizationScheme;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

fn default_analysis_timeout_ms() -> u64 {
    10000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,

    /// Upper bound for a single background analysis
    #[serde(default = "default_analysis_timeout_ms")]
    pub analysis_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            ui: UiConfig::default(),
            analysis_timeout_ms: default_analysis_timeout_ms(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overrides fields from `AEDICT_DICT_DIR`, `AEDICT_ROMANIZATION`,
    /// `AEDICT_USE_ROMAJI` and `ANALYSIS_TIMEOUT_MS` when set.
    pub fn apply_env(&mut self) {
        if let Ok(dir) = env::var("AEDICT_DICT_DIR") {
            self.dictionary.dict_dir = dir;
        }

        if let Some(scheme) = env::var("AEDICT_ROMANIZATION")
            .ok()
            .and_then(|v| RomanizationScheme::parse(&v))
        {
            self.ui.romanization = scheme;
        }

        if let Some(use_romaji) = env::var("AEDICT_USE_ROMAJI")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.ui.use_romaji = use_romaji;
        }

        if let Some(timeout) = env::var("ANALYSIS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.analysis_timeout_ms = timeout;
        }
    }
}
