use aedict_core::types::RomanizationScheme;
use serde::{Deserialize, Serialize};

fn default_use_romaji() -> bool {
    false
}

fn default_basic_inflections_only() -> bool {
    true
}

fn default_max_results() -> u32 {
    50
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Show readings as romaji instead of kana
    #[serde(default = "default_use_romaji")]
    pub use_romaji: bool,
    #[serde(default)]
    pub romanization: RomanizationScheme,
    /// Inflection table starts with basic forms only
    #[serde(default = "default_basic_inflections_only")]
    pub basic_inflections_only: bool,
    /// Search results kept per query; analyses are never capped
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            use_romaji: default_use_romaji(),
            romanization: RomanizationScheme::default(),
            basic_inflections_only: default_basic_inflections_only(),
            max_results: default_max_results(),
        }
    }
}

impl UiConfig {
    /// Scheme to display readings with, `None` when kana is shown.
    pub fn display_romanization(&self) -> Option<RomanizationScheme> {
        self.use_romaji.then_some(self.romanization)
    }
}
