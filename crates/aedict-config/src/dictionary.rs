use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dict_dir() -> String {
    "dict".to_string()
}

fn default_edict_file() -> String {
    "edict".to_string()
}

fn default_kanjidic_file() -> String {
    "kanjidic".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding the downloaded dictionary files
    #[serde(default = "default_dict_dir")]
    pub dict_dir: String,
    /// EDICT word dictionary, relative to `dict_dir`
    #[serde(default = "default_edict_file")]
    pub edict_file: String,
    /// KANJIDIC kanji dictionary, relative to `dict_dir`. Optional download.
    #[serde(default = "default_kanjidic_file")]
    pub kanjidic_file: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dict_dir: default_dict_dir(),
            edict_file: default_edict_file(),
            kanjidic_file: default_kanjidic_file(),
        }
    }
}

impl DictionaryConfig {
    pub fn edict_path(&self) -> PathBuf {
        PathBuf::from(&self.dict_dir).join(&self.edict_file)
    }

    pub fn kanjidic_path(&self) -> PathBuf {
        PathBuf::from(&self.dict_dir).join(&self.kanjidic_file)
    }
}
