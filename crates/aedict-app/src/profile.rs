use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use aedict_config::Config;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Load a plain config file
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// `config.json` in the working directory when present, built-in
/// defaults otherwise
fn load_repo_default_config() -> anyhow::Result<Config> {
    let path = Path::new("config.json");
    if path.is_file() {
        load_config_file(path)
    } else {
        Ok(Config::default())
    }
}

/// `$AEDICT_HOME`, falling back to `~/.aedict`
fn aedict_root() -> anyhow::Result<PathBuf> {
    if let Ok(home) = env::var("AEDICT_HOME") {
        return Ok(PathBuf::from(home));
    }
    let home = env::var("HOME").context("neither AEDICT_HOME nor HOME is set")?;
    Ok(PathBuf::from(home).join(".aedict"))
}

pub fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(aedict_root()?.join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile =
        serde_json::from_str(&data).with_context(|| format!("invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Initialize the profiles folder and main profile if missing
pub fn init_user_config(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");

    if !main_profile.exists() {
        // Use repo default as the initial main profile
        let profile = Profile {
            name: "main".into(),
            value: load_repo_default_config()?,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile in {}", dir.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        load_repo_default_config()
    }
}

/// Add a new profile cloned from main (or repo default if main missing)
pub fn add_profile_from_default(dir: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let profile = Profile {
        name: new_name.into(),
        value: load_user_profile(dir, "main")?,
    };
    let file = dir.join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use aedict_core::types::RomanizationScheme;

    use super::*;

    #[test]
    fn test_init_creates_main_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = dir.path().join("profiles");

        init_user_config(&profiles).unwrap();
        assert!(profiles.join("main.json").is_file());

        let config = load_user_profile(&profiles, "main").unwrap();
        assert_eq!(config.analysis_timeout_ms, Config::default().analysis_timeout_ms);
    }

    #[test]
    fn test_missing_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.ui.romanization = RomanizationScheme::Kunrei;
        let main = Profile {
            name: "main".into(),
            value: config,
        };
        fs::write(
            dir.path().join("main.json"),
            serde_json::to_string_pretty(&main).unwrap(),
        )
        .unwrap();

        let loaded = load_user_profile(dir.path(), "reading").unwrap();
        assert_eq!(loaded.ui.romanization, RomanizationScheme::Kunrei);

        let path = add_profile_from_default(dir.path(), "reading").unwrap();
        assert!(path.is_file());
        let loaded = load_user_profile(dir.path(), "reading").unwrap();
        assert_eq!(loaded.ui.romanization, RomanizationScheme::Kunrei);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aedict.json");
        fs::write(&path, r#"{ "dictionary": { "dict_dir": "/opt/dict" } }"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.dictionary.edict_path(), Path::new("/opt/dict/edict"));
        assert!(load_config_file(&dir.path().join("missing.json")).is_err());
    }
}
