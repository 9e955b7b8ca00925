use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use aedict_core::dictionary::{
    DictionaryIndex, DictionaryKind, DictionaryLookup, DictionaryMetadata,
};
use aedict_core::error::{LoadError, LookupError};

use crate::dictionary::{MemoryDictionary, MemoryLookup};

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load a UTF-8 EDICT or KANJIDIC file
    pub fn load_from_file(kind: DictionaryKind, path: &Path) -> Result<MemoryDictionary, LoadError> {
        tracing::info!("Loading {} from file: {}", kind.as_str(), path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;
        let dict = Self::load_from_reader(kind, file)?;
        tracing::info!("Loaded {} {} entries from file", dict.entry_count(), kind.as_str());
        Ok(dict)
    }

    pub fn load_from_reader(kind: DictionaryKind, reader: impl Read) -> Result<MemoryDictionary, LoadError> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidData => LoadError::InvalidFormat(format!(
                    "{} file is not valid UTF-8",
                    kind.as_str()
                )),
                _ => LoadError::IoError(e),
            })?;
        Ok(MemoryDictionary::from_lines(kind, lines))
    }
}

/// Dictionary file in the configured dictionary directory. Counts as
/// installed once the file exists; loaded on first open and shared by
/// later lookups.
pub struct FileIndex {
    kind: DictionaryKind,
    path: PathBuf,
    cache: Mutex<Option<Arc<MemoryDictionary>>>,
}

impl FileIndex {
    pub fn new(kind: DictionaryKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Arc<MemoryDictionary>, LookupError> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dict) = cache.as_ref() {
            return Ok(dict.clone());
        }
        let dict = Arc::new(DictionaryLoader::load_from_file(self.kind, &self.path)?);
        *cache = Some(dict.clone());
        Ok(dict)
    }
}

impl DictionaryIndex for FileIndex {
    fn kind(&self) -> DictionaryKind {
        self.kind
    }

    fn is_installed(&self) -> bool {
        self.path.is_file()
    }

    fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
        Ok(Box::new(MemoryLookup::new(self.load()?)))
    }

    fn metadata(&self) -> DictionaryMetadata {
        let entry_count = self
            .cache
            .lock()
            .map(|cache| cache.as_ref().map_or(0, |d| d.entry_count()))
            .unwrap_or(0);
        DictionaryMetadata {
            name: self.path.display().to_string(),
            kind: self.kind,
            entry_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use aedict_core::dictionary::SearchQuery;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "母 [はは] /(n) (hum) mother/(P)/").unwrap();
        writeln!(file, "書く [かく] /(v5k,vt) to write/(P)/").unwrap();

        let index = FileIndex::new(DictionaryKind::Edict, file.path());
        assert!(index.is_installed());

        let lookup = index.open().unwrap();
        let found = lookup
            .search(&SearchQuery::search_for_japanese("かく", true))
            .unwrap();
        assert_eq!(found, vec!["書く [かく] /(v5k,vt) to write/(P)/".to_string()]);
        assert_eq!(index.metadata().entry_count, 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let index = FileIndex::new(DictionaryKind::Kanjidic, dir.path().join("kanjidic"));
        assert!(!index.is_installed());
        assert!(matches!(index.open(), Err(LookupError::NotInstalled(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        let result = DictionaryLoader::load_from_reader(DictionaryKind::Edict, &[0xa4u8, 0xa2, b'\n'][..]);
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }
}
