use std::ops::Deref;

use crate::error::LookupError;

/// How a query term has to relate to an indexed key to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    Exact,
    Prefix,
    /// Exact match over terms already reduced to dictionary forms
    Deinflected,
}

/// A single dictionary query. One user input may expand into several
/// phonetic variants, hence the list of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: Vec<String>,
    pub is_japanese: bool,
    pub match_mode: MatchMode,
}

impl SearchQuery {
    pub fn new(query: Vec<String>, is_japanese: bool, match_mode: MatchMode) -> Self {
        Self {
            query,
            is_japanese,
            match_mode,
        }
    }

    /// Query for a word written in kana or kanji
    pub fn search_for_japanese(word: &str, exact: bool) -> Self {
        Self::new(
            vec![word.to_string()],
            true,
            if exact {
                MatchMode::Exact
            } else {
                MatchMode::Substring
            },
        )
    }

    /// Query against the English glosses
    pub fn search_for_english(word: &str, exact: bool) -> Self {
        Self::new(
            vec![word.to_string()],
            false,
            if exact {
                MatchMode::Exact
            } else {
                MatchMode::Substring
            },
        )
    }
}

/// Which record format a dictionary index serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryKind {
    /// Word dictionary
    Edict,
    /// Per-kanji dictionary
    Kanjidic,
}

impl DictionaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryKind::Edict => "EDICT",
            DictionaryKind::Kanjidic => "KANJIDIC",
        }
    }
}

/// An open handle on a dictionary index.
pub trait DictionaryLookup: Send {
    /// Raw matching records. Ordering is whatever the index provides;
    /// callers only rely on the first result being usable.
    fn search(&self, query: &SearchQuery) -> Result<Vec<String>, LookupError>;

    /// Release held resources
    fn close(&mut self) -> Result<(), LookupError> {
        Ok(())
    }
}

/// A dictionary source which may or may not be installed.
pub trait DictionaryIndex: Send + Sync {
    fn kind(&self) -> DictionaryKind;

    /// False when the dictionary was never downloaded
    fn is_installed(&self) -> bool {
        true
    }

    fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError>;

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.kind().as_str().to_string(),
            kind: self.kind(),
            entry_count: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub kind: DictionaryKind,
    pub entry_count: usize,
}

/// Lookup opened for the duration of one operation. Closed when dropped,
/// whichever way the operation exits.
pub struct ScopedLookup {
    kind: DictionaryKind,
    inner: Box<dyn DictionaryLookup>,
}

impl ScopedLookup {
    pub fn open(index: &dyn DictionaryIndex) -> Result<Self, LookupError> {
        tracing::debug!("Opening {} lookup", index.kind().as_str());
        Ok(Self {
            kind: index.kind(),
            inner: index.open()?,
        })
    }

    /// Opens the index only when it is installed.
    pub fn open_if_installed(index: &dyn DictionaryIndex) -> Result<Option<Self>, LookupError> {
        if !index.is_installed() {
            tracing::debug!("{} not installed, skipping", index.kind().as_str());
            return Ok(None);
        }
        Self::open(index).map(Some)
    }

    pub fn kind(&self) -> DictionaryKind {
        self.kind
    }
}

impl Deref for ScopedLookup {
    type Target = dyn DictionaryLookup;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl Drop for ScopedLookup {
    fn drop(&mut self) {
        if let Err(e) = self.inner.close() {
            tracing::warn!("Failed to close {} lookup: {}", self.kind.as_str(), e);
        }
    }
}
