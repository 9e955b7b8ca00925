use std::collections::HashMap;
use std::sync::Arc;

use aedict_core::dictionary::{
    DictionaryIndex, DictionaryKind, DictionaryLookup, DictionaryMetadata, MatchMode, SearchQuery,
};
use aedict_core::error::LookupError;

use crate::edict::{EdictRecord, KanjidicRecord};
use crate::kana::katakana_to_hiragana;

/// Line-oriented dictionary held in memory, indexed by written form and
/// by reading.
#[derive(Debug, Default)]
pub struct MemoryDictionary {
    kind: Option<DictionaryKind>,
    lines: Vec<String>,
    glosses: Vec<Vec<String>>,
    kanji_index: HashMap<String, Vec<usize>>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl MemoryDictionary {
    /// Build from raw EDICT or KANJIDIC lines. Lines that do not parse
    /// (headers, comments, damaged records) are skipped.
    pub fn from_lines<I, S>(kind: DictionaryKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self {
            kind: Some(kind),
            ..Self::default()
        };
        let mut skipped = 0usize;

        for line in lines {
            let line = line.into();
            if !dict.push_line(kind, line) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} unparsable {} lines", skipped, kind.as_str());
        }
        dict
    }

    fn push_line(&mut self, kind: DictionaryKind, line: String) -> bool {
        let (forms, readings, glosses) = match kind {
            DictionaryKind::Edict => match EdictRecord::parse(&line) {
                Some(record) => (record.forms, record.readings, record.glosses),
                None => return false,
            },
            DictionaryKind::Kanjidic => match KanjidicRecord::parse(&line) {
                Some(record) => {
                    let readings = record.plain_readings().collect();
                    (vec![record.kanji.to_string()], readings, record.meanings)
                }
                None => return false,
            },
        };

        let idx = self.lines.len();
        self.lines.push(line);
        self.glosses
            .push(glosses.iter().map(|g| normalize_gloss(g)).collect());

        for form in forms {
            let slot = self.kanji_index.entry(form).or_default();
            if slot.last() != Some(&idx) {
                slot.push(idx);
            }
        }
        for reading in readings {
            let folded = katakana_to_hiragana(&reading);
            for key in [reading, folded] {
                let slot = self.reading_index.entry(key).or_default();
                if slot.last() != Some(&idx) {
                    slot.push(idx);
                }
            }
        }
        true
    }

    pub fn entry_count(&self) -> usize {
        self.lines.len()
    }

    pub fn kind(&self) -> Option<DictionaryKind> {
        self.kind
    }

    /// Raw lines matching any of the query terms, in file order.
    pub fn search(&self, query: &SearchQuery) -> Vec<String> {
        let mut result_indices: Vec<usize> = Vec::new();

        for term in &query.query {
            if term.is_empty() {
                continue;
            }
            if query.is_japanese {
                self.collect_japanese(term, query.match_mode, &mut result_indices);
            } else {
                self.collect_english(term, query.match_mode, &mut result_indices);
            }
        }

        result_indices.sort_unstable();
        result_indices.dedup();

        result_indices
            .into_iter()
            .filter_map(|idx| self.lines.get(idx).cloned())
            .collect()
    }

    fn collect_japanese(&self, term: &str, mode: MatchMode, out: &mut Vec<usize>) {
        match mode {
            MatchMode::Exact | MatchMode::Deinflected => {
                let folded = katakana_to_hiragana(term);
                if let Some(indices) = self.kanji_index.get(term) {
                    out.extend(indices);
                }
                for key in [term, folded.as_str()] {
                    if let Some(indices) = self.reading_index.get(key) {
                        out.extend(indices);
                    }
                }
            }
            MatchMode::Prefix => self.scan_keys(out, |key| key.starts_with(term)),
            MatchMode::Substring => self.scan_keys(out, |key| key.contains(term)),
        }
    }

    fn scan_keys(&self, out: &mut Vec<usize>, matches: impl Fn(&str) -> bool) {
        for (key, indices) in self.kanji_index.iter().chain(self.reading_index.iter()) {
            if matches(key) {
                out.extend(indices);
            }
        }
    }

    fn collect_english(&self, term: &str, mode: MatchMode, out: &mut Vec<usize>) {
        let term = term.trim().to_lowercase();
        for (idx, glosses) in self.glosses.iter().enumerate() {
            let hit = glosses.iter().any(|gloss| match mode {
                MatchMode::Exact | MatchMode::Deinflected => {
                    gloss == &term || gloss.strip_prefix("to ") == Some(term.as_str())
                }
                MatchMode::Prefix => gloss.starts_with(&term),
                MatchMode::Substring => gloss.contains(&term),
            });
            if hit {
                out.push(idx);
            }
        }
    }
}

/// Lowercased gloss without leading `(tag)` groups:
/// "(v5k,vt) To write" becomes "to write".
fn normalize_gloss(gloss: &str) -> String {
    let mut rest = gloss.trim();
    while let Some(stripped) = rest.strip_prefix('(') {
        match stripped.find(')') {
            Some(end) => rest = stripped[end + 1..].trim_start(),
            None => break,
        }
    }
    rest.to_lowercase()
}

/// Handle on a shared [`MemoryDictionary`]; refuses queries once closed.
pub struct MemoryLookup {
    dict: Arc<MemoryDictionary>,
    closed: bool,
}

impl MemoryLookup {
    pub fn new(dict: Arc<MemoryDictionary>) -> Self {
        Self {
            dict,
            closed: false,
        }
    }
}

impl DictionaryLookup for MemoryLookup {
    fn search(&self, query: &SearchQuery) -> Result<Vec<String>, LookupError> {
        if self.closed {
            return Err(LookupError::Closed);
        }
        let matches = self.dict.search(query);
        tracing::debug!("Query {:?}: {} matches", query.query, matches.len());
        Ok(matches)
    }

    fn close(&mut self) -> Result<(), LookupError> {
        self.closed = true;
        Ok(())
    }
}

/// Always-installed index over a dictionary already in memory.
#[derive(Clone)]
pub struct InMemoryIndex {
    kind: DictionaryKind,
    dict: Arc<MemoryDictionary>,
}

impl InMemoryIndex {
    pub fn new(dict: MemoryDictionary) -> Self {
        Self {
            kind: dict.kind().unwrap_or(DictionaryKind::Edict),
            dict: Arc::new(dict),
        }
    }

    pub fn from_lines<I, S>(kind: DictionaryKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MemoryDictionary::from_lines(kind, lines))
    }
}

impl DictionaryIndex for InMemoryIndex {
    fn kind(&self) -> DictionaryKind {
        self.kind
    }

    fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
        Ok(Box::new(MemoryLookup::new(self.dict.clone())))
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.kind.as_str().to_string(),
            kind: self.kind,
            entry_count: self.dict.entry_count(),
        }
    }
}
