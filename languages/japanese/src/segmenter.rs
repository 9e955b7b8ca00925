//! Splits Japanese text into dictionary entries, either one entry per
//! character or one entry per longest dictionary word.

use aedict_core::dictionary::{DictionaryIndex, DictionaryLookup, ScopedLookup, SearchQuery};
use aedict_core::error::{AnalysisError, LookupError};
use aedict_core::preprocess::remove_whitespace;
use aedict_core::types::{DictEntry, SegmentMode};

use crate::edict::{try_parse_edict, try_parse_kanjidic};
use crate::kana::is_kanji;

/// Runs analyses against a general dictionary and, when installed, a
/// per-kanji dictionary. Every call opens its own lookups and closes them
/// before returning.
pub struct WordSegmenter<'a> {
    edict: &'a dyn DictionaryIndex,
    kanjidic: Option<&'a dyn DictionaryIndex>,
}

impl<'a> WordSegmenter<'a> {
    pub fn new(edict: &'a dyn DictionaryIndex) -> Self {
        Self {
            edict,
            kanjidic: None,
        }
    }

    pub fn with_kanjidic(mut self, kanjidic: &'a dyn DictionaryIndex) -> Self {
        self.kanjidic = Some(kanjidic);
        self
    }

    pub fn analyze_by_characters(&self, word: &str) -> Result<Vec<DictEntry>, AnalysisError> {
        let edict = ScopedLookup::open(self.edict)?;
        let kanjidic = match self.kanjidic {
            Some(index) => ScopedLookup::open_if_installed(index)?,
            None => None,
        };
        Ok(segment_characters(word, kanjidic.as_deref(), &*edict)?)
    }

    pub fn analyze_by_words(&self, word: &str) -> Result<Vec<DictEntry>, AnalysisError> {
        let edict = ScopedLookup::open(self.edict)?;
        Ok(segment_words(word, &*edict)?)
    }

    /// Never fails: a lookup error becomes a single error row.
    pub fn analyze(&self, word: &str, mode: SegmentMode) -> Vec<DictEntry> {
        let result = match mode {
            SegmentMode::PerCharacter => self.analyze_by_characters(word),
            SegmentMode::PerWord => self.analyze_by_words(word),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!("Analysis of '{}' failed: {}", word, e);
            vec![DictEntry::error_message(e.to_string())]
        })
    }
}

/// One entry per non-whitespace character. Kanji are resolved through the
/// kanji dictionary first, then the general dictionary.
pub fn segment_characters(
    word: &str,
    kanjidic: Option<&dyn DictionaryLookup>,
    edict: &dyn DictionaryLookup,
) -> Result<Vec<DictEntry>, LookupError> {
    let text = remove_whitespace(word);
    let mut result = Vec::with_capacity(text.chars().count());

    for c in text.chars() {
        let entry = if is_kanji(c) {
            resolve_kanji(c, kanjidic, edict)?.unwrap_or_else(|| DictEntry::unresolved(c))
        } else {
            DictEntry::literal(c)
        };
        result.push(entry);
    }

    tracing::debug!("Analyzed {} characters", result.len());
    Ok(result)
}

fn resolve_kanji(
    c: char,
    kanjidic: Option<&dyn DictionaryLookup>,
    edict: &dyn DictionaryLookup,
) -> Result<Option<DictEntry>, LookupError> {
    let surface = c.to_string();
    let query = SearchQuery::search_for_japanese(&surface, true);

    if let Some(kanjidic) = kanjidic {
        let found = kanjidic.search(&query)?.first().and_then(|line| try_parse_kanjidic(line));
        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(edict
        .search(&query)?
        .first()
        .and_then(|line| try_parse_edict(line))
        .map(|entry| with_surface(entry, &surface)))
}

/// Greedy longest-match segmentation of every whitespace-separated token.
pub fn segment_words(word: &str, edict: &dyn DictionaryLookup) -> Result<Vec<DictEntry>, LookupError> {
    let mut result = Vec::new();

    for token in word.split_whitespace() {
        let mut rest = token;
        while !rest.is_empty() {
            let (entry, consumed) = find_longest_word(rest, edict)?;
            result.push(entry);
            rest = &rest[consumed..];
        }
    }

    tracing::debug!("Segmented '{}' into {} words", word, result.len());
    Ok(result)
}

/// Longest prefix of `word` present in the dictionary, together with its
/// byte length. Falls back to the first character alone when no prefix
/// matches, so at least one character is always consumed.
pub fn find_longest_word(
    word: &str,
    edict: &dyn DictionaryLookup,
) -> Result<(DictEntry, usize), LookupError> {
    let mut ends: Vec<usize> = word.char_indices().map(|(i, _)| i).skip(1).collect();
    ends.push(word.len());

    for &end in ends.iter().rev() {
        let candidate = &word[..end];
        let found = edict
            .search(&SearchQuery::search_for_japanese(candidate, true))?
            .iter()
            .filter_map(|line| try_parse_edict(line))
            .find(DictEntry::is_valid);
        if let Some(entry) = found {
            return Ok((with_surface(entry, candidate), end));
        }
    }

    let first = word.chars().next().map_or(0, char::len_utf8);
    Ok((DictEntry::new(&word[..first], "", ""), first))
}

/// An exact match means the surface is one of the entry's written forms or
/// readings; the entry is keyed by the surface so the output covers the
/// input text exactly.
fn with_surface(mut entry: DictEntry, surface: &str) -> DictEntry {
    if entry.japanese != surface {
        entry.japanese = surface.to_string();
    }
    entry
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use aedict_core::dictionary::DictionaryKind;

    use super::*;
    use crate::dictionary::InMemoryIndex;

    const EDICT: &[&str] = &[
        "母 [はは] /(n) (hum) mother/(P)/",
        "お母さん [おかあさん] /(n) (hon) mother/(P)/",
        "お [お] /(pref) honourable/",
        "日本 [にほん] /(n) Japan/(P)/",
        "日本語 [にほんご] /(n) Japanese (language)/(P)/",
        "語 [ご] /(n) language/word/",
        "勉強 [べんきょう] /(n,vs) study/(P)/",
        "艦 [かん] /(n) warship/",
    ];

    const KANJIDIC: &[&str] = &[
        "母 4A6C U6bcd B80 G2 S5 P3-4-1 ボ はは {mama} {mother}",
        "日 467C U65e5 B72 G1 S4 P3-3-1 ニチ ジツ ひ -び -か {day} {sun} {Japan}",
    ];

    fn edict() -> InMemoryIndex {
        InMemoryIndex::from_lines(DictionaryKind::Edict, EDICT.iter().copied())
    }

    fn kanjidic() -> InMemoryIndex {
        InMemoryIndex::from_lines(DictionaryKind::Kanjidic, KANJIDIC.iter().copied())
    }

    fn surfaces(entries: &[DictEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.japanese.as_str()).collect()
    }

    struct NotInstalled;

    impl DictionaryIndex for NotInstalled {
        fn kind(&self) -> DictionaryKind {
            DictionaryKind::Kanjidic
        }

        fn is_installed(&self) -> bool {
            false
        }

        fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
            Err(LookupError::NotInstalled("kanjidic".into()))
        }
    }

    struct FailingLookup {
        closed: Arc<AtomicUsize>,
    }

    impl DictionaryLookup for FailingLookup {
        fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, LookupError> {
            Err(LookupError::Io(std::io::Error::other("index corrupted")))
        }

        fn close(&mut self) -> Result<(), LookupError> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingIndex {
        closed: Arc<AtomicUsize>,
    }

    impl DictionaryIndex for FailingIndex {
        fn kind(&self) -> DictionaryKind {
            DictionaryKind::Edict
        }

        fn open(&self) -> Result<Box<dyn DictionaryLookup>, LookupError> {
            Ok(Box::new(FailingLookup {
                closed: self.closed.clone(),
            }))
        }
    }

    #[test]
    fn test_per_character_covers_input() {
        let edict = edict();
        let segmenter = WordSegmenter::new(&edict);
        let input = "お母 さん は日本語";
        let entries = segmenter.analyze_by_characters(input).unwrap();

        assert_eq!(entries.len(), remove_whitespace(input).chars().count());
        assert_eq!(surfaces(&entries).concat(), remove_whitespace(input));
    }

    #[test]
    fn test_per_character_literal_and_lookup() {
        let edict = edict();
        let entries = WordSegmenter::new(&edict).analyze_by_characters("お母").unwrap();

        assert_eq!(entries[0], DictEntry::literal('お'));
        assert_eq!(entries[1].reading, "はは");
        assert_eq!(entries[1].english, "(n) (hum) mother");
    }

    #[test]
    fn test_kanjidic_preferred_over_edict() {
        let edict = edict();
        let kanjidic = kanjidic();
        let entries = WordSegmenter::new(&edict)
            .with_kanjidic(&kanjidic)
            .analyze_by_characters("母艦")
            .unwrap();

        assert_eq!(entries[0].english, "mama, mother");
        assert_eq!(entries[0].strokes, Some(5));
        // not in KANJIDIC, falls through to EDICT
        assert_eq!(entries[1].english, "(n) warship");
    }

    #[test]
    fn test_missing_kanjidic_is_skipped() {
        let edict = edict();
        let entries = WordSegmenter::new(&edict)
            .with_kanjidic(&NotInstalled)
            .analyze_by_characters("母")
            .unwrap();
        assert_eq!(entries[0].reading, "はは");
    }

    #[test]
    fn test_unmatched_kanji_fallback() {
        let edict = edict();
        let entries = WordSegmenter::new(&edict).analyze_by_characters("猫").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].japanese, "猫");
        assert!(entries[0].reading.is_empty());
        assert!(entries[0].english.is_empty());
        assert!(!entries[0].is_valid());
    }

    #[test]
    fn test_lookup_failure_yields_error_row() {
        let closed = Arc::new(AtomicUsize::new(0));
        let index = FailingIndex {
            closed: closed.clone(),
        };
        let entries = WordSegmenter::new(&index).analyze("母", SegmentMode::PerCharacter);

        assert_eq!(entries.len(), 1);
        assert!(entries[0].japanese.contains("Analysis failed"));
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_surfaces_as_error_before_conversion() {
        let closed = Arc::new(AtomicUsize::new(0));
        let index = FailingIndex {
            closed: closed.clone(),
        };
        let result = WordSegmenter::new(&index).analyze_by_words("日本語");

        assert!(matches!(result, Err(AnalysisError::Lookup(LookupError::Io(_)))));
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_kanji_needs_no_lookup() {
        let closed = Arc::new(AtomicUsize::new(0));
        let index = FailingIndex {
            closed: closed.clone(),
        };
        let entries = WordSegmenter::new(&index).analyze("かな", SegmentMode::PerCharacter);

        assert_eq!(surfaces(&entries), vec!["か", "な"]);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_longest_match_wins() {
        let edict = edict();
        let entries = WordSegmenter::new(&edict).analyze_by_words("お母さん").unwrap();

        assert_eq!(surfaces(&entries), vec!["お母さん"]);
        assert_eq!(entries[0].reading, "おかあさん");
    }

    #[test]
    fn test_per_word_covers_input() {
        let edict = edict();
        let segmenter = WordSegmenter::new(&edict);
        let input = "日本語を勉強 する猫";
        let entries = segmenter.analyze_by_words(input).unwrap();

        assert_eq!(
            surfaces(&entries),
            vec!["日本語", "を", "勉強", "す", "る", "猫"]
        );
        assert_eq!(surfaces(&entries).concat(), remove_whitespace(input));
        assert!(!entries[1].is_valid());
    }

    #[test]
    fn test_per_word_matches_by_reading() {
        let edict = edict();
        let entries = WordSegmenter::new(&edict).analyze_by_words("おかあさんにほん").unwrap();

        assert_eq!(surfaces(&entries), vec!["おかあさん", "にほん"]);
        assert_eq!(entries[1].english, "(n) Japan");
    }

    #[test]
    fn test_find_longest_word_progress() {
        let edict = edict();
        let lookup = edict.open().unwrap();

        let (entry, consumed) = find_longest_word("猫日本", lookup.as_ref()).unwrap();
        assert_eq!(entry.japanese, "猫");
        assert_eq!(consumed, '猫'.len_utf8());

        let (entry, consumed) = find_longest_word("日本人", lookup.as_ref()).unwrap();
        assert_eq!(entry.japanese, "日本");
        assert_eq!(consumed, "日本".len());
    }

    /// Returns the same raw records for every query
    struct RawLookup(Vec<&'static str>);

    impl DictionaryLookup for RawLookup {
        fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, LookupError> {
            Ok(self.0.iter().map(|line| line.to_string()).collect())
        }
    }

    #[test]
    fn test_malformed_kanjidic_record_falls_through_to_edict() {
        let kanjidic = RawLookup(vec!["garbage"]);
        let edict = RawLookup(vec!["母 [はは] /(n) mother/"]);

        let entries = segment_characters("母", Some(&kanjidic as &dyn DictionaryLookup), &edict).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].japanese, "母");
        assert_eq!(entries[0].reading, "はは");
        assert!(entries[0].english.contains("mother"));
    }

    #[test]
    fn test_malformed_edict_record_is_no_match() {
        let edict = RawLookup(vec!["garbage"]);

        let entries = segment_characters("母", None, &edict).unwrap();
        assert_eq!(entries, vec![DictEntry::unresolved('母')]);
    }

    #[test]
    fn test_per_word_skips_malformed_record() {
        let edict = RawLookup(vec!["garbage", "母 [はは] /(n) mother/"]);

        let entries = segment_words("母", &edict).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].japanese, "母");
        assert_eq!(entries[0].reading, "はは");
    }

    #[test]
    fn test_empty_input() {
        let edict = edict();
        let segmenter = WordSegmenter::new(&edict);
        assert!(segmenter.analyze_by_characters(" \u{3000} ").unwrap().is_empty());
        assert!(segmenter.analyze_by_words("").unwrap().is_empty());
    }
}
