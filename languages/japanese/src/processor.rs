use aedict_config::dictionary::DictionaryConfig;
use aedict_config::ui::UiConfig;
use aedict_core::dictionary::{DictionaryIndex, DictionaryKind, ScopedLookup, SearchQuery};
use aedict_core::error::LookupError;
use aedict_core::language::ExampleProvider;
use aedict_core::types::{DictEntry, SegmentMode};

use crate::edict::try_parse_edict;
use crate::examples::BuiltinExamples;
use crate::inflection_table::{InflectionGroup, InflectionOptions, build_inflection_table};
use crate::kana::contains_japanese;
use crate::loader::FileIndex;
use crate::query::{deinflected_query, queries_for_input};
use crate::segmenter::WordSegmenter;

/// Japanese language processor over a word dictionary and an optional
/// kanji dictionary
pub struct JapaneseProcessor {
    edict: Box<dyn DictionaryIndex>,
    kanjidic: Option<Box<dyn DictionaryIndex>>,
    examples: Box<dyn ExampleProvider>,
}

impl JapaneseProcessor {
    /// Dictionary files from the configured directory. Nothing is read
    /// until the first lookup.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        let edict = FileIndex::new(DictionaryKind::Edict, config.edict_path());
        let kanjidic = FileIndex::new(DictionaryKind::Kanjidic, config.kanjidic_path());

        if !edict.is_installed() {
            tracing::warn!("EDICT not found at {}", edict.path().display());
        }
        if !kanjidic.is_installed() {
            tracing::info!(
                "KANJIDIC not found at {}, kanji analysis uses EDICT only",
                kanjidic.path().display()
            );
        }

        Self::with_sources(Box::new(edict), Some(Box::new(kanjidic)))
    }

    pub fn with_sources(
        edict: Box<dyn DictionaryIndex>,
        kanjidic: Option<Box<dyn DictionaryIndex>>,
    ) -> Self {
        Self {
            edict,
            kanjidic,
            examples: Box::new(BuiltinExamples),
        }
    }

    pub fn with_examples(mut self, examples: Box<dyn ExampleProvider>) -> Self {
        self.examples = examples;
        self
    }

    pub fn segmenter(&self) -> WordSegmenter<'_> {
        let segmenter = WordSegmenter::new(self.edict.as_ref());
        match &self.kanjidic {
            Some(kanjidic) => segmenter.with_kanjidic(kanjidic.as_ref()),
            None => segmenter,
        }
    }

    /// Fail-soft analysis; errors come back as a single error row.
    pub fn analyze(&self, text: &str, mode: SegmentMode) -> Vec<DictEntry> {
        self.segmenter().analyze(text, mode)
    }

    pub fn inflections(&self, entry: &DictEntry, options: InflectionOptions) -> Vec<InflectionGroup> {
        build_inflection_table(entry, options, self.examples.as_ref())
    }

    /// Dictionary search from free input: kana/kanji, romaji or English.
    /// An exact Japanese search with no hits retries with the candidate
    /// dictionary forms of an inflected word.
    pub fn search(&self, input: &str, exact: bool, ui: &UiConfig) -> Result<Vec<DictEntry>, LookupError> {
        let lookup = ScopedLookup::open(self.edict.as_ref())?;
        let mut results = Vec::new();

        for query in queries_for_input(input, ui.romanization, exact) {
            collect(&lookup, &query, &mut results)?;
        }

        if results.is_empty() && exact && contains_japanese(input) {
            tracing::debug!("No exact match for '{}', trying deinflection", input.trim());
            collect(&lookup, &deinflected_query(input), &mut results)?;
        }

        results.truncate(ui.max_results as usize);
        Ok(results)
    }
}

fn collect(lookup: &ScopedLookup, query: &SearchQuery, out: &mut Vec<DictEntry>) -> Result<(), LookupError> {
    for line in lookup.search(query)? {
        let Some(entry) = try_parse_edict(&line) else {
            continue;
        };
        if !out.contains(&entry) {
            out.push(entry);
        }
    }
    Ok(())
}
