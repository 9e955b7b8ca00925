//! Builds [`SearchQuery`] values from free user input.

use aedict_core::dictionary::{MatchMode, SearchQuery};
use aedict_core::language::Deconjugator;
use aedict_core::types::RomanizationScheme;

use crate::deconjugator::JapaneseDeconjugator;
use crate::kana::{contains_japanese, hiragana_to_katakana, katakana_to_hiragana};
use crate::romanization::Romanize;

/// Exact or substring query for kana/kanji text. Kana input also matches
/// entries written in the other kana script.
pub fn japanese_query(word: &str, exact: bool) -> SearchQuery {
    let word = word.trim();
    let mut terms = vec![word.to_string()];
    push_unique(&mut terms, katakana_to_hiragana(word));
    push_unique(&mut terms, hiragana_to_katakana(word));
    SearchQuery::new(terms, true, mode(exact))
}

/// Romaji input expanded into its hiragana and katakana spellings.
pub fn romaji_query(romaji: &str, scheme: RomanizationScheme, exact: bool) -> SearchQuery {
    let romaji = romaji.trim();
    let mut terms = vec![scheme.to_hiragana(romaji)];
    push_unique(&mut terms, scheme.to_katakana(romaji));
    SearchQuery::new(terms, true, mode(exact))
}

/// Exact query over the word plus every dictionary form it may be an
/// inflection of, most likely first.
pub fn deinflected_query(word: &str) -> SearchQuery {
    let word = word.trim();
    let mut terms = vec![word.to_string()];
    for candidate in JapaneseDeconjugator::new().deconjugate(word) {
        push_unique(&mut terms, candidate.base_form);
    }
    SearchQuery::new(terms, true, MatchMode::Deinflected)
}

/// Picks the query kind from the input: Japanese text is searched as is,
/// latin text is tried both as an English gloss and as romaji.
pub fn queries_for_input(input: &str, scheme: RomanizationScheme, exact: bool) -> Vec<SearchQuery> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    if contains_japanese(input) {
        return vec![japanese_query(input, exact)];
    }

    let mut queries = vec![SearchQuery::search_for_english(input, exact)];
    let romaji = romaji_query(input, scheme, exact);
    if romaji.query.iter().all(|t| contains_japanese(t) && !t.chars().any(|c| c.is_ascii_alphabetic())) {
        queries.push(romaji);
    }
    queries
}

fn mode(exact: bool) -> MatchMode {
    if exact {
        MatchMode::Exact
    } else {
        MatchMode::Substring
    }
}

fn push_unique(terms: &mut Vec<String>, term: String) {
    if !term.is_empty() && !terms.contains(&term) {
        terms.push(term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japanese_query_adds_other_script() {
        let q = japanese_query("かめら", true);
        assert_eq!(q.query, vec!["かめら", "カメラ"]);
        assert_eq!(q.match_mode, MatchMode::Exact);

        let q = japanese_query("母", false);
        assert_eq!(q.query, vec!["母"]);
        assert_eq!(q.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_romaji_query() {
        let q = romaji_query("kamera", RomanizationScheme::Hepburn, true);
        assert_eq!(q.query, vec!["かめら", "カメラ"]);
        assert!(q.is_japanese);
    }

    #[test]
    fn test_deinflected_query() {
        let q = deinflected_query("書きました");
        assert_eq!(q.query[0], "書きました");
        assert!(q.query.contains(&"書く".to_string()));
        assert_eq!(q.match_mode, MatchMode::Deinflected);
    }

    #[test]
    fn test_queries_for_input() {
        let queries = queries_for_input("haha", RomanizationScheme::Hepburn, true);
        assert_eq!(queries.len(), 2);
        assert!(!queries[0].is_japanese);
        assert_eq!(queries[1].query[0], "はは");

        let queries = queries_for_input("mother", RomanizationScheme::Hepburn, true);
        assert_eq!(queries.len(), 1);

        let queries = queries_for_input("母", RomanizationScheme::Hepburn, true);
        assert_eq!(queries.len(), 1);
        assert!(queries[0].is_japanese);

        assert!(queries_for_input("  ", RomanizationScheme::Hepburn, true).is_empty());
    }
}
