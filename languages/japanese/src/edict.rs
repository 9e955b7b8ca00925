//! Parsers for the line-oriented EDICT and KANJIDIC formats.

use aedict_core::types::DictEntry;

use crate::kana::{contains_japanese, is_kana, is_kanji};

/// Markers attached to EDICT headwords and senses that carry no meaning
/// for display.
fn is_noise(token: &str) -> bool {
    token == "(P)" || token.starts_with("EntL")
}

fn strip_markers(form: &str) -> String {
    match form.find('(') {
        Some(idx) => form[..idx].trim().to_string(),
        None => form.trim().to_string(),
    }
}

/// One EDICT line, e.g. `お母さん [おかあさん] /(n) (hon) mother/(P)/`
/// or `すし /(n) sushi/`. Alternatives are `;`-separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdictRecord {
    /// Written forms; empty for kana-only words
    pub forms: Vec<String>,
    pub readings: Vec<String>,
    pub glosses: Vec<String>,
}

impl EdictRecord {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, body) = line.split_once(" /")?;
        if !body.ends_with('/') {
            return None;
        }

        let glosses: Vec<String> = body
            .trim_end_matches('/')
            .split('/')
            .map(str::trim)
            .filter(|g| !g.is_empty() && !is_noise(g))
            .map(str::to_string)
            .collect();
        if glosses.is_empty() {
            return None;
        }

        let alternatives = |s: &str| -> Vec<String> {
            s.split(';')
                .map(strip_markers)
                .filter(|f| !f.is_empty())
                .collect()
        };

        let head = head.trim();
        let (forms, readings) = match head.split_once('[') {
            Some((written, rest)) => {
                let reading = rest.strip_suffix(']')?;
                (alternatives(written), alternatives(reading))
            }
            None => (Vec::new(), alternatives(head)),
        };
        if readings.is_empty()
            || !readings.iter().all(|r| contains_japanese(r))
            || (head.contains(' ') && forms.is_empty())
        {
            return None;
        }

        Some(Self {
            forms,
            readings,
            glosses,
        })
    }

    /// Written forms and readings, the keys an exact lookup matches against.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().chain(self.readings.iter()).map(String::as_str)
    }

    pub fn into_entry(self) -> DictEntry {
        let reading = self.readings.into_iter().next().unwrap_or_default();
        let japanese = self
            .forms
            .into_iter()
            .next()
            .unwrap_or_else(|| reading.clone());
        DictEntry::new(japanese, reading, self.glosses.join("; "))
    }
}

pub fn try_parse_edict(line: &str) -> Option<DictEntry> {
    EdictRecord::parse(line).map(EdictRecord::into_entry)
}

/// One KANJIDIC line:
/// `亜 3021 U4e9c B1 G8 S7 P4-7-1 ア つ.ぐ T1 や {Asia} {rank next}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjidicRecord {
    pub kanji: char,
    /// On and kun readings, in file order
    pub readings: Vec<String>,
    /// Name-only readings following the `T1`/`T2` marker
    pub nanori: Vec<String>,
    pub meanings: Vec<String>,
    pub radical: Option<u32>,
    pub grade: Option<u32>,
    pub strokes: Option<u32>,
    pub skip: Option<String>,
}

impl KanjidicRecord {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (fields, meanings) = match line.find('{') {
            Some(idx) => (&line[..idx], &line[idx..]),
            None => (line, ""),
        };

        let mut tokens = fields.split_whitespace();
        let mut head = tokens.next()?.chars();
        let kanji = head.next().filter(|c| is_kanji(*c))?;
        if head.next().is_some() {
            return None;
        }

        let mut record = Self {
            kanji,
            readings: Vec::new(),
            nanori: Vec::new(),
            meanings: parse_braced(meanings),
            radical: None,
            grade: None,
            strokes: None,
            skip: None,
        };

        let mut in_nanori = false;
        for token in tokens {
            if token.starts_with(is_kana) || (token.starts_with('-') && token[1..].starts_with(is_kana)) {
                if in_nanori {
                    record.nanori.push(token.to_string());
                } else {
                    record.readings.push(token.to_string());
                }
                continue;
            }

            let mut chars = token.chars();
            let Some(prefix) = chars.next() else {
                continue;
            };
            let value = chars.as_str();
            match prefix {
                'T' if value == "1" || value == "2" => in_nanori = true,
                'B' => record.radical = record.radical.or_else(|| value.parse().ok()),
                'G' => record.grade = record.grade.or_else(|| value.parse().ok()),
                'S' => record.strokes = record.strokes.or_else(|| value.parse().ok()),
                'P' if is_skip_code(value) => {
                    record.skip.get_or_insert_with(|| value.to_string());
                }
                _ => {}
            }
        }

        Some(record)
    }

    /// Readings without okurigana dots and affix dashes, as typed by a user.
    pub fn plain_readings(&self) -> impl Iterator<Item = String> + '_ {
        self.readings
            .iter()
            .map(|r| r.replace('-', "").split('.').next().unwrap_or_default().to_string())
    }

    pub fn into_entry(self) -> DictEntry {
        let mut entry = DictEntry::new(
            self.kanji,
            self.readings.join(", "),
            self.meanings.join(", "),
        );
        entry.radical = self.radical;
        entry.strokes = self.strokes;
        entry.skip = self.skip;
        entry.grade = self.grade;
        entry
    }
}

pub fn try_parse_kanjidic(line: &str) -> Option<DictEntry> {
    KanjidicRecord::parse(line).map(KanjidicRecord::into_entry)
}

fn is_skip_code(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn parse_braced(text: &str) -> Vec<String> {
    text.split('{')
        .filter_map(|chunk| chunk.split_once('}').map(|(inner, _)| inner.trim()))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
