use serde::{Deserialize, Serialize};

/// A resolved dictionary record, or a placeholder standing in for one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Written form; kanji when the word has one, kana otherwise
    pub japanese: String,
    /// Kana reading
    pub reading: String,
    /// English gloss, `/`-separated senses joined with "; "
    pub english: String,
    /// Classical radical number (KANJIDIC `B`)
    pub radical: Option<u32>,
    /// Stroke count (KANJIDIC `S`)
    pub strokes: Option<u32>,
    /// SKIP code (KANJIDIC `P`), e.g. "1-4-3"
    pub skip: Option<String>,
    /// School grade (KANJIDIC `G`)
    pub grade: Option<u32>,
}

impl DictEntry {
    pub fn new(
        japanese: impl Into<String>,
        reading: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            japanese: japanese.into(),
            reading: reading.into(),
            english: english.into(),
            radical: None,
            strokes: None,
            skip: None,
            grade: None,
        }
    }

    /// Literal fallback for a character that is already phonetic.
    pub fn literal(c: char) -> Self {
        Self::new(c, c, "")
    }

    /// Placeholder for a character nothing could resolve.
    pub fn unresolved(c: char) -> Self {
        Self::new(c, "", "")
    }

    /// Error row shown instead of a result list.
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::new(message, "", "")
    }

    pub fn is_valid(&self) -> bool {
        !self.english.is_empty() || !self.reading.is_empty()
    }

    /// EDICT marks ichidan verbs with the `v1` part-of-speech tag.
    pub fn is_ichidan(&self) -> bool {
        self.pos_tags().any(|tag| tag == "v1")
    }

    pub fn is_verb(&self) -> bool {
        self.pos_tags()
            .any(|tag| tag == "v1" || tag.starts_with("v5") || tag == "vs-i" || tag == "vk")
    }

    /// Part-of-speech tags from the parenthesised prefixes of the gloss,
    /// e.g. "(v5k,vt) to write" yields "v5k" and "vt".
    pub fn pos_tags(&self) -> impl Iterator<Item = &str> {
        self.english
            .split("; ")
            .flat_map(leading_tags)
            .flat_map(|group| group.split(','))
            .map(str::trim)
    }
}

fn leading_tags(sense: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut rest = sense.trim_start();
    while let Some(stripped) = rest.strip_prefix('(') {
        let Some(end) = stripped.find(')') else {
            break;
        };
        tags.push(&stripped[..end]);
        rest = stripped[end + 1..].trim_start();
    }
    tags
}

/// Romanization system used to display kana as latin text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RomanizationScheme {
    #[default]
    Hepburn,
    NihonShiki,
    Kunrei,
}

impl RomanizationScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            RomanizationScheme::Hepburn => "hepburn",
            RomanizationScheme::NihonShiki => "nihon_shiki",
            RomanizationScheme::Kunrei => "kunrei",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hepburn" => Some(RomanizationScheme::Hepburn),
            "nihon_shiki" | "nihonshiki" | "nihon" => Some(RomanizationScheme::NihonShiki),
            "kunrei" | "kunrei_shiki" => Some(RomanizationScheme::Kunrei),
            _ => None,
        }
    }
}

/// Which analysis the caller is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentMode {
    #[default]
    PerCharacter,
    PerWord,
}

impl SegmentMode {
    pub fn toggled(self) -> Self {
        match self {
            SegmentMode::PerCharacter => SegmentMode::PerWord,
            SegmentMode::PerWord => SegmentMode::PerCharacter,
        }
    }
}
