/// Optional trait for languages with conjugation/declension
pub trait Deconjugator: Send + Sync {
    /// Convert conjugated form to dictionary form(s)
    fn deconjugate(&self, word: &str) -> Vec<DeconjugationResult>;
}

/// Source of example sentences illustrating a grammatical form
pub trait ExampleProvider: Send + Sync {
    /// Examples for the form with the given stable id, in display order
    fn examples(&self, form_id: &str) -> Vec<ExampleSentence>;
}

#[derive(Debug, Clone)]
pub struct DeconjugationResult {
    pub base_form: String,
    pub conjugation_type: String,
    pub confidence: f32,
}

/// A Japanese sentence and its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSentence {
    pub japanese: String,
    pub english: String,
}

impl ExampleSentence {
    pub fn new(japanese: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            japanese: japanese.into(),
            english: english.into(),
        }
    }
}
