//! Groups a verb's bases and inflected forms for display.

use aedict_config::ui::UiConfig;
use aedict_core::language::{ExampleProvider, ExampleSentence};
use aedict_core::types::{DictEntry, RomanizationScheme};

use crate::inflection::{Base, FORMS, Verb, VerbClass};
use crate::romanization::Romanize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InflectionOptions {
    /// Show products in this romanization instead of kana
    pub romanization: Option<RomanizationScheme>,
    pub basic_only: bool,
}

impl InflectionOptions {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            romanization: ui.display_romanization(),
            basic_only: ui.basic_inflections_only,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Base(Base),
    /// Id of the inflection form
    Form(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionGroup {
    pub kind: GroupKind,
    pub japanese: String,
    pub english: String,
    pub examples: Vec<ExampleSentence>,
}

/// Bases first, then every applicable form with its example sentences.
pub fn build_inflection_table(
    entry: &DictEntry,
    options: InflectionOptions,
    examples: &dyn ExampleProvider,
) -> Vec<InflectionGroup> {
    let romaji = RomanizationScheme::NihonShiki.to_romaji(&entry.reading);
    let verb = Verb::new(romaji.as_str(), VerbClass::of_entry(entry, &romaji));
    let ichidan = verb.class() == VerbClass::Ichidan;
    let display = |romaji: &str| convert_product(romaji, options.romanization);

    let mut groups: Vec<InflectionGroup> = Base::ALL
        .iter()
        .map(|base| InflectionGroup {
            kind: GroupKind::Base(*base),
            japanese: display(&verb.base(*base)),
            english: base.name().to_string(),
            examples: Vec::new(),
        })
        .collect();

    for form in FORMS {
        if options.basic_only && !form.basic {
            continue;
        }
        if ichidan && !form.applies_to_ichidan() {
            continue;
        }
        groups.push(InflectionGroup {
            kind: GroupKind::Form(form.id),
            japanese: display(&form.inflect_verb(&verb)),
            english: form.explanation.to_string(),
            examples: examples
                .examples(form.id)
                .into_iter()
                .map(|ex| match options.romanization {
                    Some(scheme) => ExampleSentence::new(scheme.to_romaji(&ex.japanese), ex.english),
                    None => ex,
                })
                .collect(),
        });
    }

    tracing::debug!(
        "Built {} inflection groups for {} ({:?})",
        groups.len(),
        entry.reading,
        verb.class()
    );
    groups
}

/// Nihon-shiki product back to hiragana, then to the display romanization
/// when one is set.
fn convert_product(romaji: &str, romanization: Option<RomanizationScheme>) -> String {
    let kana = RomanizationScheme::NihonShiki.to_hiragana(romaji);
    match romanization {
        Some(scheme) => scheme.to_romaji(&kana),
        None => kana,
    }
}
