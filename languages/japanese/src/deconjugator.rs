use aedict_core::language::{DeconjugationResult, Deconjugator};

/// Godan u-column endings with their a/i/e-column counterparts
const GODAN_ROWS: &[(&str, &str, &str, &str)] = &[
    ("う", "わ", "い", "え"),
    ("く", "か", "き", "け"),
    ("ぐ", "が", "ぎ", "げ"),
    ("す", "さ", "し", "せ"),
    ("つ", "た", "ち", "て"),
    ("ぬ", "な", "に", "ね"),
    ("ぶ", "ば", "び", "べ"),
    ("む", "ま", "み", "め"),
    ("る", "ら", "り", "れ"),
];

/// Reverses the te/ta euphonic change: (te-form ending, dictionary endings)
const TE_FORM_ENDINGS: &[(&str, &[&str])] = &[
    ("って", &["う", "つ", "る"]),
    ("んで", &["ぬ", "ぶ", "む"]),
    ("いて", &["く"]),
    ("いで", &["ぐ"]),
    ("して", &["す"]),
];

/// Rule-based reduction of inflected verbs and i-adjectives to their
/// dictionary forms. Candidates are not checked against a dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseDeconjugator;

impl JapaneseDeconjugator {
    pub fn new() -> Self {
        Self
    }

    fn push(results: &mut Vec<DeconjugationResult>, base: String, kind: &str, confidence: f32) {
        if base.is_empty() || results.iter().any(|r| r.base_form == base && r.conjugation_type == kind) {
            return;
        }
        results.push(DeconjugationResult {
            base_form: base,
            conjugation_type: kind.to_string(),
            confidence,
        });
    }

    fn te_form(&self, word: &str, label: &str, results: &mut Vec<DeconjugationResult>) {
        match word {
            "して" => Self::push(results, "する".into(), &format!("irregular verb する, {label}"), 1.0),
            "きて" | "来て" => Self::push(results, "来る".into(), &format!("irregular verb 来る, {label}"), 1.0),
            "いって" | "行って" => Self::push(results, "行く".into(), &format!("godan verb, {label}"), 0.9),
            _ => {}
        }

        for (ending, bases) in TE_FORM_ENDINGS {
            if let Some(stem) = word.strip_suffix(ending) {
                for base in *bases {
                    Self::push(results, format!("{stem}{base}"), &format!("godan verb, {label}"), 0.6);
                }
            }
        }

        if let Some(stem) = word.strip_suffix('て') {
            Self::push(results, format!("{stem}る"), &format!("ichidan verb, {label}"), 0.8);
        }
    }

    fn ta_form(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        if let Some(stem) = word.strip_suffix('た') {
            self.te_form(&format!("{stem}て"), "past", results);
        }
        if let Some(stem) = word.strip_suffix('だ') {
            self.te_form(&format!("{stem}で"), "past", results);
        }
    }

    fn teiru_form(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        for suffix in ["ている", "ています", "でいる", "でいます"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                let te = if suffix.starts_with('で') { "で" } else { "て" };
                self.te_form(&format!("{stem}{te}"), "continuous", results);
            }
        }
    }

    fn masu_form(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        for (suffix, label) in [
            ("ます", "masu-form"),
            ("ません", "polite negative"),
            ("ました", "polite past"),
            ("たい", "desire"),
        ] {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            match stem {
                "し" => Self::push(results, "する".into(), &format!("irregular verb する, {label}"), 0.9),
                "き" | "来" => Self::push(results, "来る".into(), &format!("irregular verb 来る, {label}"), 0.9),
                _ => {}
            }

            Self::push(results, format!("{stem}る"), &format!("ichidan verb, {label}"), 0.8);
            for (u, _, i, _) in GODAN_ROWS {
                if let Some(root) = stem.strip_suffix(i) {
                    Self::push(results, format!("{root}{u}"), &format!("godan verb, {label}"), 0.8);
                }
            }
        }
    }

    fn negative(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        for (suffix, label) in [("ない", "negative"), ("なかった", "past negative")] {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            match stem {
                "し" => Self::push(results, "する".into(), &format!("irregular verb する, {label}"), 0.9),
                "こ" | "来" => Self::push(results, "来る".into(), &format!("irregular verb 来る, {label}"), 0.9),
                _ => {}
            }

            for (u, a, _, _) in GODAN_ROWS {
                if let Some(root) = stem.strip_suffix(a) {
                    Self::push(results, format!("{root}{u}"), &format!("godan verb, {label}"), 0.8);
                }
            }
            Self::push(results, format!("{stem}る"), &format!("ichidan verb, {label}"), 0.8);
        }
    }

    fn conditional(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        let Some(stem) = word.strip_suffix('ば') else {
            return;
        };
        for (u, _, _, e) in GODAN_ROWS {
            if let Some(root) = stem.strip_suffix(e) {
                Self::push(results, format!("{root}{u}"), "godan verb, conditional", 0.7);
            }
        }
        if let Some(root) = stem.strip_suffix('れ') {
            Self::push(results, format!("{root}る"), "ichidan verb, conditional", 0.7);
        }
        if let Some(root) = stem.strip_suffix("けれ") {
            Self::push(results, format!("{root}い"), "i-adjective, conditional", 0.7);
        }
    }

    fn i_adjective(&self, word: &str, results: &mut Vec<DeconjugationResult>) {
        for (suffix, label) in [
            ("くない", "i-adjective, negative"),
            ("かった", "i-adjective, past"),
            ("くなかった", "i-adjective, past negative"),
            ("くて", "i-adjective, te-form"),
            ("く", "i-adjective, adverbial"),
        ] {
            if let Some(stem) = word.strip_suffix(suffix) {
                Self::push(results, format!("{stem}い"), label, 0.8);
            }
        }
    }
}

impl Deconjugator for JapaneseDeconjugator {
    fn deconjugate(&self, word: &str) -> Vec<DeconjugationResult> {
        let mut results = Vec::new();

        self.te_form(word, "te-form", &mut results);
        self.ta_form(word, &mut results);
        self.teiru_form(word, &mut results);
        self.masu_form(word, &mut results);
        self.negative(word, &mut results);
        self.conditional(word, &mut results);
        self.i_adjective(word, &mut results);

        results.retain(|r| r.base_form != word);
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(word: &str) -> Vec<String> {
        JapaneseDeconjugator::new()
            .deconjugate(word)
            .into_iter()
            .map(|r| r.base_form)
            .collect()
    }

    #[test]
    fn test_te_and_ta_forms() {
        assert!(bases("書いて").contains(&"書く".to_string()));
        assert!(bases("読んで").contains(&"読む".to_string()));
        assert!(bases("待った").contains(&"待つ".to_string()));
        assert!(bases("食べた").contains(&"食べる".to_string()));
        assert!(bases("話した").contains(&"話す".to_string()));
        assert!(bases("行った").contains(&"行く".to_string()));
        assert_eq!(bases("して").first().map(String::as_str), Some("する"));
    }

    #[test]
    fn test_masu_and_negative() {
        assert!(bases("書きます").contains(&"書く".to_string()));
        assert!(bases("食べません").contains(&"食べる".to_string()));
        assert!(bases("書かない").contains(&"書く".to_string()));
        assert!(bases("買わなかった").contains(&"買う".to_string()));
        assert!(bases("来ない").contains(&"来る".to_string()));
        assert!(bases("食べている").contains(&"食べる".to_string()));
    }

    #[test]
    fn test_adjectives_and_conditionals() {
        assert!(bases("高くない").contains(&"高い".to_string()));
        assert!(bases("高かった").contains(&"高い".to_string()));
        assert!(bases("書けば").contains(&"書く".to_string()));
        assert!(bases("食べれば").contains(&"食べる".to_string()));
    }

    #[test]
    fn test_dictionary_form_yields_nothing_useful() {
        assert!(bases("").is_empty());
        assert!(!bases("母").contains(&"母".to_string()));
    }
}
