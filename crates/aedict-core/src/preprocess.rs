use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds half-width katakana and full-width latin
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], " ").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Analysis input: every row must match a character the user typed, so
/// only surrounding whitespace and line breaks are touched.
pub struct AnalysisPreprocessor;
impl Preprocessor for AnalysisPreprocessor {
    fn process(&self, text: &str) -> String {
        text.trim().replace(['\n', '\r'], " ")
    }
}

/// Drops every whitespace character, including the ideographic space.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_normalizes_width() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  ｶﾀｶﾅ\n"), "カタカナ");
        assert_eq!(p.process("ＡＢＣ"), "ABC");
        assert_eq!(p.process("   "), "");
    }

    #[test]
    fn test_analysis_keeps_characters() {
        let p = AnalysisPreprocessor;
        assert_eq!(p.process(" ㈱日本\r\n① "), "㈱日本  ①");
        assert_eq!(p.process("ｶﾀｶﾅ"), "ｶﾀｶﾅ");
        assert_eq!(p.process("\n"), "");
    }

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace("お 母\tさん\u{3000}です"), "お母さんです");
    }
}
