//! Character-level classification of Japanese text.

/// Offset between a hiragana code point and its katakana counterpart
const KATAKANA_OFFSET: u32 = 0x60;

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309F}').contains(&c)
}

/// Full-width katakana, including the prolonged sound mark ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c) || ('\u{31F0}'..='\u{31FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK ideographs plus the iteration mark 々, which stands for a kanji.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || c == '々'
}

/// True when the string is non-empty and made of kana only.
pub fn is_kana_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana)
}

/// True when the text contains any kana or kanji.
pub fn contains_japanese(s: &str) -> bool {
    s.chars().any(|c| is_kana(c) || is_kanji(c))
}

pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji() {
        assert!(is_kanji('艦'));
        assert!(is_kanji('々'));
        assert!(!is_kanji('か'));
        assert!(!is_kanji('キ'));
        assert!(!is_kanji('a'));
    }

    #[test]
    fn test_katakana() {
        assert!(!is_katakana('艦'));
        assert!(!is_katakana('か'));
        assert!(is_katakana('キ'));
        assert!(is_katakana('ー'));
    }

    #[test]
    fn test_hiragana() {
        assert!(!is_hiragana('艦'));
        assert!(is_hiragana('か'));
        assert!(!is_hiragana('キ'));
    }

    #[test]
    fn test_kana_conversion() {
        assert_eq!(katakana_to_hiragana("カタカナー"), "かたかなー");
        assert_eq!(hiragana_to_katakana("ひらがな"), "ヒラガナ");
        assert_eq!(hiragana_to_katakana("母さん"), "母サン");
        assert!(is_kana_word("すし"));
        assert!(!is_kana_word("寿司"));
        assert!(!is_kana_word(""));
        assert!(contains_japanese("go 行く"));
        assert!(!contains_japanese("mother"));
    }
}
