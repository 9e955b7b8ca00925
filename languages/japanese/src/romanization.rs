//! Kana <-> romaji conversion for the Hepburn, Nihon-shiki and Kunrei-shiki
//! systems.

use std::collections::HashMap;
use std::sync::LazyLock;

use aedict_core::types::RomanizationScheme;

use crate::kana::{hiragana_to_katakana, katakana_to_hiragana};

/// (hiragana, hepburn, nihon-shiki, kunrei-shiki)
type Row = (&'static str, &'static str, &'static str, &'static str);

const SYLLABLES: &[Row] = &[
    ("あ", "a", "a", "a"),
    ("い", "i", "i", "i"),
    ("う", "u", "u", "u"),
    ("え", "e", "e", "e"),
    ("お", "o", "o", "o"),
    ("か", "ka", "ka", "ka"),
    ("き", "ki", "ki", "ki"),
    ("く", "ku", "ku", "ku"),
    ("け", "ke", "ke", "ke"),
    ("こ", "ko", "ko", "ko"),
    ("さ", "sa", "sa", "sa"),
    ("し", "shi", "si", "si"),
    ("す", "su", "su", "su"),
    ("せ", "se", "se", "se"),
    ("そ", "so", "so", "so"),
    ("た", "ta", "ta", "ta"),
    ("ち", "chi", "ti", "ti"),
    ("つ", "tsu", "tu", "tu"),
    ("て", "te", "te", "te"),
    ("と", "to", "to", "to"),
    ("な", "na", "na", "na"),
    ("に", "ni", "ni", "ni"),
    ("ぬ", "nu", "nu", "nu"),
    ("ね", "ne", "ne", "ne"),
    ("の", "no", "no", "no"),
    ("は", "ha", "ha", "ha"),
    ("ひ", "hi", "hi", "hi"),
    ("ふ", "fu", "hu", "hu"),
    ("へ", "he", "he", "he"),
    ("ほ", "ho", "ho", "ho"),
    ("ま", "ma", "ma", "ma"),
    ("み", "mi", "mi", "mi"),
    ("む", "mu", "mu", "mu"),
    ("め", "me", "me", "me"),
    ("も", "mo", "mo", "mo"),
    ("や", "ya", "ya", "ya"),
    ("ゆ", "yu", "yu", "yu"),
    ("よ", "yo", "yo", "yo"),
    ("ら", "ra", "ra", "ra"),
    ("り", "ri", "ri", "ri"),
    ("る", "ru", "ru", "ru"),
    ("れ", "re", "re", "re"),
    ("ろ", "ro", "ro", "ro"),
    ("わ", "wa", "wa", "wa"),
    ("ゐ", "wi", "wi", "i"),
    ("ゑ", "we", "we", "e"),
    ("を", "wo", "wo", "o"),
    ("が", "ga", "ga", "ga"),
    ("ぎ", "gi", "gi", "gi"),
    ("ぐ", "gu", "gu", "gu"),
    ("げ", "ge", "ge", "ge"),
    ("ご", "go", "go", "go"),
    ("ざ", "za", "za", "za"),
    ("じ", "ji", "zi", "zi"),
    ("ず", "zu", "zu", "zu"),
    ("ぜ", "ze", "ze", "ze"),
    ("ぞ", "zo", "zo", "zo"),
    ("だ", "da", "da", "da"),
    ("ぢ", "ji", "di", "zi"),
    ("づ", "zu", "du", "zu"),
    ("で", "de", "de", "de"),
    ("ど", "do", "do", "do"),
    ("ば", "ba", "ba", "ba"),
    ("び", "bi", "bi", "bi"),
    ("ぶ", "bu", "bu", "bu"),
    ("べ", "be", "be", "be"),
    ("ぼ", "bo", "bo", "bo"),
    ("ぱ", "pa", "pa", "pa"),
    ("ぴ", "pi", "pi", "pi"),
    ("ぷ", "pu", "pu", "pu"),
    ("ぺ", "pe", "pe", "pe"),
    ("ぽ", "po", "po", "po"),
    ("ゔ", "vu", "vu", "vu"),
    ("きゃ", "kya", "kya", "kya"),
    ("きゅ", "kyu", "kyu", "kyu"),
    ("きょ", "kyo", "kyo", "kyo"),
    ("しゃ", "sha", "sya", "sya"),
    ("しゅ", "shu", "syu", "syu"),
    ("しょ", "sho", "syo", "syo"),
    ("ちゃ", "cha", "tya", "tya"),
    ("ちゅ", "chu", "tyu", "tyu"),
    ("ちょ", "cho", "tyo", "tyo"),
    ("にゃ", "nya", "nya", "nya"),
    ("にゅ", "nyu", "nyu", "nyu"),
    ("にょ", "nyo", "nyo", "nyo"),
    ("ひゃ", "hya", "hya", "hya"),
    ("ひゅ", "hyu", "hyu", "hyu"),
    ("ひょ", "hyo", "hyo", "hyo"),
    ("みゃ", "mya", "mya", "mya"),
    ("みゅ", "myu", "myu", "myu"),
    ("みょ", "myo", "myo", "myo"),
    ("りゃ", "rya", "rya", "rya"),
    ("りゅ", "ryu", "ryu", "ryu"),
    ("りょ", "ryo", "ryo", "ryo"),
    ("ぎゃ", "gya", "gya", "gya"),
    ("ぎゅ", "gyu", "gyu", "gyu"),
    ("ぎょ", "gyo", "gyo", "gyo"),
    ("じゃ", "ja", "zya", "zya"),
    ("じゅ", "ju", "zyu", "zyu"),
    ("じょ", "jo", "zyo", "zyo"),
    ("ぢゃ", "ja", "dya", "zya"),
    ("ぢゅ", "ju", "dyu", "zyu"),
    ("ぢょ", "jo", "dyo", "zyo"),
    ("びゃ", "bya", "bya", "bya"),
    ("びゅ", "byu", "byu", "byu"),
    ("びょ", "byo", "byo", "byo"),
    ("ぴゃ", "pya", "pya", "pya"),
    ("ぴゅ", "pyu", "pyu", "pyu"),
    ("ぴょ", "pyo", "pyo", "pyo"),
    ("ぁ", "xa", "xa", "xa"),
    ("ぃ", "xi", "xi", "xi"),
    ("ぅ", "xu", "xu", "xu"),
    ("ぇ", "xe", "xe", "xe"),
    ("ぉ", "xo", "xo", "xo"),
    ("ゃ", "xya", "xya", "xya"),
    ("ゅ", "xyu", "xyu", "xyu"),
    ("ょ", "xyo", "xyo", "xyo"),
    ("ゎ", "xwa", "xwa", "xwa"),
];

/// Romaji spellings accepted on input besides the table columns
const INPUT_ALIASES: &[(&str, &str)] = &[
    ("xtu", "っ"),
    ("xtsu", "っ"),
    ("ltu", "っ"),
    ("ltsu", "っ"),
    ("la", "ぁ"),
    ("li", "ぃ"),
    ("lu", "ぅ"),
    ("le", "ぇ"),
    ("lo", "ぉ"),
    ("lya", "ゃ"),
    ("lyu", "ゅ"),
    ("lyo", "ょ"),
];

const SOKUON: char = 'っ';
const SYLLABIC_N: char = 'ん';
const LONG_VOWEL: char = 'ー';
const LONGEST_INPUT: usize = 4;

static KANA_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    SYLLABLES
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.0, idx))
        .collect()
});

static ROMAJI_INDEX: LazyLock<HashMap<RomanizationScheme, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        [
            RomanizationScheme::Hepburn,
            RomanizationScheme::NihonShiki,
            RomanizationScheme::Kunrei,
        ]
        .into_iter()
        .map(|scheme| (scheme, reverse_table(scheme)))
        .collect()
    });

/// The scheme's own column wins; other schemes' spellings are still accepted.
fn reverse_table(scheme: RomanizationScheme) -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();
    let mut columns = vec![scheme];
    columns.extend(
        [
            RomanizationScheme::Hepburn,
            RomanizationScheme::NihonShiki,
            RomanizationScheme::Kunrei,
        ]
        .into_iter()
        .filter(|other| *other != scheme),
    );

    for column in columns {
        for row in SYLLABLES {
            table.entry(romaji_of(row, column)).or_insert(row.0);
        }
    }
    for (romaji, kana) in INPUT_ALIASES {
        table.entry(*romaji).or_insert(*kana);
    }
    table
}

fn romaji_of(row: &Row, scheme: RomanizationScheme) -> &'static str {
    match scheme {
        RomanizationScheme::Hepburn => row.1,
        RomanizationScheme::NihonShiki => row.2,
        RomanizationScheme::Kunrei => row.3,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Conversion between kana and a romanization system
pub trait Romanize {
    /// Hiragana or katakana to romaji. Characters without a romaji
    /// spelling (kanji, punctuation) pass through unchanged.
    fn to_romaji(&self, kana: &str) -> String;

    /// Romaji to hiragana. Unknown characters pass through unchanged.
    fn to_hiragana(&self, romaji: &str) -> String;

    fn to_katakana(&self, romaji: &str) -> String {
        hiragana_to_katakana(&self.to_hiragana(romaji))
    }
}

impl Romanize for RomanizationScheme {
    fn to_romaji(&self, kana: &str) -> String {
        let chars: Vec<char> = katakana_to_hiragana(kana).chars().collect();
        let mut out = String::with_capacity(chars.len() * 2);
        let mut sokuon = false;
        let mut after_n = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == SOKUON {
                if sokuon {
                    out.push_str("xtu");
                }
                sokuon = true;
                after_n = false;
                i += 1;
                continue;
            }

            if c == SYLLABIC_N {
                flush_sokuon(&mut out, &mut sokuon);
                out.push('n');
                after_n = true;
                i += 1;
                continue;
            }

            match lookup_syllable(&chars, i) {
                Some((len, row)) => {
                    let romaji = romaji_of(&SYLLABLES[row], *self);
                    let first = romaji.chars().next().unwrap_or('a');
                    if after_n && (is_vowel(first) || first == 'y') {
                        out.push('\'');
                    }
                    if sokuon {
                        if is_vowel(first) || first == 'x' {
                            out.push_str("xtu");
                        } else if romaji.starts_with("ch") {
                            out.push('t');
                        } else {
                            out.push(first);
                        }
                        sokuon = false;
                    }
                    out.push_str(romaji);
                    i += len;
                }
                None => {
                    flush_sokuon(&mut out, &mut sokuon);
                    out.push(if c == LONG_VOWEL { '-' } else { c });
                    i += 1;
                }
            }
            after_n = false;
        }

        flush_sokuon(&mut out, &mut sokuon);
        out
    }

    fn to_hiragana(&self, romaji: &str) -> String {
        let Some(table) = ROMAJI_INDEX.get(self) else {
            return romaji.to_string();
        };
        let chars: Vec<char> = romaji.to_lowercase().chars().collect();
        let mut out = String::with_capacity(romaji.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            match c {
                '-' => {
                    out.push(LONG_VOWEL);
                    i += 1;
                    continue;
                }
                '\'' => {
                    i += 1;
                    continue;
                }
                'n' => {
                    let after = chars.get(i + 2).copied();
                    match next {
                        Some('n') if !after.is_some_and(|a| is_vowel(a) || a == 'y') => {
                            out.push(SYLLABIC_N);
                            i += 2;
                            continue;
                        }
                        Some(n) if is_vowel(n) || n == 'y' => {}
                        _ => {
                            out.push(SYLLABIC_N);
                            i += 1;
                            continue;
                        }
                    }
                }
                _ if c.is_ascii_alphabetic() && !is_vowel(c) => {
                    let doubled = next == Some(c)
                        || (c == 't' && next == Some('c') && chars.get(i + 2) == Some(&'h'));
                    if doubled {
                        out.push(SOKUON);
                        i += 1;
                        continue;
                    }
                }
                _ => {}
            }

            let matched = (1..=LONGEST_INPUT.min(chars.len() - i))
                .rev()
                .find_map(|len| {
                    let candidate: String = chars[i..i + len].iter().collect();
                    table.get(candidate.as_str()).map(|kana| (len, *kana))
                });

            match matched {
                Some((len, kana)) => {
                    out.push_str(kana);
                    i += len;
                }
                None => {
                    out.push(c);
                    i += 1;
                }
            }
        }

        out
    }
}

/// Longest table syllable starting at `i`: (chars consumed, row index).
fn lookup_syllable(chars: &[char], i: usize) -> Option<(usize, usize)> {
    (1..=2.min(chars.len() - i)).rev().find_map(|len| {
        let candidate: String = chars[i..i + len].iter().collect();
        KANA_INDEX.get(candidate.as_str()).map(|idx| (len, *idx))
    })
}

fn flush_sokuon(out: &mut String, sokuon: &mut bool) {
    if *sokuon {
        out.push_str("xtu");
        *sokuon = false;
    }
}
