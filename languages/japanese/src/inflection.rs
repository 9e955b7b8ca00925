//! Verb inflection rules over Nihon-shiki romaji.
//!
//! Nihon-shiki keeps every godan row regular (ta/ti/tu/te/to,
//! sa/si/su/se/so), so bases are formed by swapping the final vowel.

use aedict_core::types::DictEntry;

/// Conjugation class, which decides how bases are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
    Godan,
    /// Godan verbs with the irregular te/ta forms of 行く
    Iku,
    Ichidan,
    Suru,
    Kuru,
}

impl VerbClass {
    /// Classifies from the romaji reading alone.
    pub fn classify(romaji: &str, ichidan: bool) -> Self {
        if ichidan {
            VerbClass::Ichidan
        } else if romaji == "kuru" || romaji.ends_with("tekuru") {
            VerbClass::Kuru
        } else if romaji.ends_with("suru") {
            VerbClass::Suru
        } else if romaji == "iku" || romaji == "yuku" {
            VerbClass::Iku
        } else {
            VerbClass::Godan
        }
    }

    /// Part-of-speech tags take precedence over the reading, so godan verbs
    /// such as こする are not mistaken for する compounds.
    pub fn of_entry(entry: &DictEntry, romaji: &str) -> Self {
        for tag in entry.pos_tags() {
            match tag {
                "v1" => return VerbClass::Ichidan,
                "vk" => return VerbClass::Kuru,
                "vs-i" | "vs-s" => return VerbClass::Suru,
                "v5k-s" => return VerbClass::Iku,
                t if t.starts_with("v5") => return VerbClass::Godan,
                _ => {}
            }
        }
        Self::classify(romaji, entry.is_ichidan())
    }
}

/// The five classical verb bases plus the te and ta forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Base1,
    Base2,
    Base3,
    Base4,
    Base5,
    Te,
    Ta,
}

impl Base {
    pub const ALL: [Base; 7] = [
        Base::Base1,
        Base::Base2,
        Base::Base3,
        Base::Base4,
        Base::Base5,
        Base::Te,
        Base::Ta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Base::Base1 => "Base 1 (negative stem)",
            Base::Base2 => "Base 2 (masu stem)",
            Base::Base3 => "Base 3 (dictionary form)",
            Base::Base4 => "Base 4 (conditional stem)",
            Base::Base5 => "Base 5 (volitional)",
            Base::Te => "Te-form",
            Base::Ta => "Ta-form (plain past)",
        }
    }

    pub fn inflect(&self, romaji: &str, ichidan: bool) -> String {
        Verb::new(romaji, VerbClass::classify(romaji, ichidan)).base(*self)
    }
}

/// A verb reading in Nihon-shiki romaji together with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    romaji: String,
    class: VerbClass,
}

impl Verb {
    pub fn new(romaji: impl Into<String>, class: VerbClass) -> Self {
        Self {
            romaji: romaji.into(),
            class,
        }
    }

    pub fn class(&self) -> VerbClass {
        self.class
    }

    /// Everything before the conjugating part: the stem of an ichidan verb,
    /// the godan root without its final vowel, or the noun of a する/来る
    /// compound.
    fn root(&self) -> &str {
        let romaji = self.romaji.as_str();
        match self.class {
            VerbClass::Godan | VerbClass::Iku => romaji.strip_suffix('u').unwrap_or(romaji),
            VerbClass::Ichidan => romaji.strip_suffix("ru").unwrap_or(romaji),
            VerbClass::Suru => romaji.strip_suffix("suru").unwrap_or(romaji),
            VerbClass::Kuru => romaji.strip_suffix("kuru").unwrap_or(romaji),
        }
    }

    pub fn base(&self, base: Base) -> String {
        let root = self.root();
        match self.class {
            VerbClass::Ichidan => {
                let ending = match base {
                    Base::Base1 | Base::Base2 => "",
                    Base::Base3 => "ru",
                    Base::Base4 => "re",
                    Base::Base5 => "you",
                    Base::Te => "te",
                    Base::Ta => "ta",
                };
                format!("{root}{ending}")
            }
            VerbClass::Suru => {
                let ending = match base {
                    Base::Base1 | Base::Base2 => "si",
                    Base::Base3 => "suru",
                    Base::Base4 => "sure",
                    Base::Base5 => "siyou",
                    Base::Te => "site",
                    Base::Ta => "sita",
                };
                format!("{root}{ending}")
            }
            VerbClass::Kuru => {
                let ending = match base {
                    Base::Base1 => "ko",
                    Base::Base2 => "ki",
                    Base::Base3 => "kuru",
                    Base::Base4 => "kure",
                    Base::Base5 => "koyou",
                    Base::Te => "kite",
                    Base::Ta => "kita",
                };
                format!("{root}{ending}")
            }
            VerbClass::Godan | VerbClass::Iku => godan_base(root, self.class, base),
        }
    }
}

fn godan_base(root: &str, class: VerbClass, base: Base) -> String {
    // う-verbs (買う, 言う) have no consonant left in the root
    let bare = root.is_empty() || root.ends_with(['a', 'i', 'u', 'e', 'o']);
    match base {
        Base::Base1 if bare => format!("{root}wa"),
        Base::Base1 => format!("{root}a"),
        Base::Base2 => format!("{root}i"),
        Base::Base3 => format!("{root}u"),
        Base::Base4 => format!("{root}e"),
        Base::Base5 => format!("{root}ou"),
        Base::Te => godan_te(root, class, bare, "te", "de"),
        Base::Ta => godan_te(root, class, bare, "ta", "da"),
    }
}

fn godan_te(root: &str, class: VerbClass, bare: bool, voiceless: &str, voiced: &str) -> String {
    if bare {
        return format!("{root}t{voiceless}");
    }
    let consonant = root.chars().last().unwrap_or_default();
    let stem = &root[..root.len() - consonant.len_utf8()];
    match consonant {
        'k' if class == VerbClass::Iku => format!("{stem}t{voiceless}"),
        'k' => format!("{stem}i{voiceless}"),
        'g' => format!("{stem}i{voiced}"),
        's' => format!("{stem}si{voiceless}"),
        't' | 'r' | 'w' => format!("{stem}t{voiceless}"),
        'n' | 'b' | 'm' => format!("{stem}n{voiced}"),
        _ => format!("{root}{voiceless}"),
    }
}

/// One row of the inflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Form {
    /// Stable identifier, also the key for example sentences
    pub id: &'static str,
    pub explanation: &'static str,
    pub base: Base,
    pub suffix: &'static str,
    /// Ichidan verbs take a different suffix for a few forms
    pub ichidan_suffix: Option<&'static str>,
    /// Full endings after the compound prefix for する and 来る
    pub suru: &'static str,
    pub kuru: &'static str,
    pub basic: bool,
    godan_only: bool,
}

impl Form {
    pub fn applies_to_ichidan(&self) -> bool {
        !self.godan_only
    }

    /// Inflects a Nihon-shiki reading, classifying it from the reading.
    pub fn inflect(&self, romaji: &str, ichidan: bool) -> String {
        self.inflect_verb(&Verb::new(romaji, VerbClass::classify(romaji, ichidan)))
    }

    pub fn inflect_verb(&self, verb: &Verb) -> String {
        match verb.class {
            VerbClass::Suru => format!("{}{}", verb.root(), self.suru),
            VerbClass::Kuru => format!("{}{}", verb.root(), self.kuru),
            VerbClass::Ichidan => {
                let suffix = self.ichidan_suffix.unwrap_or(self.suffix);
                format!("{}{}", verb.base(self.base), suffix)
            }
            VerbClass::Godan | VerbClass::Iku => format!("{}{}", verb.base(self.base), self.suffix),
        }
    }
}

const fn form(
    id: &'static str,
    explanation: &'static str,
    base: Base,
    suffix: &'static str,
    suru: &'static str,
    kuru: &'static str,
    basic: bool,
) -> Form {
    Form {
        id,
        explanation,
        base,
        suffix,
        ichidan_suffix: None,
        suru,
        kuru,
        basic,
        godan_only: false,
    }
}

const fn ichidan(mut f: Form, suffix: &'static str) -> Form {
    f.ichidan_suffix = Some(suffix);
    f
}

const fn godan_only(mut f: Form) -> Form {
    f.godan_only = true;
    f
}

/// All forms in display order.
pub const FORMS: &[Form] = &[
    form("polite", "Polite present (masu)", Base::Base2, "masu", "simasu", "kimasu", true),
    form("polite_negative", "Polite negative", Base::Base2, "masen", "simasen", "kimasen", true),
    form("polite_past", "Polite past", Base::Base2, "masita", "simasita", "kimasita", true),
    form(
        "polite_past_negative",
        "Polite past negative",
        Base::Base2,
        "masendesita",
        "simasendesita",
        "kimasendesita",
        true,
    ),
    form("negative", "Plain negative", Base::Base1, "nai", "sinai", "konai", true),
    form("past_negative", "Plain past negative", Base::Base1, "nakatta", "sinakatta", "konakatta", true),
    form("past", "Plain past", Base::Ta, "", "sita", "kita", true),
    form("te", "Te-form, joins clauses", Base::Te, "", "site", "kite", true),
    form("want", "Want to do", Base::Base2, "tai", "sitai", "kitai", true),
    form("volitional", "Let's do / I shall do (plain)", Base::Base5, "", "siyou", "koyou", true),
    godan_only(form("potential", "Can do", Base::Base4, "ru", "dekiru", "korareru", true)),
    form("conditional", "If (ba-conditional)", Base::Base4, "ba", "sureba", "kureba", true),
    godan_only(form("imperative", "Do it! (command)", Base::Base4, "", "siro", "koi", true)),
    form("lets", "Let's do (polite)", Base::Base2, "masyou", "simasyou", "kimasyou", true),
    ichidan(
        form("passive", "Is done (passive)", Base::Base1, "reru", "sareru", "korareru", false),
        "rareru",
    ),
    ichidan(
        form("causative", "Make/let someone do", Base::Base1, "seru", "saseru", "kosaseru", false),
        "saseru",
    ),
    ichidan(
        form(
            "causative_passive",
            "Is made to do",
            Base::Base1,
            "serareru",
            "saserareru",
            "kosaserareru",
            false,
        ),
        "saserareru",
    ),
    form("tara", "If/when (tara-conditional)", Base::Ta, "ra", "sitara", "kitara", false),
    form("tari", "Doing things like", Base::Ta, "ri", "sitari", "kitari", false),
    form("progressive", "Is doing (progressive)", Base::Te, "iru", "siteiru", "kiteiru", false),
    form("request", "Please do", Base::Te, "kudasai", "sitekudasai", "kitekudasai", false),
    form(
        "negative_request",
        "Please don't do",
        Base::Base1,
        "naidekudasai",
        "sinaidekudasai",
        "konaidekudasai",
        false,
    ),
    form(
        "must",
        "Must do",
        Base::Base1,
        "nakerebanaranai",
        "sinakerebanaranai",
        "konakerebanaranai",
        false,
    ),
    form("try", "Try doing", Base::Te, "miru", "sitemiru", "kitemiru", false),
    form("easy", "Easy to do", Base::Base2, "yasui", "siyasui", "kiyasui", false),
    form("hard", "Hard to do", Base::Base2, "nikui", "sinikui", "kinikui", false),
    form("without", "Without doing", Base::Base1, "naide", "sinaide", "konaide", false),
];

pub fn find_form(id: &str) -> Option<&'static Form> {
    FORMS.iter().find(|f| f.id == id)
}
