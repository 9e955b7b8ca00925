use aedict_core::language::{ExampleProvider, ExampleSentence};

/// (form id, [(japanese, english)])
const EXAMPLES: &[(&str, &[(&str, &str)])] = &[
    ("polite", &[("まいにち ほんを よみます。", "I read books every day.")]),
    ("polite_negative", &[("にくは たべません。", "I don't eat meat.")]),
    ("polite_past", &[("きのう えいがを みました。", "I watched a movie yesterday.")]),
    ("polite_past_negative", &[("あさごはんを たべませんでした。", "I didn't eat breakfast.")]),
    ("negative", &[("あした がっこうへ いかない。", "I won't go to school tomorrow.")]),
    ("past_negative", &[("だれも こなかった。", "Nobody came.")]),
    ("past", &[("てがみを かいた。", "I wrote a letter.")]),
    (
        "te",
        &[
            ("あさ おきて、かおを あらう。", "I get up in the morning and wash my face."),
            ("ドアを あけて。", "Open the door."),
        ],
    ),
    ("want", &[("みずが のみたい。", "I want to drink water.")]),
    ("volitional", &[("いっしょに かえろう。", "Let's go home together.")]),
    ("potential", &[("かんじが よめる。", "I can read kanji.")]),
    ("conditional", &[("やすければ かう。", "If it's cheap, I'll buy it.")]),
    ("imperative", &[("はやく いけ！", "Go, quickly!")]),
    ("lets", &[("ひるごはんを たべましょう。", "Let's eat lunch.")]),
    ("passive", &[("せんせいに ほめられた。", "I was praised by the teacher.")]),
    ("causative", &[("こどもに やさいを たべさせる。", "I make the child eat vegetables.")]),
    ("causative_passive", &[("まいにち そうじを させられる。", "I am made to clean every day.")]),
    ("tara", &[("えきに ついたら でんわして。", "Call me when you get to the station.")]),
    ("tari", &[("にちようびは ほんを よんだり、ねたり する。", "On Sundays I do things like read and sleep.")]),
    ("progressive", &[("いま テレビを みている。", "I am watching TV now.")]),
    ("request", &[("ここに なまえを かいてください。", "Please write your name here.")]),
    ("negative_request", &[("しゃしんを とらないでください。", "Please don't take photos.")]),
    ("must", &[("もう かえらなければならない。", "I must go home now.")]),
    ("try", &[("この ケーキを たべてみる。", "I'll try eating this cake.")]),
    ("easy", &[("この ペンは かきやすい。", "This pen is easy to write with.")]),
    ("hard", &[("この ことばは おぼえにくい。", "This word is hard to remember.")]),
    ("without", &[("はを みがかないで ねた。", "I went to bed without brushing my teeth.")]),
];

/// Example sentences compiled into the binary, written in kana so they
/// romanize cleanly.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinExamples;

impl ExampleProvider for BuiltinExamples {
    fn examples(&self, form_id: &str) -> Vec<ExampleSentence> {
        EXAMPLES
            .iter()
            .find(|(id, _)| *id == form_id)
            .map(|(_, pairs)| {
                pairs
                    .iter()
                    .map(|(jp, en)| ExampleSentence::new(*jp, *en))
                    .collect()
            })
            .unwrap_or_default()
    }
}
