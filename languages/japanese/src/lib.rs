pub mod deconjugator;
pub mod dictionary;
pub mod edict;
pub mod examples;
pub mod inflection;
pub mod inflection_table;
pub mod kana;
pub mod loader;
pub mod processor;
pub mod query;
pub mod romanization;
pub mod segmenter;

pub use deconjugator::JapaneseDeconjugator;
pub use dictionary::{InMemoryIndex, MemoryDictionary};
pub use examples::BuiltinExamples;
pub use inflection::{Base, Form, VerbClass};
pub use inflection_table::{InflectionGroup, InflectionOptions, build_inflection_table};
pub use loader::{DictionaryLoader, FileIndex};
pub use processor::JapaneseProcessor;
pub use romanization::Romanize;
pub use segmenter::WordSegmenter;
