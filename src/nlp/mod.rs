pub mod sentences;
pub mod stopwords;

pub use sentences::{normalize_whitespace, split_sentences, Sentence};
