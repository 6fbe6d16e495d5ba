use crate::nlp::stopwords::content_tokens;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Ordered sentence unit. Created once by the segmenter and never mutated.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// 0-based position in the document.
    pub index: usize,
    pub text: String,
    /// Lower-cased, stopword-filtered vocabulary of the sentence.
    pub content_tokens: Vec<String>,
}

impl Sentence {
    fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            text: text.to_string(),
            content_tokens: content_tokens(text),
        }
    }
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text.trim(), " ").into_owned()
}

/// Split normalized text into ordered sentences. A `.`, `!` or `?` ends a
/// sentence when followed by whitespace or end of input, so decimals and
/// similar in-word punctuation do not split. The terminator stays with its
/// sentence; trailing text without a terminator becomes a final sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if at_boundary {
                let end = i + ch.len_utf8();
                let piece = text[start..end].trim();
                if !piece.is_empty() {
                    sentences.push(Sentence::new(sentences.len(), piece));
                }
                start = end;
            }
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(Sentence::new(sentences.len(), tail));
    }
    sentences
}
