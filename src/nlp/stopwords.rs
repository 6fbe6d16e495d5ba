use once_cell::sync::Lazy;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// English stopword set, loaded once. The engine only supports the
/// tokenizer's alphabet; other languages are out of scope.
static STOPWORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    get(LANGUAGE::English)
        .iter()
        .map(|w| w.to_lowercase())
        .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Lower-cased words with surrounding punctuation trimmed and stopwords
/// removed. This is the vocabulary used for similarity and cohesion scoring.
pub fn content_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty() && !is_stopword(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("and"));
        assert!(!is_stopword("quarterly"));
    }

    #[test]
    fn content_tokens_lowercase_and_strip_punctuation() {
        let tokens = content_tokens("The Budget, reviewed (twice).");
        assert_eq!(tokens, vec!["budget", "reviewed", "twice"]);
    }

    #[test]
    fn stopword_only_text_yields_no_tokens() {
        assert!(content_tokens("it is what it is").is_empty());
    }
}
