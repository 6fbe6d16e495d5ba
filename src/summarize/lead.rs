use crate::errors::SummarizeError;
use crate::nlp::{normalize_whitespace, split_sentences};
use crate::summarize::{Summarizer, Summary};

/// Cheap baseline strategy: the first `max_sentences` sentences in order.
/// Transcripts front-load agenda and context, so the lead is a serviceable
/// digest when graph ranking is not wanted. No topic segmentation.
pub struct LeadSummarizer;

const KEY_POINT_CAP: usize = 10;

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> Result<Summary, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let normalized = normalize_whitespace(text);
        let sentences = split_sentences(&normalized);

        let summary = sentences
            .iter()
            .take(max_sentences)
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let tldr = sentences.first().map(|s| s.text.clone()).unwrap_or_default();
        let key_points = sentences
            .iter()
            .take(KEY_POINT_CAP)
            .map(|s| s.text.clone())
            .collect();

        Ok(Summary {
            summary,
            tldr,
            key_points,
            topics: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_leading_sentences_in_order() {
        let text = "First item. Second item. Third item. Fourth item.";
        let summary = LeadSummarizer.summarize(text, 2).expect("summarize");
        assert_eq!(summary.summary, "First item. Second item.");
        assert_eq!(summary.tldr, "First item.");
        assert_eq!(summary.key_points.len(), 4);
        assert!(summary.topics.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            LeadSummarizer.summarize("", 5),
            Err(SummarizeError::EmptyInput)
        ));
    }
}
