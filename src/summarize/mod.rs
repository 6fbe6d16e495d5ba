use crate::errors::SummarizeError;
use serde::Serialize;

mod extract;
mod graph_rank;
mod lead;
mod topics;

pub use extract::DEFAULT_MAX_SENTENCES;
pub use graph_rank::GraphRankSummarizer;
pub use lead::LeadSummarizer;

/// Contiguous run of sentences judged to discuss a single subject.
/// `speakers` is always empty here; diarization belongs to an external
/// collaborator that supplies per-speaker segmentation.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub speakers: Vec<String>,
}

/// Success payload of a summarization pass. Every sentence in every field is
/// drawn verbatim from the segmented input.
#[derive(Debug, Clone)]
pub struct Summary {
    pub summary: String,
    pub tldr: String,
    pub key_points: Vec<String>,
    pub topics: Vec<Topic>,
}

/// Wire envelope for callers. The status tag makes the success and error
/// shapes mutually exclusive at the type level.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SummaryResponse {
    Success {
        summary: String,
        tldr: String,
        key_points: Vec<String>,
        topics: Vec<Topic>,
    },
    Error {
        error: String,
    },
}

impl From<Result<Summary, SummarizeError>> for SummaryResponse {
    fn from(result: Result<Summary, SummarizeError>) -> Self {
        match result {
            Ok(s) => SummaryResponse::Success {
                summary: s.summary,
                tldr: s.tldr,
                key_points: s.key_points,
                topics: s.topics,
            },
            Err(e) => SummaryResponse::Error {
                error: e.to_string(),
            },
        }
    }
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, max_sentences: usize) -> Result<Summary, SummarizeError>;
}

/// Closed set of summarization strategies, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Similarity-graph centrality ranking with topic segmentation.
    GraphRank,
    /// First-N-sentences baseline; no ranking, no topics.
    Lead,
}

pub fn build_summarizer(strategy: Strategy) -> Box<dyn Summarizer> {
    match strategy {
        Strategy::GraphRank => Box::new(GraphRankSummarizer::new()),
        Strategy::Lead => Box::new(LeadSummarizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let resp = SummaryResponse::from(Err(SummarizeError::EmptyInput));
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["status"], "error");
        assert_eq!(v["error"], "no text provided for summarization");
    }

    #[test]
    fn success_envelope_shape() {
        let resp = SummaryResponse::from(Ok(Summary {
            summary: "All of it.".into(),
            tldr: "All of it.".into(),
            key_points: vec!["All of it.".into()],
            topics: vec![Topic {
                title: "Everything".into(),
                summary: "All of it.".into(),
                key_points: vec!["All of it.".into()],
                speakers: Vec::new(),
            }],
        }));
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["summary"], "All of it.");
        assert!(v["key_points"].is_array());
        assert_eq!(v["topics"][0]["speakers"], serde_json::json!([]));
    }
}
