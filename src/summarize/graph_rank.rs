use crate::errors::SummarizeError;
use crate::nlp::{normalize_whitespace, split_sentences};
use crate::rank::{PageRank, SimilarityMatrix};
use crate::summarize::topics::segment_topics;
use crate::summarize::{extract, Summarizer, Summary};

/// The full engine: similarity-graph centrality ranking with multi-level
/// extraction and topic segmentation. Purely functional per call; holds no
/// state beyond the rank parameters, so one instance serves any number of
/// threads.
#[derive(Debug, Default)]
pub struct GraphRankSummarizer {
    ranker: PageRank,
}

impl GraphRankSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranker(ranker: PageRank) -> Self {
        Self { ranker }
    }
}

impl Summarizer for GraphRankSummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> Result<Summary, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let normalized = normalize_whitespace(text);
        let sentences = split_sentences(&normalized);
        tracing::debug!(sentence_count = sentences.len(), max_sentences, "segmented transcript");

        let levels = if extract::is_short_document(sentences.len(), max_sentences) {
            // Too few sentences for meaningful centrality separation.
            extract::short_document(text, &sentences)
        } else {
            let matrix = SimilarityMatrix::build(&sentences);
            match self.ranker.run(&matrix) {
                Ok(scores) => extract::extract(&sentences, &scores, max_sentences),
                Err(e) => {
                    // Degraded-but-present beats a hard failure: fall back to
                    // the raw text rather than surfacing the rank error.
                    tracing::warn!(error = %e, "document ranking failed, returning raw text");
                    extract::short_document(text, &sentences)
                }
            }
        };

        let topics = segment_topics(&sentences, &self.ranker);
        tracing::info!(
            sentence_count = sentences.len(),
            key_points = levels.key_points.len(),
            topic_count = topics.len(),
            "summary generation complete"
        );

        Ok(Summary {
            summary: levels.summary,
            tldr: levels.tldr,
            key_points: levels.key_points,
            topics,
        })
    }
}
