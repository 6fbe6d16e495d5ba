//! Multi-level extraction: tldr, key points and the bounded summary.

use crate::nlp::Sentence;
use crate::rank::rank_order;
use std::collections::HashSet;

pub const DEFAULT_MAX_SENTENCES: usize = 10;
/// Key points surfaced for standalone presentation, before de-duplication.
const KEY_POINT_CAP: usize = 10;
/// The tldr is at most this many top-ranked sentences.
const TLDR_CAP: usize = 2;

#[derive(Debug, Clone)]
pub struct Levels {
    pub summary: String,
    pub tldr: String,
    pub key_points: Vec<String>,
}

/// Documents at or below this sentence count skip ranking entirely: the
/// graph is too small for meaningful centrality separation. Ceiling
/// division so an odd cap rounds up (3 sentences with a cap of 5 bypass).
pub fn is_short_document(sentence_count: usize, max_sentences: usize) -> bool {
    sentence_count <= max_sentences.div_ceil(2)
}

/// Bypass output: the document verbatim, its first sentence as tldr and the
/// full ordered sentence list as key points. Also the degraded shape when
/// whole-document ranking fails.
pub fn short_document(text: &str, sentences: &[Sentence]) -> Levels {
    Levels {
        summary: text.to_string(),
        tldr: sentences.first().map(|s| s.text.clone()).unwrap_or_default(),
        key_points: sentences.iter().map(|s| s.text.clone()).collect(),
    }
}

/// Ranking-based extraction. Key points and the tldr read in rank order as
/// a prioritized list; the bounded summary is re-sorted into original
/// document order so it reads as narrative.
pub fn extract(sentences: &[Sentence], scores: &[f64], max_sentences: usize) -> Levels {
    let order = rank_order(scores);

    let tldr = order
        .iter()
        .take(TLDR_CAP)
        .map(|&i| sentences[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut seen = HashSet::new();
    let key_points: Vec<String> = order
        .iter()
        .take(KEY_POINT_CAP.min(sentences.len()))
        .map(|&i| sentences[i].text.clone())
        .filter(|text| seen.insert(text.clone()))
        .collect();

    let mut picked: Vec<usize> = order
        .iter()
        .take(max_sentences.min(sentences.len()))
        .copied()
        .collect();
    picked.sort_unstable();
    let summary = picked
        .iter()
        .map(|&i| sentences[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Levels {
        summary,
        tldr,
        key_points,
    }
}
