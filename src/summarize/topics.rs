//! Topic segmentation by lexical-cohesion drift.
//!
//! A scan walks the sentence sequence one sentence at a time, comparing the
//! vocabulary of the trailing window against the following window. A drop in
//! overlap marks a candidate boundary; a candidate only closes the buffered
//! span once it holds enough sentences, so under-sized interior spans merge
//! forward instead of being emitted (a known limitation of the heuristic,
//! kept deliberately). Each closed span is re-ranked on its own similarity
//! graph to pick a title sentence and span-local key points.

use crate::nlp::Sentence;
use crate::rank::{rank_order, PageRank, SimilarityMatrix};
use crate::summarize::Topic;
use std::collections::HashSet;

/// Documents shorter than this are not worth segmenting.
const MIN_DOC_SENTENCES: usize = 10;
/// Spans never close below this length; the trailing buffer is dropped
/// below it as well.
const MIN_SPAN_LEN: usize = 3;
/// Window overlap below this ratio signals a topic boundary.
const COHESION_THRESHOLD: f64 = 0.30;
const MAX_WINDOW: usize = 5;
const TITLE_TOKEN_CAP: usize = 7;
const TOPIC_KEY_POINTS: usize = 3;
const FALLBACK_TITLE: &str = "Discussion Topic";

/// Scan states. `BoundaryCandidate` records an overlap drop that could not
/// flush because the span was still under the minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Accumulating,
    BoundaryCandidate,
    Flushed,
}

/// Group sentences into ordered, non-overlapping topics. Returns an empty
/// list for documents under `MIN_DOC_SENTENCES`. Spans whose ranking fails
/// are dropped, not propagated.
pub fn segment_topics(sentences: &[Sentence], ranker: &PageRank) -> Vec<Topic> {
    let n = sentences.len();
    if n < MIN_DOC_SENTENCES {
        return Vec::new();
    }
    let window = MAX_WINDOW.min(n / 3);

    let mut topics = Vec::new();
    // Spans are contiguous, so the accumulating buffer is just the slice
    // from `span_start` up to the scan position.
    let mut span_start = 0usize;

    for i in 0..n {
        let span_len = i + 1 - span_start;
        let below_threshold = window_overlap(sentences, i, window)
            .map_or(false, |overlap| overlap < COHESION_THRESHOLD);

        let state = match (below_threshold, span_len >= MIN_SPAN_LEN) {
            (false, _) => ScanState::Accumulating,
            (true, false) => ScanState::BoundaryCandidate,
            (true, true) => ScanState::Flushed,
        };

        if state == ScanState::Flushed {
            if let Some(topic) = close_span(&sentences[span_start..=i], ranker) {
                topics.push(topic);
            }
            span_start = i + 1;
        }
    }

    // Trailing flush: only a buffer that reached the minimum span length is
    // emitted as the final topic.
    if n - span_start >= MIN_SPAN_LEN {
        if let Some(topic) = close_span(&sentences[span_start..], ranker) {
            topics.push(topic);
        }
    }

    topics
}

/// Jaccard overlap between the `window`-sentence vocabulary ending at `i`
/// and the `window`-sentence vocabulary starting at `i + 1`. `None` when
/// either window is incomplete; 0 when both windows are token-free.
fn window_overlap(sentences: &[Sentence], i: usize, window: usize) -> Option<f64> {
    if window == 0 || i + 1 < window || i + 1 + window > sentences.len() {
        return None;
    }
    let current = window_vocab(&sentences[i + 1 - window..=i]);
    let following = window_vocab(&sentences[i + 1..i + 1 + window]);

    let union = current.union(&following).count();
    if union == 0 {
        return Some(0.0);
    }
    let intersection = current.intersection(&following).count();
    Some(intersection as f64 / union as f64)
}

fn window_vocab(span: &[Sentence]) -> HashSet<&str> {
    span.iter()
        .flat_map(|s| s.content_tokens.iter().map(String::as_str))
        .collect()
}

/// Rank the buffered span on its own similarity graph and assemble the
/// topic. `None` when the span cannot be ranked, which drops the span.
fn close_span(span: &[Sentence], ranker: &PageRank) -> Option<Topic> {
    let matrix = SimilarityMatrix::build(span);
    let scores = match ranker.run(&matrix) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::debug!(span_len = span.len(), error = %e, "dropping unrankable topic span");
            return None;
        }
    };
    let order = rank_order(&scores);

    let title = make_title(&span[order[0]]);
    let summary = span
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let key_points = order
        .iter()
        .take(TOPIC_KEY_POINTS)
        .map(|&i| span[i].text.clone())
        .collect();

    Some(Topic {
        title,
        summary,
        key_points,
        speakers: Vec::new(),
    })
}

/// Title from the span's top-ranked sentence: stopwords stripped, capped at
/// seven tokens, tokens longer than three characters capitalized.
fn make_title(sentence: &Sentence) -> String {
    let words: Vec<String> = sentence
        .content_tokens
        .iter()
        .take(TITLE_TOKEN_CAP)
        .map(|token| capitalize_long(token))
        .collect();
    if words.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize_long(token: &str) -> String {
    if token.chars().count() <= 3 {
        return token.to_string();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
