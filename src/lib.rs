//! Deterministic extractive summarization for meeting transcripts.
//!
//! The engine segments a transcript into sentences, ranks them by centrality
//! over a sentence-similarity graph, and assembles a multi-level summary:
//! an ultra-short tldr, importance-ordered key points, a length-bounded
//! summary in document order, and lexical-cohesion topic segments with
//! generated titles. It runs without any generative model, serving as the
//! fallback path when one is unavailable.
//!
//! ```
//! use transcript_summarizer::summarize::{build_summarizer, Strategy, Summarizer as _};
//!
//! let engine = build_summarizer(Strategy::GraphRank);
//! let summary = engine.summarize("We met. The demo worked. Everyone left.", 10).unwrap();
//! assert_eq!(summary.tldr, "We met.");
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod nlp;
pub mod rank;
pub mod summarize;
