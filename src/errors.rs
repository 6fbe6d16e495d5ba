use thiserror::Error;

/// Errors surfaced by the public `summarize` operation.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("no text provided for summarization")]
    EmptyInput,
}

/// Internal ranking failures. These never cross the public API: a failing
/// topic span is dropped, and a whole-document failure degrades to the
/// raw-text summary instead.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("graph has no nodes to rank")]
    Degenerate,
    #[error("rank iteration failed to converge within {0} iterations")]
    NoConvergence(usize),
}
