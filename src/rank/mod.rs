pub mod pagerank;
pub mod similarity;

pub use pagerank::{rank_order, PageRank};
pub use similarity::SimilarityMatrix;
