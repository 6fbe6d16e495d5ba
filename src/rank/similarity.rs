use crate::nlp::Sentence;
use std::collections::HashSet;

/// Dense symmetric n×n sentence-similarity matrix with a zero diagonal.
/// Values are in [0, 1]. Built once per ranking pass; the O(n²) build is the
/// dominant cost for long transcripts, so callers bound document length.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn build(sentences: &[Sentence]) -> Self {
        let n = sentences.len();
        let token_sets: Vec<HashSet<&str>> = sentences
            .iter()
            .map(|s| s.content_tokens.iter().map(String::as_str).collect())
            .collect();

        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = sentence_similarity(&token_sets[i], &token_sets[j]);
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }
        Self { n, values }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Total edge weight attached to sentence `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.values[i * self.n..(i + 1) * self.n].iter().sum()
    }
}

/// Cosine similarity of binary presence vectors over the union of the two
/// token sets. With binary vectors the dot product is the intersection size
/// and each norm is the square root of the set size. Defined as 0 when
/// either set is empty, avoiding an undefined cosine on a zero vector.
fn sentence_similarity(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}
