use crate::errors::RankError;
use crate::rank::SimilarityMatrix;
use std::cmp::Ordering;

/// Weighted PageRank over the sentence-similarity graph. Power iteration
/// with uniform teleport and uniform redistribution of dangling-node mass.
#[derive(Debug, Clone)]
pub struct PageRank {
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 convergence tolerance.
    pub tolerance: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRank {
    /// Compute one centrality score per sentence. Converged scores are
    /// normalized to sum to 1. A single sentence scores 1.0 without
    /// iterating; an empty matrix or a pass that fails to converge within
    /// the iteration cap returns an error for the caller to contain.
    pub fn run(&self, matrix: &SimilarityMatrix) -> Result<Vec<f64>, RankError> {
        let n = matrix.len();
        if n == 0 {
            return Err(RankError::Degenerate);
        }
        if n == 1 {
            return Ok(vec![1.0]);
        }

        let totals: Vec<f64> = (0..n).map(|i| matrix.row_sum(i)).collect();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for _ in 0..self.max_iterations {
            let dangling_mass: f64 = totals
                .iter()
                .zip(&scores)
                .filter(|(total, _)| **total == 0.0)
                .map(|(_, score)| *score)
                .sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for i in 0..n {
                if totals[i] > 0.0 {
                    for j in 0..n {
                        let weight = matrix.get(i, j);
                        if weight > 0.0 {
                            next[j] += self.damping * scores[i] * weight / totals[i];
                        }
                    }
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta < self.tolerance {
                let sum: f64 = scores.iter().sum();
                if sum > 0.0 {
                    for score in &mut scores {
                        *score /= sum;
                    }
                }
                return Ok(scores);
            }
        }

        Err(RankError::NoConvergence(self.max_iterations))
    }
}

/// Sentence indices sorted by score descending, index ascending on ties.
/// The ascending tie-break keeps downstream "top sentence" picks stable.
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}
