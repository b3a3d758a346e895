//! Information-theoretic comparisons (base-2 logarithms throughout).
//!
//! Zero-probability terms contribute nothing to any sum (the 0·log 0 = 0
//! convention), so these functions never produce NaN for valid input.
//!
//! # References
//!
//! - Strehl & Ghosh (2002). "Cluster ensembles"
//! - Fred & Jain (2003). "Robust data clustering"
//! - Meilă (2007). "Comparing clusterings: an information based distance"

use crate::error::{Error, Result};
use crate::validation::confusion::{compute_confusion_matrix, ConfusionMatrix};
use itertools::Itertools;

/// Shannon entropy of a distribution given as raw counts summing to `total`
pub(crate) fn entropy_of_counts<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

impl<A, B> ConfusionMatrix<A, B> {
    /// Entropy of the reference labeling (rows)
    pub fn row_entropy(&self) -> f64 {
        entropy_of_counts(self.row_sums(), self.n_items())
    }

    /// Entropy of the second labeling (columns)
    pub fn column_entropy(&self) -> f64 {
        entropy_of_counts(self.column_sums(), self.n_items())
    }

    /// Mutual information between the row and column labelings
    pub fn mutual_information(&self) -> f64 {
        let n = self.n_items() as f64;
        let row_sums = self.row_sums();
        let column_sums = self.column_sums();

        let mut mi = 0.0;
        for ((i, j), &count) in self.counts().indexed_iter() {
            if count == 0 {
                continue;
            }
            let p_ij = count as f64 / n;
            let p_i = row_sums[i] as f64 / n;
            let p_j = column_sums[j] as f64 / n;
            mi += p_ij * (p_ij / (p_i * p_j)).log2();
        }
        mi
    }

    /// Strehl-Ghosh normalisation, I / √(H(A)·H(B))
    pub fn sg_nmi(&self) -> Result<f64> {
        let denominator = (self.row_entropy() * self.column_entropy()).sqrt();
        if denominator == 0.0 {
            return Err(Error::DivisionByZero { index: "strehl-ghosh nmi" });
        }
        Ok(self.mutual_information() / denominator)
    }

    /// Fred-Jain normalisation, 2I / (H(A) + H(B))
    pub fn fj_nmi(&self) -> Result<f64> {
        let denominator = self.row_entropy() + self.column_entropy();
        if denominator == 0.0 {
            return Err(Error::DivisionByZero { index: "fred-jain nmi" });
        }
        Ok(2.0 * self.mutual_information() / denominator)
    }

    /// Meilă's variation of information, H(A) + H(B) − 2I
    pub fn variation_information(&self) -> f64 {
        // rounding can push identical partitions a hair below zero
        (self.row_entropy() + self.column_entropy() - 2.0 * self.mutual_information()).max(0.0)
    }
}

/// Entropy of a single labeling, −Σ p_i log2 p_i over its clusters.
///
/// ```rust
/// use cluster_index::validation::cluster_entropy;
///
/// assert_eq!(cluster_entropy(&["a", "a", "a"]).unwrap(), 0.0);
/// assert!((cluster_entropy(&[1, 2, 3, 4]).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn cluster_entropy<L: Ord>(labels: &[L]) -> Result<f64> {
    if labels.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sizes = labels.iter().sorted().dedup_with_count().map(|(count, _)| count);
    Ok(entropy_of_counts(sizes, labels.len()))
}

/// Mutual information between `a` and `b`, each over its own label set
pub fn mi<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    Ok(compute_confusion_matrix(a, b)?.mutual_information())
}

/// Strehl-Ghosh normalized mutual information.
///
/// Undefined when either labeling is a single cluster.
pub fn sg_nmi<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    compute_confusion_matrix(a, b)?.sg_nmi()
}

/// Fred-Jain normalized mutual information.
///
/// Undefined only when both labelings are a single cluster.
pub fn fj_nmi<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    compute_confusion_matrix(a, b)?.fj_nmi()
}

/// Variation of information; a metric, zero for identical partitions
pub fn variation_information<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    Ok(compute_confusion_matrix(a, b)?.variation_information())
}
