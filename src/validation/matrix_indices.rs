//! Indices computed from the confusion matrix.
//!
//! Rows are always the reference labeling (first argument), so purity and
//! entropy describe how well each reference cluster is captured by the
//! second labeling.

use crate::error::Result;
use crate::validation::confusion::{compute_confusion_matrix, ConfusionMatrix};
use crate::validation::information::entropy_of_counts;
use ndarray::Axis;

impl<A, B> ConfusionMatrix<A, B> {
    /// Fraction of items falling in the best-matching B cluster of their A cluster
    pub fn purity(&self) -> f64 {
        self.row_maxima_sum() as f64 / self.n_items() as f64
    }

    /// Van Dongen criterion, 2n − Σ row maxima − Σ column maxima
    pub fn van_dongen(&self) -> f64 {
        (2 * self.n_items() - self.row_maxima_sum() - self.column_maxima_sum()) as f64
    }

    /// Conditional entropy of B within each A cluster, weighted by cluster size
    pub fn entropy(&self) -> f64 {
        let n = self.n_items() as f64;
        self.counts()
            .axis_iter(Axis(0))
            .map(|row| {
                let size: usize = row.sum();
                size as f64 / n * entropy_of_counts(row.iter().copied(), size)
            })
            .sum()
    }
}

/// Purity of `b` with respect to reference clusters `a`.
///
/// Always in (0, 1]; 1 when every cluster of `a` lies inside a single
/// cluster of `b`.
pub fn purity<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    Ok(compute_confusion_matrix(a, b)?.purity())
}

/// Van Dongen distance; zero exactly when the partitions coincide
pub fn van_dongen<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    Ok(compute_confusion_matrix(a, b)?.van_dongen())
}

/// Entropy of `b` given the clusters of `a`, in bits
pub fn entropy<A, B>(a: &[A], b: &[B]) -> Result<f64>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    Ok(compute_confusion_matrix(a, b)?.entropy())
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [char; 8] = ['a', 'a', 'b', 'b', 'c', 'c', 'a', 'a'];
    const B: [u8; 8] = [1, 1, 1, 2, 2, 2, 3, 3];

    #[test]
    fn test_scenario_values() {
        // rows a=[2,0,2], b=[1,1,0], c=[0,2,0]
        assert!((purity(&A, &B).unwrap() - 0.625).abs() < 1e-12);
        assert_eq!(van_dongen(&A, &B).unwrap(), 5.0);
        assert!((entropy(&A, &B).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_purity_depends_on_reference() {
        // Swapping the reference changes which side's clusters are scored.
        assert!((purity(&B, &A).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_identical_partitions() {
        let labels = ["x", "x", "y", "z", "z", "z"];
        assert_eq!(purity(&labels, &labels).unwrap(), 1.0);
        assert_eq!(van_dongen(&labels, &labels).unwrap(), 0.0);
        assert_eq!(entropy(&labels, &labels).unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_of_split_cluster() {
        // One reference cluster split evenly in two: one bit.
        let a = [0, 0, 0, 0];
        let b = [1, 1, 2, 2];
        assert!((entropy(&a, &b).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(purity(&a, &b).unwrap(), 0.5);
    }

    #[test]
    fn test_van_dongen_symmetric() {
        let a = [0, 0, 1, 1, 1, 2];
        let b = [3, 4, 4, 4, 5, 5];
        assert_eq!(van_dongen(&a, &b).unwrap(), van_dongen(&b, &a).unwrap());
        assert!(van_dongen(&a, &b).unwrap() > 0.0);
    }
}
