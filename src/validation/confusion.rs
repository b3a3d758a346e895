//! Contingency (confusion) matrix between two labelings

use crate::error::Result;
use crate::validation::pairs::check_lengths;
use ndarray::{Array2, Axis};
use std::collections::BTreeMap;

/// Co-membership counts between the clusters of two labelings.
///
/// Rows are the distinct labels of the first (reference) labeling, columns
/// the distinct labels of the second, both in sorted order. Entry `(i, j)`
/// counts the items carrying row label `i` in A and column label `j` in B.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<A, B> {
    rows: Vec<A>,
    columns: Vec<B>,
    counts: Array2<usize>,
    n_items: usize,
}

fn label_index<L: Ord>(labels: &[L]) -> BTreeMap<&L, usize> {
    let mut index: BTreeMap<&L, usize> = labels.iter().map(|l| (l, 0)).collect();
    for (position, slot) in index.values_mut().enumerate() {
        *slot = position;
    }
    index
}

impl<A, B> ConfusionMatrix<A, B>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    /// Build the matrix for reference labeling `a` against labeling `b`
    pub fn from_labels(a: &[A], b: &[B]) -> Result<Self> {
        check_lengths(a.len(), b.len())?;

        let row_index = label_index(a);
        let column_index = label_index(b);

        let mut counts = Array2::zeros((row_index.len(), column_index.len()));
        for (la, lb) in a.iter().zip(b) {
            counts[[row_index[la], column_index[lb]]] += 1;
        }

        Ok(Self {
            rows: row_index.into_keys().cloned().collect(),
            columns: column_index.into_keys().cloned().collect(),
            counts,
            n_items: a.len(),
        })
    }
}

impl<A, B> ConfusionMatrix<A, B> {
    /// Number of items compared
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// (clusters in A, clusters in B)
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Sorted distinct labels of A, one per row
    pub fn row_labels(&self) -> &[A] {
        &self.rows
    }

    /// Sorted distinct labels of B, one per column
    pub fn column_labels(&self) -> &[B] {
        &self.columns
    }

    /// The raw count matrix
    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    /// Count at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.counts[[i, j]]
    }

    /// Cluster sizes of A
    pub fn row_sums(&self) -> Vec<usize> {
        self.counts.sum_axis(Axis(1)).to_vec()
    }

    /// Cluster sizes of B
    pub fn column_sums(&self) -> Vec<usize> {
        self.counts.sum_axis(Axis(0)).to_vec()
    }

    /// Sum over rows of the largest entry in each row
    pub fn row_maxima_sum(&self) -> usize {
        self.counts
            .axis_iter(Axis(0))
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .sum()
    }

    /// Sum over columns of the largest entry in each column
    pub fn column_maxima_sum(&self) -> usize {
        self.counts
            .axis_iter(Axis(1))
            .map(|column| column.iter().copied().max().unwrap_or(0))
            .sum()
    }
}

/// Convenience wrapper around [`ConfusionMatrix::from_labels`]
pub fn compute_confusion_matrix<A, B>(a: &[A], b: &[B]) -> Result<ConfusionMatrix<A, B>>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    ConfusionMatrix::from_labels(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::array;

    #[test]
    fn test_confusion_matrix_scenario() {
        let a = ['a', 'a', 'b', 'b', 'c', 'c', 'a', 'a'];
        let b = [1, 1, 1, 2, 2, 2, 3, 3];
        let m = compute_confusion_matrix(&a, &b).unwrap();

        assert_eq!(m.row_labels(), &['a', 'b', 'c']);
        assert_eq!(m.column_labels(), &[1, 2, 3]);
        assert_eq!(m.counts(), &array![[2usize, 0, 2], [1, 1, 0], [0, 2, 0]]);
        assert_eq!(m.row_sums(), vec![4, 2, 2]);
        assert_eq!(m.column_sums(), vec![3, 3, 2]);
        assert_eq!(m.counts().sum(), 8);
    }

    #[test]
    fn test_orientation_follows_argument_order() {
        let a = [0, 0, 0, 1];
        let b = ["x", "y", "y", "y"];
        let ab = compute_confusion_matrix(&a, &b).unwrap();
        let ba = compute_confusion_matrix(&b, &a).unwrap();

        assert_eq!(ab.shape(), (2, 2));
        assert_eq!(ab.counts(), &ba.counts().t().to_owned());
        assert_eq!(ab.get(0, 1), 2);
    }

    #[test]
    fn test_maxima_sums() {
        let a = [0, 0, 1, 1, 1];
        let b = [0, 1, 1, 1, 2];
        let m = compute_confusion_matrix(&a, &b).unwrap();
        // rows: [1,1,0], [0,2,1]; columns: [1,0], [1,2], [0,1]
        assert_eq!(m.row_maxima_sum(), 3);
        assert_eq!(m.column_maxima_sum(), 4);
    }

    #[test]
    fn test_confusion_matrix_errors() {
        let empty: [u8; 0] = [];
        assert!(matches!(
            compute_confusion_matrix(&empty, &empty),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            compute_confusion_matrix(&[1, 2], &[1]),
            Err(Error::LengthMismatch { left: 2, right: 1 })
        ));
    }
}
