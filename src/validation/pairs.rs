//! Pair-agreement counting between two labelings

use crate::error::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Agreement counts over all unordered item pairs.
///
/// The first labeling is the reference:
///
/// | | same in B | different in B |
/// |---|---|---|
/// | **same in A** | TP | FN |
/// | **different in A** | FP | TN |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairCounts {
    /// Pairs grouped together in both labelings
    pub true_positives: u64,
    /// Pairs separated in both labelings
    pub true_negatives: u64,
    /// Pairs together in A but separated in B
    pub false_negatives: u64,
    /// Pairs separated in A but together in B
    pub false_positives: u64,
}

impl PairCounts {
    /// Total number of unordered pairs, n(n-1)/2
    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_negatives + self.false_positives
    }

    fn record(&mut self, same_a: bool, same_b: bool) {
        match (same_a, same_b) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_negatives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }
}

pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::LengthMismatch { left, right });
    }
    if left == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Count TP/TN/FN/FP between reference labeling `a` and labeling `b`.
///
/// Every unordered pair `i < j` lands in exactly one bucket. A single item
/// has no pairs and yields all-zero counts.
pub fn compute_pair_counts<A, B>(a: &[A], b: &[B]) -> Result<PairCounts>
where
    A: PartialEq,
    B: PartialEq,
{
    check_lengths(a.len(), b.len())?;

    let mut counts = PairCounts::default();
    for (i, j) in (0..a.len()).tuple_combinations() {
        counts.record(a[i] == a[j], b[i] == b[j]);
    }
    Ok(counts)
}

/// Pair counts between reference labels and an overlapping clustering.
///
/// `memberships[i]` lists every cluster item `i` belongs to; two items are
/// grouped together when their membership lists intersect. Items belonging
/// to no cluster are never grouped with anything.
pub fn compute_overlapping_pair_counts<L, C>(
    labels: &[L],
    memberships: &[Vec<C>],
) -> Result<PairCounts>
where
    L: PartialEq,
    C: PartialEq,
{
    check_lengths(labels.len(), memberships.len())?;

    let mut counts = PairCounts::default();
    for (i, j) in (0..labels.len()).tuple_combinations() {
        let share_cluster = memberships[i].iter().any(|c| memberships[j].contains(c));
        counts.record(labels[i] == labels[j], share_cluster);
    }
    Ok(counts)
}

/// Build per-item membership lists from a list of clusters.
///
/// Cluster ids are positions in `clusters`. The result follows the order of
/// `items`; members that are not in `items` are ignored.
pub fn memberships_from_clusters<T, S>(items: &[T], clusters: &[S]) -> Vec<Vec<usize>>
where
    T: Eq + Hash,
    S: AsRef<[T]>,
{
    let position: HashMap<&T, usize> = items.iter().enumerate().map(|(i, t)| (t, i)).collect();
    let mut memberships = vec![Vec::new(); items.len()];

    for (cluster_id, cluster) in clusters.iter().enumerate() {
        for member in cluster.as_ref() {
            if let Some(&idx) = position.get(member) {
                if !memberships[idx].contains(&cluster_id) {
                    memberships[idx].push(cluster_id);
                }
            }
        }
    }
    memberships
}
