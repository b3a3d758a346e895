//! Set similarity between individual clusters

use crate::cluster::Cluster;

/// Jaccard similarity |a ∩ b| / |a ∪ b| between two clusters.
///
/// Two empty clusters have similarity 0.0.
pub fn jaccard_similarity(a: &Cluster, b: &Cluster) -> f64 {
    let intersection = a.members.intersection(&b.members).count();
    let union = a.size() + b.size() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_clusters() {
        let a = Cluster::new(["C00129", "C00341", "C00353"]);
        assert_eq!(jaccard_similarity(&a, &a.clone()), 1.0);
    }

    #[test]
    fn test_disjoint_clusters() {
        let a = Cluster::new(["x", "y"]);
        let b = Cluster::new(["z"]);
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = Cluster::new(["a", "b", "c"]);
        let b = Cluster::new(["b", "c", "d", "e"]);
        assert!((jaccard_similarity(&a, &b) - 2.0 / 5.0).abs() < 1e-12);
        assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
    }

    #[test]
    fn test_empty_clusters() {
        let empty = Cluster::default();
        assert_eq!(jaccard_similarity(&empty, &empty), 0.0);
        assert_eq!(jaccard_similarity(&empty, &Cluster::new(["a"])), 0.0);
    }
}
