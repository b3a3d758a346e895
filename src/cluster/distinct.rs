//! Keep only clusters with no near-duplicate in a reference set

use crate::cluster::similarity::jaccard_similarity;
use crate::cluster::Cluster;
use crate::config::DistinctConfig;
use crate::error::Result;

/// Whether any reference cluster is more similar than `threshold`
pub fn has_similar(cluster: &Cluster, reference: &[Cluster], threshold: f64) -> bool {
    reference
        .iter()
        .any(|other| jaccard_similarity(cluster, other) > threshold)
}

/// Candidates that have no reference cluster with Jaccard similarity
/// strictly above `config.threshold`. Empty candidates are dropped.
pub fn distinct_clusters(
    candidates: &[Cluster],
    reference: &[Cluster],
    config: &DistinctConfig,
) -> Result<Vec<Cluster>> {
    config.validate()?;

    let kept: Vec<Cluster> = candidates
        .iter()
        .filter(|c| !c.is_empty() && !has_similar(c, reference, config.threshold))
        .cloned()
        .collect();

    log::info!(
        "Kept {} of {} clusters with no match above {} in {} reference clusters",
        kept.len(),
        candidates.len(),
        config.threshold,
        reference.len()
    );
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_duplicates_removed() {
        let candidates = vec![
            Cluster::new(["a", "b", "c", "d"]),
            Cluster::new(["p", "q", "r"]),
        ];
        let reference = vec![Cluster::new(["a", "b", "c"]), Cluster::new(["z"])];

        let kept = distinct_clusters(&candidates, &reference, &DistinctConfig::default()).unwrap();
        assert_eq!(kept, vec![Cluster::new(["p", "q", "r"])]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // similarity exactly 0.5 does not disqualify at threshold 0.5
        let candidates = vec![Cluster::new(["a", "b"])];
        let reference = vec![Cluster::new(["a", "b", "c", "d"])];
        let kept = distinct_clusters(&candidates, &reference, &DistinctConfig::new(0.5)).unwrap();
        assert_eq!(kept.len(), 1);

        let kept = distinct_clusters(&candidates, &reference, &DistinctConfig::new(0.49)).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_empty_reference_keeps_all_nonempty() {
        let candidates = vec![Cluster::new(["a"]), Cluster::default()];
        let kept = distinct_clusters(&candidates, &[], &DistinctConfig::default()).unwrap();
        assert_eq!(kept, vec![Cluster::new(["a"])]);
    }
}
