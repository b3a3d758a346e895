//! Similar-cluster counts against named target sets

use crate::cluster::similarity::jaccard_similarity;
use crate::cluster::Cluster;
use crate::config::SimilarityConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Number of targets whose similarity to `cluster` is strictly above `threshold`
pub fn count_similar(cluster: &Cluster, targets: &[Cluster], threshold: f64) -> usize {
    targets
        .iter()
        .filter(|t| jaccard_similarity(cluster, t) > threshold)
        .count()
}

/// Total similar-cluster count for one named target set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Name of the target cluster set
    pub target: String,
    /// Similar clusters summed over all inputs
    pub count: usize,
}

/// Sum, over every input cluster, of its similar clusters in each target set.
///
/// Used to ask which group's distinct clusters a new clustering resembles.
/// Entries follow the order of `targets`.
pub fn similarity_profile(
    inputs: &[Cluster],
    targets: &[(String, Vec<Cluster>)],
    config: &SimilarityConfig,
) -> Result<Vec<ProfileEntry>> {
    config.validate()?;

    let profile = targets
        .iter()
        .map(|(name, clusters)| {
            let count = inputs
                .iter()
                .map(|c| count_similar(c, clusters, config.threshold))
                .sum::<usize>();
            log::debug!("{}: {} similar clusters", name, count);
            ProfileEntry {
                target: name.clone(),
                count,
            }
        })
        .collect();

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_similar() {
        let cluster = Cluster::new(["a", "b", "c", "d"]);
        let targets = vec![
            Cluster::new(["a", "b", "c", "d"]),
            Cluster::new(["a", "b", "c", "e"]),
            Cluster::new(["x"]),
        ];
        assert_eq!(count_similar(&cluster, &targets, 0.5), 2);
        assert_eq!(count_similar(&cluster, &targets, 0.7), 1);
        assert_eq!(count_similar(&cluster, &targets, 1.0), 0);
    }

    #[test]
    fn test_similarity_profile_order_and_sums() {
        let inputs = vec![Cluster::new(["a", "b"]), Cluster::new(["c", "d"])];
        let targets = vec![
            ("uc_cd".to_string(), vec![Cluster::new(["a", "b"]), Cluster::new(["c", "d"])]),
            ("cd_uc".to_string(), vec![Cluster::new(["q"])]),
        ];
        let profile = similarity_profile(&inputs, &targets, &SimilarityConfig::default()).unwrap();

        assert_eq!(
            profile,
            vec![
                ProfileEntry { target: "uc_cd".into(), count: 2 },
                ProfileEntry { target: "cd_uc".into(), count: 0 },
            ]
        );
    }
}
