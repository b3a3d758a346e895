//! Merge clusters that overlap beyond a Jaccard threshold

use crate::cluster::similarity::jaccard_similarity;
use crate::cluster::{Cluster, MergedCluster};
use crate::config::MergeConfig;
use crate::error::Result;

/// Greedily merge overlapping clusters in input order.
///
/// Each cluster not yet absorbed becomes a seed. Every later cluster not yet
/// absorbed whose similarity to the seed (not to the growing union) is at
/// least `config.threshold` joins it. Clusters sharing no member never
/// merge, even at threshold 0. Unions smaller than `config.min_size` are
/// dropped.
pub fn merge_overlapping(
    clusters: &[Cluster],
    config: &MergeConfig,
) -> Result<Vec<MergedCluster>> {
    config.validate()?;
    log::info!(
        "Merging {} clusters with Jaccard >= {}",
        clusters.len(),
        config.threshold
    );

    let mut absorbed = vec![false; clusters.len()];
    let mut merged = Vec::new();

    for (i, seed) in clusters.iter().enumerate() {
        if absorbed[i] {
            continue;
        }
        absorbed[i] = true;

        let mut union = seed.clone();
        let mut sources = vec![i];

        for (j, candidate) in clusters.iter().enumerate().skip(i + 1) {
            if absorbed[j] {
                continue;
            }
            let similarity = jaccard_similarity(seed, candidate);
            if similarity > 0.0 && similarity >= config.threshold {
                union.absorb(candidate);
                sources.push(j);
                absorbed[j] = true;
            }
        }

        if union.size() >= config.min_size {
            merged.push(MergedCluster {
                cluster: union,
                sources,
            });
        } else {
            log::debug!(
                "Dropping merged cluster {:?}: size {} below minimum",
                sources,
                union.size()
            );
        }
    }

    log::info!("Merged into {} clusters", merged.len());
    Ok(merged)
}
