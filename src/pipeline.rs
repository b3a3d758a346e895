//! Batch drivers over directories of cluster files

use crate::cluster::distinct::distinct_clusters;
use crate::cluster::merge::merge_overlapping;
use crate::cluster::metrics::{similarity_profile, ProfileEntry};
use crate::cluster::Cluster;
use crate::config::{MergeConfig, SimilarityConfig, StudyConfig};
use crate::storage::{read_clusters, read_labels, write_clusters};
use crate::validation::report::defined;
use crate::validation::{compute_overlapping_pair_counts, memberships_from_clusters, PairCounts};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of filtering one group's clusters against another's
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSummary {
    /// Group whose clusters were filtered
    pub group: String,
    /// Group they were compared against
    pub other: String,
    /// Clusters written
    pub kept: usize,
    /// Clusters read for `group`
    pub total: usize,
    /// File the kept clusters went to
    pub output: PathBuf,
}

/// For every ordered pair of groups, write the clusters of the first that
/// have no near-duplicate in the second.
pub fn run_distinct_study(study: &StudyConfig) -> Result<Vec<PairSummary>> {
    study.validate()?;
    log::info!(
        "Comparing {} groups in {}",
        study.groups.len(),
        study.cluster_dir.display()
    );

    let clusters: Vec<(String, Vec<Cluster>)> = study
        .groups
        .iter()
        .map(|group| -> Result<(String, Vec<Cluster>)> {
            let path = study.cluster_path(group);
            let clusters = read_clusters(&path).with_context(|| {
                format!("reading clusters of {} from {}", group, path.display())
            })?;
            Ok((group.clone(), clusters))
        })
        .collect::<Result<_>>()?;

    let pairs: Vec<(usize, usize)> = (0..clusters.len())
        .flat_map(|i| (0..clusters.len()).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect();

    let summaries = pairs
        .into_par_iter()
        .map(|(i, j)| -> Result<PairSummary> {
            let (group, candidates) = &clusters[i];
            let (other, reference) = &clusters[j];

            let kept = distinct_clusters(candidates, reference, &study.distinct)?;
            let output = study.distinct_path(group, other);
            write_clusters(&output, &kept)
                .with_context(|| format!("writing {}", output.display()))?;

            Ok(PairSummary {
                group: group.clone(),
                other: other.clone(),
                kept: kept.len(),
                total: candidates.len(),
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("Wrote {} distinct-cluster files", summaries.len());
    Ok(summaries)
}

/// Count, for the clusters in `input`, similar clusters in each distinct
/// set previously written by [`run_distinct_study`].
///
/// Targets are named `<group>_<other>` in group order.
pub fn profile_against_study(
    input: impl AsRef<Path>,
    study: &StudyConfig,
    config: &SimilarityConfig,
) -> Result<Vec<ProfileEntry>> {
    let input = input.as_ref();
    study.validate()?;

    let clusters =
        read_clusters(input).with_context(|| format!("reading {}", input.display()))?;

    let mut targets = Vec::new();
    for group in &study.groups {
        for other in study.groups.iter().filter(|o| *o != group) {
            let path = study.distinct_path(group, other);
            let distinct = read_clusters(&path)
                .with_context(|| format!("reading distinct clusters {}", path.display()))?;
            targets.push((format!("{group}_{other}"), distinct));
        }
    }

    let profile = similarity_profile(&clusters, &targets, config)?;
    for entry in &profile {
        log::info!("{}: {} similar clusters", entry.target, entry.count);
    }
    Ok(profile)
}

/// Pair-agreement scores of an overlapping clustering against reference labels.
///
/// Indices that are undefined for the input are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterEvaluation {
    /// TP/TN/FN/FP over item pairs
    pub pair_counts: PairCounts,
    /// Pair precision
    pub precision: Option<f64>,
    /// Pair recall
    pub recall: Option<f64>,
    /// Rand index
    pub rand_index: Option<f64>,
    /// F-measure
    pub f_measure: Option<f64>,
    /// Fowlkes-Mallows index
    pub fowlkes_mallows: Option<f64>,
}

impl ClusterEvaluation {
    fn from_counts(counts: PairCounts) -> crate::error::Result<Self> {
        Ok(Self {
            pair_counts: counts,
            precision: defined(counts.precision())?,
            recall: defined(counts.recall())?,
            rand_index: defined(counts.rand_index())?,
            f_measure: defined(counts.f_measure())?,
            fowlkes_mallows: defined(counts.fowlkes_mallows())?,
        })
    }
}

/// Score a cluster file against a reference label file.
///
/// `items[i]` is the identifier of the item labelled by line `i` of
/// `labels_path`. Clusters may overlap; two items count as grouped when
/// they share any cluster. Items in no cluster are grouped with nothing,
/// and cluster members missing from `items` are ignored.
pub fn evaluate_clusters<S: AsRef<str>>(
    labels_path: impl AsRef<Path>,
    items: &[S],
    clusters_path: impl AsRef<Path>,
) -> Result<ClusterEvaluation> {
    let labels_path = labels_path.as_ref();
    let clusters_path = clusters_path.as_ref();

    let labels = read_labels(labels_path)
        .with_context(|| format!("reading labels from {}", labels_path.display()))?;
    let clusters = read_clusters(clusters_path)
        .with_context(|| format!("reading clusters from {}", clusters_path.display()))?;

    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    let members: Vec<Vec<&str>> = clusters.iter().map(|c| c.iter().collect()).collect();
    let memberships = memberships_from_clusters(&items, &members);

    let unassigned = memberships.iter().filter(|m| m.is_empty()).count();
    if unassigned > 0 {
        log::warn!("{} of {} items belong to no cluster", unassigned, items.len());
    }

    let counts = compute_overlapping_pair_counts(&labels, &memberships).with_context(|| {
        format!(
            "scoring {} against {}",
            clusters_path.display(),
            labels_path.display()
        )
    })?;
    let evaluation = ClusterEvaluation::from_counts(counts)?;

    log::info!(
        "Evaluated {} clusters over {} items: tp={} fp={} fn={} tn={}",
        clusters.len(),
        items.len(),
        counts.true_positives,
        counts.false_positives,
        counts.false_negatives,
        counts.true_negatives
    );
    Ok(evaluation)
}

fn merged_path(path: &Path, config: &MergeConfig) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}_merged_{}.txt", stem, config.threshold))
}

/// Merge overlapping clusters in every `.txt` file of `dir`.
///
/// Each result goes next to its input as `<stem>_merged_<threshold>.txt`.
/// Files that already look like merge outputs are skipped. Returns the paths
/// written, sorted.
pub fn merge_directory(dir: impl AsRef<Path>, config: &MergeConfig) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    config.validate()?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .filter(|p| {
            !p.file_stem()
                .is_some_and(|s| s.to_string_lossy().contains("_merged_"))
        })
        .collect();
    inputs.sort();

    log::info!("Merging {} cluster files in {}", inputs.len(), dir.display());

    inputs
        .par_iter()
        .map(|input| -> Result<PathBuf> {
            let clusters = read_clusters(input)
                .with_context(|| format!("reading {}", input.display()))?;
            let merged: Vec<Cluster> = merge_overlapping(&clusters, config)?
                .into_iter()
                .map(|m| m.cluster)
                .collect();

            let output = merged_path(input, config);
            write_clusters(&output, &merged)
                .with_context(|| format!("writing {}", output.display()))?;
            Ok(output)
        })
        .collect()
}
