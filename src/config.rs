//! Configuration for the cluster utilities and the study driver

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidParameter {
            name,
            message: format!("must lie in [0, 1], got {value}"),
        });
    }
    Ok(())
}

/// Settings for merging overlapping clusters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Minimum Jaccard similarity (inclusive) for a cluster to be absorbed
    pub threshold: f64,

    /// Merged clusters smaller than this are dropped
    pub min_size: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            min_size: 3,
        }
    }
}

impl MergeConfig {
    pub fn new(threshold: f64, min_size: usize) -> Self {
        Self { threshold, min_size }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("merge.threshold", self.threshold)
    }
}

/// Settings for filtering out clusters that have a near-duplicate elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistinctConfig {
    /// A reference cluster with Jaccard similarity strictly above this
    /// disqualifies the candidate
    pub threshold: f64,
}

impl Default for DistinctConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl DistinctConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("distinct.threshold", self.threshold)
    }
}

/// Settings for counting similar clusters in a target set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Targets with Jaccard similarity strictly above this are counted
    pub threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

impl SimilarityConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("similarity.threshold", self.threshold)
    }
}

/// Batch comparison of cluster files across sample groups.
///
/// File names are built from templates where `{group}` is replaced by the
/// group name, and `{other}` by the group compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Sample groups, e.g. `["CD", "UC", "nonIBD"]`
    pub groups: Vec<String>,

    /// Directory holding the per-group cluster files and receiving outputs
    pub cluster_dir: PathBuf,

    /// Per-group cluster file name
    #[serde(default = "default_cluster_template")]
    pub cluster_template: String,

    /// Output file name for clusters of `{group}` absent from `{other}`
    #[serde(default = "default_distinct_template")]
    pub distinct_template: String,

    #[serde(default)]
    pub distinct: DistinctConfig,
}

fn default_cluster_template() -> String {
    "clusters_{group}.txt".to_string()
}

fn default_distinct_template() -> String {
    "distinct_{group}_{other}.txt".to_string()
}

impl StudyConfig {
    /// Create a study over `groups` with default file name templates
    pub fn new(groups: Vec<String>, cluster_dir: impl Into<PathBuf>) -> Self {
        Self {
            groups,
            cluster_dir: cluster_dir.into(),
            cluster_template: default_cluster_template(),
            distinct_template: default_distinct_template(),
            distinct: DistinctConfig::default(),
        }
    }

    /// Load a study description from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.groups.len() < 2 {
            return Err(Error::InvalidParameter {
                name: "groups",
                message: format!("need at least two groups, got {}", self.groups.len()),
            });
        }
        if !self.cluster_template.contains("{group}") {
            return Err(Error::InvalidParameter {
                name: "cluster_template",
                message: "must contain {group}".to_string(),
            });
        }
        if !self.distinct_template.contains("{group}")
            || !self.distinct_template.contains("{other}")
        {
            return Err(Error::InvalidParameter {
                name: "distinct_template",
                message: "must contain {group} and {other}".to_string(),
            });
        }
        self.distinct.validate()
    }

    /// Path of the cluster file for `group`
    pub fn cluster_path(&self, group: &str) -> PathBuf {
        self.cluster_dir
            .join(self.cluster_template.replace("{group}", group))
    }

    /// Path of the distinct-cluster output for `group` against `other`
    pub fn distinct_path(&self, group: &str, other: &str) -> PathBuf {
        let name = self
            .distinct_template
            .replace("{group}", group)
            .replace("{other}", other);
        self.cluster_dir.join(name)
    }
}
