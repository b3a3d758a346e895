//! External cluster-validation indices and cluster-set comparison utilities
//!
//! [`validation`] compares two labelings of the same items (Rand, adjusted
//! Rand, Jaccard, purity, entropy, mutual information and related indices).
//! [`cluster`], [`storage`] and [`graph`] handle cluster files: Jaccard
//! merging, distinct-cluster filtering and centrality ranking.

pub mod cluster;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod storage;
pub mod validation;

pub use cluster::Cluster;
pub use config::{DistinctConfig, MergeConfig, SimilarityConfig, StudyConfig};
pub use error::{Error, Result};
pub use validation::{
    ari, compute_confusion_matrix, compute_pair_counts, fj_nmi, jaccard, mi, purity, ri, sg_nmi,
    variation_information, ConfusionMatrix, IndexReport, PairCounts,
};
