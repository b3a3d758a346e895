//! External cluster-validation indices.
//!
//! Two labelings over the same items are reduced to one of two primitives,
//! and every index is a formula over that primitive:
//!
//! - [`PairCounts`] (TP/TN/FN/FP over item pairs) feeds the pair indices
//! - [`ConfusionMatrix`] (cluster co-membership counts) feeds purity,
//!   entropy, Van Dongen and the mutual-information family
//!
//! The first argument of every function is the reference labeling.
//!
//! # Example
//!
//! ```rust
//! use cluster_index::validation::{compute_pair_counts, jaccard, purity, mi};
//!
//! let truth = ["a", "a", "b", "b", "c", "c", "a", "a"];
//! let found = [1, 1, 1, 2, 2, 2, 3, 3];
//!
//! let counts = compute_pair_counts(&truth, &found).unwrap();
//! assert_eq!(counts.total(), 28);
//! assert_eq!(jaccard(&truth, &found).unwrap(), 0.25);
//! assert_eq!(purity(&truth, &found).unwrap(), 0.625);
//! assert!(mi(&truth, &found).unwrap() > 0.0);
//! ```

pub mod confusion;
pub mod information;
pub mod matrix_indices;
pub mod pair_indices;
pub mod pairs;
pub mod report;

pub use confusion::{compute_confusion_matrix, ConfusionMatrix};
pub use information::{cluster_entropy, fj_nmi, mi, sg_nmi, variation_information};
pub use matrix_indices::{entropy, purity, van_dongen};
pub use pair_indices::{
    ari, f_measure, fowlkes_mallows, hubert, jaccard, kulczynski, mc_nemar, mirkin, phi,
    precision, recall, ri, rogers_tanimoto, russel_rao, sokal_sneath, sokal_sneath_2,
};
pub use pairs::{
    compute_overlapping_pair_counts, compute_pair_counts, memberships_from_clusters, PairCounts,
};
pub use report::IndexReport;
