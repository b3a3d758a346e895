//! Every external index for one pair of labelings, computed in one pass

use crate::error::{Error, Result};
use crate::validation::confusion::ConfusionMatrix;
use crate::validation::information::cluster_entropy;
use crate::validation::pairs::{compute_pair_counts, PairCounts};
use serde::{Deserialize, Serialize};

/// Summary of all indices between a reference labeling and a second one.
///
/// Indices that are undefined for the input (zero denominator) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    /// Number of labelled items
    pub n_items: usize,
    /// Pair agreement counts
    pub pair_counts: PairCounts,
    /// Rand index
    pub ri: Option<f64>,
    /// Adjusted Rand index
    pub ari: Option<f64>,
    /// Pair precision
    pub precision: Option<f64>,
    /// Pair recall
    pub recall: Option<f64>,
    /// F-measure
    pub f_measure: Option<f64>,
    /// Fowlkes-Mallows index
    pub fowlkes_mallows: Option<f64>,
    /// Jaccard index
    pub jaccard: Option<f64>,
    /// Kulczynski index
    pub kulczynski: Option<f64>,
    /// Mc Nemar statistic
    pub mc_nemar: Option<f64>,
    /// Phi index
    pub phi: Option<f64>,
    /// Rogers-Tanimoto index
    pub rogers_tanimoto: Option<f64>,
    /// Russel-Rao index
    pub russel_rao: Option<f64>,
    /// Sokal-Sneath, first form
    pub sokal_sneath: Option<f64>,
    /// Sokal-Sneath, second form
    pub sokal_sneath_2: Option<f64>,
    /// Hubert Γ
    pub hubert: Option<f64>,
    /// Mirkin distance
    pub mirkin: f64,
    /// Van Dongen distance
    pub van_dongen: f64,
    /// Purity of the second labeling against the reference
    pub purity: f64,
    /// Conditional entropy of the second labeling within reference clusters
    pub entropy: f64,
    /// Mutual information, in bits
    pub mi: f64,
    /// Strehl-Ghosh normalized mutual information
    pub sg_nmi: Option<f64>,
    /// Fred-Jain normalized mutual information
    pub fj_nmi: Option<f64>,
    /// Variation of information
    pub variation_information: f64,
    /// Entropy of the reference labeling
    pub entropy_a: f64,
    /// Entropy of the second labeling
    pub entropy_b: f64,
}

pub(crate) fn defined(score: Result<f64>) -> Result<Option<f64>> {
    match score {
        Ok(value) => Ok(Some(value)),
        Err(Error::DivisionByZero { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

impl IndexReport {
    /// Compute the report; fails only on mismatched or empty input
    pub fn compute<A, B>(a: &[A], b: &[B]) -> Result<Self>
    where
        A: Ord + Clone,
        B: Ord + Clone,
    {
        let counts = compute_pair_counts(a, b)?;
        let matrix = ConfusionMatrix::from_labels(a, b)?;

        Ok(Self {
            n_items: a.len(),
            pair_counts: counts,
            ri: defined(counts.rand_index())?,
            ari: defined(counts.adjusted_rand_index())?,
            precision: defined(counts.precision())?,
            recall: defined(counts.recall())?,
            f_measure: defined(counts.f_measure())?,
            fowlkes_mallows: defined(counts.fowlkes_mallows())?,
            jaccard: defined(counts.jaccard())?,
            kulczynski: defined(counts.kulczynski())?,
            mc_nemar: defined(counts.mc_nemar())?,
            phi: defined(counts.phi())?,
            rogers_tanimoto: defined(counts.rogers_tanimoto())?,
            russel_rao: defined(counts.russel_rao())?,
            sokal_sneath: defined(counts.sokal_sneath())?,
            sokal_sneath_2: defined(counts.sokal_sneath_2())?,
            hubert: defined(counts.hubert())?,
            mirkin: counts.mirkin(),
            van_dongen: matrix.van_dongen(),
            purity: matrix.purity(),
            entropy: matrix.entropy(),
            mi: matrix.mutual_information(),
            sg_nmi: defined(matrix.sg_nmi())?,
            fj_nmi: defined(matrix.fj_nmi())?,
            variation_information: matrix.variation_information(),
            entropy_a: cluster_entropy(a)?,
            entropy_b: cluster_entropy(b)?,
        })
    }
}
