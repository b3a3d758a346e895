//! Indices computed from pair-agreement counts.
//!
//! Every index exists twice: as a method on [`PairCounts`] for callers that
//! evaluate several indices over the same labelings, and as a free function
//! over two labelings that enumerates the pairs itself.
//!
//! | Index | Formula |
//! |-------|---------|
//! | [`ri`] | (TP+TN) / N |
//! | [`ari`] | 2(TP·TN − FN·FP) / ((TP+FP)(FP+TN) + (TP+FN)(FN+TN)) |
//! | [`precision`] | TP / (TP+FP) |
//! | [`recall`] | TP / (TP+FN) |
//! | [`f_measure`] | 2TP / (2TP+FN+FP) |
//! | [`fowlkes_mallows`] | TP / √((TP+FN)(TP+FP)) |
//! | [`jaccard`] | TP / (TP+FN+FP) |
//! | [`kulczynski`] | (precision + recall) / 2 |
//! | [`mc_nemar`] | (TN−FP) / √(TN+FP) |
//! | [`phi`] | (TP·TN − FN·FP) / ((TP+FN)(TP+FP)(FN+TN)(FP+TN)) |
//! | [`rogers_tanimoto`] | (TP+TN) / (TP+TN+2(FN+FP)) |
//! | [`russel_rao`] | TP / N |
//! | [`sokal_sneath`] | TP / (TP+2(FN+FP)) |
//! | [`sokal_sneath_2`] | (TP+TN) / (TP+TN+(FN+FP)/2) |
//! | [`hubert`] | (N·TP − (TP+FN)(TP+FP)) / √((TP+FN)(TP+FP)(TN+FN)(TN+FP)) |
//! | [`mirkin`] | 2(FP+FN) |
//!
//! N is the number of unordered pairs. A zero denominator is reported as
//! [`Error::DivisionByZero`] rather than returned as NaN or infinity.
//!
//! # References
//!
//! - Hubert & Arabie (1985). "Comparing partitions"
//! - Desgraupes (2013). "Clustering indices"

use crate::error::{Error, Result};
use crate::validation::pairs::{compute_pair_counts, PairCounts};

fn ratio(index: &'static str, numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero { index });
    }
    Ok(numerator / denominator)
}

impl PairCounts {
    fn as_f64(&self) -> (f64, f64, f64, f64) {
        (
            self.true_positives as f64,
            self.true_negatives as f64,
            self.false_negatives as f64,
            self.false_positives as f64,
        )
    }

    /// Fraction of pairs on which both labelings agree
    pub fn rand_index(&self) -> Result<f64> {
        let (tp, tn, _, _) = self.as_f64();
        ratio("rand index", tp + tn, self.total() as f64)
    }

    /// Hubert-Arabie adjusted Rand index.
    ///
    /// Undefined when both labelings are a single cluster, or both are all
    /// singletons.
    pub fn adjusted_rand_index(&self) -> Result<f64> {
        let (tp, tn, fn_, fp) = self.as_f64();
        ratio(
            "adjusted rand index",
            2.0 * (tp * tn - fn_ * fp),
            (tp + fp) * (fp + tn) + (tp + fn_) * (fn_ + tn),
        )
    }

    /// TP / (TP+FP)
    pub fn precision(&self) -> Result<f64> {
        let (tp, _, _, fp) = self.as_f64();
        ratio("precision", tp, tp + fp)
    }

    /// TP / (TP+FN)
    pub fn recall(&self) -> Result<f64> {
        let (tp, _, fn_, _) = self.as_f64();
        ratio("recall", tp, tp + fn_)
    }

    /// Czekanowski-Dice index
    pub fn f_measure(&self) -> Result<f64> {
        let (tp, _, fn_, fp) = self.as_f64();
        ratio("f-measure", 2.0 * tp, 2.0 * tp + fn_ + fp)
    }

    /// Geometric mean of precision and recall
    pub fn fowlkes_mallows(&self) -> Result<f64> {
        let (tp, _, fn_, fp) = self.as_f64();
        ratio("fowlkes-mallows", tp, ((tp + fn_) * (tp + fp)).sqrt())
    }

    /// TP / (TP+FN+FP)
    pub fn jaccard(&self) -> Result<f64> {
        let (tp, _, fn_, fp) = self.as_f64();
        ratio("jaccard", tp, tp + fn_ + fp)
    }

    /// Arithmetic mean of precision and recall
    pub fn kulczynski(&self) -> Result<f64> {
        let (tp, _, fn_, fp) = self.as_f64();
        let precision = ratio("kulczynski", tp, tp + fp)?;
        let recall = ratio("kulczynski", tp, tp + fn_)?;
        Ok((precision + recall) / 2.0)
    }

    /// (TN−FP) / √(TN+FP)
    pub fn mc_nemar(&self) -> Result<f64> {
        let (_, tn, _, fp) = self.as_f64();
        ratio("mc nemar", tn - fp, (tn + fp).sqrt())
    }

    /// Phi index, normalised by the product of the four marginals
    pub fn phi(&self) -> Result<f64> {
        let (tp, tn, fn_, fp) = self.as_f64();
        ratio(
            "phi",
            tp * tn - fn_ * fp,
            (tp + fn_) * (tp + fp) * (fn_ + tn) * (fp + tn),
        )
    }

    /// Agreements with disagreements weighted twice
    pub fn rogers_tanimoto(&self) -> Result<f64> {
        let (tp, tn, fn_, fp) = self.as_f64();
        ratio("rogers-tanimoto", tp + tn, tp + tn + 2.0 * (fn_ + fp))
    }

    /// TP over all pairs
    pub fn russel_rao(&self) -> Result<f64> {
        let (tp, _, _, _) = self.as_f64();
        ratio("russel-rao", tp, self.total() as f64)
    }

    /// Sokal-Sneath, first form: disagreements weighted twice
    pub fn sokal_sneath(&self) -> Result<f64> {
        let (tp, _, fn_, fp) = self.as_f64();
        ratio("sokal-sneath", tp, tp + 2.0 * (fn_ + fp))
    }

    /// Sokal-Sneath, second form: disagreements weighted by half
    pub fn sokal_sneath_2(&self) -> Result<f64> {
        let (tp, tn, fn_, fp) = self.as_f64();
        ratio("sokal-sneath 2", tp + tn, tp + tn + (fn_ + fp) / 2.0)
    }

    /// Hubert's normalized Γ statistic on pair indicators
    pub fn hubert(&self) -> Result<f64> {
        let (tp, tn, fn_, fp) = self.as_f64();
        let total = self.total() as f64;
        ratio(
            "hubert",
            total * tp - (tp + fn_) * (tp + fp),
            ((tp + fn_) * (tp + fp) * (tn + fn_) * (tn + fp)).sqrt(),
        )
    }

    /// Equivalence mismatch distance. Zero exactly when the partitions agree.
    pub fn mirkin(&self) -> f64 {
        2.0 * (self.false_positives + self.false_negatives) as f64
    }
}

/// Rand index between reference `a` and `b`
pub fn ri<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.rand_index()
}

/// Adjusted Rand index between reference `a` and `b`.
///
/// ```rust
/// use cluster_index::validation::ari;
///
/// let truth = [0, 0, 1, 1];
/// let pred = [5, 5, 9, 9];
/// assert!((ari(&truth, &pred).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn ari<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.adjusted_rand_index()
}

/// Fraction of pairs grouped by `b` that `a` also groups
pub fn precision<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.precision()
}

/// Fraction of pairs grouped by `a` that `b` also groups
pub fn recall<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.recall()
}

/// Harmonic mean of precision and recall
pub fn f_measure<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.f_measure()
}

/// Fowlkes-Mallows index
pub fn fowlkes_mallows<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.fowlkes_mallows()
}

/// Pairs grouped by both over pairs grouped by either
pub fn jaccard<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.jaccard()
}

/// Kulczynski index
pub fn kulczynski<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.kulczynski()
}

/// Mc Nemar statistic over the discordant pairs
pub fn mc_nemar<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.mc_nemar()
}

/// Phi index (no square root in the denominator)
pub fn phi<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.phi()
}

/// Rogers-Tanimoto index
pub fn rogers_tanimoto<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.rogers_tanimoto()
}

/// Fraction of all pairs grouped by both labelings
pub fn russel_rao<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.russel_rao()
}

/// Sokal-Sneath index, first form
pub fn sokal_sneath<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.sokal_sneath()
}

/// Sokal-Sneath index, second form
pub fn sokal_sneath_2<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.sokal_sneath_2()
}

/// Hubert Γ statistic
pub fn hubert<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    compute_pair_counts(a, b)?.hubert()
}

/// Mirkin distance; larger means the partitions disagree more
pub fn mirkin<A: PartialEq, B: PartialEq>(a: &[A], b: &[B]) -> Result<f64> {
    Ok(compute_pair_counts(a, b)?.mirkin())
}
