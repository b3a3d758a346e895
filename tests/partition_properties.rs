use cluster_index::validation::{
    ari, cluster_entropy, compute_confusion_matrix, compute_pair_counts, f_measure, fj_nmi,
    jaccard, mi, mirkin, purity, ri, sg_nmi, van_dongen, variation_information,
};
use cluster_index::Error;
use proptest::prelude::*;

fn labeling(len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..5, len)
}

fn labeling_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (2usize..40).prop_flat_map(|n| (labeling(n), labeling(n)))
}

fn comb2(k: usize) -> u64 {
    (k * k.saturating_sub(1) / 2) as u64
}

/// Equal up to index failure: both defined and close, or both undefined
fn same_score(x: cluster_index::Result<f64>, y: cluster_index::Result<f64>) -> bool {
    match (x, y) {
        (Ok(a), Ok(b)) => (a - b).abs() < 1e-9,
        (Err(Error::DivisionByZero { .. }), Err(Error::DivisionByZero { .. })) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn pair_counts_cover_every_pair((a, b) in labeling_pair()) {
        let n = a.len() as u64;
        let counts = compute_pair_counts(&a, &b).unwrap();
        prop_assert_eq!(counts.total(), n * (n - 1) / 2);
    }

    #[test]
    fn pair_counts_agree_with_confusion_matrix((a, b) in labeling_pair()) {
        let counts = compute_pair_counts(&a, &b).unwrap();
        let matrix = compute_confusion_matrix(&a, &b).unwrap();

        let together_in_both: u64 = matrix.counts().iter().map(|&m| comb2(m)).sum();
        let together_in_a: u64 = matrix.row_sums().into_iter().map(comb2).sum();
        let together_in_b: u64 = matrix.column_sums().into_iter().map(comb2).sum();

        prop_assert_eq!(counts.true_positives, together_in_both);
        prop_assert_eq!(counts.false_negatives, together_in_a - together_in_both);
        prop_assert_eq!(counts.false_positives, together_in_b - together_in_both);
        prop_assert_eq!(matrix.counts().sum(), a.len());
    }

    #[test]
    fn pair_indices_symmetric((a, b) in labeling_pair()) {
        prop_assert!(same_score(ri(&a, &b), ri(&b, &a)));
        prop_assert!(same_score(jaccard(&a, &b), jaccard(&b, &a)));
        prop_assert!(same_score(f_measure(&a, &b), f_measure(&b, &a)));
        prop_assert!(same_score(ari(&a, &b), ari(&b, &a)));
    }

    #[test]
    fn information_indices_symmetric((a, b) in labeling_pair()) {
        prop_assert!(same_score(mi(&a, &b), mi(&b, &a)));
        prop_assert!(same_score(sg_nmi(&a, &b), sg_nmi(&b, &a)));
        prop_assert!(same_score(fj_nmi(&a, &b), fj_nmi(&b, &a)));
        prop_assert!(same_score(
            variation_information(&a, &b),
            variation_information(&b, &a)
        ));
    }

    #[test]
    fn self_comparison_is_perfect(a in (2usize..40).prop_flat_map(labeling)) {
        prop_assert_eq!(ri(&a, &a).unwrap(), 1.0);
        prop_assert_eq!(purity(&a, &a).unwrap(), 1.0);
        prop_assert!(variation_information(&a, &a).unwrap().abs() < 1e-9);
        prop_assert!((mi(&a, &a).unwrap() - cluster_entropy(&a).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn distances_nonnegative_and_zero_only_for_same_partition((a, b) in labeling_pair()) {
        let mirkin_distance = mirkin(&a, &b).unwrap();
        let van_dongen_distance = van_dongen(&a, &b).unwrap();
        prop_assert!(mirkin_distance >= 0.0);
        prop_assert!(van_dongen_distance >= 0.0);

        let counts = compute_pair_counts(&a, &b).unwrap();
        let same_partition = counts.false_negatives == 0 && counts.false_positives == 0;
        prop_assert_eq!(mirkin_distance == 0.0, same_partition);
        prop_assert_eq!(van_dongen_distance == 0.0, same_partition);
    }

    #[test]
    fn indices_ignore_label_names((a, b) in labeling_pair()) {
        let renamed: Vec<String> = b.iter().map(|l| format!("cluster-{}", 9 - l)).collect();
        prop_assert!(same_score(ri(&a, &b), ri(&a, &renamed)));
        prop_assert!(same_score(ari(&a, &b), ari(&a, &renamed)));
        prop_assert!(same_score(mi(&a, &b), mi(&a, &renamed)));
        prop_assert!(same_score(purity(&a, &b), purity(&a, &renamed)));
    }

    #[test]
    fn entropy_bounds(a in (1usize..40).prop_flat_map(labeling)) {
        let h = cluster_entropy(&a).unwrap();
        prop_assert!(h >= 0.0);
        prop_assert!(h <= (a.len() as f64).log2() + 1e-9);
    }
}

#[test]
fn entropy_of_single_cluster_and_singletons() {
    assert_eq!(cluster_entropy(&["only"; 12]).unwrap(), 0.0);

    let singletons: Vec<u32> = (0..16).collect();
    assert!((cluster_entropy(&singletons).unwrap() - 4.0).abs() < 1e-12);
}

#[test]
fn mismatched_lengths_rejected_everywhere() {
    let a = [0, 1, 2];
    let b = [0, 1];
    assert!(matches!(ri(&a, &b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(purity(&a, &b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(mi(&a, &b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(van_dongen(&a, &b), Err(Error::LengthMismatch { .. })));
}
