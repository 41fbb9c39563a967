//! Property tests for the fuzzy matcher and the pinning pass.

use proptest::prelude::*;

use cert_catalog::config::options::EngineOptions;
use cert_catalog::engine::engine::apply;
use cert_catalog::engine::fuzzy::matches;
use cert_catalog::engine::{QueryState, SortOrder};
use cert_catalog::record::{CanonicalDate, CertificateRecord, RecordSet};

// Subsequence of `target` chosen by `mask`.
fn pick(target: &str, mask: &[bool]) -> String {
    target
        .chars()
        .zip(mask.iter().chain(std::iter::repeat(&false)))
        .filter(|(_, keep)| **keep)
        .map(|(c, _)| c)
        .collect()
}

proptest! {
    #[test]
    fn empty_query_always_matches(target in ".{0,40}") {
        prop_assert!(matches("", &target));
    }

    #[test]
    fn substring_implies_match(
        prefix in "[a-zA-Z0-9 ]{0,12}",
        query in "[a-zA-Z0-9 ]{1,8}",
        suffix in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let target = format!("{prefix}{query}{suffix}");
        prop_assert!(matches(&query, &target));
        prop_assert!(matches(&query.to_uppercase(), &target.to_lowercase()));
    }

    #[test]
    fn any_in_order_subset_matches(
        target in "[a-zA-Z ]{1,30}",
        mask in prop::collection::vec(any::<bool>(), 30),
    ) {
        let query = pick(&target, &mask);
        prop_assert!(matches(&query, &target));
    }

    #[test]
    fn missing_character_never_matches(
        target in "[a-m ]{0,30}",
        head in "[a-m]{0,5}",
    ) {
        let query = format!("{head}z");
        prop_assert!(!matches(&query, &target));
    }

    #[test]
    fn pinning_is_a_stable_partition(flags in prop::collection::vec(any::<bool>(), 0..40)) {
        let day = CanonicalDate::parse("2020/01/01").unwrap();
        let records: Vec<CertificateRecord> = flags
            .iter()
            .enumerate()
            .map(|(i, &pinned)| {
                let mut r = CertificateRecord::new(format!("r{i}"), "E", day);
                if pinned { r.highlight = Some(true); }
                r
            })
            .collect();
        let set = RecordSet::new(records);

        // Every date ties, so the primary sort keeps load order.
        let query = QueryState { sort_order: SortOrder::Asc, ..QueryState::default() };
        let view = apply(&set, &query, &EngineOptions::default()).unwrap();

        let expected: Vec<usize> = (0..flags.len())
            .filter(|&i| flags[i])
            .chain((0..flags.len()).filter(|&i| !flags[i]))
            .collect();
        prop_assert_eq!(view.row_ix, expected);
    }
}
