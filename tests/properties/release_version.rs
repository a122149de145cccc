//! Property tests for release version comparison.

use proptest::prelude::*;

use cfgmigrate::is_newer_version;

fn numeric_version() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..50, 1..=4)
}

fn join(parts: &[u32]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a version is never newer than itself, with or without the tag prefix.
    #[test]
    fn property_version_not_newer_than_itself(parts in numeric_version()) {
        let v = join(&parts);
        prop_assert!(!is_newer_version(&v, &v));
        let tagged = format!("v{v}");
        prop_assert!(!is_newer_version(&tagged, &v));
    }

    /// PROPERTY: for numeric versions at most one direction is newer,
    /// and it matches component-wise ordering with zero padding.
    #[test]
    fn property_numeric_comparison_is_antisymmetric(a in numeric_version(), b in numeric_version()) {
        let (va, vb) = (join(&a), join(&b));
        let forward = is_newer_version(&va, &vb);
        let backward = is_newer_version(&vb, &va);
        prop_assert!(!(forward && backward));

        let len = a.len().max(b.len());
        let pad = |v: &[u32]| {
            let mut v = v.to_vec();
            v.resize(len, 0);
            v
        };
        prop_assert_eq!(forward, pad(&a) > pad(&b));
    }

    /// PROPERTY: trailing zero parts never make a version newer.
    #[test]
    fn property_trailing_zeros_are_ignored(parts in numeric_version()) {
        let v = join(&parts);
        let padded = format!("{v}.0");
        prop_assert!(!is_newer_version(&padded, &v));
        prop_assert!(!is_newer_version(&v, &padded));
    }
}
