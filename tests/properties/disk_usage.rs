//! Property tests for disk-usage parsing.

use proptest::prelude::*;

use devsync::domain::services::parse_disk_usage;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary output never panics.
    #[test]
    fn property_parse_never_panics(output in "\\PC{0,64}") {
        let _ = parse_disk_usage("/srv", &output);
    }

    /// PROPERTY: `du -sb` style output yields its leading byte count.
    #[test]
    fn property_leading_count_is_returned(bytes in any::<u64>(), path in "/[a-z/]{0,20}") {
        let output = format!("{}\t{}\n", bytes, path);
        prop_assert_eq!(parse_disk_usage(&path, &output).unwrap(), bytes);
    }
}
