//! Property tests for shell quoting.

use proptest::prelude::*;

use devsync::domain::value_objects::{is_shell_safe, shell_quote};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Values made of safe characters are never altered.
    #[test]
    fn property_safe_values_pass_through(value in "[A-Za-z0-9_@%+=:,./-]{1,40}") {
        prop_assert_eq!(&*shell_quote(&value), value.as_str());
    }

    /// PROPERTY: Quoted output is one single-quoted word.
    #[test]
    fn property_quoted_values_are_single_words(value in "\\PC{0,40}") {
        let quoted = shell_quote(&value);
        if value.is_empty() || !value.chars().all(is_shell_safe) {
            prop_assert!(quoted.starts_with('\''));
            prop_assert!(quoted.ends_with('\''));
            // Undo the quoting: every `'\''` is an escaped quote.
            let inner = &quoted[1..quoted.len() - 1];
            prop_assert_eq!(inner.replace("'\\''", "'"), value);
        }
    }
}
