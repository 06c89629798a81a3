//! Property tests for draft and publish file naming.

use proptest::prelude::*;

use blogger::domain::value_objects::{draft_file_name, publish_file_name, slugify};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Slugs never contain path separators or uppercase ASCII.
    #[test]
    fn property_slug_is_path_safe(title in "(?s).{0,64}") {
        let slug = slugify(&title);
        prop_assert!(!slug.contains('/'));
        prop_assert!(!slug.contains('\\'));
        prop_assert!(!slug.contains(' '));
        prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// PROPERTY: Published names are `<date>-<slug>.md`.
    #[test]
    fn property_publish_name_shape(title in "[A-Za-z ]{1,30}") {
        let name = publish_file_name("2024-01-02", &title);
        prop_assert!(name.starts_with("2024-01-02-"));
        prop_assert!(name.ends_with(".md"));
    }

    /// PROPERTY: Draft names stay inside the drafts directory and differ per collision.
    #[test]
    fn property_draft_names_are_flat_and_distinct(title in "(?s).{0,40}", n in 1usize..50) {
        let first = draft_file_name("2024-01-02", &title, 0);
        let other = draft_file_name("2024-01-02", &title, n);
        prop_assert!(!first.contains('/'));
        prop_assert!(!other.contains('/'));
        prop_assert_ne!(first, other);
    }
}
