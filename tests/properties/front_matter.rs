//! Property tests for front-matter splitting and parsing.

use proptest::prelude::*;

use blogger::domain::services::{parse_metadata, parse_post, split_front_matter};

fn chunk() -> impl Strategy<Value = String> {
    // No dashes, so joining chunks never forms an extra delimiter.
    proptest::string::string_regex("[A-Za-z0-9 _:#\\n]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text with at most one delimiter has no front matter and a verbatim body.
    #[test]
    fn property_few_delimiters_mean_no_front_matter(
        head in chunk(),
        tail in chunk(),
        with_delimiter in any::<bool>(),
    ) {
        let source = if with_delimiter {
            format!("{}---{}", head, tail)
        } else {
            format!("{}{}", head, tail)
        };

        let (front_matter, body) = split_front_matter(&source);
        prop_assert_eq!(front_matter, None);
        prop_assert_eq!(body, source);
    }

    /// PROPERTY: With two or more delimiters, segment 1 is the front matter and
    /// every later segment is concatenated into the body.
    #[test]
    fn property_body_is_concatenation_of_later_segments(
        segments in proptest::collection::vec(chunk(), 3..=6),
    ) {
        let source = segments.join("---");

        let (front_matter, body) = split_front_matter(&source);
        prop_assert_eq!(front_matter.as_deref(), Some(segments[1].as_str()));
        prop_assert_eq!(body, segments[2..].concat());
    }

    /// PROPERTY: Metadata loading never panics on arbitrary input.
    #[test]
    fn property_parse_metadata_never_panics(source in "(?s).{0,256}") {
        let _ = parse_metadata(&source);
    }

    /// PROPERTY: A parsed post always keeps its source text intact.
    #[test]
    fn property_parse_post_keeps_source(source in "(?s).{0,256}") {
        let post = parse_post(&source);
        prop_assert_eq!(post.source_text, source);
    }
}
