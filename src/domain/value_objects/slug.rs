//! File naming for the draft/publish workflow.

/// Title used when a draft is created without one.
pub const DEFAULT_DRAFT_TITLE: &str = "draft";

/// Turn a post title into a file-name slug.
///
/// Lowercases, replaces spaces with hyphens, then drops every character that
/// is not a word character, a hyphen, or whitespace.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect()
}

/// `{date}-{slug}.md`, the name a published post is written under.
pub fn publish_file_name(date: &str, title: &str) -> String {
    format!("{}-{}.md", date, slugify(title))
}

/// `{today}-{title}.md`, or `{today}-{title}({n}).md` for the n-th collision.
///
/// Path separators in the title are replaced so the draft always lands
/// directly inside the drafts directory.
pub fn draft_file_name(today: &str, title: &str, collision: usize) -> String {
    let title = title.replace(['/', '\\'], "-");
    if collision == 0 {
        format!("{}-{}.md", today, title)
    } else {
        format!("{}-{}({}).md", today, title, collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("What's new, in 2024?!"), "whats-new-in-2024");
    }

    #[test]
    fn slugify_keeps_underscores_and_hyphens() {
        assert_eq!(slugify("snake_case - kebab"), "snake_case---kebab");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Café Olé"), "café-olé");
    }

    #[test]
    fn publish_file_name_joins_date_and_slug() {
        assert_eq!(
            publish_file_name("2024-03-01", "My First Post!"),
            "2024-03-01-my-first-post.md"
        );
    }

    #[test]
    fn draft_file_name_adds_collision_suffix() {
        assert_eq!(draft_file_name("2024-03-01", "draft", 0), "2024-03-01-draft.md");
        assert_eq!(draft_file_name("2024-03-01", "draft", 2), "2024-03-01-draft(2).md");
    }

    #[test]
    fn draft_file_name_flattens_separators() {
        assert_eq!(draft_file_name("2024-03-01", "a/b", 0), "2024-03-01-a-b.md");
    }
}
