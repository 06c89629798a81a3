/// A post with a title and a one-line markdown body.
pub const HELLO_POST: &str = "---\ntitle: Hello\n---\n# Hi\n";

/// Lists every post's toc anchor and html.
pub const INDEX_TEMPLATE: &str =
    "{% for post in posts %}<a id=\"{{ post.toc }}\"></a>{{ post.html }}{% endfor %}";

/// `site.yaml` enabling tables and copying the assets directory.
pub const SITE_YAML: &str = "markdown-extensions: [tables]\ncopy-paths: [assets]\n";
