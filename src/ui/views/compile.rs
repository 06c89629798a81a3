use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use blogger::application::CompileResult;

/// Summary printed after `blogger compile`.
///
/// With `verbose` every written page and ignored copy path is listed too.
pub fn render_compile_summary(
    result: &CompileResult,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Compiled {} posts into {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        result.posts.len(),
        result.out_dir.display()
    ));
    out.push_str(&format!(
        "  {} written, {} skipped, {} copied\n",
        result.written.len(),
        result.skipped.len(),
        result.copied
    ));

    if verbose {
        let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
        for path in &result.written {
            let shown = path.strip_prefix(&result.out_dir).unwrap_or(path);
            out.push_str(&format!("  {} {}\n", arrow, shown.display()));
        }
        for name in &result.skipped {
            let line = ColoredText::dim(format!("skipped {}", name)).render(supports_color);
            out.push_str(&format!("  {} {}\n", arrow, line));
        }
    }

    for path in &result.ignored {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!("copy path ignored: {}", path)).render(supports_color)
        ));
    }
    out
}

/// JSON summary line for `blogger compile --json`.
pub fn compile_json(result: &CompileResult) -> serde_json::Value {
    serde_json::json!({
        "command": "compile",
        "event": "compile_complete",
        "out_dir": result.out_dir.display().to_string(),
        "posts": result.posts,
        "written": result.written.len(),
        "skipped": result.skipped,
        "copied": result.copied,
        "ignored": result.ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result() -> CompileResult {
        let mut result = CompileResult::new(PathBuf::from("/out"));
        result.posts = vec!["a.md".to_string(), "b.md".to_string()];
        result.written = vec![PathBuf::from("/out/index.html")];
        result.skipped = vec!["sitemap.xml".to_string()];
        result.copied = 1;
        result
    }

    #[test]
    fn summary_counts() {
        let rendered = render_compile_summary(&result(), false, false, false);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        [OK] Compiled 2 posts into /out
          1 written, 1 skipped, 1 copied
        ");
    }

    #[test]
    fn verbose_lists_pages_relative_to_out_dir() {
        let rendered = render_compile_summary(&result(), true, false, false);
        assert!(rendered.contains("[>] index.html"));
        assert!(rendered.contains("skipped sitemap.xml"));
    }

    #[test]
    fn json_carries_post_names() {
        let json = compile_json(&result());
        assert_eq!(json["posts"], serde_json::json!(["a.md", "b.md"]));
        assert_eq!(json["written"], 1);
    }
}
