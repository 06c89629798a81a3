use blogger::BloggerError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested next step for errors the user can fix themselves.
fn fix_hint(err: &BloggerError) -> Option<String> {
    match err {
        BloggerError::TemplatesNotFound { path } => Some(format!(
            "Create {} with at least one template, or pass -C <DIR> to point at your blog.",
            path.display()
        )),
        BloggerError::InvalidConfig { file, .. } => {
            Some(format!("Fix the YAML in {} and try again.", file.display()))
        }
        BloggerError::UnknownExtension { name } => Some(format!(
            "Remove '{}' from extensions.toml or check its spelling.",
            name
        )),
        BloggerError::NoDrafts { .. } => {
            Some("Create one with `blogger draft \"My title\"`.".to_string())
        }
        BloggerError::PublishCollision { .. } => {
            Some("Pick a different title or date for this post.".to_string())
        }
        BloggerError::Server { .. } => {
            Some("Choose another port with --port, or use --no-serve.".to_string())
        }
        _ => None,
    }
}

fn format_blogger_error_with(err: &BloggerError, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );
    if let Some(fix) = fix_hint(err) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("FIX:").render(supports_color),
            fix
        ));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    if let Some(blogger) = err.downcast_ref::<BloggerError>() {
        return format_blogger_error_with(blogger, caps.supports_color, caps.supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
