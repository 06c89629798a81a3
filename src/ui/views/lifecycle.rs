use crate::ui::primitives::icon::Icon;
use blogger::application::{DraftResult, PublishResult};

pub fn render_draft_created(result: &DraftResult, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Created draft \"{}\" at {}\n",
        Icon::Draft.colored(supports_color, supports_unicode),
        result.title,
        result.path.display()
    )
}

pub fn render_published(result: &PublishResult, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} Published {}\n",
        Icon::Post.colored(supports_color, supports_unicode),
        result.published.display()
    );
    if !result.draft_deleted {
        out.push_str(&format!(
            "  {} draft kept at {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            result.draft.display()
        ));
    }
    out
}

pub fn draft_json(result: &DraftResult) -> serde_json::Value {
    serde_json::json!({
        "command": "draft",
        "event": "draft_created",
        "path": result.path.display().to_string(),
        "title": result.title,
    })
}

pub fn publish_json(result: &PublishResult) -> serde_json::Value {
    serde_json::json!({
        "command": "post",
        "event": "published",
        "draft": result.draft.display().to_string(),
        "published": result.published.display().to_string(),
        "draft_deleted": result.draft_deleted,
    })
}
