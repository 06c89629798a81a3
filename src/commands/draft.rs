use std::path::Path;

use anyhow::Result;

use blogger::application::DraftUseCase;

use crate::commands::project::resolve_layout;
use crate::ui::context::UiContext;
use crate::ui::views::lifecycle::{draft_json, render_draft_created};

pub fn cmd_draft(directory: Option<&Path>, title: Option<&str>, ui: &UiContext) -> Result<()> {
    let layout = resolve_layout(directory, None)?;
    let result = DraftUseCase::new(layout).execute(title)?;

    if ui.json {
        crate::ui::json::emit(draft_json(&result))?;
    } else {
        print!("{}", render_draft_created(&result, ui.color, ui.unicode));
    }
    Ok(())
}
