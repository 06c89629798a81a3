use std::path::Path;

use anyhow::Result;

use blogger::application::PublishUseCase;
use blogger::infrastructure::DialoguerPrompter;
use blogger::BloggerError;

use crate::commands::project::resolve_layout;
use crate::ui::context::UiContext;
use crate::ui::theme::BloggerTheme;
use crate::ui::views::lifecycle::{publish_json, render_published};

pub fn cmd_post(directory: Option<&Path>, ui: &UiContext) -> Result<()> {
    let layout = resolve_layout(directory, None)?;
    let prompter = DialoguerPrompter::with_theme(Box::new(BloggerTheme::new(ui.color)));

    let result = match PublishUseCase::new(layout).execute(&prompter) {
        Ok(result) => result,
        Err(BloggerError::Aborted) => {
            if !ui.json {
                eprintln!("Nothing published.");
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if ui.json {
        crate::ui::json::emit(publish_json(&result))?;
    } else {
        print!("{}", render_published(&result, ui.color, ui.unicode));
    }
    Ok(())
}
