use std::path::Path;

use anyhow::Result;

use blogger::config::CompileOptions;
use blogger::presentation::factory::create_compile_use_case;

use crate::commands::project::resolve_layout;
use crate::ui::context::UiContext;
use crate::ui::views::compile::{compile_json, render_compile_summary};

pub fn cmd_compile(
    directory: Option<&Path>,
    drafts: bool,
    output_dir: Option<&Path>,
    ui: &UiContext,
) -> Result<()> {
    let layout = resolve_layout(directory, output_dir)?;
    tracing::debug!(root = %layout.root.display(), out_dir = %layout.out_dir.display(), "compiling");

    let use_case = create_compile_use_case(layout)?;
    let result = use_case.execute(&CompileOptions {
        include_drafts: drafts,
    })?;

    if ui.json {
        crate::ui::json::emit(compile_json(&result))?;
    } else {
        print!(
            "{}",
            render_compile_summary(&result, ui.verbose > 0, ui.color, ui.unicode)
        );
    }
    Ok(())
}
