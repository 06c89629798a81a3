use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use blogger::application::watch::WatchEvent;
use blogger::config::{CompileOptions, WatchOptions};
use blogger::presentation::factory::create_watch_use_case;

use crate::commands::project::resolve_layout;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub struct RunArgs<'a> {
    pub port: u16,
    pub drafts: bool,
    pub output_dir: Option<&'a Path>,
    pub interval_ms: u64,
    pub serve: bool,
}

pub fn cmd_run(directory: Option<&Path>, args: RunArgs<'_>, ui: &UiContext) -> Result<()> {
    let layout = resolve_layout(directory, args.output_dir)?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &layout.root.display().to_string(),
                &layout.out_dir.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    let options = WatchOptions {
        compile: CompileOptions {
            include_drafts: args.drafts,
        },
        interval: Duration::from_millis(args.interval_ms.max(1)),
        port: args.port,
        serve: args.serve,
    };
    let use_case = create_watch_use_case(layout, options)?;

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || {
        flag.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    let json = ui.json;
    let color = ui.color;
    let unicode = ui.unicode;
    use_case.start(running, move |event: WatchEvent| {
        if json {
            let _ = crate::ui::json::emit_line(&event.to_json());
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            print!("{}", render_watch_event(&timestamp, &event, color, unicode));
        }
    })?;

    Ok(())
}
