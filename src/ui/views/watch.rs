use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use blogger::application::watch::WatchEvent;

pub fn render_watch_header(
    root: &str,
    out_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Blogger Run");
    header.add("Project", root);
    header.add("Output", out_dir);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { root, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), root)
        }
        WatchEvent::ServerStarted { url } => {
            format!("{} {} Serving: {}\n", prefix, icon(Icon::Serve), url)
        }
        WatchEvent::ChangeDetected => {
            format!("{} {} Change detected\n", prefix, icon(Icon::Arrow))
        }
        WatchEvent::CompileStarted => {
            format!("{} {} Compiling...\n", prefix, icon(Icon::Progress))
        }
        WatchEvent::CompileComplete {
            posts,
            written,
            skipped,
            copied,
        } => format!(
            "{} {} Compiled {} posts: {} written, {} skipped, {} copied\n",
            prefix,
            icon(Icon::Success),
            posts,
            written,
            skipped,
            copied
        ),
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => format!("\n{} {} Stopped.\n", prefix, icon(Icon::Watch)),
    }
}
