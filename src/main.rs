//! Blogger CLI - static blog compiler
//!
//! Usage: blogger [-C <DIR>] <COMMAND>
//!
//! Commands:
//!   run      Compile, serve, and recompile on change
//!   compile  Compile the site once
//!   draft    Create a new draft
//!   post     Publish a draft

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blogger::presentation::{Cli, Commands};

mod commands;
mod ui;

/// Environment variable holding an `EnvFilter` directive
const LOG_ENV: &str = "BLOGGER_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json);

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color);
    let directory = cli.directory.as_deref();

    match &cli.command {
        Commands::Run {
            port,
            drafts,
            output_dir,
            interval_ms,
            no_serve,
        } => commands::run::cmd_run(
            directory,
            commands::run::RunArgs {
                port: *port,
                drafts: *drafts,
                output_dir: output_dir.as_deref(),
                interval_ms: *interval_ms,
                serve: !no_serve,
            },
            &ui,
        ),
        Commands::Compile { drafts, output_dir } => {
            commands::compile::cmd_compile(directory, *drafts, output_dir.as_deref(), &ui)
        }
        Commands::Draft { title } => commands::draft::cmd_draft(directory, title.as_deref(), &ui),
        Commands::Post => commands::post::cmd_post(directory, &ui),
    }
}

/// Install the stderr log subscriber.
///
/// `-v` count: 0 → warn, 1 → info, 2 → debug, 3+ → trace. `BLOGGER_LOG`
/// replaces the level entirely when set to a valid directive.
fn init_logging(verbose: u8, json: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let from_env = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok());
    let hint = verbose == 0 && from_env.is_none() && !json;
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if hint {
        eprintln!("hint: logging warnings only; pass -v, -vv or -vvv (or set {LOG_ENV}) for more");
    }
}
