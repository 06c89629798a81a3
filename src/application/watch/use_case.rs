//! Watch Use Case implementation

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::compile::CompileUseCase;
use crate::config::{load_site_config, WatchOptions};
use crate::domain::value_objects::IgnorePatterns;
use crate::error::{BloggerError, BloggerResult};
use crate::infrastructure::server::{PreviewHandle, PreviewServer};

use super::detector::ChangeDetector;
use super::event::WatchEvent;

/// Upper bound on one sleep slice, so a quit request is noticed promptly
const QUIT_POLL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Orchestrates compile, serve and poll. This is the main entry point for
/// the `blogger run` command.
pub struct WatchUseCase {
    compile: CompileUseCase,
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(compile: CompileUseCase, options: WatchOptions) -> Self {
        Self { compile, options }
    }

    /// Start watching (blocking)
    ///
    /// Returns once `running` is cleared. Compile failures are reported as
    /// [`WatchEvent::Error`] and never end the loop; only a project without
    /// templates or a preview server that cannot bind is fatal.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> BloggerResult<()>
    where
        F: Fn(WatchEvent),
    {
        let layout = self.compile.layout();
        if !layout.templates.is_dir() {
            return Err(BloggerError::TemplatesNotFound {
                path: layout.templates.clone(),
            });
        }

        on_event(WatchEvent::WatchStarted {
            root: layout.root.display().to_string(),
            out_dir: layout.out_dir.display().to_string(),
        });

        // Snapshot before the first compile so no edit slips between the two.
        fs::create_dir_all(&layout.out_dir)?;
        let mut detector = ChangeDetector::new(&layout.root, self.ignore_patterns())
            .exclude(&layout.out_dir)
            .primed();
        tracing::debug!(files = detector.tracked(), "watching {}", detector.root().display());

        self.compile_cycle(&on_event);

        let server = if self.options.serve {
            let handle = PreviewServer::bind(&layout.out_dir, self.options.port)?.spawn()?;
            tracing::info!(url = %handle.url(), "serving {}", layout.out_dir.display());
            on_event(WatchEvent::ServerStarted { url: handle.url() });
            Some(handle)
        } else {
            None
        };

        while running.load(Ordering::SeqCst) {
            pause(&running, self.options.interval);
            if !running.load(Ordering::SeqCst) {
                break;
            }
            if detector.dirty() {
                on_event(WatchEvent::ChangeDetected);
                self.compile_cycle(&on_event);
                detector.set_ignore(self.ignore_patterns());
            }
        }

        stop_server(server);
        tracing::info!("run terminated");
        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// One compile, with every failure contained.
    fn compile_cycle(&self, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::CompileStarted);
        match self.compile.execute(&self.options.compile) {
            Ok(result) => on_event(WatchEvent::compile_complete(&result)),
            Err(e) => {
                tracing::error!(
                    "unhandled error compiling site, will keep watching but this change did not compile: {}",
                    e
                );
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Ignore patterns from the current `site.yaml`; none if it is broken.
    fn ignore_patterns(&self) -> IgnorePatterns {
        let layout = self.compile.layout();
        load_site_config(&layout.site_config)
            .and_then(|site| site.ignore_matcher(&layout.root, &layout.site_config))
            .unwrap_or_else(|e| {
                tracing::debug!("watching without ignore patterns: {}", e);
                IgnorePatterns::empty()
            })
    }
}

/// Sleep for `interval`, waking early once `running` is cleared.
fn pause(running: &AtomicBool, interval: Duration) {
    let deadline = Instant::now() + interval;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        std::thread::sleep((deadline - now).min(QUIT_POLL));
    }
}

fn stop_server(server: Option<PreviewHandle>) {
    if let Some(handle) = server {
        tracing::debug!("stopping preview server");
        handle.stop();
    }
}
