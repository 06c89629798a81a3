//! Draft creation

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::ProjectLayout;
use crate::domain::value_objects::{draft_file_name, DATE_FORMAT, DEFAULT_DRAFT_TITLE};
use crate::error::BloggerResult;
use crate::infrastructure::fs::create_new;

/// Where the new draft was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    pub path: PathBuf,
    pub title: String,
}

/// Creates `drafts/{today}-{title}.md`.
pub struct DraftUseCase {
    layout: ProjectLayout,
    today: NaiveDate,
}

impl DraftUseCase {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            today: super::local_today(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Write a new draft, picking the first free `(n)` suffix on collision.
    pub fn execute(&self, title: Option<&str>) -> BloggerResult<DraftResult> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_DRAFT_TITLE);
        let today = self.today.format(DATE_FORMAT).to_string();
        let content = draft_front_matter(&today, title);

        let mut collision = 0;
        loop {
            let path = self
                .layout
                .drafts
                .join(draft_file_name(&today, title, collision));
            match create_new(&path, content.as_bytes()) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "creating draft file");
                    return Ok(DraftResult {
                        path,
                        title: title.to_string(),
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => collision += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn draft_front_matter(today: &str, title: &str) -> String {
    let quoted = title.replace('\\', "\\\\").replace('"', "\\\"");
    format!("---\ndate: {}\ntitle: \"{}\"\n---", today, quoted)
}
