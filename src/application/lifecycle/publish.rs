//! Draft → post publishing
//!
//! The flow mirrors a terminal session: list the drafts, pick one by
//! number, confirm or edit its title and date, then write it under
//! `posts/{date}-{slug}.md` and optionally delete the draft. Bad answers are
//! asked again; only `q`, a name collision, or an I/O failure end it early.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_yaml_ng::{Mapping, Value};

use crate::config::{load_site_config, ProjectLayout};
use crate::domain::entities::{value_to_plain_string, Post};
use crate::domain::ports::Prompter;
use crate::domain::services::parse_post;
use crate::domain::value_objects::{parse_date_answer, publish_file_name, DATE_FORMAT};
use crate::error::{BloggerError, BloggerResult};
use crate::infrastructure::fs::{write_no_clobber, TreeWalker};

const TITLE_KEY: &str = "title";
const DATE_KEY: &str = "date";

/// Outcome of one publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub draft: PathBuf,
    pub published: PathBuf,
    pub draft_deleted: bool,
}

pub struct PublishUseCase {
    layout: ProjectLayout,
    today: NaiveDate,
}

impl PublishUseCase {
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

    /// Drafts eligible for publishing: files directly inside `drafts/`,
    /// minus ignored ones, in name order.
    pub fn drafts(&self) -> BloggerResult<Vec<PathBuf>> {
        let layout = &self.layout;
        if !layout.drafts.is_dir() {
            return Err(BloggerError::NoDrafts {
                path: layout.drafts.clone(),
            });
        }
        let site = load_site_config(&layout.site_config)?;
        let ignore = site.ignore_matcher(&layout.root, &layout.site_config)?;
        let drafts = TreeWalker::new(&ignore, &layout.root).shallow_files(&layout.drafts)?;
        Ok(drafts)
    }

    /// Run the interactive publish workflow.
    pub fn execute(&self, prompter: &dyn Prompter) -> BloggerResult<PublishResult> {
        let drafts = self.drafts()?;
        if drafts.is_empty() {
            return Err(BloggerError::NoDrafts {
                path: self.layout.drafts.clone(),
            });
        }

        prompter.show(&format!("Found {} drafts:", drafts.len()));
        for (index, draft) in drafts.iter().enumerate() {
            prompter.show(&format!("\t {}) {}", index + 1, file_name(draft)));
        }
        let draft = select(prompter, &drafts)?;

        let source = fs::read_to_string(&draft).map_err(|source| BloggerError::ReadFailed {
            path: draft.clone(),
            source,
        })?;
        let post = parse_post(&source);
        let mut metadata = post.metadata.clone().unwrap_or_default();

        let title = self.confirm_title(prompter, &metadata)?;
        let date = self.confirm_date(prompter, &metadata)?;
        metadata.insert(Value::from(TITLE_KEY), Value::from(title.clone()));
        metadata.insert(Value::from(DATE_KEY), Value::from(date.clone()));

        let published = publish_path(&self.layout.posts, &date, &title)?;
        prompter.show(&format!("Writing post to {}", published.display()));
        fs::create_dir_all(&self.layout.posts)?;
        write_no_clobber(&published, render_published(&metadata, &post)?.as_bytes()).map_err(
            |e| match e.kind() {
                io::ErrorKind::AlreadyExists => BloggerError::PublishCollision {
                    path: published.clone(),
                },
                _ => BloggerError::Io(e),
            },
        )?;
        tracing::info!(from = %draft.display(), to = %published.display(), "published draft");

        let draft_deleted = if prompter.confirm("Post written. Delete draft?")? {
            prompter.show(&format!("Deleting {}", draft.display()));
            fs::remove_file(&draft)?;
            true
        } else {
            false
        };

        Ok(PublishResult {
            draft,
            published,
            draft_deleted,
        })
    }

    fn confirm_title(&self, prompter: &dyn Prompter, metadata: &Mapping) -> BloggerResult<String> {
        if let Some(title) = metadata.get(TITLE_KEY).and_then(value_to_plain_string) {
            if validate(prompter, TITLE_KEY, &title)? {
                return Ok(title);
            }
        }
        loop {
            let title = prompter.input("Enter title")?;
            if validate(prompter, TITLE_KEY, &title)? {
                return Ok(title);
            }
        }
    }

    fn confirm_date(&self, prompter: &dyn Prompter, metadata: &Mapping) -> BloggerResult<String> {
        let existing = metadata
            .get(DATE_KEY)
            .and_then(value_to_plain_string)
            .filter(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok());
        if let Some(date) = existing {
            if validate(prompter, DATE_KEY, &date)? {
                return Ok(date);
            }
        }
        loop {
            let date = self.ask_date(prompter)?;
            if validate(prompter, DATE_KEY, &date)? {
                return Ok(date);
            }
        }
    }

    fn ask_date(&self, prompter: &dyn Prompter) -> BloggerResult<String> {
        loop {
            let answer =
                prompter.input("Enter date (YYYY-MM-DD) or \"[t]oday\" for local clock date")?;
            match parse_date_answer(&answer, self.today) {
                Some(date) => return Ok(date.format(DATE_FORMAT).to_string()),
                None => prompter.show("Invalid date format."),
            }
        }
    }
}

fn select(prompter: &dyn Prompter, drafts: &[PathBuf]) -> BloggerResult<PathBuf> {
    let question = format!("Which would you like to post? [1-{} or q to quit]", drafts.len());
    loop {
        let answer = prompter.input(&question)?;
        let answer = answer.trim();
        if answer == "q" {
            return Err(BloggerError::Aborted);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=drafts.len()).contains(&n) => return Ok(drafts[n - 1].clone()),
            Ok(n) => prompter.show(&format!("{} is invalid. Out of range!", n)),
            Err(_) => prompter.show("Invalid input."),
        }
    }
}

/// `posts/{date}-{slug}.md`, refused unless it sits directly in `posts`.
pub(crate) fn publish_path(posts: &Path, date: &str, title: &str) -> BloggerResult<PathBuf> {
    let published = posts.join(publish_file_name(date, title));
    if published.parent() != Some(posts) {
        return Err(BloggerError::PathEscape {
            path: published,
            root: posts.to_path_buf(),
        });
    }
    Ok(published)
}

fn validate(prompter: &dyn Prompter, what: &str, current: &str) -> BloggerResult<bool> {
    prompter.show(&format!("Current {} is \"{}\"", what, current));
    prompter.confirm("Is this ok?")
}

/// `---\n<metadata>---\n\n<body>`
fn render_published(metadata: &Mapping, post: &Post) -> BloggerResult<String> {
    let yaml = serde_yaml_ng::to_string(metadata).map_err(|e| {
        BloggerError::Io(io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    })?;
    Ok(format!(
        "---\n{}---\n\n{}",
        yaml,
        post.body_text.trim_start_matches(['\r', '\n'])
    ))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
