//! Lifecycle Module
//!
//! Moves content between the two states a post can be in: a draft under
//! `drafts/` and a published post under `posts/`.
//!
//! ## Structure
//!
//! - `draft` - Create a new, front-matter-stamped draft (`DraftUseCase`)
//! - `publish` - Interactive draft → post transition (`PublishUseCase`)
//!
//! Both workflows take the current date from the local clock unless a date
//! is injected with `with_today`, and all questions go through a
//! [`Prompter`](crate::domain::ports::Prompter).

mod draft;
mod publish;

pub use draft::{DraftResult, DraftUseCase};
pub use publish::{PublishResult, PublishUseCase};


use chrono::NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
