//! `reading-time`: word count and estimated minutes per post.
//!
//! Runs before the body is template-expanded, so a post can write
//! `{{ reading_time }} min read` in its own text.

use crate::domain::entities::Post;
use crate::domain::ports::{Extension, ExtensionContext};

pub const READING_TIME: &str = "reading-time";

pub const WORDS_PER_MINUTE: usize = 200;

pub struct ReadingTime;

impl ReadingTime {
    pub fn new(_ctx: &ExtensionContext) -> Self {
        Self
    }

    /// Minutes to read `words` words, never less than one.
    pub fn minutes(words: usize) -> usize {
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

impl Extension for ReadingTime {
    fn pre_render_post(&mut self, name: &str, post: &mut Post) -> anyhow::Result<()> {
        let words = post.body_text.split_whitespace().count();
        let minutes = Self::minutes(words);
        tracing::debug!(post = %name, words, minutes, "estimated reading time");

        post.set_meta("word_count", words as u64);
        post.set_meta("reading_time", minutes as u64);
        Ok(())
    }
}
