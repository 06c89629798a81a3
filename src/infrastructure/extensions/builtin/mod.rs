//! Extensions shipped with blogger

mod reading_time;
mod sitemap;

pub use reading_time::{ReadingTime, READING_TIME, WORDS_PER_MINUTE};
pub use sitemap::{Sitemap, SITEMAP, SITEMAP_TEMPLATE, SITEMAP_TEXT};
