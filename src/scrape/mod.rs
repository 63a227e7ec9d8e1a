// src/scrape/mod.rs
//
// Data acquisition: the scraping capability seam, the real adapter,
// the synthetic fallback, and the fetch policy tying them together.

mod fetch;
mod snscrape;
pub mod synthetic;

pub use fetch::{fetch, search_query, Acquired};
pub use snscrape::{decode_line, SnscrapeCli};

use std::error::Error;

use chrono::{DateTime, Utc};

use crate::model::{Candidate, DateRange};

/// One post as returned by a scraping capability.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub timestamp: DateTime<Utc>,
    pub raw_text: String,
    pub follower_count: u64,
}

/// Bounded search request for one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub candidate: Candidate,
    pub range: DateRange,
    pub language: String,
    /// Hint for the backend; the caller enforces the cap regardless.
    pub limit: usize,
}

/// Lazy stream of posts. Items can fail individually.
pub type PostStream<'a> = Box<dyn Iterator<Item = Result<Post, Box<dyn Error>>> + 'a>;

/// External scraping capability. May be entirely absent at runtime, so callers
/// branch on `is_available()` instead of assuming it works.
pub trait PostScraper {
    fn name(&self) -> &str;

    /// Probe the environment. Cheap to call repeatedly.
    fn is_available(&self) -> bool;

    fn search(&self, query: &SearchQuery) -> Result<PostStream<'_>, Box<dyn Error>>;
}

/// The capability that is never there.
pub struct NoScraper;

impl PostScraper for NoScraper {
    fn name(&self) -> &str { "none" }
    fn is_available(&self) -> bool { false }
    fn search(&self, _query: &SearchQuery) -> Result<PostStream<'_>, Box<dyn Error>> {
        Err("no scraping capability configured".into())
    }
}
