// tests/fetch_policy.rs
//
// Acquisition policy with fake scraping capabilities: fallback rules,
// per-candidate failure isolation and the fetch cap.

use std::{cell::Cell, error::Error};

use chrono::{TimeZone, Utc};

use candidate_sentiment::config::options::SourceOptions;
use candidate_sentiment::model::{Candidate, DataOrigin};
use candidate_sentiment::pipeline::Stage;
use candidate_sentiment::progress::Progress;
use candidate_sentiment::scrape::{fetch, NoScraper, Post, PostScraper, PostStream, SearchQuery};

#[derive(Default)]
struct Recorder {
    stages: Vec<Stage>,
    begun: Vec<usize>,
    warnings: Vec<String>,
    done: Vec<String>,
    failed: Vec<String>,
}

impl Progress for Recorder {
    fn stage(&mut self, stage: Stage) { self.stages.push(stage); }
    fn begin(&mut self, total: usize) { self.begun.push(total); }
    fn warn(&mut self, msg: &str) { self.warnings.push(msg.to_string()); }
    fn item_done(&mut self, label: &str) { self.done.push(label.to_string()); }
    fn item_failed(&mut self, label: &str, _err: &str) { self.failed.push(label.to_string()); }
}

fn post(i: u32) -> Post {
    Post {
        timestamp: Utc.with_ymd_and_hms(2025, 11, 20, 10, i % 60, 0).unwrap(),
        raw_text: format!("post {i}"),
        follower_count: 1_000,
    }
}

/// Yields `per_candidate` posts; candidates named "broken" fail to start,
/// candidates named "flaky" fail after two posts.
struct FakeScraper {
    per_candidate: u32,
    calls: Cell<usize>,
}

impl FakeScraper {
    fn new(per_candidate: u32) -> Self {
        Self { per_candidate, calls: Cell::new(0) }
    }
}

impl PostScraper for FakeScraper {
    fn name(&self) -> &str { "fake" }
    fn is_available(&self) -> bool { true }

    fn search(&self, query: &SearchQuery) -> Result<PostStream<'_>, Box<dyn Error>> {
        self.calls.set(self.calls.get() + 1);
        match query.candidate.name() {
            "broken" => Err("connection refused".into()),
            "flaky" => {
                let fail: Result<Post, Box<dyn Error>> = Err("rate limited".into());
                Ok(Box::new((0..2).map(|i| Ok(post(i))).chain(std::iter::once(fail))))
            }
            _ => Ok(Box::new((0..self.per_candidate).map(|i| Ok::<_, Box<dyn Error>>(post(i))))),
        }
    }
}

struct PanickingScraper;

impl PostScraper for PanickingScraper {
    fn name(&self) -> &str { "panicky" }
    fn is_available(&self) -> bool { true }
    fn search(&self, _query: &SearchQuery) -> Result<PostStream<'_>, Box<dyn Error>> {
        panic!("scraper blew up")
    }
}

fn opts(names: &[&str], real_mode: bool) -> SourceOptions {
    SourceOptions {
        candidates: names.iter().map(|n| Candidate::new(*n)).collect(),
        real_mode,
        fetch_cap: 5,
        synthetic_count: 40,
        ..SourceOptions::default()
    }
}

#[test]
fn unavailable_capability_falls_back_to_exactly_count_records() {
    let o = opts(&["A", "B", "C"], true);
    let mut rec = Recorder::default();
    let got = fetch(&NoScraper, &o, Some(&mut rec));

    assert_eq!(got.origin, DataOrigin::Synthetic);
    assert_eq!(got.records.len(), 40);
    assert_eq!(rec.stages, vec![Stage::Fallback]);
    assert_eq!(rec.warnings.len(), 1);
}

#[test]
fn real_mode_off_never_calls_the_scraper() {
    let scraper = FakeScraper::new(3);
    let got = fetch(&scraper, &opts(&["A"], false), None);
    assert_eq!(got.origin, DataOrigin::Synthetic);
    assert_eq!(scraper.calls.get(), 0);
}

#[test]
fn real_posts_are_capped_per_candidate() {
    let scraper = FakeScraper::new(100);
    let mut rec = Recorder::default();
    let got = fetch(&scraper, &opts(&["A", "B"], true), Some(&mut rec));

    assert_eq!(got.origin, DataOrigin::Scraped);
    assert_eq!(got.records.len(), 10);
    assert!(!rec.stages.contains(&Stage::Fallback));
    assert_eq!(rec.done, vec!["A", "B"]);
    assert!(got.records[..5].iter().all(|r| r.candidate.name() == "A"));
}

#[test]
fn failing_candidate_is_skipped_and_partial_posts_kept() {
    let scraper = FakeScraper::new(3);
    let mut rec = Recorder::default();
    let got = fetch(&scraper, &opts(&["broken", "flaky", "ok"], true), Some(&mut rec));

    assert_eq!(got.origin, DataOrigin::Scraped);
    // 0 from broken, 2 before flaky failed, 3 from ok
    assert_eq!(got.records.len(), 5);
    assert_eq!(rec.failed, vec!["broken", "flaky"]);
    assert_eq!(rec.done, vec!["ok"]);
    // every counted item is accounted for
    assert_eq!(rec.begun, vec![3]);
    assert_eq!(scraper.calls.get(), 3);
}

#[test]
fn zero_results_fall_back_to_synthetic() {
    let scraper = FakeScraper::new(0);
    let mut rec = Recorder::default();
    let got = fetch(&scraper, &opts(&["A", "B"], true), Some(&mut rec));

    assert_eq!(got.origin, DataOrigin::Synthetic);
    assert_eq!(got.records.len(), 40);
    assert_eq!(rec.stages, vec![Stage::Fallback]);
}

#[test]
fn panicking_scraper_falls_back_instead_of_unwinding() {
    let mut rec = Recorder::default();
    let got = fetch(&PanickingScraper, &opts(&["A"], true), Some(&mut rec));

    assert_eq!(got.origin, DataOrigin::Synthetic);
    assert_eq!(got.records.len(), 40);
    assert!(rec.warnings.iter().any(|w| w.contains("scraper blew up")));
}
