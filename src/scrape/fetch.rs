// src/scrape/fetch.rs
//
// Acquisition policy. `fetch` always hands back a table:
//   capability missing   → synthetic (warning)
//   real mode off        → synthetic
//   per-candidate error  → logged, skipped, loop continues
//   nothing collected    → synthetic
//   anything unexpected  → synthetic (including a panicking scraper)

use std::panic::{self, AssertUnwindSafe};

use crate::{
    config::options::SourceOptions,
    core::quiet::quietly,
    model::{DataOrigin, Record},
    pipeline::Stage,
    progress::Progress,
};
use super::{synthetic, PostScraper, SearchQuery};

/// Records plus where they came from.
#[derive(Clone, Debug)]
pub struct Acquired {
    pub records: Vec<Record>,
    pub origin: DataOrigin,
}

enum Attempt {
    Unavailable,
    Disabled,
    Collected(Vec<Record>),
}

/// `"<candidate>" since:<start> until:<end> lang:<language>`
pub fn search_query(q: &SearchQuery) -> String {
    format!(
        "\"{}\" since:{} until:{} lang:{}",
        q.candidate, q.range.start, q.range.end, q.language
    )
}

/// Fetch posts for every configured candidate. Never fails and never unwinds.
pub fn fetch(
    scraper: &dyn PostScraper,
    opts: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Acquired {
    let attempt = quietly(|| panic::catch_unwind(AssertUnwindSafe(|| {
        if !scraper.is_available() {
            return Attempt::Unavailable;
        }
        if !opts.real_mode {
            return Attempt::Disabled;
        }
        Attempt::Collected(collect_real(scraper, opts, crate::progress::reborrow(&mut progress)))
    })));

    match attempt {
        Ok(Attempt::Collected(records)) if !records.is_empty() => {
            logf!("Scrape: collected {} posts", records.len());
            Acquired { records, origin: DataOrigin::Scraped }
        }
        Ok(Attempt::Collected(_)) => {
            let msg = "No real posts found; switching to synthetic data";
            logw!("Scrape: {}", msg);
            if let Some(p) = progress.as_deref_mut() { p.warn(msg); }
            synthetic_fallback(opts, progress)
        }
        Ok(Attempt::Unavailable) => {
            let msg = format!(
                "Scraping capability '{}' not available; running on synthetic data only",
                scraper.name()
            );
            logw!("Scrape: {}", msg);
            if let Some(p) = progress.as_deref_mut() { p.warn(&msg); }
            synthetic_fallback(opts, progress)
        }
        Ok(Attempt::Disabled) => {
            let msg = "Real scraping disabled by configuration; using synthetic data";
            logf!("Scrape: {}", msg);
            if let Some(p) = progress.as_deref_mut() { p.log(msg); }
            synthetic_fallback(opts, progress)
        }
        Err(panic) => {
            let what = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| s!("unknown panic"));
            let msg = format!("Critical failure while collecting data: {}", what);
            loge!("Scrape: {}", msg);
            if let Some(p) = progress.as_deref_mut() { p.warn(&msg); }
            synthetic_fallback(opts, progress)
        }
    }
}

fn synthetic_fallback(opts: &SourceOptions, mut progress: Option<&mut dyn Progress>) -> Acquired {
    if let Some(p) = progress.as_deref_mut() {
        p.stage(Stage::Fallback);
    }
    logf!("Pipeline: stage {}", Stage::Fallback.label());
    let records = synthetic::generate(&opts.candidates, &opts.range, opts.synthetic_count);
    Acquired { records, origin: DataOrigin::Synthetic }
}

fn collect_real(
    scraper: &dyn PostScraper,
    opts: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Record> {
    logf!("Scrape: start ({} candidates, cap {})", opts.candidates.len(), opts.fetch_cap);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.candidates.len());
    }

    let mut out = Vec::new();
    for cand in &opts.candidates {
        let query = SearchQuery {
            candidate: cand.clone(),
            range: opts.range,
            language: opts.language.clone(),
            limit: opts.fetch_cap,
        };

        let stream = match scraper.search(&query) {
            Ok(s) => s,
            Err(e) => {
                loge!("Scrape: {} failed: {}", cand, e);
                if let Some(p) = progress.as_deref_mut() { p.item_failed(cand.name(), &e.to_string()); }
                continue;
            }
        };

        let mut failed = None;
        let mut n = 0usize;
        for item in stream.take(opts.fetch_cap) {
            match item {
                Ok(post) => {
                    out.push(Record {
                        timestamp: post.timestamp,
                        raw_text: post.raw_text,
                        follower_count: post.follower_count,
                        candidate: cand.clone(),
                    });
                    n += 1;
                }
                Err(e) => {
                    failed = Some(e.to_string());
                    break;
                }
            }
        }

        match failed {
            // Posts read before the error are kept.
            Some(e) => {
                loge!("Scrape: {} failed after {} posts: {}", cand, n, e);
                if let Some(p) = progress.as_deref_mut() { p.item_failed(cand.name(), &e); }
            }
            None => {
                logf!("Scrape: {} OK ({} posts)", cand, n);
                if let Some(p) = progress.as_deref_mut() { p.item_done(cand.name()); }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Candidate, DateRange};

    #[test]
    fn query_string_format() {
        let q = SearchQuery {
            candidate: Candidate::new("Iván Cepeda"),
            range: DateRange::default(),
            language: s!("es"),
            limit: 50,
        };
        assert_eq!(
            search_query(&q),
            "\"Iván Cepeda\" since:2025-11-15 until:2025-12-05 lang:es"
        );
    }
}
