// src/data.rs
//
// Dashboard projections: a finished run turned into plain tables.
//
// - balance:   net sentiment by candidate (bar chart)
// - trend:     net sentiment by (date, candidate) (line chart)
// - breakdown: label counts for one candidate (pie/bars)
// - posts:     every enriched record
//
// Shared by the GUI tabs, clipboard copy and the CLI report, so the three
// consumers can't drift apart.

use crate::{
    aggregate::Aggregates,
    core::sanitize::preview,
    model::{Candidate, EnrichedRecord, SentimentLabel},
    store::DataSet,
};

pub const BALANCE_HEADERS: &[&str] = &["Candidate", "Net sentiment", "Influence", "Posts"];
pub const TREND_HEADERS: &[&str] = &["Date", "Candidate", "Net sentiment"];
pub const BREAKDOWN_HEADERS: &[&str] = &["Label", "Count"];
pub const POSTS_HEADERS: &[&str] = &[
    "Date", "Candidate", "Followers", "Label", "Value", "Influence", "Text", "Clean text",
];

const TEXT_PREVIEW_CHARS: usize = 120;

pub fn balance(agg: &Aggregates) -> DataSet {
    let rows = agg
        .per_candidate
        .iter()
        .map(|(cand, total)| {
            let influence = agg.influence.get(cand).copied().unwrap_or(0.0);
            let posts = agg.label_breakdown(cand).total();
            row![cand, total, format!("{influence:.2}"), posts]
        })
        .collect();
    DataSet::new(BALANCE_HEADERS, rows)
}

pub fn trend(agg: &Aggregates) -> DataSet {
    let rows = agg
        .time_series()
        .into_iter()
        .map(|p| row![p.date, p.candidate, p.total])
        .collect();
    DataSet::new(TREND_HEADERS, rows)
}

pub fn breakdown(agg: &Aggregates, candidate: &Candidate) -> DataSet {
    let counts = agg.label_breakdown(candidate);
    let rows = SentimentLabel::ALL
        .iter()
        .map(|&l| row![l.tag(), counts.get(l)])
        .collect();
    DataSet::new(BREAKDOWN_HEADERS, rows)
}

pub fn posts(records: &[EnrichedRecord]) -> DataSet {
    let rows = records
        .iter()
        .map(|r| {
            row![
                r.date_bucket,
                r.candidate(),
                r.record.follower_count,
                r.sentiment_label,
                r.sentiment_value(),
                format!("{:.2}", r.influence_score),
                preview(&r.record.raw_text, TEXT_PREVIEW_CHARS),
                r.clean_text,
            ]
        })
        .collect();
    DataSet::new(POSTS_HEADERS, rows)
}
