// src/model.rs
//
// Core records that flow through the pipeline.
//
// - Record: one post as acquired (scraped or synthetic). Never mutated.
// - EnrichedRecord: Record + everything derived downstream.
//   The polarity value is derived from the label, so the two can't disagree.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::consts::{DATE_FMT, END_DATE, START_DATE};

/// A tracked political figure, identified by display name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }
    pub fn name(&self) -> &str { &self.0 }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar range: `start` inclusive, `end` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Box<dyn std::error::Error>> {
        if start >= end {
            return Err(format!("Empty date range: {} .. {}", start, end).into());
        }
        Ok(Self { start, end })
    }

    /// Number of whole days covered (0 for an inverted range).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::parse_from_str(START_DATE, DATE_FMT).unwrap_or_default(),
            end: NaiveDate::parse_from_str(END_DATE, DATE_FMT).unwrap_or_default(),
        }
    }
}

/// One social post.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub raw_text: String,
    pub follower_count: u64,
    pub candidate: Candidate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Map a model's raw label. Unknown labels are neutral.
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POS" | "POSITIVE" => SentimentLabel::Positive,
            "NEG" | "NEGATIVE" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Signed polarity.
    pub fn value(self) -> i8 {
        match self {
            SentimentLabel::Positive => 1,
            SentimentLabel::Negative => -1,
            SentimentLabel::Neutral => 0,
        }
    }

    /// Short tag as the model emits it.
    pub fn tag(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POS",
            SentimentLabel::Negative => "NEG",
            SentimentLabel::Neutral => "NEU",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRecord {
    pub record: Record,
    pub clean_text: String,
    pub sentiment_label: SentimentLabel,
    pub influence_score: f64,
    pub date_bucket: NaiveDate,
}

impl EnrichedRecord {
    pub fn new(record: Record, clean_text: String, label: SentimentLabel) -> Self {
        let influence_score = influence(record.follower_count, label.value());
        let date_bucket = record.timestamp.date_naive();
        Self { record, clean_text, sentiment_label: label, influence_score, date_bucket }
    }

    pub fn sentiment_value(&self) -> i8 { self.sentiment_label.value() }
    pub fn candidate(&self) -> &Candidate { &self.record.candidate }
}

/// ln(1 + followers) × polarity
pub fn influence(follower_count: u64, value: i8) -> f64 {
    (follower_count as f64).ln_1p() * f64::from(value)
}

/// Where the rows of a run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataOrigin {
    Scraped,
    Synthetic,
}

impl DataOrigin {
    pub fn label(self) -> &'static str {
        match self {
            DataOrigin::Scraped => "scraped",
            DataOrigin::Synthetic => "synthetic",
        }
    }
}
