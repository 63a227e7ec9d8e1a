// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::model::{Candidate, DateRange};
use super::consts::*;

/// Everything a pipeline run needs, fixed for the lifetime of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub source: SourceOptions,
    pub classifier: ClassifierOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            classifier: ClassifierOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub candidates: Vec<Candidate>,
    pub range: DateRange,
    /// Try the scraper at all. Off by default: synthetic data only.
    pub real_mode: bool,
    /// Max posts kept per candidate.
    pub fetch_cap: usize,
    pub language: String,
    /// Size of the synthetic fallback sample.
    pub synthetic_count: usize,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            candidates: CANDIDATES.iter().map(|&n| Candidate::new(n)).collect(),
            range: DateRange::default(),
            real_mode: false,
            fetch_cap: FETCH_CAP,
            language: s!(LANGUAGE),
            synthetic_count: SYNTHETIC_COUNT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSource {
    /// Lexicon compiled into the binary.
    Builtin,
    /// `word<TAB>weight` lexicon on disk.
    LexiconFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierOptions {
    pub model: ModelSource,
    /// Input is cut to this many characters before the model sees it.
    pub max_chars: usize,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            model: ModelSource::Builtin,
            max_chars: MAX_CLASSIFY_CHARS,
        }
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT)
        .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", s, e).into())
}
