// src/config/consts.rs

// Tracked candidates (display names, also used verbatim in queries)
pub const CANDIDATES: &[&str] = &[
    "Abelardo de la Espriella",
    "Iván Cepeda",
    "Sergio Fajardo",
];

// Date range: start inclusive, end exclusive
pub const START_DATE: &str = "2025-11-15";
pub const END_DATE: &str = "2025-12-05";
pub const DATE_FMT: &str = "%Y-%m-%d";

// Scrape
pub const LANGUAGE: &str = "es";
pub const FETCH_CAP: usize = 50; // posts per candidate
pub const SNSCRAPE_BIN: &str = "snscrape";

// Synthetic fallback
pub const SYNTHETIC_COUNT: usize = 200;
pub const MIN_FOLLOWERS: u64 = 100;
pub const MAX_FOLLOWERS: u64 = 50_000;

// Classifier
pub const MAX_CLASSIFY_CHARS: usize = 512;
pub const LEXICON_THRESHOLD: f64 = 0.25;

// Operational log
pub const LOG_FILE: &str = ".store/pipeline.log";
