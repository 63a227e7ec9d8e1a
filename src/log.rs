// src/log.rs
//
// Run log, appended to LOG_FILE:
//   [2025-11-20 18:30:00][+00:00:01.204][WARN] Scrape: ...
// Wall clock for lining up with the scraper's own output, elapsed time for
// seeing which stage is slow.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::Local;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(level: Level, msg: &str) -> String {
    let elapsed = fmt_elapsed(START.get_or_init(Instant::now).elapsed().as_millis());
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{now}][+{elapsed}][{}] {msg}\n", level.tag())
}

/// Append one line. Never fails: an unwritable log location drops the line.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(level, msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Some(parent) = Path::new(LOG_FILE).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line(Level::Warn, "synthetic only");
        assert!(line.ends_with("[WARN] synthetic only\n"));
        assert!(line.contains("][+00:"));
    }
}
