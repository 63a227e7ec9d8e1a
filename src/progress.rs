// src/progress.rs
use crate::pipeline::Stage;

/// Progress and reporting sink for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users;
/// tests implement it to observe what the pipeline did.
pub trait Progress {
    /// Called when the pipeline enters a new stage.
    fn stage(&mut self, _stage: Stage) {}

    /// Called at the start of a loop with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something degraded but the run continues (e.g. synthetic fallback).
    fn warn(&mut self, msg: &str) { self.log(msg) }

    /// Called when one logical unit completes (e.g. a candidate was scraped).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit failed and was skipped.
    fn item_failed(&mut self, _label: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Short reborrow of an optional sink, for handing it to a callee while
/// keeping it usable afterwards.
pub fn reborrow<'s>(progress: &'s mut Option<&mut dyn Progress>) -> Option<&'s mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

/// Prints to stderr. Used by the CLI.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn stage(&mut self, stage: Stage) {
        eprintln!("[{}]", stage.label());
    }
    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("  warning: {msg}");
    }
    fn item_done(&mut self, label: &str) {
        eprintln!("  ok: {label}");
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        eprintln!("  failed: {label}: {err}");
    }
}
