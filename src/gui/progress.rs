// src/gui/progress.rs
//
// Collects what the pipeline reported before the window opened, so the
// dashboard can show warnings (e.g. "synthetic data only") next to the charts.

use crate::{pipeline::Stage, progress::Progress};

#[derive(Default)]
pub struct GuiProgress {
    pub stage: Option<Stage>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new() -> Self { Self::default() }

    /// One-line summary for the status bar.
    pub fn status(&self) -> String {
        let stage = self.stage.map(|s| s.label()).unwrap_or("idle");
        if self.total == 0 {
            format!("Pipeline {}", stage)
        } else {
            format!("Pipeline {} ({} ok, {} failed of {})", stage, self.done, self.failed, self.total)
        }
    }
}

impl Progress for GuiProgress {
    fn stage(&mut self, stage: Stage) {
        self.stage = Some(stage);
    }
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.notes.push(s!(msg));
    }
    fn warn(&mut self, msg: &str) {
        self.warnings.push(s!(msg));
    }
    fn item_done(&mut self, _label: &str) {
        self.done += 1;
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        self.failed += 1;
        self.warnings.push(format!("{}: {}", label, err));
    }
}
