//! Terminal progress display for collapse runs

use crate::algorithm::executor::CollapseObserver;
use crate::spatial::grid::Snapshot;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking resolved cells of the current attempt
///
/// The bar restarts on every attempt and notes how many attempts diverged
/// so far.
pub struct ProgressManager {
    bar: ProgressBar,
    attempt_limit: Option<usize>,
    diverged: usize,
}

impl ProgressManager {
    /// Create a bar for a grid of `cell_count` cells
    ///
    /// `attempt_limit` is `None` for an unlimited budget.
    pub fn new(cell_count: usize, attempt_limit: Option<usize>) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            attempt_limit,
            diverged: 0,
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden(cell_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(cell_count as u64);
        Self {
            bar,
            attempt_limit: None,
            diverged: 0,
        }
    }

    /// Number of attempts reported as diverged
    pub const fn diverged_count(&self) -> usize {
        self.diverged
    }

    /// Cells resolved in the latest snapshot
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn attempt_label(&self, attempt: usize) -> String {
        self.attempt_limit.map_or_else(
            || format!("attempt {attempt}"),
            |limit| format!("attempt {attempt}/{limit}"),
        )
    }
}

impl CollapseObserver for ProgressManager {
    fn attempt_started(&mut self, attempt: usize) {
        self.bar.set_prefix(self.attempt_label(attempt));
        self.bar.set_position(0);
    }

    fn snapshot(&mut self, snapshot: &Snapshot) {
        let resolved = snapshot.iter().filter(|cell| cell.is_some()).count();
        self.bar.set_position(resolved as u64);
    }

    fn diverged(&mut self, _attempt: usize, step: usize) {
        self.diverged += 1;
        self.bar
            .set_message(format!("({} diverged, last at step {step})", self.diverged));
    }

    fn collapsed(&mut self, attempt: usize, steps: usize) {
        self.bar
            .set_message(format!("done on attempt {attempt} after {steps} steps"));
    }
}
