//! Progress bar tracking generation steps

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::algorithm::Algorithm;
use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::spatial::Grid;

static BOUNDED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} steps")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static UNBOUNDED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg} {pos} steps [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Advances a progress bar once per generation step
///
/// The bar length comes from `Algorithm::expected_steps`; division has no
/// known length and shows a running count instead.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr
    pub fn new(algorithm: Algorithm, width: usize, height: usize) -> Self {
        Self::with_target(
            algorithm,
            algorithm.expected_steps(width, height),
            ProgressDrawTarget::stderr(),
        )
    }

    /// Create a reporter that draws nothing
    pub fn hidden(algorithm: Algorithm) -> Self {
        Self::with_target(algorithm, None, ProgressDrawTarget::hidden())
    }

    fn with_target(
        algorithm: Algorithm,
        expected: Option<usize>,
        target: ProgressDrawTarget,
    ) -> Self {
        let bar = match expected {
            Some(len) => {
                let bar = ProgressBar::with_draw_target(Some(len as u64), target);
                bar.set_style(BOUNDED_STYLE.clone());
                bar
            }
            None => {
                let bar = ProgressBar::with_draw_target(None, target);
                bar.set_style(UNBOUNDED_STYLE.clone());
                bar
            }
        };
        bar.set_message(format!("{algorithm:?}"));
        Self { bar }
    }

    /// Steps counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl StepObserver for ProgressReporter {
    fn on_step(&mut self, _grid: &Grid) -> Result<()> {
        self.bar.inc(1);
        Ok(())
    }
}
