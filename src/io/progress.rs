//! Progress bars for render passes

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per render pass
///
/// A hidden manager hands out hidden bars, so callers never branch on
/// whether progress is shown.
pub struct ProgressManager {
    multi_progress: Option<MultiProgress>,
    bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to the terminal
    pub fn new() -> Self {
        Self {
            multi_progress: Some(MultiProgress::new()),
            bars: Vec::new(),
        }
    }

    /// Create a manager that draws nothing
    pub const fn hidden() -> Self {
        Self {
            multi_progress: None,
            bars: Vec::new(),
        }
    }

    /// Whether bars are drawn
    pub const fn is_visible(&self) -> bool {
        self.multi_progress.is_some()
    }

    /// Add a bar for a render pass named `label`
    pub fn start_pass(&mut self, label: &str) -> ProgressBar {
        let Some(multi_progress) = &self.multi_progress else {
            return ProgressBar::hidden();
        };

        let bar = multi_progress.add(ProgressBar::new(0));
        bar.set_style(PASS_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bars.push(bar.clone());
        bar
    }

    /// Number of passes started
    pub fn pass_count(&self) -> usize {
        self.bars.len()
    }

    /// Mark every pass finished and clear the display
    pub fn finish(&self) {
        for bar in &self.bars {
            if !bar.is_finished() {
                bar.finish_with_message("done");
            }
        }
        if let Some(multi_progress) = &self.multi_progress {
            let _ = multi_progress.clear();
        }
    }
}
