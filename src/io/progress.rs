//! Batch progress display for multi-sprite runs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::{MIN_PROGRESS_BATCH, PROGRESS_BAR_WIDTH};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Sprites: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many sprites of a batch have been produced
///
/// Single-sprite runs get no bar at all to keep terminal output quiet.
#[derive(Debug, Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    skipped: usize,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the display for `sprite_count` sprites
    pub fn initialize(&mut self, sprite_count: usize) {
        self.completed = 0;
        self.skipped = 0;
        self.bar = (sprite_count >= MIN_PROGRESS_BATCH).then(|| {
            let bar = ProgressBar::new(sprite_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
    }

    /// Record a written sprite
    pub fn complete_sprite(&mut self, name: &str) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Record a sprite whose file already existed
    pub fn skip_sprite(&mut self, name: &str) {
        self.skipped += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("skipped {name}"));
            bar.inc(1);
        }
    }

    /// Sprites written so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Sprites skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "{} written, {} skipped",
                self.completed, self.skipped
            ));
        }
    }
}
