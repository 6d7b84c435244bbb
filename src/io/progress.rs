//! Progress display for batch rendering
//!
//! Small batches get one bar per request showing its output stages; larger
//! batches add an overall bar and only the most recent requests stay visible.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one request: name, finished stages, total stages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    /// File name shown next to the bar
    pub name: String,
    /// Stages written so far
    pub stage: usize,
    /// Stages this request produces
    pub stages: usize,
}

/// Coordinates progress bars for a batch of requests
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    request_bars: Vec<ProgressBar>,
    states: Vec<RequestState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:20.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Requests: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            request_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Create the bars for a batch of `request_count` requests
    pub fn initialize(&mut self, request_count: usize) {
        if request_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(request_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..request_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STAGE_STYLE.clone());
            self.request_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register the request at `index`
    pub fn start_request(&mut self, index: usize, path: &Path, stages: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.states.len() {
            self.states.resize(index + 1, RequestState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = RequestState {
                name,
                stage: 0,
                stages,
            };
        }
        self.update_bars();
    }

    /// Record one more written output for the request at `index`
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.stage = (state.stage + 1).min(state.stages);
        }
        self.update_bars();
    }

    /// Mark the request at `index` as done
    pub fn complete_request(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {} ({} ms)", state.name, elapsed.as_millis());
            state.stage = state.stages;
        }
        self.update_bars();
    }

    /// Current state of the request at `index`
    pub fn state(&self, index: usize) -> Option<&RequestState> {
        self.states.get(index)
    }

    /// Number of per-request bars in use
    pub fn visible_bars(&self) -> usize {
        self.request_bars.len()
    }

    /// Whether an overall batch bar is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Clear every bar
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All requests rendered");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent requests on the available bars
    fn update_bars(&self) {
        let active: Vec<&RequestState> = self
            .states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.request_bars.iter().zip(visible) {
            bar.set_length(state.stages as u64);
            bar.set_position(state.stage as u64);
            bar.set_message(format!("{}/{}", state.stage, state.stages));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.request_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
