//! Application state (Model in TEA pattern)

use sysdeck_core::{AppPhase, EnvVar};

/// Resting label of every copy control
pub const COPY_LABEL: &str = "Copy";
/// Feedback label shown while a copy's feedback window is active
pub const COPIED_LABEL: &str = "Copied!";

/// Render state for one addressable display region.
///
/// A region is in exactly one of three states and only moves forward:
/// `Pending` until its loader completes, then `Populated` or `Failed`.
/// Nothing resets a region back to `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Region {
    /// Not yet requested, or requested and never answered
    #[default]
    Pending,
    /// Loader completed; holds the exact display text
    Populated(String),
    /// Loader failed; holds the failure message
    Failed(String),
}

impl Region {
    pub fn is_pending(&self) -> bool {
        matches!(self, Region::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Region::Failed(_))
    }

    /// The populated display text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Region::Populated(text) => Some(text),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Region::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Transient copy feedback on one row.
///
/// `original_label` is the label captured when the first un-reset copy cycle
/// began; re-entrant copies keep it rather than capturing the feedback
/// label. `generation` invalidates the reset scheduled by any earlier copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    pub original_label: String,
    pub generation: u64,
}

/// One rendered environment entry with its copy control.
///
/// The value is captured from the fetched map when the row is built; later
/// changes to any source data cannot reach an already-rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRow {
    pub key: String,
    pub value: String,
    pub copy_label: String,
    pub feedback: Option<CopyFeedback>,
}

impl EnvRow {
    pub fn new(var: EnvVar) -> Self {
        Self {
            key: var.key,
            value: var.value,
            copy_label: COPY_LABEL.to_string(),
            feedback: None,
        }
    }

    /// Row text, e.g. `HOME = /home/user`.
    pub fn display_text(&self) -> String {
        format!("{} = {}", self.key, self.value)
    }

    /// Start (or restart) the copy feedback window.
    ///
    /// Returns the new feedback generation; only the reset scheduled with
    /// this generation will eventually restore the label.
    pub fn begin_feedback(&mut self) -> u64 {
        let generation = self.feedback.as_ref().map_or(1, |f| f.generation + 1);
        let original_label = match self.feedback.take() {
            // Re-entrant copy: keep the pre-feedback label, never "Copied!"
            Some(feedback) => feedback.original_label,
            None => self.copy_label.clone(),
        };

        self.feedback = Some(CopyFeedback {
            original_label,
            generation,
        });
        self.copy_label = COPIED_LABEL.to_string();
        generation
    }

    /// Finish the feedback window scheduled as `generation`.
    ///
    /// Stale generations (a newer copy replaced the window) are ignored.
    /// Returns whether the label was restored.
    pub fn end_feedback(&mut self, generation: u64) -> bool {
        match self.feedback.take() {
            Some(feedback) if feedback.generation == generation => {
                self.copy_label = feedback.original_label;
                true
            }
            // A newer copy owns the window; leave it in place.
            stale => {
                self.feedback = stale;
                false
            }
        }
    }

    /// Whether the feedback window is currently active.
    pub fn feedback_active(&self) -> bool {
        self.feedback.is_some()
    }
}

/// Load state of the environment region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvPhase {
    /// Not yet requested, or requested and never answered
    #[default]
    Pending,
    /// At least one fetch succeeded; rows are populated
    Populated,
    /// The fetch failed; the region shows one error block
    Failed(String),
}

/// The environment region: fetched rows plus the row selection
#[derive(Debug, Clone, Default)]
pub struct EnvPanel {
    pub phase: EnvPhase,
    pub rows: Vec<EnvRow>,
    pub selected: usize,
}

impl EnvPanel {
    /// Append one row per entry, preserving the given order.
    ///
    /// Append-only on purpose: a duplicate readiness dispatch duplicates all
    /// rows rather than replacing them, matching the one-shot lifecycle this
    /// region was built around.
    pub fn append(&mut self, envs: Vec<EnvVar>) {
        self.rows.extend(envs.into_iter().map(EnvRow::new));
        self.phase = EnvPhase::Populated;
    }

    /// Record a fetch failure; the region renders one error block.
    pub fn fail(&mut self, message: String) {
        self.phase = EnvPhase::Failed(message);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// The selected row's index and captured value, if any row exists.
    pub fn selected_value(&self) -> Option<(usize, String)> {
        self.rows
            .get(self.selected)
            .map(|row| (self.selected, row.value.clone()))
    }
}

/// Application state (the TEA model)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub os_region: Region,
    pub app_region: Region,
    pub env: EnvPanel,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
