use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_single_line, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKER_MESSAGE: &str = "thread run";

/// How the harness runs its single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerMode {
    /// Dedicated thread, joined before the run completes.
    #[default]
    Thread,
    /// Worker body runs synchronously on the caller.
    Inline,
}

impl std::fmt::Display for WorkerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerMode::Thread => write!(f, "thread"),
            WorkerMode::Inline => write!(f, "inline"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessSettings {
    pub worker_message: String,
    pub worker_mode: WorkerMode,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            worker_message: DEFAULT_WORKER_MESSAGE.to_string(),
            worker_mode: WorkerMode::default(),
        }
    }
}

impl Validate for HarnessSettings {
    /// The worker message is written as one output line, so it must be a
    /// non-blank single line.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("harness.worker_message", &self.worker_message)?;
        validate_single_line("harness.worker_message", &self.worker_message)
    }
}

/// What a single harness run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    pub run_id: String,
    pub derived_value: i32,
    pub base_value: i32,
    pub worker_message: String,
    pub worker_mode: WorkerMode,
}
