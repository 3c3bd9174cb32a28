use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Worker failed to complete: {0}")]
    WorkerJoinError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl HarnessError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HarnessError::IoError(_) => ErrorCategory::Output,
            HarnessError::WorkerJoinError(_) => ErrorCategory::Concurrency,
            HarnessError::ConfigError { .. }
            | HarnessError::ConfigValidationError { .. }
            | HarnessError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::Concurrency => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Every error is fatal, so this is never 0.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Output => 2,
            ErrorCategory::Concurrency => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HarnessError::IoError(e) => format!("Could not write harness output: {}", e),
            HarnessError::WorkerJoinError(e) if e.is_panic() => {
                "The worker thread panicked before finishing".to_string()
            }
            HarnessError::WorkerJoinError(_) => {
                "The worker thread was stopped before finishing".to_string()
            }
            HarnessError::ConfigError { message } => format!("Configuration problem: {}", message),
            HarnessError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            HarnessError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the --config file and command line flags, or run without them to use defaults"
            }
            ErrorCategory::Output => "Make sure standard output is open and writable",
            ErrorCategory::Concurrency => "Re-run with --inline-worker to run the worker on the main thread",
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
