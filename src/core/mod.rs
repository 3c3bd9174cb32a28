pub mod harness;
pub mod shared_lib;
pub mod static_lib;

pub use crate::domain::model::{HarnessReport, HarnessSettings, WorkerMode};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
