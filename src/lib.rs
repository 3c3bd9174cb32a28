pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ResolvedConfig};

pub use adapters::{BufferSink, StdoutSink};
pub use config::TomlConfig;
pub use crate::core::{
    harness::Harness,
    shared_lib::{compute_derived, SharedLib, SHARED_COUNTER},
    static_lib::{compute_base, BASE_VALUE},
};
pub use domain::model::{HarnessReport, HarnessSettings, WorkerMode};
pub use domain::ports::OutputSink;
pub use utils::error::{HarnessError, Result};
