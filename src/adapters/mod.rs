// Adapters layer: concrete output sinks for the harness.

pub mod output;

pub use output::{BufferSink, StdoutSink};
