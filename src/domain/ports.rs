use crate::utils::error::Result;

/// Destination for the harness's output lines.
///
/// The worker writes through the same sink from another thread, so
/// implementations must be shareable across threads and must write each
/// line atomically with respect to other lines.
pub trait OutputSink: Send + Sync + 'static {
    fn write_line(&self, line: &str) -> Result<()>;
}
