use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writes each line to the process's standard output and flushes it.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contents(&self) -> String {
        self.lines()
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
        Ok(())
    }
}
