use crate::core::shared_lib::compute_derived;
use crate::core::static_lib::compute_base;
use crate::core::{HarnessReport, HarnessSettings, OutputSink, Result, WorkerMode};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::Validate;
use std::sync::Arc;
use tracing::Instrument;

/// Exercises both computation modules, then runs one worker and joins it.
pub struct Harness<S: OutputSink> {
    sink: Arc<S>,
    settings: HarnessSettings,
    monitor: SystemMonitor,
}

impl<S: OutputSink> Harness<S> {
    pub fn new(sink: S) -> Self {
        Self::with_settings(sink, HarnessSettings::default())
    }

    pub fn with_settings(sink: S, settings: HarnessSettings) -> Self {
        Self::new_with_monitoring(sink, settings, false)
    }

    pub fn new_with_monitoring(sink: S, settings: HarnessSettings, monitor_enabled: bool) -> Self {
        Self {
            sink: Arc::new(sink),
            settings,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn settings(&self) -> &HarnessSettings {
        &self.settings
    }

    /// Settings are validated before anything is written, so an invalid
    /// worker message fails the run with no output.
    pub async fn run(&self) -> Result<HarnessReport> {
        self.settings.validate()?;

        let run_id = format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        let span = tracing::info_span!("harness", run_id = %run_id);

        async {
            tracing::debug!("Starting harness with {:?}", self.settings);
            self.monitor.log_stats("Start");

            let derived_value = compute_derived();
            self.sink.write_line(&derived_value.to_string())?;
            tracing::debug!("Derived value: {}", derived_value);

            let base_value = compute_base();
            self.sink
                .write_line(&format!("static_lib_func() = {}", base_value))?;
            tracing::debug!("Base value: {}", base_value);

            self.monitor.log_stats("Computation");

            self.run_worker().await?;
            tracing::debug!("Worker joined ({} mode)", self.settings.worker_mode);

            self.monitor.log_final_stats();

            Ok(HarnessReport {
                run_id: run_id.clone(),
                derived_value,
                base_value,
                worker_message: self.settings.worker_message.clone(),
                worker_mode: self.settings.worker_mode,
            })
        }
        .instrument(span)
        .await
    }

    async fn run_worker(&self) -> Result<()> {
        match self.settings.worker_mode {
            WorkerMode::Inline => worker(&*self.sink, &self.settings.worker_message),
            WorkerMode::Thread => {
                let sink = Arc::clone(&self.sink);
                let message = self.settings.worker_message.clone();
                let handle =
                    tokio::task::spawn_blocking(move || worker(&*sink, &message));
                // No timeout and no cancellation: wait for the thread unconditionally.
                handle.await?
            }
        }
    }
}

fn worker<S: OutputSink + ?Sized>(sink: &S, message: &str) -> Result<()> {
    sink.write_line(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BufferSink;
    use crate::utils::error::HarnessError;

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_line(&self, _line: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into())
        }
    }

    struct PanickingWorkerSink {
        inner: BufferSink,
    }

    impl OutputSink for PanickingWorkerSink {
        fn write_line(&self, line: &str) -> Result<()> {
            if line == "boom" {
                panic!("worker exploded");
            }
            self.inner.write_line(line)
        }
    }

    #[test]
    fn test_default_run_output() {
        let sink = BufferSink::new();
        let harness = Harness::new(sink.clone());

        let report = tokio_test::block_on(harness.run()).unwrap();

        assert_eq!(sink.lines(), vec!["10", "static_lib_func() = 5", "thread run"]);
        assert_eq!(report.derived_value, 10);
        assert_eq!(report.base_value, 5);
        assert_eq!(report.worker_mode, WorkerMode::Thread);
        assert!(report.run_id.starts_with("run_"));
    }

    #[test]
    fn test_inline_mode_matches_thread_mode() {
        let threaded = BufferSink::new();
        let inline = BufferSink::new();

        tokio_test::block_on(Harness::new(threaded.clone()).run()).unwrap();
        let settings = HarnessSettings {
            worker_mode: WorkerMode::Inline,
            ..Default::default()
        };
        tokio_test::block_on(Harness::with_settings(inline.clone(), settings).run()).unwrap();

        assert_eq!(threaded.lines(), inline.lines());
    }

    #[test]
    fn test_custom_worker_message() {
        let sink = BufferSink::new();
        let settings = HarnessSettings {
            worker_message: "worker done".to_string(),
            ..Default::default()
        };

        let report = tokio_test::block_on(Harness::with_settings(sink.clone(), settings).run())
            .unwrap();

        assert_eq!(sink.lines().last().map(String::as_str), Some("worker done"));
        assert_eq!(report.worker_message, "worker done");
    }

    #[test]
    fn test_invalid_worker_message_fails_before_output() {
        for message in ["", "thread\nrun"] {
            let sink = BufferSink::new();
            let settings = HarnessSettings {
                worker_message: message.to_string(),
                ..Default::default()
            };

            let err = tokio_test::block_on(Harness::with_settings(sink.clone(), settings).run())
                .unwrap_err();

            assert!(matches!(err, HarnessError::InvalidConfigValueError { .. }));
            assert!(sink.lines().is_empty());
        }
    }

    #[test]
    fn test_sink_failure_is_io_error() {
        let harness = Harness::new(FailingSink);
        let err = tokio_test::block_on(harness.run()).unwrap_err();
        assert!(matches!(err, HarnessError::IoError(_)));
    }

    #[test]
    fn test_worker_panic_surfaces_as_join_error() {
        let inner = BufferSink::new();
        let settings = HarnessSettings {
            worker_message: "boom".to_string(),
            worker_mode: WorkerMode::Thread,
        };
        let harness = Harness::with_settings(PanickingWorkerSink { inner: inner.clone() }, settings);

        let err = tokio_test::block_on(harness.run()).unwrap_err();

        match err {
            HarnessError::WorkerJoinError(join_err) => assert!(join_err.is_panic()),
            other => panic!("unexpected error: {other:?}"),
        }
        // Main sequence output was written before the worker started.
        assert_eq!(inner.lines(), vec!["10", "static_lib_func() = 5"]);
    }
}
