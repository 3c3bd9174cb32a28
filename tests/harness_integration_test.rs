use anyhow::Result;
use compose_harness::{
    compute_base, compute_derived, BufferSink, Harness, HarnessSettings, SharedLib, TomlConfig,
    WorkerMode,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_harness_prints_derived_base_then_worker() -> Result<()> {
    let sink = BufferSink::new();
    let harness = Harness::new(sink.clone());

    let report = harness.run().await?;

    assert_eq!(sink.contents(), "10\nstatic_lib_func() = 5\nthread run\n");
    assert_eq!(report.derived_value, compute_derived());
    assert_eq!(report.base_value, compute_base());
    assert_eq!(report.derived_value, 2 * report.base_value);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_repeated_runs_are_identical() -> Result<()> {
    let mut outputs = Vec::new();
    for _ in 0..5 {
        let sink = BufferSink::new();
        Harness::new(sink.clone()).run().await?;
        outputs.push(sink.contents());
    }

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[tokio::test]
async fn test_settings_from_config_file_drive_the_run() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        br#"
[harness]
worker_message = "worker finished"
worker_mode = "inline"
"#,
    )?;

    let config = TomlConfig::from_file(config_file.path())?;
    let settings = config.harness_settings();
    assert_eq!(settings.worker_mode, WorkerMode::Inline);

    let sink = BufferSink::new();
    let report = Harness::with_settings(sink.clone(), settings).run().await?;

    assert_eq!(
        sink.lines(),
        vec!["10", "static_lib_func() = 5", "worker finished"]
    );
    assert_eq!(report.worker_mode, WorkerMode::Inline);
    Ok(())
}

#[tokio::test]
async fn test_each_run_owns_its_worker() -> Result<()> {
    let sink = BufferSink::new();
    let harness = Harness::with_settings(sink.clone(), HarnessSettings::default());

    harness.run().await?;
    harness.run().await?;

    let workers = sink.lines().iter().filter(|l| *l == "thread run").count();
    assert_eq!(workers, 2);
    Ok(())
}

#[test]
fn test_shared_lib_is_constructible() {
    let _lib = SharedLib::new();
    assert_eq!(compute_derived(), 10);
}
