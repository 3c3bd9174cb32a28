use clap::Parser;
use compose_harness::utils::{error::HarnessError, logger};
use compose_harness::{CliConfig, Harness, StdoutSink};

fn fail(e: &HarnessError) -> ! {
    tracing::error!(
        "❌ Harness failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let resolved = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    logger::init_cli_logger(resolved.verbose, resolved.log_level.as_deref());
    tracing::info!("Starting compose-harness");
    tracing::debug!("Resolved config: {:?}", resolved);

    if resolved.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let harness =
        Harness::new_with_monitoring(StdoutSink::new(), resolved.settings, resolved.monitor);

    match harness.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Harness completed (run {}, worker joined in {} mode)",
                report.run_id,
                report.worker_mode
            );
        }
        Err(e) => fail(&e),
    }
}
