use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the log filter directive. `RUST_LOG` wins over everything else.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "compose_harness=debug,info".to_string(),
        (false, Some(level)) => format!("compose_harness={}", level),
        (false, None) => "compose_harness=info".to_string(),
    }
}

/// Logs go to stderr so the harness output on stdout stays byte-for-byte stable.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let directive = default_directive(verbose, level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
