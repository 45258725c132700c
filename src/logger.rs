use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "NEARBY_CUSTOMERS_LOG";

/// Log to stderr. Quiet (`warn`) unless `verbose`, so normal runs keep
/// stderr free for error messages.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose { "nearby_customers=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

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
