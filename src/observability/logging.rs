//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Resolve the log filter from the environment or the CLI
//! - Keep verbose probe output enabled whatever the base level is

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither RUST_LOG nor a level is given.
pub const DEFAULT_FILTER: &str = "health_runner=info";

/// Directive enabling verbose probe output (URLs and response bodies).
pub const VERBOSE_DIRECTIVE: &str = "health_runner::probe=debug";

/// Filter directive for an explicit level, e.g. `debug` → `health_runner=debug`.
pub fn filter_for(level: Option<&str>, verbose: bool) -> String {
    match (level, verbose) {
        (Some(level), _) => format!("health_runner={}", level),
        (None, true) => "health_runner=debug".to_string(),
        (None, false) => DEFAULT_FILTER.to_string(),
    }
}

/// Add the verbose probe directive to `filter` when `verbose` is set.
pub fn with_verbose(filter: EnvFilter, verbose: bool) -> EnvFilter {
    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Build the process filter. RUST_LOG takes precedence over `fallback`.
pub fn build_filter(fallback: &str, verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    with_verbose(filter, verbose)
}

/// Install the global subscriber.
pub fn init(fallback: &str, verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(fallback, verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
