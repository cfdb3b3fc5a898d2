//! health-runner
//!
//! Runs the HTTP and TCP checks declared in a monitor file, one after another,
//! and posts a summary of every result to a webhook.
//!
//! # Architecture Overview
//!
//! ```text
//!   monitor.yml ──▶ config ──▶ Vec<CheckSpec>
//!                                   │
//!                                   ▼
//!                  ┌──────────────────────────────────┐
//!                  │ runner (sequential)              │
//!                  │   probe ──▶ check ──▶ report     │──▶ console notices
//!                  └──────────────────────────────────┘
//!                                   │
//!                                   ▼
//!                     notify::payload ──▶ webhook POST
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use health_runner::check::CheckSpec;
use health_runner::config::load_config;
use health_runner::notify::{AlertSink, StdoutSink, WebhookNotifier};
use health_runner::observability::logging;
use health_runner::probe::ProbeExecutor;
use health_runner::{Report, RunError, Runner};

#[derive(Parser)]
#[command(name = "health-runner")]
#[command(
    about = "Run HTTP and TCP health checks and post the results to a webhook",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Monitor file (.yml, .yaml or .toml)
    #[arg(short, long, default_value = "monitor.yml")]
    file: PathBuf,

    /// Log request URLs and response bodies
    #[arg(short, long)]
    verbose: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the JSON report to a file ("-" for stdout)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the alert payload instead of posting it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Reject flag combinations that would mix two documents on stdout.
    fn validate(&self) -> Result<(), clap::Error> {
        let report_to_stdout = self.report.as_deref() == Some(Path::new("-"));
        if self.dry_run && report_to_stdout {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--dry-run prints the alert to stdout; write --report to a file instead",
            ));
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }

    let loaded = load_config(&cli.file).map_err(RunError::from)?;
    let mut monitor = loaded.monitor;
    monitor.verbose |= cli.verbose;
    monitor.insecure |= cli.insecure;

    logging::init(
        &logging::filter_for(cli.log_level.as_deref(), monitor.verbose),
        monitor.verbose,
    );

    tracing::info!(
        file = %cli.file.display(),
        checks = loaded.checks.len(),
        timeout_secs = monitor.timeout_secs,
        insecure = monitor.insecure,
        "Configuration loaded"
    );

    let executor = ProbeExecutor::new(monitor.probe_settings()).map_err(RunError::from)?;

    let report = if cli.dry_run {
        run(executor, StdoutSink, &monitor.alert_title, &loaded.checks).await?
    } else {
        let notifier = WebhookNotifier::new(&monitor.webhook_url, monitor.timeout())
            .map_err(RunError::from)?;
        run(executor, notifier, &monitor.alert_title, &loaded.checks).await?
    };

    if let Some(path) = &cli.report {
        write_report(&report, path)?;
    }

    Ok(())
}

async fn run<S: AlertSink>(
    executor: ProbeExecutor,
    sink: S,
    title: &str,
    checks: &[CheckSpec],
) -> Result<Report, RunError> {
    Runner::new(executor, sink, title).run(checks).await
}

fn write_report(report: &Report, path: &Path) -> Result<(), RunError> {
    let json = report.to_json_pretty()?;
    if path == Path::new("-") {
        println!("{}", json);
    } else {
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Report written");
    }
    Ok(())
}
