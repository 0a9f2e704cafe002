use anyhow::Result;
use clap::Parser;
use tracing::info;

use http_frequency::config::{DEFAULT_CONCURRENCY, DEFAULT_METHOD, DEFAULT_TIMEOUT_SECS};
use http_frequency::{ProbeOptions, input, report, run_probe};

/// Probe HTTP(S) endpoints concurrently and rank them by latency.
#[derive(Parser)]
#[command(name = "http-frequency", version, about)]
struct Cli {
    /// Target URLs; read from stdin, one per line, when omitted.
    /// Scheme-less targets default to https://.
    targets: Vec<String>,

    /// Maximum number of simultaneously in-flight requests
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: f64,

    /// HTTP method applied to every target
    #[arg(short, long, default_value = DEFAULT_METHOD)]
    method: String,

    /// Emit results as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("http_frequency=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = ProbeOptions::from_args(cli.concurrency, cli.timeout, &cli.method)?;

    let targets = input::collect_targets(&cli.targets)?;
    if targets.is_empty() {
        eprintln!("no targets given, nothing to do");
        return Ok(());
    }

    info!(
        targets = targets.len(),
        concurrency = opts.concurrency,
        timeout_s = opts.timeout.as_secs_f64(),
        method = %opts.method,
        "starting probe run"
    );

    let results = run_probe(&targets, &opts).await?;

    if cli.json {
        println!("{}", report::render_json(&results)?);
    } else {
        print!("{}", report::render(&results));
    }

    Ok(())
}
