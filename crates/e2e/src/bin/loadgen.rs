//! Load generator for the login-and-order flow.
//!
//! Replays the scenario with concurrent virtual users against per-iteration
//! mocked pages. Run with: cargo run --package pizzasim-e2e --bin loadgen

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pizzasim_e2e::run_load;

#[derive(Parser, Debug)]
#[command(name = "loadgen")]
#[command(about = "Login-and-order load scenario runner")]
struct Args {
    /// Number of concurrent virtual users
    #[arg(short, long, default_value = "10")]
    vus: usize,

    /// Iterations per virtual user
    #[arg(short, long, default_value = "5")]
    iterations: usize,

    /// Log filter (e.g. "info" or "pizzasim_mock=debug")
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    info!(vus = args.vus, iterations = args.iterations, "starting load run");
    let report = run_load(args.vus, args.iterations).await?;
    info!(
        completed = report.completed,
        failed = report.failed,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "load run finished"
    );

    if report.failed > 0 {
        anyhow::bail!("{} iterations failed", report.failed);
    }
    Ok(())
}
