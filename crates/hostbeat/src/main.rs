//! hostbeat agent
//!
//! Samples host state on a fixed interval, diffs each sample against the
//! previous one and reports changed fields to the collector.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use hostbeat::agent::Agent;
use hostbeat::config::AgentConfig;
use hostbeat::signals;
use hostbeat_client::Reporter;
use hostbeat_pkg::{DpkgInventory, PackageInventory};
use hostbeat_sampler::{Sampler, SystemSampler};

#[derive(Parser)]
#[command(name = "hostbeat")]
#[command(about = "Host change-reporting agent", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Take a single snapshot, print it as JSON and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::load_default()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let inventory: Arc<dyn PackageInventory> = Arc::new(DpkgInventory::local());
    let sampler: Arc<dyn Sampler> =
        Arc::new(SystemSampler::new(inventory, config.inventory_policy));

    if cli.once {
        let snapshot = sampler.sample().await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let reporter = Reporter::new(&config.collector_url, config.probe_timeout())?;

    let shutdown = CancellationToken::new();
    tokio::spawn(signals::cancel_on_signal(shutdown.clone()));

    let mut agent = Agent::new(sampler, reporter, config.interval());
    agent.run(shutdown).await?;

    Ok(())
}
