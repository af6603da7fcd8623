use std::io;

use anyhow::Result;
use blog_core::BlogClient;
use blog_probe::{run_demo, Cli, Probe, UreqTransport};
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "blog_probe=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.base_url, "starting demonstration");

    let client = BlogClient::new(&cli.base_url);
    let mut probe = Probe::new(client, UreqTransport::new(), io::stdout().lock());
    let report = run_demo(&mut probe)?;

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "demonstration finished"
    );
    Ok(())
}
