use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;
use ws_probe::{Probe, ProbeConfig};

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let mut probe = Probe::new(ProbeConfig::default());
    probe.run(&mut std::io::stdout()).await;

    Ok(())
}
