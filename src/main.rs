use std::io;

use runtime_plots::config::StudyConfig;
use runtime_plots::pipeline::run_study;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StudyConfig::paper();
    debug!(?config, "study configuration");

    let stdout = io::stdout();
    run_study(&config, &mut stdout.lock())?;
    Ok(())
}
