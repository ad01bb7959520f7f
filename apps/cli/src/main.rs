mod config;
mod main_lib;
mod session;

use config::Config;
use healthhub_core::registry::Registry;
use main_lib::init_tracing;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    tracing::info!("=== HealthHub session ===");
    let registry = Registry::install_global(Registry::new())?;
    session::run(registry, &config)?;
    Ok(())
}
