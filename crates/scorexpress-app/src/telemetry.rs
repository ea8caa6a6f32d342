use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

/// Filter from `RUST_LOG` when set and valid, else the configured
/// directives.
pub fn env_filter(config: &AppConfig) -> eyre::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.log_filter)?),
    }
}

/// Install the global tracing subscriber. Fails if one is already set.
pub fn init_tracing(config: &AppConfig) -> eyre::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config)?);

    let installed = match config.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
