use anyhow::Result;
use lazytodo::commands::Cli;
use lazytodo::libs::config::{Config, DEFAULT_LOG_LEVEL};
use lazytodo::libs::messages::macros::is_debug_mode;
use lazytodo::libs::messages::Message;
use lazytodo::msg_error_anyhow;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let (config, config_error) = match Config::read() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_tracing(&config)?;
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Configuration could not be read, using defaults");
    }

    Cli::menu(&config)
}

/// Filter precedence: `LAZYTODO_DEBUG` (debug), then `RUST_LOG`, then `log.level`.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = if is_debug_mode() {
        EnvFilter::new("debug")
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|raw| {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                EnvFilter::try_new(raw).ok()
            })
            .unwrap_or_else(|| EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)))
    };

    let file_layer = match &config.log.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| msg_error_anyhow!(Message::LogFileUnavailable(path.display().to_string(), e.to_string())))?;
            Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(())
}
