//! Logger Module
//!
//! A logging setup based on `tracing-subscriber` with support for:
//! - Console output (stderr) with color control
//! - File output
//! - Full, compact and JSON line formats

pub mod config;
pub mod error;
pub(crate) mod writer;


// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync + 'static>;

/// Initialize the global logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // The file layer must come BEFORE the console layer, otherwise span fields
    // formatted with ANSI codes by the console layer leak into the file.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.file.enabled {
        layers.push(file_layer(&config.file, config.format)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console, config.format));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()?;

    Ok(())
}

fn console_layer(config: &ConsoleConfig, format: LogFormat) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    let layer = fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn file_layer(config: &FileConfig, format: LogFormat) -> Result<BoxedLayer, LoggerError> {
    let writer = Mutex::new(writer::open_log_file(config)?);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    Ok(match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    })
}
