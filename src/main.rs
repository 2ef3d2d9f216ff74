//! # authpanel Main Entry Point

use anyhow::{Context, Result};
use authpanel::cmd_args::CommandLineArgs;
use authpanel::config::{AppConfig, LOG_LEVEL_ENV_VAR};
use authpanel::{AppController, TerminalInputSource, TerminalSurface, TextTable};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const QUIET_CRATES: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_util",
    "tokio_rustls",
    "rustls",
    "tower",
    "mio",
];

fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_env(LOG_LEVEL_ENV_VAR);
    for krate in QUIET_CRATES {
        filter = filter.add_directive(format!("{krate}=warn").parse()?);
    }
    Ok(filter)
}

/// Log to `log_file` when given, otherwise to stderr
fn init_tracing_subscriber(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_timer(ChronoLocal::rfc_3339());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.log_file())?;

    let config = AppConfig::load(&args)?;
    let texts = TextTable::load(config.texts_path.as_deref())?;
    let surface = TerminalSurface::new(config.resolution.logical_size())?;

    let mut app = AppController::with_io(&config, texts, TerminalInputSource::new(), surface)?;
    app.run().await
}
