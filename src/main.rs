use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use faqview::app::{App, AppEvent, DataSource};
use faqview::config::Config;
use faqview::ui;

/// Get the config directory path (~/.config/faqview/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("faqview"))
}

#[derive(Parser, Debug)]
#[command(
    name = "faqview",
    version,
    about = "Browse an FAQ collection in the terminal"
)]
struct Args {
    /// Endpoint returning the FAQ list as a JSON array (overrides config)
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Read the FAQ list from a local JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Config file (default: ~/.config/faqview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Questions per page (overrides config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout; logs go to stderr and stay quiet unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(url) = args.url {
        config.source_url = url;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = usize::from(page_size);
    }

    let source = match args.file {
        Some(path) => DataSource::File(path),
        None => DataSource::Remote {
            url: config.source_url.clone(),
            timeout: config.request_timeout(),
        },
    };
    tracing::info!(source = %source.describe(), page_size = config.page_size, "Starting faqview");

    let mut app = App::new(&config, source).context("Failed to create application")?;

    let warnings = app.keybindings.apply_overrides(&config.keybindings);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    if let Some(first) = warnings.first() {
        app.set_status(format!("Keybinding config: {}", first));
    }

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(8);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
