//! Entry point for the Al-Bayan reader.
//!
//! - Initialize tracing with a reloadable filter.
//! - Load user configuration from `conf/config.toml`.
//! - Build the content API client and launch the GUI.

mod app;
mod audio;
mod theme;

use crate::app::run_app;
use al_bayan_core::api::{ApiSettings, ContentSource, QuranApi};
use al_bayan_core::config::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH));
    if std::env::var_os("RUST_LOG").is_none() {
        set_log_level(reload_handle, config.log_level.as_filter_str());
    }
    info!(
        level = %config.log_level,
        api = %config.api_base_url,
        reciter_id = config.reciter_id,
        translation_id = config.translation_id,
        "Starting Al-Bayan"
    );

    let api = QuranApi::new(ApiSettings::from(&config)).context("Building content API client")?;
    let source: Arc<dyn ContentSource> = Arc::new(api);
    run_app(config, source).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
