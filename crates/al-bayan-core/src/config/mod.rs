//! Configuration loading for the reader.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Missing or invalid entries fall back to
//! defaults so the window can still open without network settings.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config};
pub use models::{
    ARABIC_FONT_SIZE_RANGE, AppConfig, ArabicFont, HighlightColor, LogLevel, Script,
    TRANSLATION_FONT_SIZE_RANGE, ThemeMode,
};
