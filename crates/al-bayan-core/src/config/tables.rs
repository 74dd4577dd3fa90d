use super::defaults;
use super::models::{AppConfig, ArabicFont, HighlightColor, LogLevel, Script, ThemeMode};
use serde::{Deserialize, Serialize};

/// On-disk layout of `conf/config.toml`, grouped into tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    api: ApiConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            script: tables.appearance.script,
            arabic_font: tables.appearance.arabic_font,
            arabic_font_size: tables.appearance.arabic_font_size,
            translation_font_size: tables.appearance.translation_font_size,
            day_highlight: tables.appearance.day_highlight,
            night_highlight: tables.appearance.night_highlight,
            show_translation: tables.reading.show_translation,
            auto_scroll: tables.reading.auto_scroll,
            show_sidebar: tables.ui.show_sidebar,
            show_settings: tables.ui.show_settings,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            reciter_id: tables.audio.reciter_id,
            auto_advance: tables.audio.auto_advance,
            featured_reciters: tables.audio.featured_reciters,
            featured_style: tables.audio.featured_style,
            api_base_url: tables.api.base_url,
            audio_base_url: tables.api.audio_base_url,
            translation_id: tables.api.translation_id,
            translation_language: tables.api.translation_language,
            verses_per_page: tables.api.verses_per_page,
            request_timeout_secs: tables.api.request_timeout_secs,
            key_toggle_play_pause: tables.keys.toggle_play_pause,
            key_next_verse: tables.keys.next_verse,
            key_prev_verse: tables.keys.prev_verse,
            key_toggle_settings: tables.keys.toggle_settings,
            key_toggle_sidebar: tables.keys.toggle_sidebar,
            key_safe_quit: tables.keys.safe_quit,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default)]
    script: Script,
    #[serde(default)]
    arabic_font: ArabicFont,
    #[serde(default = "defaults::default_arabic_font_size")]
    arabic_font_size: u32,
    #[serde(default = "defaults::default_translation_font_size")]
    translation_font_size: u32,
    #[serde(default = "defaults::default_day_highlight")]
    day_highlight: HighlightColor,
    #[serde(default = "defaults::default_night_highlight")]
    night_highlight: HighlightColor,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            script: Script::default(),
            arabic_font: ArabicFont::default(),
            arabic_font_size: defaults::default_arabic_font_size(),
            translation_font_size: defaults::default_translation_font_size(),
            day_highlight: defaults::default_day_highlight(),
            night_highlight: defaults::default_night_highlight(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_show_translation")]
    show_translation: bool,
    #[serde(default = "defaults::default_auto_scroll")]
    auto_scroll: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            show_translation: defaults::default_show_translation(),
            auto_scroll: defaults::default_auto_scroll(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_show_sidebar")]
    show_sidebar: bool,
    #[serde(default = "defaults::default_show_settings")]
    show_settings: bool,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_sidebar: defaults::default_show_sidebar(),
            show_settings: defaults::default_show_settings(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AudioConfig {
    #[serde(default = "defaults::default_reciter_id")]
    reciter_id: u32,
    #[serde(default = "defaults::default_auto_advance")]
    auto_advance: bool,
    #[serde(default = "defaults::default_featured_reciters")]
    featured_reciters: Vec<u32>,
    #[serde(default = "defaults::default_featured_style")]
    featured_style: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            reciter_id: defaults::default_reciter_id(),
            auto_advance: defaults::default_auto_advance(),
            featured_reciters: defaults::default_featured_reciters(),
            featured_style: defaults::default_featured_style(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ApiConfig {
    #[serde(default = "defaults::default_api_base_url")]
    base_url: String,
    #[serde(default = "defaults::default_audio_base_url")]
    audio_base_url: String,
    #[serde(default = "defaults::default_translation_id")]
    translation_id: u32,
    #[serde(default = "defaults::default_translation_language")]
    translation_language: String,
    #[serde(default = "defaults::default_verses_per_page")]
    verses_per_page: u32,
    #[serde(default = "defaults::default_request_timeout_secs")]
    request_timeout_secs: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: defaults::default_api_base_url(),
            audio_base_url: defaults::default_audio_base_url(),
            translation_id: defaults::default_translation_id(),
            translation_language: defaults::default_translation_language(),
            verses_per_page: defaults::default_verses_per_page(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_play_pause")]
    toggle_play_pause: String,
    #[serde(default = "defaults::default_key_next_verse")]
    next_verse: String,
    #[serde(default = "defaults::default_key_prev_verse")]
    prev_verse: String,
    #[serde(default = "defaults::default_key_toggle_settings")]
    toggle_settings: String,
    #[serde(default = "defaults::default_key_toggle_sidebar")]
    toggle_sidebar: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_play_pause: defaults::default_key_toggle_play_pause(),
            next_verse: defaults::default_key_next_verse(),
            prev_verse: defaults::default_key_prev_verse(),
            toggle_settings: defaults::default_key_toggle_settings(),
            toggle_sidebar: defaults::default_key_toggle_sidebar(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
