use serde::{Deserialize, Serialize};

pub const ARABIC_FONT_SIZE_RANGE: (u32, u32) = (20, 60);
pub const TRANSLATION_FONT_SIZE_RANGE: (u32, u32) = (12, 32);
const VERSES_PER_PAGE_RANGE: (u32, u32) = (1, 300);
const REQUEST_TIMEOUT_RANGE: (f32, f32) = (1.0, 60.0);

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub script: Script,
    #[serde(default)]
    pub arabic_font: ArabicFont,
    #[serde(default = "crate::config::defaults::default_arabic_font_size")]
    pub arabic_font_size: u32,
    #[serde(default = "crate::config::defaults::default_translation_font_size")]
    pub translation_font_size: u32,
    #[serde(default = "crate::config::defaults::default_show_translation")]
    pub show_translation: bool,
    #[serde(default = "crate::config::defaults::default_day_highlight")]
    pub day_highlight: HighlightColor,
    #[serde(default = "crate::config::defaults::default_night_highlight")]
    pub night_highlight: HighlightColor,
    #[serde(default = "crate::config::defaults::default_auto_scroll")]
    pub auto_scroll: bool,
    #[serde(default = "crate::config::defaults::default_auto_advance")]
    pub auto_advance: bool,
    #[serde(default = "crate::config::defaults::default_show_sidebar")]
    pub show_sidebar: bool,
    #[serde(default = "crate::config::defaults::default_show_settings")]
    pub show_settings: bool,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_reciter_id")]
    pub reciter_id: u32,
    #[serde(default = "crate::config::defaults::default_featured_reciters")]
    pub featured_reciters: Vec<u32>,
    #[serde(default = "crate::config::defaults::default_featured_style")]
    pub featured_style: String,
    #[serde(default = "crate::config::defaults::default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "crate::config::defaults::default_audio_base_url")]
    pub audio_base_url: String,
    #[serde(default = "crate::config::defaults::default_translation_id")]
    pub translation_id: u32,
    #[serde(default = "crate::config::defaults::default_translation_language")]
    pub translation_language: String,
    #[serde(default = "crate::config::defaults::default_verses_per_page")]
    pub verses_per_page: u32,
    #[serde(default = "crate::config::defaults::default_request_timeout_secs")]
    pub request_timeout_secs: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_play_pause")]
    pub key_toggle_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_next_verse")]
    pub key_next_verse: String,
    #[serde(default = "crate::config::defaults::default_key_prev_verse")]
    pub key_prev_verse: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_settings")]
    pub key_toggle_settings: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_sidebar")]
    pub key_toggle_sidebar: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            script: Script::Uthmani,
            arabic_font: ArabicFont::default(),
            arabic_font_size: crate::config::defaults::default_arabic_font_size(),
            translation_font_size: crate::config::defaults::default_translation_font_size(),
            show_translation: crate::config::defaults::default_show_translation(),
            day_highlight: crate::config::defaults::default_day_highlight(),
            night_highlight: crate::config::defaults::default_night_highlight(),
            auto_scroll: crate::config::defaults::default_auto_scroll(),
            auto_advance: crate::config::defaults::default_auto_advance(),
            show_sidebar: crate::config::defaults::default_show_sidebar(),
            show_settings: crate::config::defaults::default_show_settings(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            reciter_id: crate::config::defaults::default_reciter_id(),
            featured_reciters: crate::config::defaults::default_featured_reciters(),
            featured_style: crate::config::defaults::default_featured_style(),
            api_base_url: crate::config::defaults::default_api_base_url(),
            audio_base_url: crate::config::defaults::default_audio_base_url(),
            translation_id: crate::config::defaults::default_translation_id(),
            translation_language: crate::config::defaults::default_translation_language(),
            verses_per_page: crate::config::defaults::default_verses_per_page(),
            request_timeout_secs: crate::config::defaults::default_request_timeout_secs(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_next_verse: crate::config::defaults::default_key_next_verse(),
            key_prev_verse: crate::config::defaults::default_key_prev_verse(),
            key_toggle_settings: crate::config::defaults::default_key_toggle_settings(),
            key_toggle_sidebar: crate::config::defaults::default_key_toggle_sidebar(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    /// Pulls numeric settings back into the ranges the UI can render.
    pub fn sanitized(mut self) -> Self {
        self.arabic_font_size = self
            .arabic_font_size
            .clamp(ARABIC_FONT_SIZE_RANGE.0, ARABIC_FONT_SIZE_RANGE.1);
        self.translation_font_size = self
            .translation_font_size
            .clamp(TRANSLATION_FONT_SIZE_RANGE.0, TRANSLATION_FONT_SIZE_RANGE.1);
        self.verses_per_page = self
            .verses_per_page
            .clamp(VERSES_PER_PAGE_RANGE.0, VERSES_PER_PAGE_RANGE.1);
        self.request_timeout_secs = if self.request_timeout_secs.is_finite() {
            self.request_timeout_secs
                .clamp(REQUEST_TIMEOUT_RANGE.0, REQUEST_TIMEOUT_RANGE.1)
        } else {
            crate::config::defaults::default_request_timeout_secs()
        };
        self.window_width = self.window_width.max(480.0);
        self.window_height = self.window_height.max(360.0);
        for color in [&mut self.day_highlight, &mut self.night_highlight] {
            color.r = color.r.clamp(0.0, 1.0);
            color.g = color.g.clamp(0.0, 1.0);
            color.b = color.b.clamp(0.0, 1.0);
            color.a = color.a.clamp(0.0, 1.0);
        }
        self
    }

    pub fn highlight(&self) -> HighlightColor {
        match self.theme {
            ThemeMode::Day => self.day_highlight,
            ThemeMode::Night => self.night_highlight,
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Arabic script the verse text is rendered in.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Script {
    #[default]
    Uthmani,
    Indopak,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Uthmani, Script::Indopak];
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Script::Uthmani => "Uthmani",
            Script::Indopak => "IndoPak",
        };
        write!(f, "{}", label)
    }
}

/// Font family used for Arabic text. Named families are looked up among the
/// system fonts; `System` uses the default sans family.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ArabicFont {
    #[default]
    System,
    Amiri,
    ScheherazadeNew,
    NotoNaskhArabic,
}

impl ArabicFont {
    pub const ALL: [ArabicFont; 4] = [
        ArabicFont::System,
        ArabicFont::Amiri,
        ArabicFont::ScheherazadeNew,
        ArabicFont::NotoNaskhArabic,
    ];

    pub fn family_name(self) -> Option<&'static str> {
        match self {
            ArabicFont::System => None,
            ArabicFont::Amiri => Some("Amiri"),
            ArabicFont::ScheherazadeNew => Some("Scheherazade New"),
            ArabicFont::NotoNaskhArabic => Some("Noto Naskh Arabic"),
        }
    }
}

impl std::fmt::Display for ArabicFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.family_name().unwrap_or("System"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HighlightColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
