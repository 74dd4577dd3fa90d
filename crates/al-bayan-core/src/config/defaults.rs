pub(crate) fn default_arabic_font_size() -> u32 {
    32
}

pub(crate) fn default_translation_font_size() -> u32 {
    16
}

pub(crate) fn default_show_translation() -> bool {
    true
}

pub(crate) fn default_auto_scroll() -> bool {
    true
}

pub(crate) fn default_auto_advance() -> bool {
    true
}

pub(crate) fn default_show_sidebar() -> bool {
    true
}

pub(crate) fn default_show_settings() -> bool {
    false
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    820.0
}

pub(crate) fn default_day_highlight() -> crate::config::HighlightColor {
    crate::config::HighlightColor {
        r: 0.06,
        g: 0.46,
        b: 0.43,
        a: 0.14,
    }
}

pub(crate) fn default_night_highlight() -> crate::config::HighlightColor {
    crate::config::HighlightColor {
        r: 0.35,
        g: 0.8,
        b: 0.7,
        a: 0.18,
    }
}

pub(crate) fn default_reciter_id() -> u32 {
    7
}

pub(crate) fn default_featured_reciters() -> Vec<u32> {
    vec![7, 3, 4, 10]
}

pub(crate) fn default_featured_style() -> String {
    "Murattal".to_string()
}

pub(crate) fn default_api_base_url() -> String {
    "https://api.quran.com/api/v4".to_string()
}

pub(crate) fn default_audio_base_url() -> String {
    "https://verses.quran.com/".to_string()
}

pub(crate) fn default_translation_id() -> u32 {
    131
}

pub(crate) fn default_translation_language() -> String {
    "en".to_string()
}

pub(crate) fn default_verses_per_page() -> u32 {
    286
}

pub(crate) fn default_request_timeout_secs() -> f32 {
    8.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_next_verse() -> String {
    "n".to_string()
}

pub(crate) fn default_key_prev_verse() -> String {
    "p".to_string()
}

pub(crate) fn default_key_toggle_settings() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_toggle_sidebar() -> String {
    "ctrl+b".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
