//! Remote content source: the quran.com v4 REST API.
//!
//! The application only depends on the [`ContentSource`] trait so the loader,
//! the playback resolver and the tests can swap in another source.

mod client;
mod error;
mod merge;
mod models;

pub use client::QuranApi;
pub use error::{ApiError, Result};
pub use merge::merge_translations;
pub use models::{Chapter, Pagination, Reciter, TranslatedName, Translation, Verse, VersePage};

use crate::config::AppConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Endpoints the reader needs from the content service.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn chapters(&self) -> Result<Vec<Chapter>>;

    /// One page of a chapter with Arabic text and translation merged.
    async fn verses_page(&self, chapter_id: u32, page: u32, per_page: u32) -> Result<VersePage>;

    async fn reciters(&self) -> Result<Vec<Reciter>>;

    /// Absolute, playable URL for one verse under one narrator, if the
    /// service has a recording for it.
    async fn verse_audio_url(&self, reciter_id: u32, verse_key: &str) -> Result<Option<String>>;

    /// Raw bytes of an audio file previously resolved by `verse_audio_url`.
    async fn audio_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Connection settings for [`QuranApi`].
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub audio_base_url: String,
    pub translation_id: u32,
    pub translation_language: String,
    pub timeout: Duration,
}

impl From<&AppConfig> for ApiSettings {
    fn from(config: &AppConfig) -> Self {
        ApiSettings {
            base_url: config.api_base_url.clone(),
            audio_base_url: config.audio_base_url.clone(),
            translation_id: config.translation_id,
            translation_language: config.translation_language.clone(),
            timeout: Duration::from_secs_f32(config.request_timeout_secs),
        }
    }
}

/// Turns the `url` field of an audio file into an absolute HTTPS URL.
///
/// The service returns protocol-relative URLs (`//host/path`), bare paths
/// relative to its audio host, or already absolute URLs.
pub fn normalize_audio_url(raw: &str, audio_base_url: &str) -> String {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    let base = audio_base_url.trim_end_matches('/');
    let path = raw.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::normalize_audio_url;

    const AUDIO_BASE: &str = "https://verses.quran.com/";

    #[test]
    fn protocol_relative_urls_get_https() {
        assert_eq!(
            normalize_audio_url("//mirrors.quranicaudio.com/everyayah/001001.mp3", AUDIO_BASE),
            "https://mirrors.quranicaudio.com/everyayah/001001.mp3"
        );
    }

    #[test]
    fn bare_paths_join_the_audio_host() {
        assert_eq!(
            normalize_audio_url("Alafasy/mp3/001001.mp3", AUDIO_BASE),
            "https://verses.quran.com/Alafasy/mp3/001001.mp3"
        );
        assert_eq!(
            normalize_audio_url("/Alafasy/mp3/001001.mp3", "https://verses.quran.com"),
            "https://verses.quran.com/Alafasy/mp3/001001.mp3"
        );
    }

    #[test]
    fn absolute_urls_are_kept() {
        let url = "https://download.quranicaudio.com/verses/001001.mp3";
        assert_eq!(normalize_audio_url(url, AUDIO_BASE), url);
    }
}
