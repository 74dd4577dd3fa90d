//! `reqwest`-backed implementation of [`ContentSource`].

use super::error::{ApiError, Result};
use super::merge::merge_translations;
use super::models::{
    AudioFilesResponse, Chapter, ChaptersResponse, RecitationsResponse, Reciter, VersePage,
    VersesResponse,
};
use super::{ApiSettings, ContentSource, normalize_audio_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the quran.com v4 API.
#[derive(Clone)]
pub struct QuranApi {
    http: Client,
    base_url: String,
    audio_base_url: String,
    translation_id: u32,
    translation_language: String,
}

impl QuranApi {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(settings.base_url));
        }

        let http = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(settings.timeout))
            .user_agent(format!("al-bayan/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ApiError::from_reqwest(&base_url, err))?;

        debug!(
            base_url = %base_url,
            timeout_ms = settings.timeout.as_millis() as u64,
            "Built content API client"
        );

        Ok(Self {
            http,
            base_url,
            audio_base_url: settings.audio_base_url,
            translation_id: settings.translation_id,
            translation_language: settings.translation_language,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(url, ?query, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::from_reqwest(url, err))
    }
}

#[async_trait]
impl ContentSource for QuranApi {
    async fn chapters(&self) -> Result<Vec<Chapter>> {
        let url = format!("{}/chapters", self.base_url);
        let response: ChaptersResponse = self.get_json(&url, &[]).await?;
        Ok(response.chapters)
    }

    async fn verses_page(&self, chapter_id: u32, page: u32, per_page: u32) -> Result<VersePage> {
        let url = format!("{}/verses/by_chapter/{chapter_id}", self.base_url);
        // Requesting `fields` and `translations` together makes the service
        // drop one of them, so they travel as two requests.
        let text_query = [
            ("fields", "text_uthmani,text_indopak".to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("words", "false".to_string()),
        ];
        let translation_query = [
            ("language", self.translation_language.clone()),
            ("translations", self.translation_id.to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("words", "false".to_string()),
        ];

        let (text, translated) = tokio::join!(
            self.get_json::<VersesResponse>(&url, &text_query),
            self.get_json::<VersesResponse>(&url, &translation_query),
        );

        let text = text?;
        let translated = match translated {
            Ok(response) => response.verses,
            Err(err) => {
                warn!(chapter_id, page, "Translation payload unavailable: {err}");
                Vec::new()
            }
        };

        let next_page = text.pagination.as_ref().and_then(|p| p.next_page);
        Ok(VersePage {
            verses: merge_translations(text.verses, translated),
            next_page,
        })
    }

    async fn reciters(&self) -> Result<Vec<Reciter>> {
        let url = format!("{}/resources/recitations", self.base_url);
        let response: RecitationsResponse = self.get_json(&url, &[]).await?;
        Ok(response.recitations)
    }

    async fn verse_audio_url(&self, reciter_id: u32, verse_key: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/recitations/{reciter_id}/by_ayah/{verse_key}",
            self.base_url
        );
        let response: AudioFilesResponse = self.get_json(&url, &[]).await?;
        Ok(response
            .audio_files
            .into_iter()
            .find_map(|file| file.url.filter(|raw| !raw.trim().is_empty()))
            .map(|raw| normalize_audio_url(&raw, &self.audio_base_url)))
    }

    async fn audio_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(url, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::from_reqwest(url, err))?;
        debug!(url, len = bytes.len(), "Downloaded audio clip");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: String) -> ApiSettings {
        ApiSettings {
            base_url,
            audio_base_url: "https://verses.quran.com/".to_string(),
            translation_id: 131,
            translation_language: "en".to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let result = QuranApi::new(settings("api.quran.com/api/v4".to_string()));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn decodes_chapter_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chapters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "chapters": [{
                    "id": 1,
                    "revelation_place": "makkah",
                    "revelation_order": 5,
                    "bismillah_pre": false,
                    "name_simple": "Al-Fatihah",
                    "name_complex": "Al-Fātiĥah",
                    "name_arabic": "الفاتحة",
                    "verses_count": 7,
                    "pages": [1, 1],
                    "translated_name": { "language_name": "english", "name": "The Opener" }
                }]
            })))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");
        let chapters = api.chapters().await.expect("chapters");

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name_simple, "Al-Fatihah");
        assert_eq!(chapters[0].verses_count, 7);
        assert_eq!(chapters[0].translated_name.name, "The Opener");
    }

    #[tokio::test]
    async fn merges_text_and_translation_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/verses/by_chapter/112"))
            .and(query_param("fields", "text_uthmani,text_indopak"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verses": [
                    { "id": 6222, "verse_number": 1, "verse_key": "112:1", "text_uthmani": "قُلْ هُوَ ٱللَّهُ أَحَدٌ", "text_indopak": "قُلۡ هُوَ اللّٰهُ اَحَدٌ" },
                    { "id": 6223, "verse_number": 2, "verse_key": "112:2", "text_uthmani": "ٱللَّهُ ٱلصَّمَدُ" }
                ],
                "pagination": { "per_page": 286, "current_page": 1, "next_page": null, "total_pages": 1 }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/verses/by_chapter/112"))
            .and(query_param("translations", "131"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verses": [
                    { "id": 6222, "verse_key": "112:1", "translations": [{ "id": 1, "resource_id": 131, "text": "Say, He is Allah, One" }] },
                    { "id": 6223, "verse_key": "112:2", "translations": [{ "id": 2, "resource_id": 131, "text": "Allah, the Eternal Refuge" }] }
                ]
            })))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");
        let page = api.verses_page(112, 1, 286).await.expect("verses");

        assert_eq!(page.next_page, None);
        assert_eq!(page.verses.len(), 2);
        assert!(page.verses[0].text_indopak.is_some());
        assert_eq!(page.verses[1].text_indopak, None);
        assert_eq!(
            page.verses[1].translations[0].text,
            "Allah, the Eternal Refuge"
        );
    }

    #[tokio::test]
    async fn translation_failure_keeps_arabic_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/verses/by_chapter/1"))
            .and(query_param("fields", "text_uthmani,text_indopak"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verses": [{ "id": 1, "verse_number": 1, "verse_key": "1:1", "text_uthmani": "بِسْمِ" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/verses/by_chapter/1"))
            .and(query_param("translations", "131"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");
        let page = api.verses_page(1, 1, 286).await.expect("verses");

        assert_eq!(page.verses.len(), 1);
        assert!(page.verses[0].translations.is_empty());
    }

    #[tokio::test]
    async fn resolves_and_normalizes_audio_urls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recitations/7/by_ayah/1:1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "audio_files": [{ "verse_key": "1:1", "url": "Alafasy/mp3/001001.mp3" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recitations/7/by_ayah/1:2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "audio_files": [{ "verse_key": "1:2", "url": "//mirrors.quranicaudio.com/001002.mp3" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recitations/7/by_ayah/1:3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "audio_files": [] })))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");

        assert_eq!(
            api.verse_audio_url(7, "1:1").await.expect("1:1").as_deref(),
            Some("https://verses.quran.com/Alafasy/mp3/001001.mp3")
        );
        assert_eq!(
            api.verse_audio_url(7, "1:2").await.expect("1:2").as_deref(),
            Some("https://mirrors.quranicaudio.com/001002.mp3")
        );
        assert_eq!(api.verse_audio_url(7, "1:3").await.expect("1:3"), None);
    }

    #[tokio::test]
    async fn http_errors_surface_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resources/recitations"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");
        match api.reciters().await {
            Err(ApiError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_responses_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recitations/7/by_ayah/2:255"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "audio_files": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = settings(server.uri());
        config.timeout = Duration::from_millis(200);
        let api = QuranApi::new(config).expect("client");

        let result = api.verse_audio_url(7, "2:255").await;
        assert!(matches!(result, Err(ApiError::Timeout { .. })));
    }

    #[tokio::test]
    async fn downloads_audio_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Alafasy/mp3/001001.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x49, 0x44, 0x33]))
            .mount(&server)
            .await;

        let api = QuranApi::new(settings(server.uri())).expect("client");
        let bytes = api
            .audio_bytes(&format!("{}/Alafasy/mp3/001001.mp3", server.uri()))
            .await
            .expect("bytes");
        assert_eq!(bytes, vec![0x49, 0x44, 0x33]);
    }
}
