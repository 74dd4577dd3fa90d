use super::super::state::App;
use al_bayan_core::api::{
    Chapter, ContentSource, Reciter, Result, TranslatedName, Translation, Verse, VersePage,
};
use al_bayan_core::config::AppConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Content source that never talks to the network. Reducer tests only inspect
/// effects, so nothing here is awaited.
pub(super) struct OfflineSource;

#[async_trait]
impl ContentSource for OfflineSource {
    async fn chapters(&self) -> Result<Vec<Chapter>> {
        Ok(Vec::new())
    }

    async fn verses_page(&self, _chapter_id: u32, _page: u32, _per_page: u32) -> Result<VersePage> {
        Ok(VersePage::default())
    }

    async fn reciters(&self) -> Result<Vec<Reciter>> {
        Ok(Vec::new())
    }

    async fn verse_audio_url(&self, reciter_id: u32, verse_key: &str) -> Result<Option<String>> {
        Ok(Some(format!("https://audio/{reciter_id}/{verse_key}.mp3")))
    }

    async fn audio_bytes(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

pub(super) fn test_app() -> App {
    App::new(AppConfig::default(), Arc::new(OfflineSource))
}

pub(super) fn chapter(id: u32, name: &str) -> Chapter {
    Chapter {
        id,
        revelation_place: "makkah".to_string(),
        revelation_order: id,
        bismillah_pre: id != 1 && id != 9,
        name_simple: name.to_string(),
        name_complex: name.to_string(),
        name_arabic: String::new(),
        verses_count: 3,
        pages: vec![1, 1],
        translated_name: TranslatedName {
            language_name: "english".to_string(),
            name: format!("{name} (en)"),
        },
    }
}

pub(super) fn verses(chapter_id: u32, count: u32) -> Vec<Verse> {
    (1..=count)
        .map(|number| Verse {
            id: u64::from(chapter_id * 1000 + number),
            verse_number: number,
            verse_key: format!("{chapter_id}:{number}"),
            text_uthmani: Some(format!("آية {number}")),
            text_indopak: None,
            translations: vec![Translation {
                id: u64::from(number),
                resource_id: 131,
                text: format!("Verse {number}"),
            }],
        })
        .collect()
}
