//! Chapter, verse and reciter loading.
//!
//! Every helper here swallows failures: a broken fetch is logged and shows up
//! as an empty list, never as an error in the UI.

use crate::api::{Chapter, ContentSource, Reciter, Verse};
use crate::config::AppConfig;
use crate::text_utils::fold_for_search;
use tracing::{debug, info, warn};

/// Upper bound on followed `next_page` links for a single chapter.
pub const MAX_VERSE_PAGES: u32 = 64;

pub async fn load_chapters(source: &dyn ContentSource) -> Vec<Chapter> {
    match source.chapters().await {
        Ok(chapters) => {
            info!(count = chapters.len(), "Loaded chapter list");
            chapters
        }
        Err(err) => {
            warn!("Failed to load chapters: {err}");
            Vec::new()
        }
    }
}

/// Which narrators are offered in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReciterFilter {
    pub featured_ids: Vec<u32>,
    pub style: String,
}

impl ReciterFilter {
    pub fn matches(&self, reciter: &Reciter) -> bool {
        self.featured_ids.contains(&reciter.id)
            || reciter
                .style
                .as_deref()
                .is_some_and(|style| !self.style.is_empty() && style.eq_ignore_ascii_case(&self.style))
    }
}

impl From<&AppConfig> for ReciterFilter {
    fn from(config: &AppConfig) -> Self {
        ReciterFilter {
            featured_ids: config.featured_reciters.clone(),
            style: config.featured_style.clone(),
        }
    }
}

pub async fn load_reciters(source: &dyn ContentSource, filter: &ReciterFilter) -> Vec<Reciter> {
    match source.reciters().await {
        Ok(reciters) => {
            let total = reciters.len();
            let kept: Vec<Reciter> = reciters
                .into_iter()
                .filter(|reciter| filter.matches(reciter))
                .collect();
            info!(total, kept = kept.len(), "Loaded reciters");
            kept
        }
        Err(err) => {
            warn!("Failed to load reciters: {err}");
            Vec::new()
        }
    }
}

/// All verses of a chapter, following pagination until the service reports
/// no further page.
pub async fn load_chapter_verses(
    source: &dyn ContentSource,
    chapter_id: u32,
    per_page: u32,
) -> Vec<Verse> {
    let mut verses = Vec::new();
    let mut page = 1;
    let mut fetched = 0;

    loop {
        let batch = match source.verses_page(chapter_id, page, per_page).await {
            Ok(batch) => batch,
            Err(err) => {
                warn!(chapter_id, page, "Failed to load verses: {err}");
                return Vec::new();
            }
        };
        fetched += 1;
        debug!(chapter_id, page, count = batch.verses.len(), "Loaded verse page");
        verses.extend(batch.verses);

        match batch.next_page {
            Some(next) if next > page && fetched < MAX_VERSE_PAGES => page = next,
            Some(next) if next > page => {
                warn!(chapter_id, page, "Stopping after {MAX_VERSE_PAGES} verse pages");
                break;
            }
            _ => break,
        }
    }

    info!(chapter_id, count = verses.len(), pages = fetched, "Loaded chapter verses");
    verses
}

/// Chapters whose simple name, translated name or id match `query`,
/// ignoring case and diacritics. An empty query keeps everything.
pub fn filter_chapters<'a>(chapters: &'a [Chapter], query: &str) -> Vec<&'a Chapter> {
    let needle = fold_for_search(query);
    if needle.is_empty() {
        return chapters.iter().collect();
    }
    chapters
        .iter()
        .filter(|chapter| {
            fold_for_search(&chapter.name_simple).contains(&needle)
                || fold_for_search(&chapter.translated_name.name).contains(&needle)
                || chapter.id.to_string().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Result, TranslatedName, VersePage};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeSource {
        chapters: Vec<Chapter>,
        reciters: Vec<Reciter>,
        pages: HashMap<u32, VersePage>,
        fail_pages: Vec<u32>,
        fail_all: bool,
        requested: Mutex<Vec<u32>>,
    }

    fn failure() -> ApiError {
        ApiError::Status {
            url: "http://fake".to_string(),
            status: 500,
        }
    }

    #[async_trait]
    impl ContentSource for FakeSource {
        async fn chapters(&self) -> Result<Vec<Chapter>> {
            if self.fail_all {
                return Err(failure());
            }
            Ok(self.chapters.clone())
        }

        async fn verses_page(&self, _chapter_id: u32, page: u32, _per_page: u32) -> Result<VersePage> {
            self.requested.lock().unwrap().push(page);
            if self.fail_all || self.fail_pages.contains(&page) {
                return Err(failure());
            }
            Ok(self.pages.get(&page).cloned().unwrap_or_default())
        }

        async fn reciters(&self) -> Result<Vec<Reciter>> {
            if self.fail_all {
                return Err(failure());
            }
            Ok(self.reciters.clone())
        }

        async fn verse_audio_url(&self, _reciter_id: u32, _verse_key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn audio_bytes(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn chapter(id: u32, simple: &str, translated: &str) -> Chapter {
        Chapter {
            id,
            revelation_place: "makkah".to_string(),
            revelation_order: id,
            bismillah_pre: id != 1 && id != 9,
            name_simple: simple.to_string(),
            name_complex: simple.to_string(),
            name_arabic: String::new(),
            verses_count: 7,
            pages: vec![1, 1],
            translated_name: TranslatedName {
                language_name: "english".to_string(),
                name: translated.to_string(),
            },
        }
    }

    fn verse(key: &str) -> Verse {
        Verse {
            id: 0,
            verse_number: 0,
            verse_key: key.to_string(),
            text_uthmani: Some("نص".to_string()),
            text_indopak: None,
            translations: Vec::new(),
        }
    }

    fn reciter(id: u32, style: Option<&str>) -> Reciter {
        Reciter {
            id,
            name: format!("Reciter {id}"),
            style: style.map(str::to_string),
            translated_name: None,
        }
    }

    #[tokio::test]
    async fn chapter_failure_yields_empty_list() {
        let source = FakeSource {
            fail_all: true,
            ..FakeSource::default()
        };
        assert!(load_chapters(&source).await.is_empty());
    }

    #[tokio::test]
    async fn follows_pagination_until_exhausted() {
        let mut pages = HashMap::new();
        pages.insert(
            1,
            VersePage {
                verses: vec![verse("2:1"), verse("2:2")],
                next_page: Some(2),
            },
        );
        pages.insert(
            2,
            VersePage {
                verses: vec![verse("2:3")],
                next_page: None,
            },
        );
        let source = FakeSource {
            pages,
            ..FakeSource::default()
        };

        let verses = load_chapter_verses(&source, 2, 2).await;

        let keys: Vec<&str> = verses.iter().map(|v| v.verse_key.as_str()).collect();
        assert_eq!(keys, vec!["2:1", "2:2", "2:3"]);
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn non_advancing_next_page_stops_the_loop() {
        let mut pages = HashMap::new();
        pages.insert(
            1,
            VersePage {
                verses: vec![verse("3:1")],
                next_page: Some(1),
            },
        );
        let source = FakeSource {
            pages,
            ..FakeSource::default()
        };

        let verses = load_chapter_verses(&source, 3, 50).await;
        assert_eq!(verses.len(), 1);
        assert_eq!(source.requested.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn verse_failure_yields_empty_list() {
        let mut pages = HashMap::new();
        pages.insert(
            1,
            VersePage {
                verses: vec![verse("2:1")],
                next_page: Some(2),
            },
        );
        let source = FakeSource {
            pages,
            fail_pages: vec![2],
            ..FakeSource::default()
        };

        assert!(load_chapter_verses(&source, 2, 1).await.is_empty());
    }

    #[tokio::test]
    async fn reciters_are_filtered_to_featured_or_murattal() {
        let source = FakeSource {
            reciters: vec![
                reciter(7, Some("Mujawwad")),
                reciter(2, Some("Murattal")),
                reciter(5, Some("Mujawwad")),
                reciter(10, None),
                reciter(12, None),
            ],
            ..FakeSource::default()
        };
        let filter = ReciterFilter::from(&AppConfig::default());

        let ids: Vec<u32> = load_reciters(&source, &filter)
            .await
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![7, 2, 10]);
    }

    #[test]
    fn search_matches_names_and_ids() {
        let chapters = vec![
            chapter(1, "Al-Fatihah", "The Opener"),
            chapter(3, "Āl ʿImrān", "Family of Imran"),
            chapter(112, "Al-Ikhlas", "The Sincerity"),
        ];

        let ids = |query: &str| -> Vec<u32> {
            filter_chapters(&chapters, query)
                .iter()
                .map(|c| c.id)
                .collect()
        };

        assert_eq!(ids(""), vec![1, 3, 112]);
        assert_eq!(ids("fatiha"), vec![1]);
        assert_eq!(ids("FĀTIḤA"), vec![1]);
        assert_eq!(ids("imran"), vec![3]);
        assert_eq!(ids("alimran"), vec![3]);
        assert_eq!(ids("sincerity"), vec![112]);
        assert_eq!(ids("1"), vec![1, 112]);
        assert!(ids("zzz").is_empty());
    }
}
