use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslatedName {
    #[serde(default)]
    pub language_name: String,
    #[serde(default)]
    pub name: String,
}

/// Chapter metadata as returned by `GET /chapters`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chapter {
    pub id: u32,
    #[serde(default)]
    pub revelation_place: String,
    #[serde(default)]
    pub revelation_order: u32,
    #[serde(default)]
    pub bismillah_pre: bool,
    #[serde(default)]
    pub name_simple: String,
    #[serde(default)]
    pub name_complex: String,
    #[serde(default)]
    pub name_arabic: String,
    #[serde(default)]
    pub verses_count: u32,
    #[serde(default)]
    pub pages: Vec<u32>,
    #[serde(default)]
    pub translated_name: TranslatedName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Translation {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub resource_id: u32,
    #[serde(default)]
    pub text: String,
}

/// A single verse. The text and translation payloads are fetched separately
/// and merged, so every text field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Verse {
    pub id: u64,
    #[serde(default)]
    pub verse_number: u32,
    pub verse_key: String,
    #[serde(default)]
    pub text_uthmani: Option<String>,
    #[serde(default)]
    pub text_indopak: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Verse {
    /// Verse number within its chapter, taken from the key when the payload
    /// omits `verse_number`.
    pub fn number(&self) -> u32 {
        if self.verse_number > 0 {
            return self.verse_number;
        }
        self.verse_key
            .split_once(':')
            .and_then(|(_, number)| number.parse().ok())
            .unwrap_or(0)
    }
}

/// An audio recitation source ("narrator").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reciter {
    pub id: u32,
    #[serde(alias = "reciter_name", default)]
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub translated_name: Option<TranslatedName>,
}

impl std::fmt::Display for Reciter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.style.as_deref().filter(|style| !style.is_empty()) {
            Some(style) => write!(f, "{} ({})", self.name, style),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// One merged page of a chapter's verses.
#[derive(Debug, Clone, Default)]
pub struct VersePage {
    pub verses: Vec<Verse>,
    pub next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChaptersResponse {
    #[serde(default)]
    pub(crate) chapters: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersesResponse {
    #[serde(default)]
    pub(crate) verses: Vec<Verse>,
    #[serde(default)]
    pub(crate) pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecitationsResponse {
    #[serde(default)]
    pub(crate) recitations: Vec<Reciter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AudioFile {
    #[serde(default)]
    pub(crate) url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AudioFilesResponse {
    #[serde(default)]
    pub(crate) audio_files: Vec<AudioFile>,
}
