use al_bayan_core::api::Verse;

/// Verses of the selected chapter.
pub struct ReaderState {
    pub(in crate::app) chapter_id: Option<u32>,
    pub(in crate::app) verses: Vec<Verse>,
    pub(in crate::app) loading: bool,
    /// Id of the latest verse-load request; older responses are dropped.
    pub(in crate::app) request_id: u64,
}

impl ReaderState {
    pub(in crate::app) fn new() -> Self {
        Self {
            chapter_id: None,
            verses: Vec::new(),
            loading: false,
            request_id: 0,
        }
    }

    pub(in crate::app) fn verse_keys(&self) -> Vec<String> {
        self.verses
            .iter()
            .map(|verse| verse.verse_key.clone())
            .collect()
    }
}
