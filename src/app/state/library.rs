use al_bayan_core::api::{Chapter, Reciter};
use al_bayan_core::library::filter_chapters;

/// Chapter list, search box and reciter list.
pub struct LibraryState {
    pub(in crate::app) chapters: Vec<Chapter>,
    pub(in crate::app) chapters_loading: bool,
    pub(in crate::app) search: String,
    pub(in crate::app) reciters: Vec<Reciter>,
    pub(in crate::app) reciters_loading: bool,
}

impl LibraryState {
    pub(in crate::app) fn new() -> Self {
        Self {
            chapters: Vec::new(),
            chapters_loading: false,
            search: String::new(),
            reciters: Vec::new(),
            reciters_loading: false,
        }
    }

    pub(in crate::app) fn visible_chapters(&self) -> Vec<&Chapter> {
        filter_chapters(&self.chapters, &self.search)
    }

    pub(in crate::app) fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id == id)
    }

    pub(in crate::app) fn reciter(&self, id: u32) -> Option<&Reciter> {
        self.reciters.iter().find(|reciter| reciter.id == id)
    }
}
