use super::super::state::App;
use super::Effect;
use al_bayan_core::api::{Chapter, Reciter, Verse};
use al_bayan_core::player::SequencerEvent;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_chapters_loaded(
        &mut self,
        chapters: Vec<Chapter>,
        effects: &mut Vec<Effect>,
    ) {
        self.library.chapters_loading = false;
        self.library.chapters = chapters;
        if self.library.chapters.is_empty() {
            warn!("Chapter list is empty");
            return;
        }

        if self.reader.chapter_id.is_none() {
            if let Some(first) = self.library.chapters.first().map(|chapter| chapter.id) {
                self.handle_chapter_selected(first, effects);
            }
        }
    }

    pub(super) fn handle_reciters_loaded(&mut self, reciters: Vec<Reciter>) {
        self.library.reciters_loading = false;
        self.library.reciters = reciters;
        if self.library.reciter(self.config.reciter_id).is_none() {
            debug!(
                reciter_id = self.config.reciter_id,
                "Configured reciter is not in the featured list"
            );
        }
    }

    pub(super) fn handle_chapter_selected(&mut self, chapter_id: u32, effects: &mut Vec<Effect>) {
        if self.reader.chapter_id == Some(chapter_id) && !self.reader.verses.is_empty() {
            debug!(chapter_id, "Chapter already open");
            return;
        }

        info!(chapter_id, "Opening chapter");
        self.reader.chapter_id = Some(chapter_id);
        self.reader.verses.clear();
        self.reader.loading = true;
        self.reader.request_id = self.reader.request_id.wrapping_add(1);

        self.dispatch_sequencer(SequencerEvent::VersesReplaced(Vec::new()), effects);
        effects.push(Effect::LoadVerses {
            chapter_id,
            request_id: self.reader.request_id,
        });
    }

    pub(super) fn handle_verses_loaded(
        &mut self,
        chapter_id: u32,
        request_id: u64,
        verses: Vec<Verse>,
        effects: &mut Vec<Effect>,
    ) {
        if request_id != self.reader.request_id || self.reader.chapter_id != Some(chapter_id) {
            debug!(
                chapter_id,
                request_id,
                current = self.reader.request_id,
                "Dropping stale verse load"
            );
            return;
        }

        self.reader.loading = false;
        self.reader.verses = verses;
        if self.reader.verses.is_empty() {
            warn!(chapter_id, "No verses loaded");
        }

        let keys = self.reader.verse_keys();
        self.dispatch_sequencer(SequencerEvent::VersesReplaced(keys), effects);
        effects.push(Effect::ScrollToTop);
    }

    pub(super) fn handle_search_changed(&mut self, query: String) {
        self.library.search = query;
    }
}
