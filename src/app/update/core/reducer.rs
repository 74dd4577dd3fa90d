use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ChaptersLoaded(chapters) => {
                self.handle_chapters_loaded(chapters, &mut effects)
            }
            Message::RecitersLoaded(reciters) => self.handle_reciters_loaded(reciters),
            Message::ChapterSelected(chapter_id) => {
                self.handle_chapter_selected(chapter_id, &mut effects)
            }
            Message::VersesLoaded {
                chapter_id,
                request_id,
                verses,
            } => self.handle_verses_loaded(chapter_id, request_id, verses, &mut effects),
            Message::SearchChanged(query) => self.handle_search_changed(query),
            Message::ToggleSidebar => self.handle_toggle_sidebar(),
            Message::ToggleSettings => self.handle_toggle_settings(),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ScriptChanged(script) => self.handle_script_changed(script),
            Message::ArabicFontChanged(font) => self.handle_arabic_font_changed(font),
            Message::ArabicFontSizeChanged(size) => self.handle_arabic_font_size_changed(size),
            Message::TranslationFontSizeChanged(size) => {
                self.handle_translation_font_size_changed(size)
            }
            Message::ShowTranslationChanged(show) => self.handle_show_translation_changed(show),
            Message::AutoScrollChanged(enabled) => {
                self.handle_auto_scroll_changed(enabled, &mut effects)
            }
            Message::AutoAdvanceChanged(enabled) => {
                self.handle_auto_advance_changed(enabled, &mut effects)
            }
            Message::ReciterSelected(reciter_id) => {
                self.handle_reciter_selected(reciter_id, &mut effects)
            }
            Message::VerseClicked(index) => self.handle_verse_clicked(index, &mut effects),
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::NextVerse => self.handle_next_verse(&mut effects),
            Message::PreviousVerse => self.handle_previous_verse(&mut effects),
            Message::Sequencer(event) => self.dispatch_sequencer(event, &mut effects),
            Message::AudioLoaded { generation, bytes } => {
                self.handle_audio_loaded(generation, bytes, &mut effects)
            }
            Message::Tick(_) => self.handle_tick(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    debug!(?shortcut, "Keyboard shortcut");
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}
