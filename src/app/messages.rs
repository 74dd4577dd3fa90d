use al_bayan_core::api::{Chapter, Reciter, Verse};
use al_bayan_core::config::{ArabicFont, Script};
use al_bayan_core::player::SequencerEvent;
use iced::keyboard::{Key, Modifiers};
use std::sync::Arc;
use std::time::Instant;

/// Messages emitted by the UI and by background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    ChaptersLoaded(Vec<Chapter>),
    RecitersLoaded(Vec<Reciter>),
    ChapterSelected(u32),
    VersesLoaded {
        chapter_id: u32,
        request_id: u64,
        verses: Vec<Verse>,
    },
    SearchChanged(String),
    ToggleSidebar,
    ToggleSettings,
    ToggleTheme,
    ScriptChanged(Script),
    ArabicFontChanged(ArabicFont),
    ArabicFontSizeChanged(u32),
    TranslationFontSizeChanged(u32),
    ShowTranslationChanged(bool),
    AutoScrollChanged(bool),
    AutoAdvanceChanged(bool),
    ReciterSelected(u32),
    VerseClicked(usize),
    TogglePlayPause,
    NextVerse,
    PreviousVerse,
    /// Completion of a resolve or prefetch task.
    Sequencer(SequencerEvent),
    AudioLoaded {
        generation: u64,
        bytes: Result<Arc<[u8]>, String>,
    },
    Tick(Instant),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}
