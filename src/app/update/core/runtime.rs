use super::super::super::messages::Message;
use super::super::super::state::{App, READER_SCROLL_ID};
use super::super::Effect;
use al_bayan_core::library::{ReciterFilter, load_chapter_verses, load_chapters, load_reciters};
use al_bayan_core::player::{self, SequencerAction};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use std::sync::Arc;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadChapters => {
                self.library.chapters_loading = true;
                let source = Arc::clone(&self.source);
                Task::perform(
                    async move { load_chapters(source.as_ref()).await },
                    Message::ChaptersLoaded,
                )
            }
            Effect::LoadReciters => {
                self.library.reciters_loading = true;
                let source = Arc::clone(&self.source);
                let filter = ReciterFilter::from(&self.config);
                Task::perform(
                    async move { load_reciters(source.as_ref(), &filter).await },
                    Message::RecitersLoaded,
                )
            }
            Effect::LoadVerses {
                chapter_id,
                request_id,
            } => {
                let source = Arc::clone(&self.source);
                let per_page = self.config.verses_per_page;
                info!(chapter_id, request_id, "Dispatching verse load task");
                Task::perform(
                    async move {
                        let verses = load_chapter_verses(source.as_ref(), chapter_id, per_page).await;
                        Message::VersesLoaded {
                            chapter_id,
                            request_id,
                            verses,
                        }
                    },
                    |message| message,
                )
            }
            Effect::Player(action) => self.run_player_action(action),
            Effect::ScrollToVerse(index) => {
                let offset = self.scroll_offset_for_verse(index);
                scrollable::snap_to(READER_SCROLL_ID.clone(), offset)
            }
            Effect::ScrollToTop => scrollable::snap_to(READER_SCROLL_ID.clone(), RelativeOffset::START),
            Effect::QuitSafely => {
                self.player.stop_clip();
                info!("Quitting");
                iced::exit()
            }
        }
    }

    fn run_player_action(&mut self, action: SequencerAction) -> Task<Message> {
        match action {
            SequencerAction::Resolve(request) => {
                let source = Arc::clone(&self.source);
                Task::perform(
                    async move { player::resolve(source.as_ref(), request).await },
                    Message::Sequencer,
                )
            }
            SequencerAction::Prefetch(request) => {
                let source = Arc::clone(&self.source);
                Task::perform(
                    async move { player::prefetch(source.as_ref(), request).await },
                    Message::Sequencer,
                )
            }
            SequencerAction::Play {
                generation,
                index,
                url,
            } => {
                self.player.stop_clip();
                info!(generation, index, url = %url, "Fetching recitation audio");
                self.download_clip(generation, url)
            }
            SequencerAction::Pause => {
                if let Some(clip) = &self.player.clip {
                    clip.pause();
                }
                Task::none()
            }
            SequencerAction::Resume {
                generation,
                index,
                url,
            } => {
                if !self.player.resume_needs_download(generation) {
                    match &self.player.clip {
                        Some(clip) if clip.generation() == generation => {
                            if clip.is_paused() {
                                clip.play();
                            }
                        }
                        _ => debug!(generation, index, "Audio still downloading"),
                    }
                    return Task::none();
                }
                self.player.stop_clip();
                info!(generation, index, "Paused clip is gone; fetching again");
                self.download_clip(generation, url)
            }
            SequencerAction::Stop => {
                self.player.stop_clip();
                Task::none()
            }
        }
    }

    fn download_clip(&mut self, generation: u64, url: String) -> Task<Message> {
        self.player.pending_download = Some(generation);
        let source = Arc::clone(&self.source);
        Task::perform(
            async move {
                let bytes = source
                    .audio_bytes(&url)
                    .await
                    .map(Arc::<[u8]>::from)
                    .map_err(|err| err.to_string());
                Message::AudioLoaded { generation, bytes }
            },
            |message| message,
        )
    }

    /// Approximate scroll position of a verse card, assuming cards of
    /// similar height.
    pub(in crate::app) fn scroll_offset_for_verse(&self, index: usize) -> RelativeOffset {
        let count = self.reader.verses.len();
        let y = if count > 1 {
            (index.min(count - 1) as f32 / (count - 1) as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        RelativeOffset { x: 0.0, y }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
