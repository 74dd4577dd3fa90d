mod constants;
mod library;
mod player;
mod reader;

use al_bayan_core::api::ContentSource;
use al_bayan_core::config::AppConfig;
use iced::font::Family;
use iced::{Font, Task};
use std::sync::Arc;
use tracing::info;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use library::LibraryState;
pub(in crate::app) use player::PlayerState;
pub(in crate::app) use reader::ReaderState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source: Arc<dyn ContentSource>,
    pub(super) library: LibraryState,
    pub(super) reader: ReaderState,
    pub(super) player: PlayerState,
}

impl App {
    pub(super) fn new(config: AppConfig, source: Arc<dyn ContentSource>) -> Self {
        let player = PlayerState::new(config.reciter_id, config.auto_advance);
        Self {
            config,
            source,
            library: LibraryState::new(),
            reader: ReaderState::new(),
            player,
        }
    }

    pub fn bootstrap(config: AppConfig, source: Arc<dyn ContentSource>) -> (App, Task<Message>) {
        let mut app = App::new(config, source);
        info!(
            reciter_id = app.config.reciter_id,
            script = %app.config.script,
            "Bootstrapping reader"
        );
        let tasks: Vec<Task<Message>> = [Effect::LoadChapters, Effect::LoadReciters]
            .into_iter()
            .map(|effect| app.run_effect(effect))
            .collect();
        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        match self
            .reader
            .chapter_id
            .and_then(|id| self.library.chapter(id))
        {
            Some(chapter) => format!("Al-Bayan - {}. {}", chapter.id, chapter.name_simple),
            None => "Al-Bayan".to_string(),
        }
    }

    pub(super) fn arabic_font(&self) -> Font {
        match self.config.arabic_font.family_name() {
            Some(name) => Font {
                family: Family::Name(name),
                ..Font::DEFAULT
            },
            None => Font::DEFAULT,
        }
    }

    pub(super) fn current_reciter_label(&self) -> String {
        self.library
            .reciter(self.player.sequencer.narrator())
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("Reciter #{}", self.player.sequencer.narrator()))
    }
}
