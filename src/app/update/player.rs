use super::super::state::App;
use super::Effect;
use crate::audio::AudioClip;
use al_bayan_core::player::{PlaybackState, SequencerEvent};
use std::sync::Arc;
use tracing::{debug, info, warn};

impl App {
    /// Feeds one event to the sequencer and turns its actions into effects.
    /// A moved cursor scrolls the reader when auto-scroll is on.
    pub(super) fn dispatch_sequencer(&mut self, event: SequencerEvent, effects: &mut Vec<Effect>) {
        let before = self.player.sequencer.cursor();
        let actions = self.player.sequencer.handle(event);
        effects.extend(actions.into_iter().map(Effect::Player));

        let after = self.player.sequencer.cursor();
        if after != before {
            if let Some(index) = after {
                if self.config.auto_scroll {
                    effects.push(Effect::ScrollToVerse(index));
                }
            }
        }
    }

    pub(super) fn handle_verse_clicked(&mut self, index: usize, effects: &mut Vec<Effect>) {
        debug!(index, "Verse clicked");
        self.dispatch_sequencer(SequencerEvent::SelectVerse { index, play: true }, effects);
    }

    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_sequencer(SequencerEvent::TogglePlay, effects);
    }

    pub(super) fn handle_next_verse(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_sequencer(SequencerEvent::Next, effects);
    }

    pub(super) fn handle_previous_verse(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_sequencer(SequencerEvent::Previous, effects);
    }

    pub(super) fn handle_reciter_selected(&mut self, reciter_id: u32, effects: &mut Vec<Effect>) {
        if self.config.reciter_id == reciter_id {
            return;
        }
        info!(reciter_id, "Reciter selected");
        self.config.reciter_id = reciter_id;
        self.dispatch_sequencer(SequencerEvent::NarratorChanged(reciter_id), effects);
    }

    pub(super) fn handle_auto_advance_changed(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        self.config.auto_advance = enabled;
        self.dispatch_sequencer(SequencerEvent::AutoAdvanceChanged(enabled), effects);
    }

    pub(super) fn handle_audio_loaded(
        &mut self,
        generation: u64,
        bytes: Result<Arc<[u8]>, String>,
        effects: &mut Vec<Effect>,
    ) {
        if self.player.pending_download == Some(generation) {
            self.player.pending_download = None;
        }
        let duplicate = self
            .player
            .clip
            .as_ref()
            .is_some_and(|clip| clip.generation() == generation);
        let state = self.player.sequencer.state();
        if duplicate
            || generation != self.player.sequencer.generation()
            || !matches!(
                state,
                PlaybackState::Playing { .. } | PlaybackState::Paused { .. }
            )
        {
            debug!(generation, ?state, "Dropping stale audio download");
            return;
        }

        let started = bytes
            .map_err(anyhow::Error::msg)
            .and_then(|bytes| AudioClip::start(bytes, generation));
        match started {
            Ok(clip) => {
                if matches!(state, PlaybackState::Paused { .. }) {
                    clip.pause();
                }
                self.player.stop_clip();
                self.player.clip = Some(clip);
            }
            Err(err) => {
                warn!(generation, "Playback failed: {err:#}");
                self.dispatch_sequencer(SequencerEvent::PlaybackFailed { generation }, effects);
            }
        }
    }

    pub(super) fn handle_tick(&mut self, effects: &mut Vec<Effect>) {
        let finished = self
            .player
            .clip
            .as_ref()
            .is_some_and(|clip| !clip.is_paused() && clip.is_finished());
        if !finished {
            return;
        }
        if let Some(clip) = self.player.clip.take() {
            let generation = clip.generation();
            debug!(generation, "Recitation clip finished");
            clip.stop();
            self.dispatch_sequencer(SequencerEvent::TrackEnded { generation }, effects);
        }
    }
}
