use super::cache::AudioUrlCache;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Where playback stands. Every state except `Idle` carries the active verse
/// index, so a cursor-less "playing" state cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No active verse.
    Idle,
    /// Waiting for the audio URL of `index`. `play` is the pending intent.
    Resolving { index: usize, play: bool },
    /// Source known (or resolution failed) and not playing.
    Ready { index: usize },
    Playing { index: usize },
    Paused { index: usize },
}

impl PlaybackState {
    pub fn index(self) -> Option<usize> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Resolving { index, .. }
            | PlaybackState::Ready { index }
            | PlaybackState::Playing { index }
            | PlaybackState::Paused { index } => Some(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A new chapter's verse keys, in display order.
    VersesReplaced(Vec<String>),
    SelectVerse {
        index: usize,
        play: bool,
    },
    TogglePlay,
    Next,
    Previous,
    /// Outcome of a `Resolve` action. `url` is `None` when resolution failed
    /// or the service has no recording.
    Resolved {
        generation: u64,
        narrator: u32,
        verse_key: String,
        url: Option<String>,
    },
    Prefetched {
        narrator: u32,
        verse_key: String,
        url: Option<String>,
    },
    TrackEnded {
        generation: u64,
    },
    PlaybackFailed {
        generation: u64,
    },
    NarratorChanged(u32),
    AutoAdvanceChanged(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub generation: u64,
    pub narrator: u32,
    pub index: usize,
    pub verse_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchRequest {
    pub narrator: u32,
    pub verse_key: String,
}

/// Side effects the owner of the sequencer has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerAction {
    Resolve(ResolveRequest),
    Prefetch(PrefetchRequest),
    /// Start `url` from the beginning.
    Play {
        generation: u64,
        index: usize,
        url: String,
    },
    Pause,
    /// Continue the paused clip, or start `url` if the clip is gone.
    Resume {
        generation: u64,
        index: usize,
        url: String,
    },
    Stop,
}

/// Active-verse cursor, URL resolution and auto-advance for one verse list.
///
/// The sequencer performs no I/O. [`PlaybackSequencer::handle`] applies one
/// event and returns the actions to run; their completions come back as
/// events stamped with the generation they were issued under, and anything
/// stamped with an older generation is discarded.
#[derive(Debug, Clone)]
pub struct PlaybackSequencer {
    verse_keys: Vec<String>,
    state: PlaybackState,
    generation: u64,
    auto_advance: bool,
    cache: AudioUrlCache,
    prefetching: HashSet<(u32, String)>,
}

impl PlaybackSequencer {
    pub fn new(cache: AudioUrlCache, auto_advance: bool) -> Self {
        Self {
            verse_keys: Vec::new(),
            state: PlaybackState::Idle,
            generation: 0,
            auto_advance,
            cache,
            prefetching: HashSet::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Playing, or waiting for a URL with the intent to play.
    pub fn play_intent(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Playing { .. } | PlaybackState::Resolving { play: true, .. }
        )
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PlaybackState::Resolving { .. })
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.cursor() == Some(index)
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn narrator(&self) -> u32 {
        self.cache.narrator()
    }

    pub fn cache(&self) -> &AudioUrlCache {
        &self.cache
    }

    pub fn verse_count(&self) -> usize {
        self.verse_keys.len()
    }

    pub fn current_key(&self) -> Option<&str> {
        self.cursor()
            .and_then(|index| self.verse_keys.get(index))
            .map(String::as_str)
    }

    pub fn handle(&mut self, event: SequencerEvent) -> Vec<SequencerAction> {
        match event {
            SequencerEvent::VersesReplaced(keys) => self.on_verses_replaced(keys),
            SequencerEvent::SelectVerse { index, play } => self.on_select(index, play),
            SequencerEvent::TogglePlay => self.on_toggle_play(),
            SequencerEvent::Next => self.on_next(),
            SequencerEvent::Previous => self.on_previous(),
            SequencerEvent::Resolved {
                generation,
                narrator,
                verse_key,
                url,
            } => self.on_resolved(generation, narrator, verse_key, url),
            SequencerEvent::Prefetched {
                narrator,
                verse_key,
                url,
            } => self.on_prefetched(narrator, verse_key, url),
            SequencerEvent::TrackEnded { generation } => self.on_track_ended(generation),
            SequencerEvent::PlaybackFailed { generation } => self.on_playback_failed(generation),
            SequencerEvent::NarratorChanged(narrator) => self.on_narrator_changed(narrator),
            SequencerEvent::AutoAdvanceChanged(enabled) => {
                self.auto_advance = enabled;
                Vec::new()
            }
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn has_audio(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Playing { .. } | PlaybackState::Paused { .. }
        )
    }

    fn on_verses_replaced(&mut self, keys: Vec<String>) -> Vec<SequencerAction> {
        let had_audio = self.has_audio();
        self.verse_keys = keys;
        self.state = PlaybackState::Idle;
        self.prefetching.clear();
        self.bump_generation();
        info!(
            verses = self.verse_keys.len(),
            generation = self.generation,
            "Verse sequence replaced"
        );
        if had_audio {
            vec![SequencerAction::Stop]
        } else {
            Vec::new()
        }
    }

    fn on_select(&mut self, index: usize, play: bool) -> Vec<SequencerAction> {
        if index >= self.verse_keys.len() {
            debug!(
                index,
                len = self.verse_keys.len(),
                "Ignoring selection outside the verse list"
            );
            return Vec::new();
        }

        match self.state {
            PlaybackState::Playing { index: current } if current == index => {
                return Vec::new();
            }
            PlaybackState::Paused { index: current } if current == index => {
                return if play { self.resume(index) } else { Vec::new() };
            }
            PlaybackState::Resolving {
                index: current,
                play: pending,
            } if current == index => {
                self.state = PlaybackState::Resolving {
                    index,
                    play: pending || play,
                };
                return Vec::new();
            }
            PlaybackState::Ready { index: current } if current == index && !play => {
                return Vec::new();
            }
            _ => {}
        }

        let mut actions = Vec::new();
        if self.has_audio() {
            actions.push(SequencerAction::Stop);
        }
        actions.extend(self.activate(index, play));
        actions
    }

    /// Makes `index` the active verse under a fresh generation.
    fn activate(&mut self, index: usize, play: bool) -> Vec<SequencerAction> {
        let generation = self.bump_generation();
        let verse_key = self.verse_keys[index].clone();

        match self.cache.get(&verse_key).map(str::to_string) {
            Some(url) if play => {
                debug!(index, verse_key = %verse_key, generation, "Audio URL cache hit");
                self.state = PlaybackState::Playing { index };
                let mut actions = vec![SequencerAction::Play {
                    generation,
                    index,
                    url,
                }];
                actions.extend(self.prefetch_after(index));
                actions
            }
            Some(_) => {
                self.state = PlaybackState::Ready { index };
                Vec::new()
            }
            None => {
                debug!(index, verse_key = %verse_key, generation, play, "Resolving audio URL");
                self.state = PlaybackState::Resolving { index, play };
                vec![SequencerAction::Resolve(ResolveRequest {
                    generation,
                    narrator: self.cache.narrator(),
                    index,
                    verse_key,
                })]
            }
        }
    }

    fn resume(&mut self, index: usize) -> Vec<SequencerAction> {
        let Some(url) = self
            .verse_keys
            .get(index)
            .and_then(|key| self.cache.get(key))
            .map(str::to_string)
        else {
            return self.activate(index, true);
        };
        self.state = PlaybackState::Playing { index };
        vec![SequencerAction::Resume {
            generation: self.generation,
            index,
            url,
        }]
    }

    fn prefetch_after(&mut self, index: usize) -> Vec<SequencerAction> {
        let Some(verse_key) = self.verse_keys.get(index + 1) else {
            return Vec::new();
        };
        if self.cache.contains(verse_key) {
            return Vec::new();
        }
        let narrator = self.cache.narrator();
        if !self.prefetching.insert((narrator, verse_key.clone())) {
            return Vec::new();
        }
        vec![SequencerAction::Prefetch(PrefetchRequest {
            narrator,
            verse_key: verse_key.clone(),
        })]
    }

    fn on_toggle_play(&mut self) -> Vec<SequencerAction> {
        match self.state {
            PlaybackState::Idle => {
                if self.verse_keys.is_empty() {
                    return Vec::new();
                }
                self.activate(0, true)
            }
            PlaybackState::Resolving { index, play } => {
                self.state = PlaybackState::Resolving { index, play: !play };
                Vec::new()
            }
            PlaybackState::Ready { index } => self.activate(index, true),
            PlaybackState::Playing { index } => {
                self.state = PlaybackState::Paused { index };
                vec![SequencerAction::Pause]
            }
            PlaybackState::Paused { index } => self.resume(index),
        }
    }

    fn on_next(&mut self) -> Vec<SequencerAction> {
        let target = match self.cursor() {
            None => 0,
            Some(index) if index + 1 < self.verse_keys.len() => index + 1,
            Some(_) => return Vec::new(),
        };
        let play = self.play_intent();
        self.on_select(target, play)
    }

    fn on_previous(&mut self) -> Vec<SequencerAction> {
        match self.cursor() {
            Some(index) if index > 0 => {
                let play = self.play_intent();
                self.on_select(index - 1, play)
            }
            _ => Vec::new(),
        }
    }

    fn on_resolved(
        &mut self,
        generation: u64,
        narrator: u32,
        verse_key: String,
        url: Option<String>,
    ) -> Vec<SequencerAction> {
        if let Some(url) = url.as_deref() {
            self.cache.put(narrator, &verse_key, url);
        }

        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                verse_key = %verse_key,
                "Ignoring stale audio URL resolution"
            );
            return Vec::new();
        }

        let PlaybackState::Resolving { index, play } = self.state else {
            debug!(verse_key = %verse_key, "Resolution arrived outside of resolving state");
            return Vec::new();
        };
        if self.verse_keys.get(index) != Some(&verse_key) {
            debug!(index, verse_key = %verse_key, "Resolution does not match the active verse");
            return Vec::new();
        }

        let Some(url) = url.filter(|_| narrator == self.cache.narrator()) else {
            warn!(index, verse_key = %verse_key, "No playable source for verse");
            self.state = PlaybackState::Ready { index };
            return Vec::new();
        };

        if play {
            info!(index, verse_key = %verse_key, generation, "Starting verse playback");
            self.state = PlaybackState::Playing { index };
            let mut actions = vec![SequencerAction::Play {
                generation,
                index,
                url,
            }];
            actions.extend(self.prefetch_after(index));
            actions
        } else {
            self.state = PlaybackState::Ready { index };
            Vec::new()
        }
    }

    fn on_prefetched(
        &mut self,
        narrator: u32,
        verse_key: String,
        url: Option<String>,
    ) -> Vec<SequencerAction> {
        self.prefetching.remove(&(narrator, verse_key.clone()));
        if let Some(url) = url {
            if self.cache.put(narrator, &verse_key, &url) {
                debug!(verse_key = %verse_key, narrator, "Prefetched audio URL");
            }
        }
        Vec::new()
    }

    fn on_track_ended(&mut self, generation: u64) -> Vec<SequencerAction> {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Ignoring stale end of track"
            );
            return Vec::new();
        }
        let PlaybackState::Playing { index } = self.state else {
            return Vec::new();
        };

        if self.auto_advance && index + 1 < self.verse_keys.len() {
            debug!(from = index, to = index + 1, "Auto-advancing");
            return self.on_select(index + 1, true);
        }

        info!(index, "Playback finished");
        self.state = PlaybackState::Ready { index };
        vec![SequencerAction::Stop]
    }

    fn on_playback_failed(&mut self, generation: u64) -> Vec<SequencerAction> {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Ignoring stale playback failure"
            );
            return Vec::new();
        }
        match self.state {
            PlaybackState::Playing { index } | PlaybackState::Paused { index } => {
                warn!(index, "Audio playback failed to start");
                self.state = PlaybackState::Ready { index };
                vec![SequencerAction::Stop]
            }
            _ => Vec::new(),
        }
    }

    fn on_narrator_changed(&mut self, narrator: u32) -> Vec<SequencerAction> {
        if narrator == self.cache.narrator() {
            return Vec::new();
        }
        info!(from = self.cache.narrator(), to = narrator, "Narrator changed");

        let had_audio = self.has_audio();
        self.cache.rebind(narrator);
        self.prefetching.clear();

        let (index, play) = match self.state {
            PlaybackState::Idle => {
                self.bump_generation();
                return Vec::new();
            }
            PlaybackState::Playing { index } => (index, true),
            PlaybackState::Resolving { index, play } => (index, play),
            PlaybackState::Ready { index } | PlaybackState::Paused { index } => (index, false),
        };

        let mut actions = Vec::new();
        if had_audio {
            actions.push(SequencerAction::Stop);
        }
        actions.extend(self.activate(index, play));
        actions
    }
}
