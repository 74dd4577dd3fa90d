use crate::audio::AudioClip;
use al_bayan_core::player::{AudioUrlCache, PlaybackSequencer};

/// Recitation state: the sequencer plus the clip currently on the speakers.
pub struct PlayerState {
    pub(in crate::app) sequencer: PlaybackSequencer,
    pub(in crate::app) clip: Option<AudioClip>,
    /// Generation of the audio download still in flight, if any.
    pub(in crate::app) pending_download: Option<u64>,
}

impl PlayerState {
    pub(in crate::app) fn new(narrator: u32, auto_advance: bool) -> Self {
        Self {
            sequencer: PlaybackSequencer::new(AudioUrlCache::new(narrator), auto_advance),
            clip: None,
            pending_download: None,
        }
    }

    pub(in crate::app) fn stop_clip(&mut self) {
        self.pending_download = None;
        if let Some(clip) = self.clip.take() {
            clip.stop();
        }
    }

    /// Whether resuming `generation` has to fetch the audio again: there is
    /// no clip for it and no download on the way.
    pub(in crate::app) fn resume_needs_download(&self, generation: u64) -> bool {
        let has_clip = self
            .clip
            .as_ref()
            .is_some_and(|clip| clip.generation() == generation);
        !has_clip && self.pending_download != Some(generation)
    }

    /// Whether the sink needs polling for end of track.
    pub(in crate::app) fn needs_polling(&self) -> bool {
        self.clip.is_some() && self.sequencer.is_playing()
    }
}
