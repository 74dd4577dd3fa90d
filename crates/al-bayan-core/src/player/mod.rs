//! Verse-by-verse recitation: URL cache, sequencer and the async tasks that
//! carry out its resolve and prefetch actions.

mod cache;
mod sequencer;

pub use cache::AudioUrlCache;
pub use sequencer::{
    PlaybackSequencer, PlaybackState, PrefetchRequest, ResolveRequest, SequencerAction,
    SequencerEvent,
};

use crate::api::ContentSource;
use tracing::{debug, warn};

/// Looks up the audio URL for a resolve request. Failures are logged here and
/// reported to the sequencer as a missing source.
pub async fn resolve(source: &dyn ContentSource, request: ResolveRequest) -> SequencerEvent {
    let url = match source
        .verse_audio_url(request.narrator, &request.verse_key)
        .await
    {
        Ok(Some(url)) => Some(url),
        Ok(None) => {
            warn!(
                verse_key = %request.verse_key,
                narrator = request.narrator,
                "No recording listed for verse"
            );
            None
        }
        Err(err) => {
            warn!(
                verse_key = %request.verse_key,
                narrator = request.narrator,
                "Audio URL resolution failed: {err}"
            );
            None
        }
    };

    SequencerEvent::Resolved {
        generation: request.generation,
        narrator: request.narrator,
        verse_key: request.verse_key,
        url,
    }
}

/// Best-effort lookahead; errors never leave this function.
pub async fn prefetch(source: &dyn ContentSource, request: PrefetchRequest) -> SequencerEvent {
    let url = match source
        .verse_audio_url(request.narrator, &request.verse_key)
        .await
    {
        Ok(url) => url,
        Err(err) => {
            debug!(verse_key = %request.verse_key, "Prefetch failed: {err}");
            None
        }
    };

    SequencerEvent::Prefetched {
        narrator: request.narrator,
        verse_key: request.verse_key,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Chapter, Reciter, Result, VersePage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves `https://audio/{narrator}/{key}` and records every lookup.
    #[derive(Default)]
    struct RecordingSource {
        lookups: Mutex<Vec<(u32, String)>>,
        failing_keys: Vec<String>,
    }

    #[async_trait]
    impl ContentSource for RecordingSource {
        async fn chapters(&self) -> Result<Vec<Chapter>> {
            Ok(Vec::new())
        }

        async fn verses_page(&self, _chapter_id: u32, _page: u32, _per_page: u32) -> Result<VersePage> {
            Ok(VersePage::default())
        }

        async fn reciters(&self) -> Result<Vec<Reciter>> {
            Ok(Vec::new())
        }

        async fn verse_audio_url(&self, reciter_id: u32, verse_key: &str) -> Result<Option<String>> {
            self.lookups
                .lock()
                .unwrap()
                .push((reciter_id, verse_key.to_string()));
            if self.failing_keys.iter().any(|key| key == verse_key) {
                return Err(ApiError::Timeout {
                    url: format!("https://audio/{reciter_id}/{verse_key}"),
                });
            }
            Ok(Some(format!("https://audio/{reciter_id}/{verse_key}")))
        }

        async fn audio_bytes(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    /// Runs resolve and prefetch actions to completion, feeding the results
    /// back, and returns the play/resume/pause/stop actions that remain.
    async fn drive(
        seq: &mut PlaybackSequencer,
        source: &RecordingSource,
        event: SequencerEvent,
    ) -> Vec<SequencerAction> {
        let mut pending = vec![event];
        let mut output = Vec::new();
        while let Some(event) = pending.pop() {
            for action in seq.handle(event) {
                match action {
                    SequencerAction::Resolve(request) => pending.push(resolve(source, request).await),
                    SequencerAction::Prefetch(request) => {
                        pending.push(prefetch(source, request).await)
                    }
                    other => output.push(other),
                }
            }
        }
        output
    }

    fn keys() -> Vec<String> {
        vec!["114:1".into(), "114:2".into(), "114:3".into()]
    }

    #[tokio::test]
    async fn prefetched_verse_plays_without_a_second_lookup() {
        let source = RecordingSource::default();
        let mut seq = PlaybackSequencer::new(AudioUrlCache::new(7), true);
        drive(&mut seq, &source, SequencerEvent::VersesReplaced(keys())).await;

        let actions = drive(&mut seq, &source, SequencerEvent::TogglePlay).await;
        assert!(matches!(actions[..], [SequencerAction::Play { index: 0, .. }]));

        let generation = seq.generation();
        let actions = drive(&mut seq, &source, SequencerEvent::TrackEnded { generation }).await;
        assert!(actions.contains(&SequencerAction::Play {
            generation: seq.generation(),
            index: 1,
            url: "https://audio/7/114:2".to_string(),
        }));

        let lookups = source.lookups.lock().unwrap().clone();
        let second_verse = lookups.iter().filter(|(_, key)| key == "114:2").count();
        assert_eq!(second_verse, 1);
    }

    #[tokio::test]
    async fn resolution_error_leaves_verse_ready() {
        let source = RecordingSource {
            failing_keys: vec!["114:1".to_string()],
            ..RecordingSource::default()
        };
        let mut seq = PlaybackSequencer::new(AudioUrlCache::new(7), true);
        drive(&mut seq, &source, SequencerEvent::VersesReplaced(keys())).await;

        let actions = drive(
            &mut seq,
            &source,
            SequencerEvent::SelectVerse {
                index: 0,
                play: true,
            },
        )
        .await;

        assert!(actions.is_empty());
        assert_eq!(seq.state(), PlaybackState::Ready { index: 0 });
        assert!(!seq.play_intent());
    }

    #[tokio::test]
    async fn failed_prefetch_is_dropped() {
        let source = RecordingSource {
            failing_keys: vec!["114:2".to_string()],
            ..RecordingSource::default()
        };
        let mut seq = PlaybackSequencer::new(AudioUrlCache::new(7), true);
        drive(&mut seq, &source, SequencerEvent::VersesReplaced(keys())).await;

        let actions = drive(&mut seq, &source, SequencerEvent::TogglePlay).await;
        assert!(matches!(actions[..], [SequencerAction::Play { index: 0, .. }]));
        assert!(!seq.cache().contains("114:2"));
        assert!(seq.is_playing());
    }
}
