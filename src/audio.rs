//! Audio output for one verse recitation at a time.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, info};

/// A decoded clip playing on its own output stream. Dropping the clip stops
/// the audio.
pub struct AudioClip {
    _stream: OutputStream,
    sink: Sink,
    generation: u64,
}

impl AudioClip {
    /// Decodes `bytes` (MP3 or any format rodio recognizes) and starts
    /// playing immediately.
    pub fn start(bytes: Arc<[u8]>, generation: u64) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        let len = bytes.len();
        let source = Decoder::new(Cursor::new(bytes)).context("Decoding recitation audio")?;
        sink.append(source);
        sink.play();
        info!(generation, bytes = len, "Started recitation clip");
        Ok(Self {
            _stream,
            sink,
            generation,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pause(&self) {
        debug!(generation = self.generation, "Pausing playback");
        self.sink.pause();
    }

    pub fn play(&self) {
        debug!(generation = self.generation, "Resuming playback");
        self.sink.play();
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    /// True once every queued sample has been played.
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn stop(self) {
        debug!(generation = self.generation, "Stopping playback");
        self.sink.stop();
    }
}
