//! Audio output and event-driven sound dispatch
//!
//! The simulation emits `GameEvent`s; `SoundDispatcher` turns them into cue
//! playback. Playback is fire-and-forget and never reports failure back to
//! the game loop.

use rodio::buffer::SamplesBuffer;
use rodio::source::Buffered;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use crate::assets::AudioClip;
use crate::error::{GameError, Result};
use crate::sim::GameEvent;

/// A single restartable sound cue
pub trait CuePlayer {
    /// Stop any in-flight playback and rewind to sample 0
    fn seek_to_start(&mut self);
    /// Start playback from the current position
    fn play(&mut self);
}

/// Process-wide audio output; must outlive every player created from it
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Open the default output device
    ///
    /// Blocks until the device is ready; failure is fatal at startup.
    pub fn open() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| GameError::AudioDevice(format!("Failed to open audio output: {}", e)))?;
        log::info!("Audio output ready");
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Create a player for a cue on this output
    pub fn player(&self, clip: &AudioClip, volume: f32) -> RodioCue {
        RodioCue {
            handle: self.handle.clone(),
            source: cue_source(clip),
            volume,
            sink: None,
        }
    }
}

/// Decode-once playback source; clones share the sample buffer
fn cue_source(clip: &AudioClip) -> Buffered<SamplesBuffer<i16>> {
    SamplesBuffer::new(clip.channels(), clip.sample_rate(), clip.samples.to_vec()).buffered()
}

/// Cue player backed by a rodio sink
///
/// Each restart drops the previous sink (which stops it) and queues the
/// clip on a fresh one, so rapid bounces restart the cue instead of
/// layering copies.
pub struct RodioCue {
    handle: OutputStreamHandle,
    source: Buffered<SamplesBuffer<i16>>,
    volume: f32,
    sink: Option<Sink>,
}

impl CuePlayer for RodioCue {
    fn seek_to_start(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn play(&mut self) {
        if self.sink.is_some() {
            return;
        }
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::warn!("Audio playback unavailable: {}", e);
                return;
            }
        };
        sink.set_volume(self.volume);
        sink.append(self.source.clone());
        self.sink = Some(sink);
    }
}

/// Player used when no audio backend is available
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl CuePlayer for SilentCue {
    fn seek_to_start(&mut self) {}
    fn play(&mut self) {}
}

/// Translates simulation events into sound
pub struct SoundDispatcher {
    bounce: Box<dyn CuePlayer>,
    muted: bool,
}

impl Default for SoundDispatcher {
    fn default() -> Self {
        Self::silent()
    }
}

impl SoundDispatcher {
    pub fn new(bounce: Box<dyn CuePlayer>) -> Self {
        Self {
            bounce,
            muted: false,
        }
    }

    /// Dispatcher with no backend; every trigger is a no-op
    pub fn silent() -> Self {
        Self::new(Box::new(SilentCue))
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// React to the events of one tick, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Bounced => {
                    if !self.muted {
                        self.bounce.seek_to_start();
                        self.bounce.play();
                    }
                }
                GameEvent::LifeLost => log::debug!("Event: life lost"),
                GameEvent::GameOver => log::debug!("Event: game over"),
            }
        }
    }
}
