//! Game settings and preferences
//!
//! The native build has no config file: `Settings::load()` returns the
//! defaults. Embedding hosts can round-trip settings through JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_RATE};
use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Assets ===
    /// Ball sprite (PNG)
    pub ball_image: PathBuf,
    /// Bounce cue (44.1 kHz mono 16-bit WAV)
    pub bounce_sound: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Mute all cues
    pub muted: bool,

    // === Loop ===
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Maximum ticks run in a single frame
    pub max_substeps: u32,
    /// Frames the headless host runs before shutting down
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_image: PathBuf::from("ball.png"),
            bounce_sound: PathBuf::from("bounce.wav"),

            master_volume: 0.8,
            muted: false,

            tick_rate: TICK_RATE,
            max_substeps: MAX_SUBSTEPS,
            demo_frames: 60 * 60,
        }
    }
}

impl Settings {
    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Volume actually applied to playback (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }

    /// Length of one tick in seconds
    pub fn tick_secs(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Native builds have no settings storage
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.max_substeps, 8);
        assert_eq!(settings.ball_image, PathBuf::from("ball.png"));
        assert_eq!(settings.bounce_sound, PathBuf::from("bounce.wav"));
        assert!((settings.tick_secs() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_volume_clamped_and_muted() {
        let mut settings = Settings::default();
        settings.set_master_volume(3.0);
        assert_eq!(settings.master_volume, 1.0);
        settings.set_master_volume(-1.0);
        assert_eq!(settings.master_volume, 0.0);

        settings.set_master_volume(0.5);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "tick_rate": 120 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.tick_rate, 120);
        assert_eq!(settings.max_substeps, 8);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.demo_frames = 10;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
