//! Bouncing Ball - a fixed-timestep paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mode machine, physics, collisions)
//! - `audio`: Event-driven sound cue dispatch
//! - `assets`: Image and audio asset loading
//! - `renderer`: Per-frame draw list and vertex generation
//! - `app`: Fixed-timestep frame driver owning the process resources
//! - `platform`: Host abstraction (window config, input polling, presentation)
//! - `persistence`: Versioned state snapshots

pub mod app;
pub mod assets;
pub mod audio;
pub mod autopilot;
pub mod error;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::{GameError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Ball sprite is a square of this extent
    pub const BALL_SIZE: f32 = 16.0;
    /// Velocity given to a freshly served ball (units/tick)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = PLAYFIELD_HEIGHT - PADDLE_HEIGHT;
    /// Paddle travel per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 5.0;

    /// Session defaults
    pub const START_LIVES: u8 = 3;
    pub const POINTS_PER_BOUNCE: u64 = 10;

    /// Default simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Audio cue format
    pub const AUDIO_SAMPLE_RATE: u32 = 44_100;
    pub const AUDIO_CHANNELS: u16 = 1;
    pub const AUDIO_BITS_PER_SAMPLE: u16 = 16;
}
