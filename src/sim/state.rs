//! Game state and core simulation types
//!
//! All state that must be persisted for snapshot/determinism lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which update/draw path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title banner, waiting for the start key
    #[default]
    Menu,
    /// Active gameplay
    Playing,
}

/// Signals emitted by a tick for side-effect consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// At least one wall or paddle reflection happened this tick
    Bounced,
    /// Ball left through the bottom of the playfield
    LifeLost,
    /// Last life lost, mode went back to Menu
    GameOver,
}

/// The ball (a square sprite; `pos` is its top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::served()
    }
}

impl Ball {
    /// A ball at the playfield center moving with the start velocity
    pub fn served() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
        }
    }

    /// Euler step, no sub-stepping
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle (fixed y, only x moves)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::centered()
    }
}

impl Paddle {
    pub const MIN_X: f32 = 0.0;
    pub const MAX_X: f32 = PLAYFIELD_WIDTH - PADDLE_WIDTH;

    pub fn centered() -> Self {
        Self {
            x: (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - PADDLE_STEP).max(Self::MIN_X);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + PADDLE_STEP).min(Self::MAX_X);
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH
    }
}

/// Lives and score for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub lives: u8,
    pub score: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            lives: START_LIVES,
            score: 0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub ball: Ball,
    pub paddle: Paddle,
    pub session: Session,
    /// Simulation tick counter (ticks spent in Playing)
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh process state: Menu mode, everything at its defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Full reset into a new run; never incremental
    pub fn start_run(&mut self) {
        self.mode = GameMode::Playing;
        self.session = Session::default();
        self.ball = Ball::served();
        self.paddle = Paddle::centered();
        self.time_ticks = 0;
    }
}
