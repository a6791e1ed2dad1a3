//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are per tick)
//! - No rendering, audio or platform dependencies
//! - Side effects leave as returned `GameEvent`s

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallHit, exited_bottom, hits_paddle, reflect_off_walls};
pub use state::{Ball, GameEvent, GameMode, GameState, Paddle, Session};
pub use tick::{TickInput, tick};
