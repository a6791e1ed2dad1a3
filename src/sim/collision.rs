//! Collision detection and response against axis-aligned boundaries
//!
//! All comparisons are strict: touching a boundary exactly is not a hit.
//! Positions are never corrected, only velocity signs flip, so the ball may
//! sit past a wall by up to one tick of travel before it heads back.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Which axes a wall check reflected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect the ball off the side walls and the ceiling
///
/// The bottom edge is open; see [`exited_bottom`].
pub fn reflect_off_walls(ball: &mut Ball) -> WallHit {
    let mut hit = WallHit::default();
    if ball.pos.x < 0.0 || ball.pos.x > PLAYFIELD_WIDTH - BALL_SIZE {
        ball.vel.x = -ball.vel.x;
        hit.x = true;
    }
    if ball.pos.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        hit.y = true;
    }
    hit
}

/// Ball top-left is inside the band just above the paddle and within its span
pub fn hits_paddle(ball_pos: Vec2, paddle: &Paddle) -> bool {
    let in_band = ball_pos.y > PADDLE_Y - BALL_SIZE && ball_pos.y < PADDLE_Y;
    let in_span = ball_pos.x > paddle.x && ball_pos.x < paddle.right();
    in_band && in_span
}

/// Ball has dropped past the bottom of the playfield
pub fn exited_bottom(ball: &Ball) -> bool {
    ball.pos.y > PLAYFIELD_HEIGHT
}
