//! Demo mode - the game plays itself
//!
//! Produces key state the same way a player would, so the rest of the loop
//! cannot tell the difference.

use crate::consts::{BALL_SIZE, PADDLE_STEP, PADDLE_WIDTH};
use crate::input::KeyState;
use crate::sim::{GameMode, GameState};

/// Keys the autopilot would hold for the current state
///
/// In the menu it holds start (the tracker turns that into one press); in
/// play it steers the paddle center toward the ball center.
pub fn autopilot_keys(state: &GameState) -> KeyState {
    match state.mode {
        GameMode::Menu => KeyState {
            start: true,
            ..Default::default()
        },
        GameMode::Playing => {
            let ball_center = state.ball.pos.x + BALL_SIZE / 2.0;
            let paddle_center = state.paddle.x + PADDLE_WIDTH / 2.0;
            let offset = ball_center - paddle_center;
            KeyState {
                left: offset < -PADDLE_STEP,
                right: offset > PADDLE_STEP,
                start: false,
            }
        }
    }
}
