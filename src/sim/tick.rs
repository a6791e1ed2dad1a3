//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is
//! one tick; velocities are in units per tick so there is no `dt`.

use serde::{Deserialize, Serialize};

use super::collision::{exited_bottom, hits_paddle, reflect_off_walls};
use super::state::{Ball, GameEvent, GameMode, GameState};
use crate::consts::POINTS_PER_BOUNCE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left_held: bool,
    /// Move paddle right (held)
    pub right_held: bool,
    /// Start a run (just pressed this frame)
    pub start_pressed: bool,
}

/// Advance the game state by one tick
///
/// Returns the events emitted during the tick, in emission order. At most
/// one `Bounced` is emitted no matter how many reflections happened.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    match state.mode {
        GameMode::Menu => {
            if input.start_pressed {
                state.start_run();
                log::info!("Run started");
            }
            Vec::new()
        }
        GameMode::Playing => tick_playing(state, input),
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Independent clamped moves; holding both cancels out
    if input.left_held {
        state.paddle.move_left();
    }
    if input.right_held {
        state.paddle.move_right();
    }

    state.ball.integrate();

    let mut bounced = reflect_off_walls(&mut state.ball).any();

    // Uses the integrated position; wall corrections above only touched velocity
    if hits_paddle(state.ball.pos, &state.paddle) {
        state.ball.vel.y = -state.ball.vel.y;
        state.session.score += POINTS_PER_BOUNCE;
        bounced = true;
    }

    if exited_bottom(&state.ball) {
        state.session.lives = state.session.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost);
        if state.session.lives == 0 {
            // Ball and paddle stay where they are; mode alone decides what is drawn
            state.mode = GameMode::Menu;
            events.push(GameEvent::GameOver);
            log::info!("Game over, final score {}", state.session.score);
        } else {
            state.ball = Ball::served();
            log::debug!("Life lost, {} remaining", state.session.lives);
        }
    }

    if bounced {
        events.push(GameEvent::Bounced);
    }

    events
}
