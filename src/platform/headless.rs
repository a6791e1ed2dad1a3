//! Windowless host driven by the autopilot
//!
//! Used by the native binary, which bundles no windowing backend: it plays
//! a bounded demo and reports progress through the log.

use super::Host;
use crate::autopilot::autopilot_keys;
use crate::input::KeyState;
use crate::renderer::{DrawCommand, FrameView};
use crate::sim::{GameMode, GameState};

/// Frames between progress lines
const REPORT_EVERY: u64 = 600;

pub struct HeadlessHost {
    frame_limit: u64,
    frames: u64,
    last_mode: Option<GameMode>,
}

impl HeadlessHost {
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            frames: 0,
            last_mode: None,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Host for HeadlessHost {
    fn poll_keys(&mut self, state: &GameState) -> KeyState {
        autopilot_keys(state)
    }

    fn present(&mut self, view: &FrameView, commands: &[DrawCommand]) {
        self.frames += 1;

        if self.last_mode != Some(view.mode) {
            log::info!("Mode: {:?}", view.mode);
            self.last_mode = Some(view.mode);
        }
        if self.frames % REPORT_EVERY == 0 {
            log::info!(
                "Frame {}: lives {}, score {}, ball ({:.0}, {:.0})",
                self.frames,
                view.lives,
                view.score,
                view.ball_pos.x,
                view.ball_pos.y
            );
        }
        log::trace!("Frame {} draws {} primitives", self.frames, commands.len());
    }

    fn should_quit(&self) -> bool {
        self.frames >= self.frame_limit
    }
}
