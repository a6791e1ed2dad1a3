//! Platform abstraction layer
//!
//! Handles the host-facing side of the loop:
//! - Window configuration (fixed logical resolution, title)
//! - Input polling
//! - Frame presentation
//! - Frame pacing

pub mod headless;

pub use headless::HeadlessHost;

use std::time::{Duration, Instant};

use crate::app::App;
use crate::input::KeyState;
use crate::renderer::{DrawCommand, FrameView};
use crate::sim::GameState;

/// Window the host should open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
    /// Preferred graphics backend; the core never reads it
    pub graphics_backend: &'static str,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Bouncing Ball Game",
            graphics_backend: "opengl",
        }
    }
}

/// A platform the game loop runs on
pub trait Host {
    /// Keys held this frame. `state` is the state the next tick will see.
    fn poll_keys(&mut self, state: &GameState) -> KeyState;
    /// Draw a finished frame
    fn present(&mut self, view: &FrameView, commands: &[DrawCommand]);
    /// Shutdown requested
    fn should_quit(&self) -> bool;
}

/// How frames are timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep to the tick rate and feed measured elapsed time
    RealTime,
    /// One tick per frame, no sleeping
    Fixed,
}

/// Run the loop until the host asks to quit; returns frames run
pub fn run<H: Host>(app: &mut App, host: &mut H, pacing: Pacing) -> u64 {
    let frame_budget = Duration::from_secs_f32(app.tick_secs());
    let mut last = Instant::now();
    let mut frames = 0;

    while !host.should_quit() {
        let frame_start = Instant::now();
        let keys = host.poll_keys(app.state());

        match pacing {
            Pacing::RealTime => {
                let elapsed = frame_start.duration_since(last).as_secs_f32();
                last = frame_start;
                app.frame(keys, elapsed);
            }
            Pacing::Fixed => {
                app.step(keys);
            }
        }

        host.present(&app.view(), &app.draw_list());
        frames += 1;

        if pacing == Pacing::RealTime {
            let spent = frame_start.elapsed();
            if spent < frame_budget {
                std::thread::sleep(frame_budget - spent);
            }
        }
    }

    frames
}
