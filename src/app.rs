//! Application object: process resources plus the fixed-timestep driver
//!
//! Per frame: input snapshot -> whole ticks -> sound dispatch -> the host
//! reads the frame view. Resources are acquired once in `Resources::load`
//! and released when the app is dropped.

use glam::Vec2;

use crate::assets::{ImageHandle, load_audio, load_image};
use crate::audio::{AudioOutput, SoundDispatcher};
use crate::error::Result;
use crate::input::{InputTracker, KeyState};
use crate::persistence::Snapshot;
use crate::renderer::{DrawCommand, FrameMesh, FrameView, draw_list, frame_mesh};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Long-lived handles owned for the whole process
pub struct Resources {
    pub ball_image: ImageHandle,
    pub sound: SoundDispatcher,
    // Dropped last so the cue player's sink goes away before the stream
    _audio: Option<AudioOutput>,
}

impl Resources {
    /// Load assets and open the audio device; any failure is fatal
    pub fn load(settings: &Settings) -> Result<Self> {
        let ball_image = load_image(&settings.ball_image)?;
        let clip = load_audio(&settings.bounce_sound)?;
        let audio = AudioOutput::open()?;

        let mut sound = SoundDispatcher::new(Box::new(
            audio.player(&clip, settings.effective_volume()),
        ));
        sound.set_muted(settings.muted);

        Ok(Self {
            ball_image,
            sound,
            _audio: Some(audio),
        })
    }

    /// Resources with a caller-provided dispatcher and no audio device
    pub fn with_sound(ball_image: ImageHandle, sound: SoundDispatcher) -> Self {
        Self {
            ball_image,
            sound,
            _audio: None,
        }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Ticks run this frame
    pub ticks: u32,
    /// Events from all ticks, in order
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
pub struct App {
    state: GameState,
    resources: Resources,
    input: InputTracker,
    /// Start edge seen but not yet consumed by a tick
    pending_start: bool,
    accumulator: f32,
    tick_secs: f32,
    max_substeps: u32,
}

impl App {
    pub fn new(settings: &Settings, resources: Resources) -> Self {
        Self {
            state: GameState::new(),
            resources,
            input: InputTracker::new(),
            pending_start: false,
            accumulator: 0.0,
            tick_secs: settings.tick_secs(),
            max_substeps: settings.max_substeps.max(1),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tick_secs(&self) -> f32 {
        self.tick_secs
    }

    /// Run as many whole ticks as `elapsed_secs` covers
    pub fn frame(&mut self, keys: KeyState, elapsed_secs: f32) -> FrameReport {
        // Clamp long stalls (window drag, breakpoint)
        self.accumulator += elapsed_secs.clamp(0.0, 0.1);
        let mut input = self.input.snapshot(keys);
        self.pending_start |= input.start_pressed;

        let mut report = FrameReport::default();
        while self.accumulator >= self.tick_secs && report.ticks < self.max_substeps {
            input.start_pressed = self.pending_start;
            let events = tick(&mut self.state, &input);
            self.resources.sound.dispatch(&events);
            report.events.extend(events);

            self.pending_start = false;
            self.accumulator -= self.tick_secs;
            report.ticks += 1;
        }

        // Drop whatever backlog the substep cap left behind
        if self.accumulator >= self.tick_secs {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        report
    }

    /// Run exactly one tick (for hosts that drive the cadence themselves)
    pub fn step(&mut self, keys: KeyState) -> FrameReport {
        self.accumulator = 0.0;
        self.frame(keys, self.tick_secs)
    }

    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.state)
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        draw_list(&self.view())
    }

    pub fn mesh(&self) -> FrameMesh {
        let image = &self.resources.ball_image;
        frame_mesh(
            &self.view(),
            Vec2::new(image.width as f32, image.height as f32),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Resume from a snapshot; pending input and time debt are discarded
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.restore();
        self.input = InputTracker::new();
        self.pending_start = false;
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CuePlayer;
    use crate::sim::GameMode;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    struct CountingCue(Rc<Cell<u32>>);

    impl CuePlayer for CountingCue {
        fn seek_to_start(&mut self) {}
        fn play(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn sprite() -> ImageHandle {
        ImageHandle {
            width: 16,
            height: 16,
            bytes: Arc::from(Vec::new()),
        }
    }

    fn test_app(settings: &Settings) -> (App, Rc<Cell<u32>>) {
        let plays = Rc::new(Cell::new(0));
        let sound = SoundDispatcher::new(Box::new(CountingCue(plays.clone())));
        (
            App::new(settings, Resources::with_sound(sprite(), sound)),
            plays,
        )
    }

    const START: KeyState = KeyState {
        left: false,
        right: false,
        start: true,
    };

    #[test]
    fn test_one_frame_one_tick() {
        let (mut app, _) = test_app(&Settings::default());
        let dt = app.tick_secs();

        let report = app.frame(START, dt);
        assert_eq!(report.ticks, 1);
        assert_eq!(app.state().mode, GameMode::Playing);

        let report = app.frame(KeyState::default(), dt);
        assert_eq!(report.ticks, 1);
        assert_eq!(app.state().ball.pos, Vec2::new(322.0, 242.0));
    }

    #[test]
    fn test_start_survives_a_short_frame() {
        let (mut app, _) = test_app(&Settings::default());
        let dt = app.tick_secs();

        let report = app.frame(START, dt * 0.25);
        assert_eq!(report.ticks, 0);
        assert_eq!(app.state().mode, GameMode::Menu);

        // Key still held: no new edge, but the pending one is consumed
        app.frame(START, dt);
        assert_eq!(app.state().mode, GameMode::Playing);
    }

    #[test]
    fn test_start_only_applies_to_first_substep() {
        let (mut app, _) = test_app(&Settings::default());
        let dt = app.tick_secs();
        app.frame(START, dt);
        app.frame(KeyState::default(), dt);

        // Force game over, then a multi-tick frame with start held
        let mut state = app.state().clone();
        state.mode = GameMode::Menu;
        app.restore(Snapshot::capture(&state));
        let report = app.frame(START, dt * 3.5);
        assert_eq!(report.ticks, 3);
        assert_eq!(app.state().mode, GameMode::Playing);
        // Reset on the first tick, then two playing ticks
        assert_eq!(app.state().ball.pos, Vec2::new(324.0, 244.0));
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let settings = Settings {
            max_substeps: 2,
            ..Settings::default()
        };
        let (mut app, _) = test_app(&settings);
        let dt = app.tick_secs();

        let report = app.frame(START, dt * 4.0);
        assert_eq!(report.ticks, 2);
        let report = app.frame(KeyState::default(), 0.0);
        assert_eq!(report.ticks, 0);
    }

    #[test]
    fn test_bounce_reaches_sound() {
        let (mut app, plays) = test_app(&Settings::default());
        app.step(START);

        let mut state = app.state().clone();
        state.ball.pos = Vec2::new(0.0, 240.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);
        app.restore(Snapshot::capture(&state));

        let report = app.step(KeyState::default());
        assert_eq!(report.events, vec![GameEvent::Bounced]);
        assert_eq!(plays.get(), 1);
    }

    #[test]
    fn test_mesh_uses_sprite_size() {
        let (mut app, _) = test_app(&Settings::default());
        assert!(app.mesh().sprite.is_empty());
        app.step(START);
        let mesh = app.mesh();
        assert_eq!(mesh.sprite.len(), 6);
        assert_eq!(app.draw_list().len(), 4);
    }
}
