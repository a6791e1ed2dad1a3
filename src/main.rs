//! Bouncing Ball demo entry point
//!
//! The native binary bundles no window or keyboard backend. It acquires the
//! process resources, then plays an autopilot demo on the headless host for
//! `Settings::demo_frames` frames; player keys are never read here. A
//! windowed host implements `platform::Host` and `renderer::Canvas` instead.
//! Missing assets or audio device are fatal.

use bouncing_ball::app::{App, Resources};
use bouncing_ball::platform::{self, HeadlessHost, Pacing, WindowConfig};
use bouncing_ball::Settings;

fn main() {
    env_logger::init();
    log::info!("Bouncing Ball autopilot demo starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

fn run() -> bouncing_ball::Result<()> {
    let settings = Settings::load();
    let window = WindowConfig::default();
    log::info!(
        "{} at {}x{} (backend hint: {})",
        window.title,
        window.width,
        window.height,
        window.graphics_backend
    );

    let resources = Resources::load(&settings)?;
    let mut app = App::new(&settings, resources);
    let mut host = HeadlessHost::new(settings.demo_frames);

    let frames = platform::run(&mut app, &mut host, Pacing::RealTime);

    let state = app.state();
    log::info!(
        "Stopped after {} frames: {:?}, lives {}, score {}",
        frames,
        state.mode,
        state.session.lives,
        state.session.score
    );
    Ok(())
}
