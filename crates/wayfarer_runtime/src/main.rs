//! Wayfarer Session Runner
//!
//! Plays a scripted session headlessly: the character controller runs
//! against a flat floor, a top-down aim camera and the scene's pickups,
//! portals and fences, with progress kept in a prefs file.
//!
//! Run with: cargo run -p wayfarer_runtime
//!       or: cargo run --bin wayfarer -- session.toml

mod session;
mod session_config;
mod world;

use session::Session;
use session_config::SessionConfig;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("PANIC: {}", panic_info);
    }));

    if let Err(e) = run() {
        log::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), session_config::SessionError> {
    let config = SessionConfig::load()?;
    config.print_summary();

    let mut session = Session::new(&config)?;
    let report = session.run(&config.script);

    log::info!("Session finished after {} frames", report.frames);
    log::info!("  Scene: {}", report.scene);
    log::info!("  Score: {}", report.score);
    log::info!("  Health: {}{}", report.health, if report.is_dead { " (dead)" } else { "" });
    log::info!("  Levels unlocked: {}", report.furthest_unlocked);
    log::info!("  Scene loads: {:?}", report.scenes_loaded);
    log::info!("  Entities left: {}", report.entities_remaining);
    if let Some(name) = report.last_animation {
        log::info!("  Last animation: {}{}", name, if report.clip_playing { " (playing)" } else { "" });
    }
    log::info!("  HUD: {}", session.hud().summary());
    Ok(())
}
