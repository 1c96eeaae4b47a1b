//! Canvas Pong headless runner
//!
//! Plays a session against the built-in opponent with a seeded autopilot at
//! the pointer, paced by a fixed frame rate, and logs the result.

use clap::Parser;

use canvas_pong::autopilot::Autopilot;
use canvas_pong::sim::GameEvent;
use canvas_pong::{ConfigError, GameConfig, Session};

#[derive(Debug, Parser)]
#[command(name = "canvas-pong", about = "Run a headless Pong session")]
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Simulated wall-clock seconds to play
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let start_key = config
        .start_keys
        .first()
        .cloned()
        .unwrap_or_else(|| canvas_pong::consts::START_KEY.to_string());

    let fps = args.fps.max(1);
    let dt = 1.0 / fps as f32;
    let frames = (args.seconds.max(0.0) * fps as f32) as u64;

    log::info!(
        "Canvas Pong: {} frames at {} fps, seed {}",
        frames,
        fps,
        args.seed
    );

    let mut session = Session::new(&config);
    let mut pilot = Autopilot::new(args.seed, start_key);
    let mut rallies = 0u32;

    for _ in 0..frames {
        pilot.drive(&mut session);
        let report = session.frame(dt);
        for event in &report.events {
            match event {
                GameEvent::PaddleHit { .. } => rallies += 1,
                GameEvent::Goal { scorer } => {
                    log::info!("{:?} scored after {} paddle hits", scorer, rallies);
                    rallies = 0;
                }
                GameEvent::WallBounce => {}
            }
        }
    }

    session.stop();
    let snapshot = session.snapshot();
    println!(
        "Final score: player {} - opponent {}",
        snapshot.player_score, snapshot.opponent_score
    );
    Ok(())
}
