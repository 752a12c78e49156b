//! Headless demo binary
//!
//! Runs an autopiloted session against the headless frontend and prints a
//! JSON summary. The real graphics frontend lives out of tree and drives the
//! same `ViewManager` through the `Frontend` trait.

use std::env;

use serde::Serialize;

use traffic_evader::config::Difficulty;
use traffic_evader::consts::FPS;
use traffic_evader::platform::{Frontend, HeadlessFrontend};
use traffic_evader::settings::SharedState;
use traffic_evader::sim::{GameState, autopilot, tick};
use traffic_evader::views::GameView;

/// Safety cap for the demo run, ten minutes of simulated play
const MAX_FRAMES: u64 = 10 * 60 * FPS as u64;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    difficulty: &'static str,
    frames: u64,
    score: u32,
    final_speed: i32,
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    let difficulty = match args.next().as_deref() {
        Some("easy") => Difficulty::Easy,
        Some("hard") => Difficulty::Hard,
        _ => Difficulty::Normal,
    };

    let shared = SharedState {
        difficulty,
        ..SharedState::default()
    };
    let mut frontend = HeadlessFrontend::new();
    let mut view = GameView::new(&shared, seed, frontend.masks());

    let mut frames = 0u64;
    while !view.state.over && frames < MAX_FRAMES {
        let decision = autopilot::decide(&view.state);
        tick(&mut view.state, &decision);
        frames += 1;
    }

    let summary = summarize(seed, difficulty, frames, &view.state);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize run summary: {err}"),
    }
}

fn summarize(seed: u64, difficulty: Difficulty, frames: u64, state: &GameState) -> RunSummary {
    RunSummary {
        seed,
        difficulty: difficulty.as_str(),
        frames,
        score: state.score,
        final_speed: state.speed,
    }
}
