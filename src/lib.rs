//! Traffic Evader - a lane-based arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, collisions, scoring)
//! - `views`: Menu / Settings / Game / GameOver view machine and driver
//! - `platform`: Rendering/audio/input collaborator trait + headless impl
//! - `config`: Per-difficulty level table
//! - `settings`: Cross-view player choices (difficulty, car)

pub mod config;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;
pub mod views;

pub use config::{Difficulty, LevelConfig};
pub use settings::SharedState;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const WIDTH: i32 = 960;
    pub const HEIGHT: i32 = 540;

    /// Target frame rate; the whole simulation is stepped once per frame
    pub const FPS: u32 = 60;

    /// Scroll speed at the start of a session (pixels per frame)
    pub const INITIAL_SPEED: i32 = 2;

    /// Lane-switch speed factor; higher means snappier switches
    pub const LANE_SWITCH_SPEED: f32 = 1.0;
    /// Base frame count a lane switch is divided into (at speed factor 1.0)
    pub const LANE_SWITCH_BASE_FRAMES: f32 = 15.0;

    /// Sprite sizes (square, pixels)
    pub const PLAYER_SIZE: i32 = 75;
    pub const OBSTACLE_SIZE: i32 = 64;
    pub const COIN_SIZE: i32 = 32;
    pub const EXPLOSION_SIZE: i32 = 80;

    /// Vertical position of the player car
    pub const PLAYER_Y: i32 = 400;

    /// Road layout: painted side line width and lane divider allowance
    pub const ROAD_MARGIN: i32 = 30;
    pub const LANE_LINE: i32 = 10;

    /// Coin sprite sheet: 4 frames, advancing every 8 simulation frames
    pub const COIN_ANIM_FRAMES: u8 = 4;
    pub const COIN_ANIM_TICKS: u32 = 8;

    /// Explosion sprite sheet: 8 frames, advancing every 12 simulation frames
    pub const EXPLOSION_FRAMES: u8 = 8;
    pub const EXPLOSION_FRAME_TICKS: u32 = 12;

    /// Spawner: fresh vertical offsets above the screen top
    pub const SPAWN_OFFSET_MIN: i32 = 50;
    pub const SPAWN_OFFSET_MAX: i32 = 400;
    /// At most this many objects of one kind enter play per frame
    pub const SPAWN_BATCH_MAX: i32 = 3;
    /// Rejection-sampling bound before falling back to forced placement
    pub const SPAWN_RETRY_MAX: u32 = 32;

    /// Frames per speed tier: speed increments after `speed * 600` frames
    pub const SPEED_TIER_FRAMES: i32 = 600;
}

/// Number of frames a lane switch takes at the configured speed factor
#[inline]
pub fn switch_frames() -> i32 {
    (consts::LANE_SWITCH_BASE_FRAMES / consts::LANE_SWITCH_SPEED).round() as i32
}
