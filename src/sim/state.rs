//! Game session state and core simulation types
//!
//! Everything a single play session owns: the player car with its
//! lane-switch state machine, the obstacle/coin populations, the explosion
//! sub-state, and the seeded RNG that makes a session reproducible.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{Difficulty, LevelConfig};
use crate::consts::*;
use crate::switch_frames;

use super::mask::Mask;
use super::rect::Rect;

/// Obstacle price class; decides which sprite roster a spawn draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleTier {
    Low,
    Medium,
    High,
}

impl ObstacleTier {
    /// Map a uniform roll in 1..=100 to a tier: 60% low, 37% medium, 3% high
    pub fn from_roll(roll: i32) -> Self {
        debug_assert!((1..=100).contains(&roll));
        if roll <= 60 {
            ObstacleTier::Low
        } else if roll <= 97 {
            ObstacleTier::Medium
        } else {
            ObstacleTier::High
        }
    }

    /// Number of sprite variants in this tier's roster
    pub fn variant_count(&self) -> u8 {
        match self {
            ObstacleTier::Low => 3,
            ObstacleTier::Medium => 3,
            ObstacleTier::High => 2,
        }
    }
}

/// What a road object is, plus its visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadObjectKind {
    Obstacle { tier: ObstacleTier, variant: u8 },
    Coin,
}

/// A coin or obstacle scrolling down the screen
#[derive(Debug, Clone)]
pub struct RoadObject {
    pub kind: RoadObjectKind,
    /// Lane index, 1..=lanes
    pub lane: u8,
    pub rect: Rect,
    /// Current sprite-sheet frame (coins animate, obstacles do not)
    pub anim_frame: u8,
    anim_ticks: u32,
}

impl RoadObject {
    pub fn new(kind: RoadObjectKind, lane: u8, rect: Rect) -> Self {
        Self {
            kind,
            lane,
            rect,
            anim_frame: 0,
            anim_ticks: 0,
        }
    }

    pub fn is_coin(&self) -> bool {
        matches!(self.kind, RoadObjectKind::Coin)
    }

    /// Scroll down by `speed` pixels and advance the coin animation
    pub fn update(&mut self, speed: i32) {
        self.rect.y += speed;

        if self.is_coin() {
            self.anim_ticks += 1;
            if self.anim_ticks >= COIN_ANIM_TICKS {
                self.anim_ticks = 0;
                self.anim_frame = (self.anim_frame + 1) % COIN_ANIM_FRAMES;
            }
        }
    }
}

/// Lane-switch state: the logical lane changes instantly on input, the
/// visual position animates toward `target_x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSwitch {
    Idle,
    Left { target_x: i32 },
    Right { target_x: i32 },
}

/// The player car
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Current lane, 1..=level.lanes at all times
    pub lane: u8,
    pub switching: LaneSwitch,
    level: &'static LevelConfig,
    /// Pixels moved per frame during a switch
    step: i32,
}

impl Player {
    pub fn new(level: &'static LevelConfig) -> Self {
        let frames = switch_frames();
        Self {
            rect: Rect::new(level.player_init_x, PLAYER_Y, PLAYER_SIZE, PLAYER_SIZE),
            lane: level.player_init_lane,
            switching: LaneSwitch::Idle,
            level,
            step: (level.lane_width as f32 / frames as f32).round() as i32,
        }
    }

    pub fn is_switching(&self) -> bool {
        !matches!(self.switching, LaneSwitch::Idle)
    }

    /// Start a left switch. No-op while a switch is in progress or at lane 1.
    pub fn move_left(&mut self) {
        if !self.is_switching() && self.lane > 1 {
            self.lane -= 1;
            self.switching = LaneSwitch::Left {
                target_x: self.rect.center_x() - self.level.lane_width,
            };
        }
    }

    /// Start a right switch. No-op while a switch is in progress or at the
    /// rightmost lane.
    pub fn move_right(&mut self) {
        if !self.is_switching() && self.lane < self.level.lanes {
            self.lane += 1;
            self.switching = LaneSwitch::Right {
                target_x: self.rect.center_x() + self.level.lane_width,
            };
        }
    }

    /// Advance the switch animation one frame. Rounding makes the per-frame
    /// step inexact, so the final frame snaps to the target instead of
    /// overshooting.
    pub fn update(&mut self) {
        match self.switching {
            LaneSwitch::Idle => {}
            LaneSwitch::Left { target_x } => {
                if self.rect.center_x() - self.step > target_x {
                    self.rect.set_center_x(self.rect.center_x() - self.step);
                } else {
                    self.rect.set_center_x(target_x);
                    self.switching = LaneSwitch::Idle;
                }
            }
            LaneSwitch::Right { target_x } => {
                if self.rect.center_x() + self.step < target_x {
                    self.rect.set_center_x(self.rect.center_x() + self.step);
                } else {
                    self.rect.set_center_x(target_x);
                    self.switching = LaneSwitch::Idle;
                }
            }
        }
    }
}

/// Explosion animation, active between collision and the GameOver handoff
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    /// Sprite-sheet frame currently shown
    pub frame: u8,
    frame_ticks: u32,
    pub finished: bool,
}

impl Explosion {
    pub fn at(center: IVec2) -> Self {
        let mut rect = Rect::new(0, 0, EXPLOSION_SIZE, EXPLOSION_SIZE);
        rect.set_center(center);
        Self {
            rect,
            frame: 1,
            frame_ticks: 0,
            finished: false,
        }
    }

    /// Show the next animation frame every `EXPLOSION_FRAME_TICKS` updates
    pub fn update(&mut self) {
        self.frame_ticks += 1;
        if self.frame_ticks >= EXPLOSION_FRAME_TICKS {
            self.frame_ticks = 0;
            self.frame += 1;
        }
        if self.frame >= EXPLOSION_FRAMES {
            self.finished = true;
        }
    }
}

/// Collision masks for the session's sprites. A real frontend builds these
/// from sprite alpha channels; headless runs use filled rectangles.
#[derive(Debug, Clone)]
pub struct SpriteMasks {
    pub player: Mask,
    pub obstacle: Mask,
    pub coin: Mask,
}

impl SpriteMasks {
    /// Rectangular masks matching the sprite bounding boxes
    pub fn rectangular() -> Self {
        Self {
            player: Mask::filled(PLAYER_SIZE, PLAYER_SIZE),
            obstacle: Mask::filled(OBSTACLE_SIZE, OBSTACLE_SIZE),
            coin: Mask::filled(COIN_SIZE, COIN_SIZE),
        }
    }
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    pub level: &'static LevelConfig,
    pub player: Player,
    pub obstacles: Vec<RoadObject>,
    pub coins: Vec<RoadObject>,
    /// Scroll speed in pixels per frame; also drives spawn density
    pub speed: i32,
    /// Frames since the last speed increase
    pub frame_count: i32,
    pub score: u32,
    /// Road/background scroll offset for rendering, wraps at screen height
    pub scroll: i32,
    /// Set once the player has hit an obstacle; the explosion is the only
    /// thing that still animates
    pub explosion: Option<Explosion>,
    /// Terminal: explosion finished, session is over
    pub over: bool,
    pub masks: SpriteMasks,
    pub seed: u64,
    pub(super) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, difficulty: Difficulty, masks: SpriteMasks) -> Self {
        let level = difficulty.level();
        Self {
            level,
            player: Player::new(level),
            obstacles: Vec::new(),
            coins: Vec::new(),
            speed: INITIAL_SPEED,
            frame_count: 0,
            score: 0,
            scroll: 0,
            explosion: None,
            over: false,
            masks,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn exploding(&self) -> bool {
        self.explosion.is_some()
    }
}
