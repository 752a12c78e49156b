//! Deterministic game simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Stepped once per frame, integer pixel arithmetic
//! - Seeded RNG only (a session is reproducible from its seed)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod lane;
pub mod mask;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use lane::{lane_center_x, lane_object_x};
pub use mask::{Mask, sprite_overlap};
pub use rect::Rect;
pub use state::{
    Explosion, GameState, LaneSwitch, ObstacleTier, Player, RoadObject, RoadObjectKind,
    SpriteMasks,
};
pub use tick::{TickEvents, TickInput, tick};
