//! Cross-view player choices
//!
//! `SharedState` is the only state that survives view transitions: the
//! selected difficulty and car. It is owned by the view driver, mutated by
//! the Settings view, and lives for the process lifetime (no persistence).

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;

/// Player car selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CarKind {
    #[default]
    Blue,
    Touring,
    Red,
    Green,
}

impl CarKind {
    pub const ALL: [CarKind; 4] = [CarKind::Blue, CarKind::Touring, CarKind::Red, CarKind::Green];

    /// Sprite base name, e.g. `sprites/cars/blue_car.png`
    pub fn sprite_name(&self) -> &'static str {
        match self {
            CarKind::Blue => "blue_car",
            CarKind::Touring => "touring_car",
            CarKind::Red => "red_car",
            CarKind::Green => "green_car",
        }
    }
}

/// Choices carried across view transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SharedState {
    pub difficulty: Difficulty,
    pub car: CarKind,
}
