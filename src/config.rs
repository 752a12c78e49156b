//! Per-difficulty level configuration
//!
//! The original keyed levels by difficulty name in a dict; a closed enum
//! makes a missing key unrepresentable instead of a runtime lookup failure.

use serde::{Deserialize, Serialize};

use crate::consts::{ROAD_MARGIN, WIDTH};

/// Difficulty selection, carried across views in [`crate::SharedState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Static level table for this difficulty
    pub fn level(&self) -> &'static LevelConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
        }
    }
}

/// Immutable road/player layout for one difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Number of lanes, indexed 1..=lanes left to right
    pub lanes: u8,
    /// Lane width in pixels
    pub lane_width: i32,
    /// Player left edge at session start
    pub player_init_x: i32,
    /// Player lane at session start
    pub player_init_lane: u8,
}

impl LevelConfig {
    /// Road sprite width: lanes plus a painted side line on each edge
    pub fn road_width(&self) -> i32 {
        self.lanes as i32 * self.lane_width + 2 * ROAD_MARGIN
    }

    /// Left edge of the road, centered on screen
    pub fn road_left(&self) -> i32 {
        (WIDTH - self.road_width()) / 2
    }
}

pub static EASY: LevelConfig = LevelConfig {
    lanes: 5,
    lane_width: 90,
    player_init_x: WIDTH / 2 - 40,
    player_init_lane: 3,
};

pub static NORMAL: LevelConfig = LevelConfig {
    lanes: 4,
    lane_width: 112,
    player_init_x: WIDTH / 2 - 95,
    player_init_lane: 2,
};

pub static HARD: LevelConfig = LevelConfig {
    lanes: 3,
    lane_width: 150,
    player_init_x: WIDTH / 2 - 40,
    player_init_lane: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_lane_within_bounds() {
        for diff in Difficulty::ALL {
            let level = diff.level();
            assert!(level.player_init_lane >= 1);
            assert!(level.player_init_lane <= level.lanes);
        }
    }

    #[test]
    fn test_road_fits_on_screen() {
        for diff in Difficulty::ALL {
            let level = diff.level();
            assert!(level.road_left() >= 0);
            assert!(level.road_left() + level.road_width() <= WIDTH);
        }
    }
}
