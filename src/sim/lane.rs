//! Lane placement model
//!
//! Converts a lane index into a horizontal screen position. The constants
//! mirror the painted road layout: a 30px side line at the road edge and a
//! 10px divider allowance between lanes.

use crate::config::LevelConfig;
use crate::consts::{LANE_LINE, ROAD_MARGIN};

/// Horizontal center of `lane` (1..=lanes), in screen pixels
///
/// Integer arithmetic with floor division, to keep pixel parity with the
/// painted road sprite.
pub fn lane_center_x(level: &LevelConfig, lane: u8) -> i32 {
    debug_assert!(lane >= 1 && lane <= level.lanes);
    let w = level.lane_width;
    level.road_left() + ROAD_MARGIN + lane as i32 * w - (w - LANE_LINE).div_euclid(2) - LANE_LINE
}

/// Left edge for an object of `width` centered on `lane`
pub fn lane_object_x(level: &LevelConfig, lane: u8, width: i32) -> i32 {
    lane_center_x(level, lane) - width / 2
}
