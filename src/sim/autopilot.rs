//! Demo autopilot
//!
//! Drives a session without a human: dodge the nearest obstacle in the
//! current lane, otherwise drift toward coins. Used by the headless demo
//! binary and handy for soak-testing the simulation.

use crate::switch_frames;

use super::state::GameState;
use super::tick::TickInput;

/// Decide this frame's input for the given state
pub fn decide(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.player.is_switching() || state.exploding() || state.over {
        return input;
    }

    let lane = state.player.lane;
    // Distance an obstacle covers while a lane switch completes, padded.
    let lookahead = state.speed * (switch_frames() + 10);

    if obstacle_clearance(state, lane) <= lookahead {
        // Evade toward the adjacent lane with the most room.
        let left_room = if lane > 1 {
            obstacle_clearance(state, lane - 1)
        } else {
            i32::MIN
        };
        let right_room = if lane < state.level.lanes {
            obstacle_clearance(state, lane + 1)
        } else {
            i32::MIN
        };

        if left_room >= right_room && left_room > lookahead {
            input.left = true;
        } else if right_room > lookahead {
            input.right = true;
        }
        // Both sides blocked: hold the lane and hope.
        return input;
    }

    // Safe: chase a coin in an adjacent lane if it is clearly closer than
    // anything in the current lane.
    let here = coin_distance(state, lane);
    let left = if lane > 1 { coin_distance(state, lane - 1) } else { i32::MAX };
    let right = if lane < state.level.lanes {
        coin_distance(state, lane + 1)
    } else {
        i32::MAX
    };

    if left < here && left <= right && obstacle_clearance(state, lane - 1) > lookahead {
        input.left = true;
    } else if right < here && obstacle_clearance(state, lane + 1) > lookahead {
        input.right = true;
    }
    input
}

/// Vertical gap between the player's top edge and the nearest obstacle
/// approaching from above in `lane`; `i32::MAX` when the lane is clear
fn obstacle_clearance(state: &GameState, lane: u8) -> i32 {
    state
        .obstacles
        .iter()
        .filter(|o| o.lane == lane && o.rect.bottom() <= state.player.rect.bottom())
        .map(|o| state.player.rect.top() - o.rect.bottom())
        .min()
        .unwrap_or(i32::MAX)
}

/// Vertical gap to the nearest collectible coin above the player in `lane`
fn coin_distance(state: &GameState, lane: u8) -> i32 {
    state
        .coins
        .iter()
        .filter(|c| c.lane == lane && c.rect.bottom() <= state.player.rect.bottom())
        .map(|c| state.player.rect.top() - c.rect.bottom())
        .min()
        .unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::consts::OBSTACLE_SIZE;
    use crate::sim::rect::Rect;
    use crate::sim::state::{ObstacleTier, RoadObject, RoadObjectKind, SpriteMasks};

    #[test]
    fn test_evades_obstacle_in_current_lane() {
        let mut state = GameState::new(1, Difficulty::Easy, SpriteMasks::rectangular());
        let lane = state.player.lane;
        state.obstacles.push(RoadObject::new(
            RoadObjectKind::Obstacle {
                tier: ObstacleTier::Low,
                variant: 0,
            },
            lane,
            Rect::new(0, state.player.rect.top() - 80, OBSTACLE_SIZE, OBSTACLE_SIZE),
        ));

        let input = decide(&state);
        assert!(input.left || input.right);
    }

    #[test]
    fn test_idles_on_clear_road() {
        let state = GameState::new(2, Difficulty::Easy, SpriteMasks::rectangular());
        let input = decide(&state);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_no_input_while_switching() {
        let mut state = GameState::new(3, Difficulty::Easy, SpriteMasks::rectangular());
        state.player.move_left();
        let input = decide(&state);
        assert!(!input.left && !input.right);
    }
}
