//! Per-frame simulation step
//!
//! Advances one session by one frame: input, scrolling, spawning,
//! despawning, collision/scoring, and speed progression. Pure state
//! mutation; anything the frontend must react to (sounds, the game-over
//! handoff) comes back as `TickEvents`.

use glam::IVec2;

use crate::consts::*;

use super::mask::sprite_overlap;
use super::spawn;
use super::state::{Explosion, GameState};

/// Player input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// What happened this frame that the frontend should react to
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// Player hit an obstacle; the explosion effect just started
    pub explosion: bool,
    /// Score crossed a multiple of ten (throttled coin feedback)
    pub coin_chime: bool,
    /// Explosion animation finished; the session is over
    pub game_over: bool,
    /// Coins collected this frame
    pub coins_collected: u32,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if state.over {
        return events;
    }

    // Terminal sub-state: only the explosion animates.
    if let Some(explosion) = &mut state.explosion {
        explosion.update();
        if explosion.finished {
            state.over = true;
            events.game_over = true;
            log::info!("session over, score {}", state.score);
        }
        return events;
    }

    // Left is checked first and wins if both are held.
    if input.left {
        state.player.move_left();
    } else if input.right {
        state.player.move_right();
    }

    state.scroll = (state.scroll + state.speed) % HEIGHT;

    for coin in &mut state.coins {
        coin.update(state.speed);
    }
    for obstacle in &mut state.obstacles {
        obstacle.update(state.speed);
    }
    state.player.update();

    spawn::top_up(state);

    // Despawn everything that scrolled past the bottom, before any
    // collision checks.
    state.coins.retain(|c| c.rect.top() <= HEIGHT);
    state.obstacles.retain(|o| o.rect.top() <= HEIGHT);

    let player_rect = state.player.rect;

    // Mask-accurate obstacle collision ends the session.
    let hit = state.obstacles.iter().find_map(|o| {
        sprite_overlap(&player_rect, &state.masks.player, &o.rect, &state.masks.obstacle)
    });
    if let Some(overlap) = hit {
        // Near-head-on hits anchor the effect at the car's top center;
        // otherwise the first overlapping pixel is the anchor.
        let center = if overlap.y < 10 {
            player_rect.mid_top()
        } else {
            IVec2::new(player_rect.x + overlap.x, player_rect.y + overlap.y)
        };
        state.explosion = Some(Explosion::at(center));
        events.explosion = true;
        log::debug!("collision at {center}, entering explosion state");
    }

    // Every coinciding coin is collected; simultaneous hits all count.
    let mut collected = 0u32;
    let mut coins = std::mem::take(&mut state.coins);
    coins.retain(|c| {
        let hit =
            sprite_overlap(&player_rect, &state.masks.player, &c.rect, &state.masks.coin).is_some();
        if hit {
            collected += 1;
        }
        !hit
    });
    state.coins = coins;

    if collected > 0 {
        state.score += collected;
        events.coins_collected = collected;
        if state.score % 10 == 0 {
            events.coin_chime = true;
        }
    }

    // Each speed tier lasts speed * 600 frames, so tiers take longer as the
    // game speeds up while spawn density rises with speed.
    state.frame_count += 1;
    if state.frame_count >= state.speed * SPEED_TIER_FRAMES {
        state.frame_count = 0;
        state.speed += 1;
        log::debug!("speed increased to {}", state.speed);
    }

    events
}
