//! Gameplay screen
//!
//! A thin shell over the simulation: forwards input as a `TickInput`, turns
//! tick events into sounds, and draws the frame. When the simulation reports
//! game over the view hands off to the GameOver screen.

use glam::IVec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::platform::{Color, FontSize, Frontend, Input, SoundKind, SpriteId};
use crate::settings::{CarKind, SharedState};
use crate::sim::state::RoadObjectKind;
use crate::sim::{GameState, Rect, SpriteMasks, TickInput, tick};

use super::{View, ViewId};

pub struct GameView {
    pub state: GameState,
    car: CarKind,
    pending: TickInput,
    active: bool,
}

impl GameView {
    pub fn new(shared: &SharedState, seed: u64, masks: SpriteMasks) -> Self {
        log::info!(
            "starting session: seed={seed} difficulty={}",
            shared.difficulty.as_str()
        );
        Self {
            state: GameState::new(seed, shared.difficulty, masks),
            car: shared.car,
            pending: TickInput::default(),
            active: true,
        }
    }

    fn draw_road(&self, frontend: &mut dyn Frontend) {
        let level = self.state.level;
        let road = SpriteId::Road {
            lanes: level.lanes,
        };
        // Two screen-height copies scrolled in lockstep wrap seamlessly.
        let x = level.road_left();
        let w = level.road_width();
        frontend.draw_sprite(road, Rect::new(x, self.state.scroll - HEIGHT, w, HEIGHT));
        frontend.draw_sprite(road, Rect::new(x, self.state.scroll, w, HEIGHT));

        let side_w = x;
        for offset in [self.state.scroll - HEIGHT, self.state.scroll] {
            frontend.draw_sprite(
                SpriteId::Background { mirrored: false },
                Rect::new(0, offset, side_w, HEIGHT),
            );
            frontend.draw_sprite(
                SpriteId::Background { mirrored: true },
                Rect::new(x + w, offset, side_w, HEIGHT),
            );
        }
    }
}

impl View for GameView {
    fn process_input(&mut self, input: &Input, _shared: &mut SharedState, _frontend: &mut dyn Frontend) {
        self.pending = TickInput {
            left: input.left,
            right: input.right,
        };
    }

    fn update(&mut self, frontend: &mut dyn Frontend) {
        let events = tick(&mut self.state, &self.pending);
        self.pending = TickInput::default();

        if events.explosion {
            frontend.play_sound(SoundKind::Explosion);
        }
        if events.coin_chime {
            frontend.play_sound(SoundKind::Coin);
        }
        if events.game_over {
            self.active = false;
        }
    }

    fn render(&mut self, frontend: &mut dyn Frontend) {
        frontend.clear(Color::WHITE);
        self.draw_road(frontend);

        for coin in &self.state.coins {
            frontend.draw_sprite(
                SpriteId::Coin {
                    frame: coin.anim_frame,
                },
                coin.rect,
            );
        }
        for obstacle in &self.state.obstacles {
            if let RoadObjectKind::Obstacle { tier, variant } = obstacle.kind {
                frontend.draw_sprite(SpriteId::ObstacleCar { tier, variant }, obstacle.rect);
            }
        }

        frontend.draw_sprite(SpriteId::PlayerCar(self.car), self.state.player.rect);

        if let Some(explosion) = &self.state.explosion {
            frontend.draw_sprite(
                SpriteId::Explosion {
                    frame: explosion.frame,
                },
                explosion.rect,
            );
        }

        frontend.draw_text(
            &self.state.score.to_string(),
            FontSize::Score,
            IVec2::new(WIDTH - 100, 25),
            Color::BLACK,
        );
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn next_transition(&self) -> Option<ViewId> {
        Some(ViewId::GameOver)
    }
}
