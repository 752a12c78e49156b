//! Game over screen
//!
//! Drawn as an overlay above whatever the last game frame left on screen,
//! matching the pause-like look of the original.

use glam::IVec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::platform::{Color, FontSize, Frontend, Input, SoundKind};
use crate::settings::SharedState;
use crate::sim::Rect;
use crate::ui::Button;

use super::{View, ViewId};

const BUTTON_W: i32 = 220;
const BUTTON_H: i32 = 50;

pub struct GameOverView {
    retry: Button,
    menu: Button,
    exit: Button,
    active: bool,
    transition: Option<ViewId>,
}

impl GameOverView {
    pub fn new() -> Self {
        let x = WIDTH / 2 - BUTTON_W / 2;
        Self {
            retry: Button::new(Rect::new(x, HEIGHT / 2 - 120, BUTTON_W, BUTTON_H), "Retry"),
            menu: Button::new(
                Rect::new(x, HEIGHT / 2 - 60, BUTTON_W, BUTTON_H),
                "Back to Menu",
            ),
            exit: Button::new(Rect::new(x, HEIGHT / 2, BUTTON_W, BUTTON_H), "Exit"),
            active: true,
            transition: None,
        }
    }
}

impl Default for GameOverView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for GameOverView {
    fn process_input(&mut self, input: &Input, _shared: &mut SharedState, frontend: &mut dyn Frontend) {
        if input.clicked {
            for button in [&mut self.retry, &mut self.menu, &mut self.exit] {
                if button.press(input.mouse) {
                    frontend.play_sound(SoundKind::Click);
                }
            }
        }

        if self.retry.clicked {
            self.active = false;
            self.transition = Some(ViewId::Game);
        } else if self.menu.clicked {
            self.active = false;
            self.transition = Some(ViewId::Menu);
        } else if self.exit.clicked {
            self.active = false;
            self.transition = None;
        }
    }

    fn update(&mut self, _frontend: &mut dyn Frontend) {}

    fn render(&mut self, frontend: &mut dyn Frontend) {
        // Dim the final game frame rather than clearing it.
        frontend.draw_rect(Rect::new(0, 0, WIDTH, HEIGHT), Color::OVERLAY);

        let title = "Game Over";
        let title_w = frontend.text_width(title, FontSize::Title);
        frontend.draw_text(
            title,
            FontSize::Title,
            IVec2::new(WIDTH / 2 - title_w / 2, HEIGHT / 2 - 200),
            Color::WHITE,
        );

        self.retry.draw(frontend);
        self.menu.draw(frontend);
        self.exit.draw(frontend);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn next_transition(&self) -> Option<ViewId> {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use crate::platform::HeadlessFrontend;

    use super::*;

    fn click(view: &mut GameOverView, pos: IVec2) -> HeadlessFrontend {
        let mut frontend = HeadlessFrontend::new();
        frontend.push_click(pos);
        let input = frontend.poll();
        let mut shared = SharedState::default();
        view.process_input(&input, &mut shared, &mut frontend);
        frontend
    }

    #[test]
    fn test_retry_starts_new_game() {
        let mut view = GameOverView::new();
        let frontend = click(&mut view, IVec2::new(WIDTH / 2, HEIGHT / 2 - 95));
        assert!(!view.is_active());
        assert_eq!(view.next_transition(), Some(ViewId::Game));
        assert_eq!(frontend.sounds, vec![SoundKind::Click]);
    }

    #[test]
    fn test_exit_terminates() {
        let mut view = GameOverView::new();
        click(&mut view, IVec2::new(WIDTH / 2, HEIGHT / 2 + 25));
        assert!(!view.is_active());
        assert_eq!(view.next_transition(), None);
    }
}
