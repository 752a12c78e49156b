//! Main menu

use glam::IVec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::platform::{Color, FontSize, Frontend, Input, SoundKind};
use crate::settings::SharedState;
use crate::sim::Rect;
use crate::ui::Button;

use super::{View, ViewId};

const BUTTON_W: i32 = 150;
const BUTTON_H: i32 = 50;

pub struct MenuView {
    play: Button,
    settings: Button,
    quit: Button,
    active: bool,
    transition: Option<ViewId>,
}

impl MenuView {
    pub fn new() -> Self {
        let x = WIDTH / 2 - BUTTON_W / 2;
        Self {
            play: Button::new(Rect::new(x, HEIGHT - 350, BUTTON_W, BUTTON_H), "Play"),
            settings: Button::new(Rect::new(x, HEIGHT - 290, BUTTON_W, BUTTON_H), "Settings"),
            quit: Button::new(Rect::new(x, HEIGHT - 230, BUTTON_W, BUTTON_H), "Quit"),
            active: true,
            transition: None,
        }
    }
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for MenuView {
    fn process_input(&mut self, input: &Input, _shared: &mut SharedState, frontend: &mut dyn Frontend) {
        if input.clicked {
            for button in [&mut self.play, &mut self.settings, &mut self.quit] {
                if button.press(input.mouse) {
                    frontend.play_sound(SoundKind::Click);
                }
            }
        }

        if self.play.clicked {
            self.active = false;
            self.transition = Some(ViewId::Game);
        } else if self.settings.clicked {
            self.active = false;
            self.transition = Some(ViewId::Settings);
        } else if self.quit.clicked {
            self.active = false;
            self.transition = None;
        }
    }

    fn update(&mut self, _frontend: &mut dyn Frontend) {}

    fn render(&mut self, frontend: &mut dyn Frontend) {
        frontend.clear(Color::WHITE);

        let title = "Traffic Evader";
        let title_w = frontend.text_width(title, FontSize::Title);
        frontend.draw_text(
            title,
            FontSize::Title,
            IVec2::new(WIDTH / 2 - title_w / 2, 120),
            Color::BLACK,
        );

        self.play.draw(frontend);
        self.settings.draw(frontend);
        self.quit.draw(frontend);
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

    fn shared() -> SharedState {
        SharedState::default()
    }

    #[test]
    fn test_play_starts_game() {
        let mut view = MenuView::new();
        let mut frontend = HeadlessFrontend::new();
        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 325));

        let input = frontend.poll();
        view.process_input(&input, &mut shared(), &mut frontend);

        assert!(!view.is_active());
        assert_eq!(view.next_transition(), Some(ViewId::Game));
        assert_eq!(frontend.sounds, vec![SoundKind::Click]);
    }

    #[test]
    fn test_miss_keeps_menu_active() {
        let mut view = MenuView::new();
        let mut frontend = HeadlessFrontend::new();
        frontend.push_click(IVec2::new(5, 5));

        let input = frontend.poll();
        view.process_input(&input, &mut shared(), &mut frontend);

        assert!(view.is_active());
        assert!(frontend.sounds.is_empty());
    }
}
