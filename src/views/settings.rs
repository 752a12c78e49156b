//! Settings screen
//!
//! Difficulty and car selection. Choices are local to the view until the
//! player leaves through the back button, which commits them to the shared
//! state in one step.

use glam::IVec2;

use crate::config::Difficulty;
use crate::consts::{HEIGHT, WIDTH};
use crate::platform::{Color, FontSize, Frontend, Input, SoundKind};
use crate::settings::{CarKind, SharedState};
use crate::sim::Rect;
use crate::ui::{Button, ItemSelector, SelectEvent};

use super::{View, ViewId};

const DIFFICULTY_Y: i32 = 150;
const CAR_Y: i32 = 250;

pub struct SettingsView {
    difficulty: ItemSelector<Difficulty>,
    cars: ItemSelector<CarKind>,
    back: Button,
    active: bool,
}

impl SettingsView {
    pub fn new(shared: &SharedState) -> Self {
        let mut difficulty = ItemSelector::new(
            vec![
                (Difficulty::Easy, "Easy"),
                (Difficulty::Normal, "Normal"),
                (Difficulty::Hard, "Hard"),
            ],
            (125, 50),
            shared.difficulty,
        );
        difficulty.center_horizontally(DIFFICULTY_Y);

        let mut cars = ItemSelector::new(
            vec![
                (CarKind::Blue, "Blue"),
                (CarKind::Touring, "Touring"),
                (CarKind::Red, "Red"),
                (CarKind::Green, "Green"),
            ],
            (80, 80),
            shared.car,
        );
        cars.center_horizontally(CAR_Y);

        Self {
            difficulty,
            cars,
            back: Button::new(
                Rect::new(WIDTH / 2 - 110, HEIGHT - 150, 220, 50),
                "Back to Menu",
            ),
            active: true,
        }
    }
}

impl View for SettingsView {
    fn process_input(&mut self, input: &Input, shared: &mut SharedState, frontend: &mut dyn Frontend) {
        if input.clicked {
            for event in [
                self.difficulty.press(input.mouse),
                self.cars.press(input.mouse),
            ]
            .into_iter()
            .flatten()
            {
                let sound = match event {
                    SelectEvent::Selected => SoundKind::Click,
                    SelectEvent::Denied => SoundKind::ClickDeny,
                };
                frontend.play_sound(sound);
            }
            if self.back.press(input.mouse) {
                frontend.play_sound(SoundKind::Click);
            }
        }

        if self.back.clicked {
            shared.difficulty = self.difficulty.active_value();
            shared.car = self.cars.active_value();
            log::debug!(
                "settings committed: difficulty={} car={}",
                shared.difficulty.as_str(),
                shared.car.sprite_name()
            );
            self.active = false;
        }
    }

    fn update(&mut self, _frontend: &mut dyn Frontend) {}

    fn render(&mut self, frontend: &mut dyn Frontend) {
        frontend.clear(Color::WHITE);

        let title = "Settings";
        let title_w = frontend.text_width(title, FontSize::Title);
        frontend.draw_text(
            title,
            FontSize::Title,
            IVec2::new(WIDTH / 2 - title_w / 2, 60),
            Color::BLACK,
        );

        self.difficulty.draw(frontend);
        self.cars.draw(frontend);
        self.back.draw(frontend);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn next_transition(&self) -> Option<ViewId> {
        Some(ViewId::Menu)
    }
}

#[cfg(test)]
mod tests {
    use crate::platform::HeadlessFrontend;

    use super::*;

    #[test]
    fn test_selection_commits_on_back() {
        let mut shared = SharedState::default();
        let mut view = SettingsView::new(&shared);
        let mut frontend = HeadlessFrontend::new();

        // Easy is the first difficulty item.
        let easy = IVec2::new(view.difficulty.rect.x + 10, DIFFICULTY_Y + 10);
        frontend.push_click(easy);
        let input = frontend.poll();
        view.process_input(&input, &mut shared, &mut frontend);
        // Not committed yet.
        assert_eq!(shared.difficulty, Difficulty::Normal);

        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 125));
        let input = frontend.poll();
        view.process_input(&input, &mut shared, &mut frontend);

        assert!(!view.is_active());
        assert_eq!(view.next_transition(), Some(ViewId::Menu));
        assert_eq!(shared.difficulty, Difficulty::Easy);
        assert_eq!(frontend.sounds, vec![SoundKind::Click, SoundKind::Click]);
    }

    #[test]
    fn test_reclick_active_item_denies() {
        let mut shared = SharedState::default();
        let mut view = SettingsView::new(&shared);
        let mut frontend = HeadlessFrontend::new();

        // Normal is the default and the second item.
        let normal = IVec2::new(view.difficulty.rect.x + 125 + 50 + 10, DIFFICULTY_Y + 10);
        frontend.push_click(normal);
        let input = frontend.poll();
        view.process_input(&input, &mut shared, &mut frontend);

        assert_eq!(frontend.sounds, vec![SoundKind::ClickDeny]);
        assert!(view.is_active());
    }
}
