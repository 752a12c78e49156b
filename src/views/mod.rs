//! View state machine
//!
//! Each screen of the game is a `View`. The `ViewManager` drives the active
//! view through a fixed per-frame sequence (poll, process input, update,
//! render, present) and swaps views when the active one deactivates with a
//! transition. Deactivating with no transition ends the session.

pub mod game;
pub mod gameover;
pub mod menu;
pub mod settings;

pub use game::GameView;
pub use gameover::GameOverView;
pub use menu::MenuView;
pub use settings::SettingsView;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::platform::{Frontend, Input};
use crate::settings::SharedState;

/// Every screen in the game, the closed set of transition targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Menu,
    Settings,
    Game,
    GameOver,
}

/// One screen of the game
pub trait View {
    /// React to this frame's input. Views mutate `shared` only on commit
    /// points (e.g. leaving the settings screen).
    fn process_input(&mut self, input: &Input, shared: &mut SharedState, frontend: &mut dyn Frontend);

    /// Advance one frame of view-local state
    fn update(&mut self, frontend: &mut dyn Frontend);

    /// Draw the frame
    fn render(&mut self, frontend: &mut dyn Frontend);

    /// False once the view wants to hand off control
    fn is_active(&self) -> bool;

    /// Where to go after deactivating; `None` terminates the session
    fn next_transition(&self) -> Option<ViewId>;
}

/// Owns the cross-view state and runs the frame loop
#[derive(Debug, Default)]
pub struct ViewManager {
    pub shared: SharedState,
}

impl ViewManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run from the menu until a view terminates or the frontend quits
    pub fn run(&mut self, frontend: &mut dyn Frontend) {
        let mut view: Box<dyn View> = Box::new(MenuView::new());
        loop {
            let input = frontend.poll();
            if input.quit {
                log::info!("quit requested");
                return;
            }

            view.process_input(&input, &mut self.shared, frontend);
            view.update(frontend);
            view.render(frontend);
            frontend.present();
            frontend.wait_frame();

            if !view.is_active() {
                match view.next_transition() {
                    Some(id) => {
                        log::info!("view transition to {id:?}");
                        view = self.make_view(id, &*frontend);
                    }
                    None => return,
                }
            }
        }
    }

    fn make_view(&self, id: ViewId, frontend: &dyn Frontend) -> Box<dyn View> {
        match id {
            ViewId::Menu => Box::new(MenuView::new()),
            ViewId::Settings => Box::new(SettingsView::new(&self.shared)),
            ViewId::Game => Box::new(GameView::new(
                &self.shared,
                session_seed(),
                frontend.masks(),
            )),
            ViewId::GameOver => Box::new(GameOverView::new()),
        }
    }
}

/// Wall-clock seed for a fresh game session
fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use crate::config::Difficulty;
    use crate::consts::{HEIGHT, WIDTH};
    use crate::platform::HeadlessFrontend;

    use super::*;

    #[test]
    fn test_menu_quit_terminates() {
        let mut frontend = HeadlessFrontend::new();
        // Center of the menu's Quit button.
        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 205));

        let mut manager = ViewManager::new();
        manager.run(&mut frontend);
        assert_eq!(frontend.frames, 1);
    }

    #[test]
    fn test_settings_round_trip_commits_shared_state() {
        let mut frontend = HeadlessFrontend::new();
        // Menu: open settings.
        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 265));
        // Settings: pick Hard (third difficulty item).
        frontend.push_click(IVec2::new(600, 160));
        // Settings: back to menu.
        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 125));
        // Menu: quit.
        frontend.push_click(IVec2::new(WIDTH / 2, HEIGHT - 205));

        let mut manager = ViewManager::new();
        manager.run(&mut frontend);
        assert_eq!(manager.shared.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_window_quit_stops_loop() {
        let mut frontend = HeadlessFrontend::new();
        frontend.push_input(Input {
            quit: true,
            ..Input::default()
        });

        let mut manager = ViewManager::new();
        manager.run(&mut frontend);
        assert_eq!(frontend.frames, 0);
    }
}
