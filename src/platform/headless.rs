//! Headless frontend
//!
//! No window, no audio device: input comes from a scripted queue, draws are
//! counted, sounds are recorded. The demo binary and the view tests run
//! against this.

use std::collections::VecDeque;

use glam::IVec2;

use crate::sim::Rect;

use super::{Color, FontSize, Frontend, Input, SoundKind, SpriteId};

/// Frontend implementation with no platform behind it
#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    /// Pending scripted inputs, popped one per poll
    pub inputs: VecDeque<Input>,
    /// Every sound played, in order
    pub sounds: Vec<SoundKind>,
    /// Draw calls issued since the last `present`
    pub draw_calls: usize,
    /// Frames presented so far
    pub frames: u64,
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a scripted input frame
    pub fn push_input(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    /// Queue a mouse click at `pos` for the next poll
    pub fn push_click(&mut self, pos: IVec2) {
        self.inputs.push_back(Input {
            mouse: pos,
            clicked: true,
            ..Input::default()
        });
    }
}

impl Frontend for HeadlessFrontend {
    fn poll(&mut self) -> Input {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn clear(&mut self, _color: Color) {
        self.draw_calls = 0;
    }

    fn draw_sprite(&mut self, _sprite: SpriteId, _rect: Rect) {
        self.draw_calls += 1;
    }

    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _text: &str, _font: FontSize, _pos: IVec2, _color: Color) {
        self.draw_calls += 1;
    }

    fn text_width(&self, text: &str, font: FontSize) -> i32 {
        let per_char = match font {
            FontSize::Title => 24,
            FontSize::Button => 12,
            FontSize::Score => 14,
        };
        text.len() as i32 * per_char
    }

    fn play_sound(&mut self, sound: SoundKind) {
        self.sounds.push(sound);
    }

    fn present(&mut self) {
        self.frames += 1;
    }

    fn wait_frame(&mut self) {
        // No clock to block on.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_inputs_then_default() {
        let mut frontend = HeadlessFrontend::new();
        frontend.push_input(Input {
            left: true,
            ..Input::default()
        });

        assert!(frontend.poll().left);
        assert!(!frontend.poll().left);
    }

    #[test]
    fn test_sounds_recorded() {
        let mut frontend = HeadlessFrontend::new();
        frontend.play_sound(SoundKind::Coin);
        frontend.play_sound(SoundKind::Click);
        assert_eq!(frontend.sounds, vec![SoundKind::Coin, SoundKind::Click]);
    }
}
