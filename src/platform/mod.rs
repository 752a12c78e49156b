//! Rendering/audio/input collaborator
//!
//! The actual graphics backend is out of tree; views talk to it through the
//! `Frontend` trait: load-free sprite identifiers, rectangle/text drawing,
//! sound playback, input polling and a frame clock. The headless
//! implementation backs the demo binary and the view tests.

pub mod headless;

pub use headless::HeadlessFrontend;

use glam::IVec2;

use crate::settings::CarKind;
use crate::sim::state::{ObstacleTier, SpriteMasks};
use crate::sim::Rect;

/// One frame's worth of polled input
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    /// Window close / hard quit
    pub quit: bool,
    pub mouse: IVec2,
    /// Mouse button went down this frame
    pub clicked: bool,
}

/// Sound effects, with the per-sound volumes the assets were mixed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Coin,
    Explosion,
    Click,
    ClickDeny,
}

impl SoundKind {
    pub fn volume(&self) -> f32 {
        match self {
            SoundKind::Coin | SoundKind::Explosion => 0.3,
            SoundKind::Click | SoundKind::ClickDeny => 0.5,
        }
    }
}

/// Every drawable sprite, by name; the frontend owns the actual images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    /// Road surface for an N-lane level
    Road { lanes: u8 },
    /// Scenery strip beside the road (mirrored for the right side)
    Background { mirrored: bool },
    PlayerCar(CarKind),
    ObstacleCar { tier: ObstacleTier, variant: u8 },
    Coin { frame: u8 },
    Explosion { frame: u8 },
}

/// Fixed font roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    Button,
    Score,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const GRAY: Color = Color { r: 128, g: 128, b: 128, a: 255 };
    /// Dim translucent layer over the final game frame
    pub const OVERLAY: Color = Color { r: 50, g: 50, b: 50, a: 150 };
    /// Background tint behind the active selector item
    pub const SELECTED: Color = Color { r: 75, g: 75, b: 75, a: 80 };
}

/// The external rendering/audio/input collaborator
pub trait Frontend {
    /// Poll keyboard/mouse/window state once per frame
    fn poll(&mut self) -> Input;

    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: SpriteId, rect: Rect);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, font: FontSize, pos: IVec2, color: Color);
    /// Rendered width of `text`, for centering
    fn text_width(&self, text: &str, font: FontSize) -> i32;

    fn play_sound(&mut self, sound: SoundKind);

    /// Flip the finished frame to the screen
    fn present(&mut self);
    /// Block until the next tick of the fixed frame clock
    fn wait_frame(&mut self);

    /// Collision masks built from the loaded sprite alpha channels.
    /// Defaults to rectangular masks for frontends without pixel data.
    fn masks(&self) -> SpriteMasks {
        SpriteMasks::rectangular()
    }
}
