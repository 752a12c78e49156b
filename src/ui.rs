//! UI widgets
//!
//! Plain rectangles with hit testing: buttons and the row selector used by
//! the settings screen. Widgets know nothing about the view machine; views
//! read the click results and play the matching sounds.

use glam::IVec2;

use crate::consts::WIDTH;
use crate::platform::{Color, FontSize, Frontend};
use crate::sim::Rect;

/// A clickable labeled button
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    /// Latched on hit; views read and act on it after input processing
    pub clicked: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str) -> Self {
        Self {
            rect,
            label,
            clicked: false,
        }
    }

    /// Handle a mouse press. Returns true on a hit, which also latches
    /// `clicked` for the view to act on.
    pub fn press(&mut self, pos: IVec2) -> bool {
        let hit = self.rect.contains_point(pos);
        if hit {
            self.clicked = true;
        }
        hit
    }

    pub fn draw(&self, frontend: &mut dyn Frontend) {
        frontend.draw_rect(self.rect, Color::GRAY);
        let text_w = frontend.text_width(self.label, FontSize::Button);
        let center = self.rect.center();
        frontend.draw_text(
            self.label,
            FontSize::Button,
            IVec2::new(center.x - text_w / 2, center.y),
            Color::BLACK,
        );
    }
}

/// Horizontal gap between selector items
const ITEM_GAP: i32 = 50;

/// Outcome of a click inside a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    /// A different item became active
    Selected,
    /// The already-active item was clicked again
    Denied,
}

/// A row of selectable items storing the current choice
#[derive(Debug, Clone)]
pub struct ItemSelector<T> {
    items: Vec<(T, &'static str)>,
    item_w: i32,
    item_h: i32,
    active: usize,
    pub rect: Rect,
}

impl<T: Copy + PartialEq> ItemSelector<T> {
    /// Build a selector from `(value, label)` pairs, all items one size.
    /// `active` must be one of the listed values.
    pub fn new(items: Vec<(T, &'static str)>, item_size: (i32, i32), active: T) -> Self {
        assert!(!items.is_empty());
        let active = items
            .iter()
            .position(|(v, _)| *v == active)
            .expect("active value not in selector items");
        let (item_w, item_h) = item_size;
        let total_w = items.len() as i32 * item_w + (items.len() as i32 - 1) * ITEM_GAP;
        Self {
            items,
            item_w,
            item_h,
            active,
            rect: Rect::new(0, 0, total_w, item_h),
        }
    }

    /// Center the row on screen at vertical position `y`
    pub fn center_horizontally(&mut self, y: i32) {
        self.rect.x = (WIDTH - self.rect.w) / 2;
        self.rect.y = y;
    }

    pub fn active_value(&self) -> T {
        self.items[self.active].0
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.rect.x + index as i32 * (self.item_w + ITEM_GAP),
            self.rect.y,
            self.item_w,
            self.item_h,
        )
    }

    /// Handle a mouse press inside the selector
    pub fn press(&mut self, pos: IVec2) -> Option<SelectEvent> {
        if !self.rect.contains_point(pos) {
            return None;
        }
        for index in 0..self.items.len() {
            if self.item_rect(index).contains_point(pos) {
                if index == self.active {
                    return Some(SelectEvent::Denied);
                }
                self.active = index;
                return Some(SelectEvent::Selected);
            }
        }
        None
    }

    pub fn draw(&self, frontend: &mut dyn Frontend) {
        for (index, (_, label)) in self.items.iter().enumerate() {
            let rect = self.item_rect(index);
            if index == self.active {
                frontend.draw_rect(rect, Color::SELECTED);
            }
            let text_w = frontend.text_width(label, FontSize::Button);
            let center = rect.center();
            frontend.draw_text(
                label,
                FontSize::Button,
                IVec2::new(center.x - text_w / 2, center.y),
                Color::BLACK,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_hit_and_miss() {
        let mut button = Button::new(Rect::new(10, 10, 100, 40), "Play");
        assert!(!button.press(IVec2::new(0, 0)));
        assert!(!button.clicked);
        assert!(button.press(IVec2::new(50, 30)));
        assert!(button.clicked);
    }

    #[test]
    fn test_selector_selects_and_denies() {
        let mut selector = ItemSelector::new(
            vec![(1u8, "One"), (2, "Two"), (3, "Three")],
            (100, 50),
            2,
        );
        assert_eq!(selector.active_value(), 2);

        // Click the first item: x in [0, 100).
        assert_eq!(selector.press(IVec2::new(10, 10)), Some(SelectEvent::Selected));
        assert_eq!(selector.active_value(), 1);

        // Clicking it again is a deny.
        assert_eq!(selector.press(IVec2::new(10, 10)), Some(SelectEvent::Denied));
        assert_eq!(selector.active_value(), 1);
    }

    #[test]
    fn test_selector_ignores_gap_and_outside_clicks() {
        let mut selector =
            ItemSelector::new(vec![(1u8, "One"), (2, "Two")], (100, 50), 1);
        // Between the two items (gap is [100, 150)).
        assert_eq!(selector.press(IVec2::new(120, 10)), None);
        // Outside entirely.
        assert_eq!(selector.press(IVec2::new(500, 500)), None);
        assert_eq!(selector.active_value(), 1);
    }

    #[test]
    #[should_panic(expected = "active value not in selector items")]
    fn test_selector_rejects_unknown_active() {
        let _ = ItemSelector::new(vec![(1u8, "One")], (100, 50), 9);
    }
}
