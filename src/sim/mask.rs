//! Pixel collision masks
//!
//! Sprite-accurate collision testing: a mask is a bit grid derived from a
//! sprite's alpha channel (or a filled rectangle when no alpha data is
//! available, e.g. headless runs). Overlap queries scan rows top-to-bottom
//! and return the first intersecting pixel, which the collision engine uses
//! to anchor the explosion effect.

use glam::IVec2;

use super::rect::Rect;

/// Bit grid over a sprite's pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    w: i32,
    h: i32,
    bits: Vec<bool>,
}

impl Mask {
    /// Mask with every pixel set (rectangular collision)
    pub fn filled(w: i32, h: i32) -> Self {
        assert!(w >= 0 && h >= 0);
        Self {
            w,
            h,
            bits: vec![true; (w * h) as usize],
        }
    }

    /// Mask with no pixels set (collides with nothing)
    pub fn empty(w: i32, h: i32) -> Self {
        assert!(w >= 0 && h >= 0);
        Self {
            w,
            h,
            bits: vec![false; (w * h) as usize],
        }
    }

    /// Build from RGBA alpha values, row-major; a pixel is solid when its
    /// alpha exceeds `threshold`
    pub fn from_alpha(w: i32, h: i32, alpha: &[u8], threshold: u8) -> Self {
        assert_eq!(alpha.len(), (w * h) as usize);
        Self {
            w,
            h,
            bits: alpha.iter().map(|&a| a > threshold).collect(),
        }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return false;
        }
        self.bits[(y * self.w + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        assert!(x >= 0 && y >= 0 && x < self.w && y < self.h);
        self.bits[(y * self.w + x) as usize] = solid;
    }

    /// First overlapping pixel between `self` and `other`, where `offset` is
    /// `other`'s top-left relative to `self`'s. The point is in `self`'s
    /// coordinates. Rows are scanned top to bottom, then left to right.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        let x_start = offset.x.max(0);
        let x_end = (offset.x + other.w).min(self.w);
        let y_start = offset.y.max(0);
        let y_end = (offset.y + other.h).min(self.h);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }
}

/// Mask overlap between two positioned sprites; the returned point is in
/// `a`'s mask coordinates
pub fn sprite_overlap(a_rect: &Rect, a_mask: &Mask, b_rect: &Rect, b_mask: &Mask) -> Option<IVec2> {
    // Cheap reject before the per-pixel scan
    if !a_rect.intersects(b_rect) {
        return None;
    }
    let offset = IVec2::new(b_rect.x - a_rect.x, b_rect.y - a_rect.y);
    a_mask.overlap(b_mask, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_overlap_at_offset() {
        let a = Mask::filled(4, 4);
        let b = Mask::filled(4, 4);
        // b shifted down-right by (2, 3): first shared pixel is (2, 3)
        assert_eq!(a.overlap(&b, IVec2::new(2, 3)), Some(IVec2::new(2, 3)));
    }

    #[test]
    fn test_disjoint_masks_do_not_overlap() {
        let a = Mask::filled(4, 4);
        let b = Mask::filled(4, 4);
        assert_eq!(a.overlap(&b, IVec2::new(4, 0)), None);
        assert_eq!(a.overlap(&b, IVec2::new(0, -4)), None);
    }

    #[test]
    fn test_empty_mask_never_overlaps() {
        let a = Mask::filled(4, 4);
        let b = Mask::empty(4, 4);
        assert_eq!(a.overlap(&b, IVec2::ZERO), None);
    }

    #[test]
    fn test_scan_order_topmost_row_first() {
        // Two solid pixels in `a`; the topmost one must be reported even
        // though the other is further left.
        let mut a = Mask::empty(4, 4);
        a.set(3, 0, true);
        a.set(0, 2, true);
        let b = Mask::filled(4, 4);
        assert_eq!(a.overlap(&b, IVec2::ZERO), Some(IVec2::new(3, 0)));
    }

    #[test]
    fn test_alpha_threshold() {
        let alpha = [0u8, 100, 128, 255];
        let mask = Mask::from_alpha(2, 2, &alpha, 127);
        assert!(!mask.get(0, 0));
        assert!(!mask.get(1, 0));
        assert!(mask.get(0, 1));
        assert!(mask.get(1, 1));
    }

    #[test]
    fn test_sprite_overlap_uses_rect_positions() {
        let a_rect = Rect::new(100, 100, 4, 4);
        let b_rect = Rect::new(103, 102, 4, 4);
        let a = Mask::filled(4, 4);
        let b = Mask::filled(4, 4);
        assert_eq!(
            sprite_overlap(&a_rect, &a, &b_rect, &b),
            Some(IVec2::new(3, 2))
        );

        let far = Rect::new(200, 200, 4, 4);
        assert_eq!(sprite_overlap(&a_rect, &a, &far, &b), None);
    }
}
