//! Text bounding boxes and label placement

/// Ink extent of a rendered string, relative to its layout origin
///
/// `top` grows downward from the origin line, so a glyph that starts below
/// the ascender has a positive `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box containing both boxes; empty boxes are ignored
    pub fn union(self, other: TextBox) -> TextBox {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Origin at which to draw text so its ink is centered on a square canvas
pub fn centered_origin(canvas: u32, bbox: TextBox) -> (i32, i32) {
    let canvas = canvas as i32;
    let x = (canvas - bbox.width()).div_euclid(2) - bbox.left;
    let y = (canvas - bbox.height()).div_euclid(2) - bbox.top;
    (x, y)
}
