//! # Geometry Types
//!
//! Screen rectangles used for layout and pointer hit testing, in terminal
//! cell coordinates.

/// A position on screen, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// An axis-aligned rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column right of the rectangle
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if dimensions are empty (width or height is 0)
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(self, position: Position) -> bool {
        position.col >= self.x
            && position.col < self.right()
            && position.row >= self.y
            && position.row < self.bottom()
    }

    /// Rectangle shrunk by `margin` cells on every side
    pub fn inset(self, margin: u16) -> Self {
        let shrink = margin.saturating_mul(2);
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }
}
