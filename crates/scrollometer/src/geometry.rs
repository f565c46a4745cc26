//! Geometric primitives: Offset, ContentSize

/// A two-dimensional scroll offset in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };
}

/// The scrollable extent of a view's content, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContentSize {
    pub width: f32,
    pub height: f32,
}

impl ContentSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: ContentSize = ContentSize {
        width: 0.0,
        height: 0.0,
    };

    /// Whether an offset lies within `[0, width] x [0, height]`.
    ///
    /// Both bounds are inclusive. A NaN coordinate fails every comparison
    /// and is treated as out of range.
    pub fn contains(&self, offset: Offset) -> bool {
        offset.x >= 0.0 && offset.y >= 0.0 && offset.x <= self.width && offset.y <= self.height
    }
}
