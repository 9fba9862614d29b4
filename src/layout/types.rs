//! Geometry types shared by the layout resolver

/// Pixel dimensions of the target display
///
/// Supplied once per loading session; every `full`, `right`, `bottom` and
/// `center` keyword is computed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenExtent {
    pub width: i32,
    pub height: i32,
}

impl ScreenExtent {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for ScreenExtent {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Absolute rectangle of an element, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }
}
