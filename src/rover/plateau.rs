//! The bounded grid rovers move on.

/// Inclusive rectangle `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plateau {
    pub max_x: u32,
    pub max_y: u32,
}

impl Plateau {
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    /// Whether `(x, y)` lies on the plateau.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.max_x && y <= self.max_y
    }
}
