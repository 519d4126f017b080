use crate::Color;

/// Flips between two clear colors, one step per frame.
#[derive(Debug, Clone, Copy)]
pub struct ColorToggle {
    colors: [Color; 2],
    current: usize,
}

impl ColorToggle {
    #[must_use]
    #[inline]
    pub const fn new(first: Color, second: Color) -> Self {
        Self {
            colors: [first, second],
            current: 0,
        }
    }

    #[must_use]
    #[inline]
    pub const fn current(&self) -> Color {
        self.colors[self.current]
    }

    /// Moves to the other color and returns it.
    #[inline]
    pub const fn advance(&mut self) -> Color {
        self.current ^= 1;
        self.current()
    }
}
