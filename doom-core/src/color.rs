use core::ops::Index;

/// An RGBA color as handed to `glClearColor`.
///
/// Channels are stored as given. Nothing is clamped, so a channel of `200.0`
/// reaches the driver unchanged and the driver decides what to make of it.
/// Use [`Color::from_rgb8`] to build a color from 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const SKY: Self = Self::from_rgb8(135, 206, 235);
    pub const BROWNISH: Self = Self::from_rgb8(150, 75, 0);

    #[must_use]
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    #[must_use]
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(normalize(r), normalize(g), normalize(b))
    }

    #[must_use]
    #[inline]
    pub const fn r(self) -> f32 {
        self.r
    }

    #[must_use]
    #[inline]
    pub const fn g(self) -> f32 {
        self.g
    }

    #[must_use]
    #[inline]
    pub const fn b(self) -> f32 {
        self.b
    }

    #[must_use]
    #[inline]
    pub const fn a(self) -> f32 {
        self.a
    }
}

#[allow(clippy::cast_lossless)]
const fn normalize(channel: u8) -> f32 {
    channel as f32 / 255.0
}

/// Names for the entries of [`VIBGYOR`], in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spectrum {
    Violet = 0,
    Indigo = 1,
    Blue = 2,
    Green = 3,
    Yellow = 4,
    Orange = 5,
    Red = 6,
}

impl Spectrum {
    #[must_use]
    #[inline]
    pub const fn color(self) -> Color {
        VIBGYOR.0[self as usize]
    }
}

pub const PALETTE_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette([Color; PALETTE_LEN]);

impl Palette {
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        PALETTE_LEN
    }

    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    #[inline]
    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

// Rainbow, violet to red
pub const VIBGYOR: Palette = Palette([
    Color::from_rgb8(148, 0, 211),
    Color::from_rgb8(74, 0, 130),
    Color::from_rgb8(0, 0, 255),
    Color::from_rgb8(0, 255, 0),
    Color::from_rgb8(255, 255, 0),
    Color::from_rgb8(255, 127, 0),
    Color::from_rgb8(255, 0, 0),
]);
