//! Background color palette for the landing regions.

use std::fmt;

use rand::Rng;
use serde::Serialize;

/// A `#rrggbb` color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    /// Wrap a hex color literal.
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Fixed, non-empty set of candidate colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [Color]);

impl Palette {
    /// Build a palette. Evaluated in a `const` context an empty slice is a
    /// compile error.
    pub const fn new(colors: &'static [Color]) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self(colors)
    }

    pub fn colors(&self) -> &'static [Color] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a palette built with [`Palette::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Draw one color uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Color {
        self.0[rng.random_range(0..self.0.len())]
    }
}

/// ECharts "macarons" colors.
pub const MACARONS: Palette = Palette::new(&[
    Color::new("#2ec7c9"),
    Color::new("#b6a2de"),
    Color::new("#5ab1ef"),
    Color::new("#ffb980"),
    Color::new("#d87a80"),
    Color::new("#8d98b3"),
    Color::new("#e5cf6e"),
    Color::new("#97b552"),
    Color::new("#95706d"),
    Color::new("#dc69aa"),
    Color::new("#07a2a4"),
    Color::new("#9a7fd1"),
    Color::new("#588dd5"),
    Color::new("#f5994e"),
    Color::new("#c05050"),
    Color::new("#59678c"),
    Color::new("#c9ab00"),
    Color::new("#7eb00a"),
    Color::new("#6f5553"),
    Color::new("#c14089"),
]);

/// Draw a color from `palette` using the thread-local RNG.
pub fn pick_random(palette: &Palette) -> Color {
    palette.pick(&mut rand::rng())
}
