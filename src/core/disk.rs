//! Disk model: rank, color and rendered size.
//!
//! A `Disk` is an immutable value. Only its `Rank` matters to the rules;
//! width, height and color are carried for the rendering layer.
//!
//! ## Usage
//!
//! ```
//! use hanoi_engine::core::{Color, Disk, Rank};
//!
//! let small = Disk::new(Rank::new(1), 40.0, 30.0, Color::new(0x00ff00));
//! let large = Disk::new(Rank::new(2), 80.0, 30.0, Color::new(0xff0000));
//!
//! assert!(small.fits_on(&large));
//! assert!(!large.fits_on(&small));
//! assert_eq!(large.color().to_string(), "#ff0000");
//! ```

use serde::{Deserialize, Serialize};

/// Size order of a disk within one puzzle: 1 is the smallest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u32);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(rank: u32) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 24-bit RGB color. Cosmetic only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Largest representable color value (`#ffffff`).
    pub const MAX: u32 = 0x00ff_ffff;

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[must_use]
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & Self::MAX)
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A single disk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    rank: Rank,
    width: f64,
    height: f64,
    color: Color,
}

impl Disk {
    /// Create a disk.
    #[must_use]
    pub fn new(rank: Rank, width: f64, height: f64, color: Color) -> Self {
        Self {
            rank,
            width,
            height,
            color,
        }
    }

    /// Create a disk with no visual attributes. Handy for rule-only code.
    #[must_use]
    pub fn plain(rank: u32) -> Self {
        Self::new(Rank::new(rank), 0.0, 0.0, Color::new(0))
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Rendered width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Rendered height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this disk may rest directly on `below`.
    #[must_use]
    pub fn fits_on(&self, below: &Disk) -> bool {
        below.rank > self.rank
    }
}
