//! Sortable elements and the datasets built from them
//!
//! - [`Bar`]: one sortable unit, a value paired with a display color
//! - [`Tint`]: opaque RGB tag; never participates in ordering
//! - [`preset`]: the fixed catalog of initial dataset shapes
//!
//! Algorithms always move a [`Bar`] as a whole, so a bar's color follows its
//! value through every swap and placement.

pub mod preset;

pub use preset::{Preset, PresetError};

use std::fmt;

/// Number of bars in a generated dataset
pub const DATASET_LEN: usize = 10;

/// Opaque RGB display tag (`0xRRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tint(pub u32);

impl Tint {
    pub fn rgb(self) -> (u8, u8, u8) {
        let Tint(hex) = self;
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// One bar of the chart: the unit every algorithm operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar {
    pub value: u32,
    pub color: Tint,
}

impl Bar {
    pub fn new(value: u32, color: Tint) -> Self {
        Bar { value, color }
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Palette assigned by initial position, one distinct color per bar
pub const PALETTE: [Tint; DATASET_LEN] = [
    Tint(0xf38ba8), // Red
    Tint(0xfab387), // Peach
    Tint(0xf9e2af), // Yellow
    Tint(0xa6e3a1), // Green
    Tint(0x94e2d5), // Teal
    Tint(0x89dceb), // Sky
    Tint(0x89b4fa), // Blue
    Tint(0xb4befe), // Lavender
    Tint(0xcba6f7), // Mauve
    Tint(0xf5c2e7), // Pink
];

/// Pair each value with the palette color for its position
pub fn paint(values: &[u32]) -> Vec<Bar> {
    values
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(&value, &color)| Bar::new(value, color))
        .collect()
}

/// Largest value in the dataset, used to scale bar heights (0 when empty)
pub fn max_value(data: &[Bar]) -> u32 {
    data.iter().map(|bar| bar.value).max().unwrap_or(0)
}

/// Values only, in order (for log lines)
pub fn values_of(data: &[Bar]) -> Vec<u32> {
    data.iter().map(|bar| bar.value).collect()
}

/// Check if the inclusive range `[low, high]` is sorted ascending by value
pub fn is_sorted_range(data: &[Bar], low: usize, high: usize) -> bool {
    if low >= high {
        return true;
    }
    data[low..=high].windows(2).all(|w| w[0].value <= w[1].value)
}
