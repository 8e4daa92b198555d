//! Command-line configuration

use crate::dataset::Preset;
use crate::sorting::Algorithm;
use clap::Parser;

/// Upper bound of the delay control, in milliseconds
pub const MAX_DELAY_MS: u64 = 2000;

/// Delay adjustment per key press, in milliseconds
pub const DELAY_STEP_MS: u64 = 10;

/// Step-by-step sorting visualizer
#[derive(Parser, Debug, Clone)]
#[command(name = "sortty", version, about = "Watch classic sorting algorithms step by step")]
pub struct Config {
    /// Algorithm selected at startup (Bubble, Selection, Insertion, Merge, Quick,
    /// Shell, Pancake, Cocktail, Heap, Exchange)
    #[arg(short, long, default_value = "Selection")]
    pub algorithm: Algorithm,

    /// Initial dataset (Random, Ordered, Reverse, Hundreds, Thousands)
    #[arg(short, long, default_value = "Reverse")]
    pub preset: Preset,

    /// Milliseconds between displayed steps; 0 shows the result at once
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(0..=MAX_DELAY_MS))]
    pub delay: u64,

    /// Seed for the random presets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sort once and print the metrics instead of opening the UI
    #[arg(long)]
    pub headless: bool,
}

/// Clamp a delay into the accepted range
pub fn clamp_delay(delay_ms: u64) -> u64 {
    delay_ms.min(MAX_DELAY_MS)
}
