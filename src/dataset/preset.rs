//! Initial dataset shapes
//!
//! Each preset produces [`DATASET_LEN`] painted bars. Generation takes any
//! [`rand::Rng`] so callers can seed it for reproducible runs.

use super::{paint, Bar, DATASET_LEN};
use rand::seq::index;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("Unknown preset '{0}' (expected one of Random, Ordered, Reverse, Hundreds, Thousands)")]
    UnknownPreset(String),
}

/// Initial ordering/magnitude of a generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Random,
    Ordered,
    Reverse,
    Hundreds,
    Thousands,
}

impl Preset {
    /// Catalog order, as presented to the user
    pub const ALL: [Preset; 5] = [
        Preset::Random,
        Preset::Ordered,
        Preset::Reverse,
        Preset::Hundreds,
        Preset::Thousands,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Random => "Random",
            Preset::Ordered => "Ordered",
            Preset::Reverse => "Reverse",
            Preset::Hundreds => "Hundreds",
            Preset::Thousands => "Thousands",
        }
    }

    /// Next preset in catalog order (wraps)
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous preset in catalog order (wraps)
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Generate a fresh dataset for this preset
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Bar> {
        let values: Vec<u32> = match self {
            // Distinct values 1..=100
            Preset::Random => index::sample(rng, 100, DATASET_LEN)
                .into_iter()
                .map(|i| i as u32 + 1)
                .collect(),
            Preset::Ordered => (1..=DATASET_LEN as u32).map(|i| i * 10).collect(),
            Preset::Reverse => (1..=DATASET_LEN as u32).rev().map(|i| i * 10).collect(),
            Preset::Hundreds => (0..DATASET_LEN).map(|_| rng.gen_range(100..1000)).collect(),
            Preset::Thousands => (0..DATASET_LEN)
                .map(|_| rng.gen_range(1000..10000))
                .collect(),
        };
        paint(&values)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PresetError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{values_of, PALETTE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ordered_and_reverse_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = values_of(&Preset::Ordered.generate(&mut rng));
        assert_eq!(ordered, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

        let reverse = values_of(&Preset::Reverse.generate(&mut rng));
        assert_eq!(reverse, vec![100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_random_values_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values = values_of(&Preset::Random.generate(&mut rng));
        assert!(values.iter().all(|v| (1..=100).contains(v)));
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), DATASET_LEN);
    }

    #[test]
    fn test_magnitude_presets() {
        let mut rng = StdRng::seed_from_u64(7);
        let hundreds = Preset::Hundreds.generate(&mut rng);
        assert!(hundreds.iter().all(|b| (100..1000).contains(&b.value)));

        let thousands = Preset::Thousands.generate(&mut rng);
        assert!(thousands.iter().all(|b| (1000..10000).contains(&b.value)));
        assert_eq!(thousands[9].color, PALETTE[9]);
    }

    #[test]
    fn test_parse_and_cycle() {
        assert_eq!("hundreds".parse::<Preset>(), Ok(Preset::Hundreds));
        assert_eq!(
            "sideways".parse::<Preset>(),
            Err(PresetError::UnknownPreset("sideways".to_string()))
        );
        assert_eq!(Preset::Thousands.next(), Preset::Random);
        assert_eq!(Preset::Random.prev(), Preset::Thousands);
    }
}
