//! Variant - one labeled option a visitor may be shown under an experiment

use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A variant of an experiment.
///
/// The set is closed at two values in this system. `A` doubles as the
/// documented degradation fallback: it is what callers receive when
/// tracking is skipped (no consent, rejected input) and no draw happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Control variant (and the no-tracking fallback).
    #[default]
    A,
    /// Treatment variant.
    B,
}

impl Variant {
    /// Every defined variant, in label order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// The storage label for this variant.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Draw a variant uniformly at random from the defined set.
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::A)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.label().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "C".parse::<Variant>().unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(label) if label == "C"));
    }

    #[test]
    fn test_default_is_control() {
        assert_eq!(Variant::default(), Variant::A);
    }

    #[test]
    fn test_draw_covers_both_variants() {
        let mut rng = rand::thread_rng();
        let mut seen_a = false;
        let mut seen_b = false;

        // P(miss) = 2^-200
        for _ in 0..200 {
            match Variant::draw(&mut rng) {
                Variant::A => seen_a = true,
                Variant::B => seen_b = true,
            }
        }

        assert!(seen_a && seen_b);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Variant::B).unwrap();
        assert_eq!(json, "\"B\"");
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variant::B);
    }
}
