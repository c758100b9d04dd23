//! Fitness evaluation
//!
//! Fitness is the Euclidean distance in RGB space between a chromosome's decoded
//! color and the target's. Lower is better and 0 is an exact match.

use serde::{Deserialize, Serialize};

use crate::genome::bit_string::ColorBits;
use crate::genome::rgb::Rgb;

/// Fitness of `candidate` measured against `target`
pub fn color_distance(target: &ColorBits, candidate: &ColorBits) -> f64 {
    target.to_rgb().distance(&candidate.to_rgb())
}

/// The reference chromosome a run evolves toward
///
/// Holds the decoded color alongside the bits so evaluation decodes only the candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    bits: ColorBits,
    color: Rgb,
}

impl Target {
    /// Create a target from its bits
    pub fn new(bits: ColorBits) -> Self {
        Self {
            bits,
            color: bits.to_rgb(),
        }
    }

    /// The target's bits
    pub fn bits(&self) -> &ColorBits {
        &self.bits
    }

    /// The target's decoded color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Evaluate a candidate against this target
    pub fn evaluate(&self, candidate: &ColorBits) -> f64 {
        self.color.distance(&candidate.to_rgb())
    }
}

impl From<ColorBits> for Target {
    fn from(bits: ColorBits) -> Self {
        Self::new(bits)
    }
}

impl From<Rgb> for Target {
    fn from(color: Rgb) -> Self {
        Self::new(ColorBits::from_rgb(color))
    }
}

impl std::str::FromStr for Target {
    type Err = crate::error::GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ColorBits>().map(Self::new)
    }
}

pub mod prelude {
    pub use super::{color_distance, Target};
}
