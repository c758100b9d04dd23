//! Fixed-length bit string genome
//!
//! This module provides the 24-bit chromosome value type. A `ColorBits` is never
//! edited in place: flipping, complementing and splicing all return a new value.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::rgb::{self, Rgb};

/// Number of bits in every chromosome
pub const CHROMOSOME_LEN: usize = 24;

/// A 24-bit chromosome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorBits {
    bits: [bool; CHROMOSOME_LEN],
}

impl ColorBits {
    /// Create a chromosome from its bits
    pub fn new(bits: [bool; CHROMOSOME_LEN]) -> Self {
        Self { bits }
    }

    /// All-zeros chromosome (black)
    pub fn zeros() -> Self {
        Self {
            bits: [false; CHROMOSOME_LEN],
        }
    }

    /// All-ones chromosome (white)
    pub fn ones() -> Self {
        Self {
            bits: [true; CHROMOSOME_LEN],
        }
    }

    /// Draw every bit independently with a fair coin
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut bits = [false; CHROMOSOME_LEN];
        for bit in &mut bits {
            *bit = rng.gen();
        }
        Self { bits }
    }

    /// Build a chromosome from a slice, checking its length
    pub fn from_slice(bits: &[bool]) -> Result<Self, GenomeError> {
        let bits: [bool; CHROMOSOME_LEN] =
            bits.try_into().map_err(|_| GenomeError::InvalidLength {
                expected: CHROMOSOME_LEN,
                actual: bits.len(),
            })?;
        Ok(Self { bits })
    }

    /// Encode a color as a chromosome
    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            bits: rgb::encode(&color),
        }
    }

    /// Decode this chromosome into its color
    pub fn to_rgb(&self) -> Rgb {
        rgb::decode(&self.bits)
    }

    /// The bits of this chromosome
    pub fn bits(&self) -> &[bool; CHROMOSOME_LEN] {
        &self.bits
    }

    /// Always [`CHROMOSOME_LEN`]
    pub fn len(&self) -> usize {
        CHROMOSOME_LEN
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// A copy with the bit at `index` flipped. Out-of-range indices leave the copy unchanged.
    pub fn flipped(&self, index: usize) -> Self {
        let mut bits = self.bits;
        if let Some(bit) = bits.get_mut(index) {
            *bit = !*bit;
        }
        Self { bits }
    }

    /// Get the complement (all bits flipped)
    pub fn complement(&self) -> Self {
        let mut bits = self.bits;
        for bit in &mut bits {
            *bit = !*bit;
        }
        Self { bits }
    }

    /// Bits `[0, point)` from `self` followed by bits `[point, 24)` from `other`
    pub fn splice(&self, other: &Self, point: usize) -> Self {
        let point = point.min(CHROMOSOME_LEN);
        let mut bits = other.bits;
        bits[..point].copy_from_slice(&self.bits[..point]);
        Self { bits }
    }

    /// Hamming distance to another chromosome
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Count the number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl Default for ColorBits {
    fn default() -> Self {
        Self::zeros()
    }
}

impl FromStr for ColorBits {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != CHROMOSOME_LEN {
            return Err(GenomeError::InvalidLength {
                expected: CHROMOSOME_LEN,
                actual,
            });
        }

        let mut bits = [false; CHROMOSOME_LEN];
        for (position, c) in s.chars().enumerate() {
            bits[position] = match c {
                '0' => false,
                '1' => true,
                found => return Err(GenomeError::InvalidBit { position, found }),
            };
        }
        Ok(Self { bits })
    }
}

impl std::ops::Index<usize> for ColorBits {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<[bool; CHROMOSOME_LEN]> for ColorBits {
    fn from(bits: [bool; CHROMOSOME_LEN]) -> Self {
        Self { bits }
    }
}

impl From<Rgb> for ColorBits {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color)
    }
}

impl<'a> IntoIterator for &'a ColorBits {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl std::fmt::Display for ColorBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
