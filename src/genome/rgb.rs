//! RGB decoding
//!
//! A 24-bit chromosome is read as three consecutive big-endian bytes:
//! bits 0..8 are red, 8..16 green and 16..24 blue.

use serde::{Deserialize, Serialize};

use crate::genome::bit_string::CHROMOSOME_LEN;

/// Number of bits per color channel
pub const CHANNEL_BITS: usize = 8;

/// An RGB color triple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new color
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels in red, green, blue order
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Euclidean distance to another color in RGB space
    pub fn distance(&self, other: &Self) -> f64 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&a, &b)| {
                let d = f64::from(a) - f64::from(b);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r={} g={} b={}", self.red, self.green, self.blue)
    }
}

/// Decode a 24-bit sequence into its RGB triple
pub fn decode(bits: &[bool; CHROMOSOME_LEN]) -> Rgb {
    let channel = |index: usize| -> u8 {
        bits[index * CHANNEL_BITS..(index + 1) * CHANNEL_BITS]
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
    };
    Rgb::new(channel(0), channel(1), channel(2))
}

/// Encode an RGB triple back into its 24-bit sequence (inverse of [`decode`])
pub fn encode(rgb: &Rgb) -> [bool; CHROMOSOME_LEN] {
    let mut bits = [false; CHROMOSOME_LEN];
    for (channel, value) in rgb.channels().into_iter().enumerate() {
        for offset in 0..CHANNEL_BITS {
            let shift = CHANNEL_BITS - 1 - offset;
            bits[channel * CHANNEL_BITS + offset] = (value >> shift) & 1 == 1;
        }
    }
    bits
}
