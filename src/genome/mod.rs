//! Genome representation
//!
//! This module provides the 24-bit chromosome type and its RGB decoding.

pub mod bit_string;
pub mod rgb;

pub mod prelude {
    pub use super::bit_string::*;
    pub use super::rgb::*;
}
