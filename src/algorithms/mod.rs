//! Evolutionary algorithms
//!
//! This module provides the generational color GA.

pub mod generational;

pub mod prelude {
    pub use super::generational::*;
}
