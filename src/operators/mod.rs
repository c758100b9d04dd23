//! Genetic operators
//!
//! This module provides tournament selection and the four population operators:
//! crossover, mutation, retention and new blood.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::selection::*;
    pub use super::traits::*;
}
