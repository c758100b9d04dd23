//! Error types for rgb-evolve
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for chromosome construction and parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// The bit sequence does not have the required length
    #[error("Invalid chromosome length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character other than '0' or '1' was found
    #[error("Invalid bit '{found}' at position {position}")]
    InvalidBit { position: usize, found: char },
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// The population holds fewer chromosomes than the operator needs
    #[error("Population too small for {operator}: need at least {required}, got {actual}")]
    PopulationTooSmall {
        operator: &'static str,
        required: usize,
        actual: usize,
    },

    /// A tournament was requested on an empty population
    #[error("Cannot apply {operator} to an empty population")]
    EmptyPopulation { operator: &'static str },
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
