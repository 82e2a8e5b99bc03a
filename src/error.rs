//! Error types for hamming-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Top-level error type for evolution operations
///
/// Configuration errors are fatal and raised once, at engine construction;
/// the engine is never left partially built. The one runtime variant,
/// [`EvolutionError::EmptyParentPool`], surfaces a configuration that asks
/// for offspring without keeping any parents.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Population was supplied without any genomes
    #[error("population must contain at least one genome")]
    EmptyPopulation,

    /// Target genome has no genes
    #[error("target must contain at least one gene")]
    EmptyTarget,

    /// A genome's length differs from the rest of the population
    #[error("genome length mismatch: expected {expected}, got {actual}")]
    GenomeLengthMismatch { expected: usize, actual: usize },

    /// Keep and mutate fractions together exceed the whole population
    #[error("keep fraction {keep} plus mutate fraction {mutate} exceeds 1")]
    FractionSumExceeded { keep: f64, mutate: f64 },

    /// Offspring were requested but no parents are available
    #[error("offspring requested from an empty parent pool")]
    EmptyParentPool,

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
