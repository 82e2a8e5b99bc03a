//! Hamming-similarity fitness
//!
//! Scores genomes by how many gene positions agree with a fixed target.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::genome::bit_string::BitString;

/// Fitness measure against a fixed target genome
///
/// Owns the target for the engine's lifetime. Individual fitness is the
/// match count in `[0, target_length]`; population fitness is the mean of
/// individual fitness values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetFitness {
    /// The genome fitness is measured against
    target: BitString,
}

impl TargetFitness {
    /// Create a fitness measure for the given target
    pub fn new(target: BitString) -> Self {
        Self { target }
    }

    /// Get the target genome
    pub fn target(&self) -> &BitString {
        &self.target
    }

    /// Count of gene positions where `genome` agrees with the target
    ///
    /// A genome whose length differs from the target scores 0 instead of
    /// failing. Engine construction keeps lengths equal, so this guard is
    /// unreachable in a validated engine.
    pub fn fitness(&self, genome: &BitString) -> usize {
        if genome.len() != self.target.len() {
            return 0;
        }
        genome.match_count(&self.target)
    }

    /// Mean fitness over `population`, or `None` when it is empty
    pub fn average(&self, population: &[BitString]) -> Option<f64> {
        if population.is_empty() {
            return None;
        }
        Some(self.total(population) as f64 / population.len() as f64)
    }

    #[cfg(feature = "parallel")]
    fn total(&self, population: &[BitString]) -> usize {
        population.par_iter().map(|g| self.fitness(g)).sum()
    }

    #[cfg(not(feature = "parallel"))]
    fn total(&self, population: &[BitString]) -> usize {
        population.iter().map(|g| self.fitness(g)).sum()
    }
}
