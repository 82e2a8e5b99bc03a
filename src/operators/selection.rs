//! Selection stage
//!
//! Elitist truncation: rank the population by fitness, keep the top slice.

use crate::fitness::hamming::TargetFitness;
use crate::genome::bit_string::BitString;

/// Parameters for one selection pass
#[derive(Clone, Debug)]
pub struct SelectionRequest<'a> {
    /// Genomes to rank
    pub population: &'a [BitString],
    /// Fitness measure to rank by
    pub fitness: &'a TargetFitness,
    /// Number of genomes to keep
    pub count: usize,
}

/// Elitist truncation selection
///
/// Scores every genome, sorts by descending fitness, and returns the first
/// `count` genomes. The sort is stable: genomes with equal fitness keep
/// their original population order, so a given population always selects
/// the same elite.
#[derive(Clone, Debug, Default)]
pub struct TruncationSelection;

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new() -> Self {
        Self
    }

    /// Rank the population and return clones of the fittest `count` genomes
    ///
    /// `count` may be 0 (empty result) or as large as the population.
    pub fn select(&self, req: SelectionRequest<'_>) -> Vec<BitString> {
        let mut scored: Vec<(usize, &BitString)> = req
            .population
            .iter()
            .map(|genome| (req.fitness.fitness(genome), genome))
            .collect();

        // Stable descending sort; ties keep population order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(req.count)
            .map(|(_, genome)| genome.clone())
            .collect()
    }
}
