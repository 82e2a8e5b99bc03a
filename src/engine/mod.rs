//! Evolution engine
//!
//! Owns the population and composes fitness evaluation, truncation
//! selection, one-point crossover, and random reseeding into a single
//! generation step, with a sliding-window convergence signal.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::convergence::ConvergenceTracker;
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::hamming::TargetFitness;
use crate::genome::bit_string::BitString;
use crate::operators::crossover::{OffspringRequest, OnePointCrossover};
use crate::operators::seeding::{RandomSeeder, SeedRequest};
use crate::operators::selection::{SelectionRequest, TruncationSelection};

/// Configuration for the evolution engine
///
/// Fractions are of the population size, floored to genome counts each
/// generation; the random-fill count absorbs any rounding remainder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fraction of each generation carried over unchanged (the elite)
    #[serde(default)]
    pub keep_fraction: f64,
    /// Fraction of each generation bred from the elite via crossover
    #[serde(default)]
    pub mutate_fraction: f64,
    /// Spread tolerance under which average fitness counts as stable
    pub halt_range: f64,
    /// Number of recent samples the stability check looks at
    pub halt_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keep_fraction: 0.0,
            mutate_fraction: 0.0,
            halt_range: 0.01,
            halt_history: 20,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> EvoResult<()> {
        for (name, value) in [
            ("keep_fraction", self.keep_fraction),
            ("mutate_fraction", self.mutate_fraction),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EvolutionError::Configuration(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.keep_fraction + self.mutate_fraction > 1.0 {
            return Err(EvolutionError::FractionSumExceeded {
                keep: self.keep_fraction,
                mutate: self.mutate_fraction,
            });
        }
        if !self.halt_range.is_finite() || self.halt_range < 0.0 {
            return Err(EvolutionError::Configuration(format!(
                "halt_range must be non-negative and finite, got {}",
                self.halt_range
            )));
        }
        if self.halt_history == 0 {
            return Err(EvolutionError::Configuration(
                "halt_history must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`EvolutionEngine`]
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    target: Option<BitString>,
    population: Vec<BitString>,
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target genome
    pub fn target(mut self, target: BitString) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the initial population
    pub fn population(mut self, population: Vec<BitString>) -> Self {
        self.population = population;
        self
    }

    /// Set the fraction of each generation kept unchanged
    pub fn keep_fraction(mut self, fraction: f64) -> Self {
        self.config.keep_fraction = fraction;
        self
    }

    /// Set the fraction of each generation bred via crossover
    pub fn mutate_fraction(mut self, fraction: f64) -> Self {
        self.config.mutate_fraction = fraction;
        self
    }

    /// Set the stability spread tolerance
    pub fn halt_range(mut self, range: f64) -> Self {
        self.config.halt_range = range;
        self
    }

    /// Set the stability window size
    pub fn halt_history(mut self, history: usize) -> Self {
        self.config.halt_history = history;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine with the given random source
    pub fn build<R: Rng>(self, rng: R) -> EvoResult<EvolutionEngine<R>> {
        let target = self.target.ok_or_else(|| {
            EvolutionError::Configuration("target must be specified".to_string())
        })?;
        EvolutionEngine::new(target, self.population, self.config, rng)
    }
}

/// Generational engine evolving bit strings toward a fixed target
///
/// Each [`evolve`](EvolutionEngine::evolve) call fully replaces the
/// population: the fittest `keep_fraction` carried over unchanged, another
/// `mutate_fraction` bred from that elite by one-point crossover, and the
/// remaining gap filled with uniformly random genomes. After every step the
/// normalized average fitness is recorded into a sliding window whose
/// spread drives [`is_changing`](EvolutionEngine::is_changing).
///
/// The engine never halts on its own; callers loop on `is_changing` and
/// decide when to stop. If average fitness keeps oscillating beyond
/// `halt_range` the signal stays `true` indefinitely, so drivers that need
/// a hard stop must bound their loop themselves.
pub struct EvolutionEngine<R: Rng> {
    population: Vec<BitString>,
    fitness: TargetFitness,
    selection: TruncationSelection,
    crossover: OnePointCrossover,
    seeder: RandomSeeder,
    tracker: ConvergenceTracker,
    keep_fraction: f64,
    mutate_fraction: f64,
    generation: usize,
    rng: R,
}

impl<R: Rng> EvolutionEngine<R> {
    /// Create an engine from a target, an initial population, and a config
    ///
    /// Fails fast on an empty population, unequal genome lengths, an empty
    /// target, fractions summing past 1, or a degenerate halting setup; no
    /// partially constructed engine is ever returned.
    pub fn new(
        target: BitString,
        population: Vec<BitString>,
        config: EngineConfig,
        rng: R,
    ) -> EvoResult<Self> {
        config.validate()?;

        let first = population.first().ok_or(EvolutionError::EmptyPopulation)?;
        let expected = first.len();
        for genome in &population {
            if genome.len() != expected {
                return Err(EvolutionError::GenomeLengthMismatch {
                    expected,
                    actual: genome.len(),
                });
            }
        }

        if target.is_empty() {
            return Err(EvolutionError::EmptyTarget);
        }

        Ok(Self {
            population,
            fitness: TargetFitness::new(target),
            selection: TruncationSelection::new(),
            crossover: OnePointCrossover::new(),
            seeder: RandomSeeder::new(),
            tracker: ConvergenceTracker::new(config.halt_history, config.halt_range),
            keep_fraction: config.keep_fraction,
            mutate_fraction: config.mutate_fraction,
            generation: 0,
            rng,
        })
    }

    /// Create a builder
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Advance the population by one generation
    ///
    /// Selects the elite, breeds offspring from it, fills the rest with
    /// random genomes, replaces the population with the concatenation in
    /// that order, and records the normalized average fitness. Fails only
    /// when offspring are requested while the keep fraction selects no
    /// parents.
    pub fn evolve(&mut self) -> EvoResult<()> {
        let size = self.population.len();
        let num_keep = (size as f64 * self.keep_fraction).floor() as usize;
        let num_cross = (size as f64 * self.mutate_fraction).floor() as usize;
        let num_random = size - num_keep - num_cross;

        let elite = self.selection.select(SelectionRequest {
            population: &self.population,
            fitness: &self.fitness,
            count: num_keep,
        });

        let crosses = self.crossover.generate_offspring(
            OffspringRequest {
                parents: &elite,
                count: num_cross,
            },
            &mut self.rng,
        )?;

        let randoms = self.seeder.generate(
            SeedRequest {
                length: self.genome_length(),
                count: num_random,
            },
            &mut self.rng,
        );

        let mut next = Vec::with_capacity(size);
        next.extend(elite);
        next.extend(crosses);
        next.extend(randoms);
        self.population = next;
        self.generation += 1;

        let average = self.average_fitness();
        self.tracker.record(average / self.genome_length() as f64);

        debug!(
            "generation {}: average fitness {:.3} ({} kept, {} crossed, {} random)",
            self.generation, average, num_keep, num_cross, num_random
        );
        Ok(())
    }

    /// The current population
    pub fn population(&self) -> &[BitString] {
        &self.population
    }

    /// Number of genomes in the population
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Number of genes per genome
    pub fn genome_length(&self) -> usize {
        self.population.first().map(BitString::len).unwrap_or(0)
    }

    /// The target genome
    pub fn target(&self) -> &BitString {
        self.fitness.target()
    }

    /// Mean fitness of the current population, recomputed on each call
    pub fn average_fitness(&self) -> f64 {
        self.fitness.average(&self.population).unwrap_or(0.0)
    }

    /// Whether average fitness is still judged to be moving
    pub fn is_changing(&self) -> bool {
        self.tracker.is_changing()
    }

    /// The convergence window
    pub fn convergence(&self) -> &ConvergenceTracker {
        &self.tracker
    }

    /// Number of generations evolved so far
    pub fn generation(&self) -> usize {
        self.generation
    }
}
