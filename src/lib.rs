//! # hamming-evo
//!
//! A truncation-selection genetic algorithm that evolves fixed-length bit
//! string genomes toward a target genome.
//!
//! ## Core Concepts
//!
//! - **Hamming fitness**: a genome's fitness is the number of gene
//!   positions agreeing with the target.
//! - **Elitist truncation**: each generation keeps the fittest
//!   `keep_fraction` unchanged, breeds another `mutate_fraction` from that
//!   elite by one-point crossover, and fills the rest with random genomes.
//! - **Window-based halting**: the engine records normalized average
//!   fitness into a sliding window; once the window is full and its spread
//!   stays within `halt_range`, the population counts as stable.
//!
//! All randomness flows through an injected [`rand::Rng`], so seeded runs
//! are fully reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use hamming_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let population: Vec<BitString> =
//!     (0..50).map(|_| BitString::random(16, &mut rng)).collect();
//!
//! let mut engine = EngineBuilder::new()
//!     .target(BitString::ones(16))
//!     .population(population)
//!     .keep_fraction(0.1)
//!     .mutate_fraction(0.9)
//!     .halt_range(0.01)
//!     .halt_history(10)
//!     .build(rng)?;
//!
//! // The engine never stops on its own; the driver decides when to quit.
//! while engine.is_changing() && engine.generation() < 1_000 {
//!     engine.evolve()?;
//! }
//! # Ok::<(), EvolutionError>(())
//! ```

pub mod convergence;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convergence::*;
    pub use crate::engine::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
}
