//! Random reseeding stage
//!
//! Fills the gap the keep and mutate fractions leave with fresh genomes.

use rand::Rng;

use crate::genome::bit_string::BitString;

/// Parameters for one reseeding batch
#[derive(Clone, Copy, Debug)]
pub struct SeedRequest {
    /// Length of each generated genome
    pub length: usize,
    /// Number of genomes to generate
    pub count: usize,
}

/// Uniform random genome source
#[derive(Clone, Debug, Default)]
pub struct RandomSeeder;

impl RandomSeeder {
    /// Create a new random seeder
    pub fn new() -> Self {
        Self
    }

    /// Generate `count` genomes of `length` uniformly random genes
    pub fn generate<R: Rng>(&self, req: SeedRequest, rng: &mut R) -> Vec<BitString> {
        (0..req.count)
            .map(|_| BitString::random(req.length, rng))
            .collect()
    }
}
