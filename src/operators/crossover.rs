//! Crossover stage
//!
//! One-point recombination of elite parents into offspring genomes.

use rand::Rng;

use crate::error::{EvoResult, EvolutionError};
use crate::genome::bit_string::BitString;

/// Parameters for one offspring batch
#[derive(Clone, Debug)]
pub struct OffspringRequest<'a> {
    /// Parent pool, normally the selected elite
    pub parents: &'a [BitString],
    /// Number of offspring to produce
    pub count: usize,
}

/// One-point crossover for bit strings
///
/// The crossover point is drawn uniformly from `[0, length)`; a point of 0
/// copies the second parent wholesale. Each crossover yields two
/// complementary children, and [`OnePointCrossover::generate_offspring`]
/// enqueues the first child of each pair, so the offspring sequence for a
/// given random stream is reproducible.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Splice two parents at a random point, producing both children
    ///
    /// The first child is `a[..p] ++ b[p..]`, the second `b[..p] ++ a[p..]`.
    /// Parents of unequal length are returned unchanged; engine construction
    /// keeps that branch unreachable.
    pub fn crossover<R: Rng>(
        &self,
        parent_a: &BitString,
        parent_b: &BitString,
        rng: &mut R,
    ) -> (BitString, BitString) {
        let n = parent_a.len();
        if n != parent_b.len() || n == 0 {
            return (parent_a.clone(), parent_b.clone());
        }

        let point = rng.gen_range(0..n);

        let mut child_a = Vec::with_capacity(n);
        child_a.extend_from_slice(&parent_a.bits()[..point]);
        child_a.extend_from_slice(&parent_b.bits()[point..]);

        let mut child_b = Vec::with_capacity(n);
        child_b.extend_from_slice(&parent_b.bits()[..point]);
        child_b.extend_from_slice(&parent_a.bits()[point..]);

        (BitString::new(child_a), BitString::new(child_b))
    }

    /// Produce `count` offspring from the parent pool
    ///
    /// Each offspring draws two parent indices uniformly with replacement
    /// (a genome may parent itself or several offspring), crosses them, and
    /// keeps the first child. Requesting offspring from an empty pool is a
    /// configuration error.
    pub fn generate_offspring<R: Rng>(
        &self,
        req: OffspringRequest<'_>,
        rng: &mut R,
    ) -> EvoResult<Vec<BitString>> {
        if req.count == 0 {
            return Ok(Vec::new());
        }
        if req.parents.is_empty() {
            return Err(EvolutionError::EmptyParentPool);
        }

        let mut offspring = Vec::with_capacity(req.count);
        for _ in 0..req.count {
            let a = &req.parents[rng.gen_range(0..req.parents.len())];
            let b = &req.parents[rng.gen_range(0..req.parents.len())];
            let (child, _) = self.crossover(a, b, rng);
            offspring.push(child);
        }
        Ok(offspring)
    }
}
