//! Drives the engine toward an all-ones target and charts the run.
//!
//! Mirrors the library's intended driver shape: seed a random population,
//! sample normalized average fitness while the engine reports change, then
//! hand the samples to the chart sink.

use hamming_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const INDIVIDUAL_SIZE: usize = 50;
const POPULATION_SIZE: usize = 500;
const GRAPH_HEIGHT: usize = 15;
const HALT_RANGE: f64 = 0.01;
const HALT_HISTORY: usize = 20;
const KEEP_FRACTION: f64 = 0.1;
const MUTATE_FRACTION: f64 = 0.9;

fn main() -> Result<(), EvolutionError> {
    env_logger::init();

    let mut rng = StdRng::from_entropy();
    let population: Vec<BitString> = (0..POPULATION_SIZE)
        .map(|_| BitString::random(INDIVIDUAL_SIZE, &mut rng))
        .collect();

    let mut engine = EngineBuilder::new()
        .target(BitString::ones(INDIVIDUAL_SIZE))
        .population(population)
        .keep_fraction(KEEP_FRACTION)
        .mutate_fraction(MUTATE_FRACTION)
        .halt_range(HALT_RANGE)
        .halt_history(HALT_HISTORY)
        .build(rng)?;

    let mut samples = Vec::new();
    while engine.is_changing() {
        samples.push(engine.average_fitness() / engine.genome_length() as f64);
        engine.evolve()?;
    }

    print!("{}", render_chart(&samples, GRAPH_HEIGHT));
    println!(
        "stabilized after {} generations at average fitness {:.2}/{}",
        engine.generation(),
        engine.average_fitness(),
        engine.genome_length()
    );
    Ok(())
}

/// Render normalized samples as a fixed-height ASCII chart, one column per
/// sample, rows from 1.0 down to 0.0.
fn render_chart(samples: &[f64], height: usize) -> String {
    let mut out = String::new();
    for row in (1..=height).rev() {
        let threshold = row as f64 / height as f64;
        out.push_str(if row == height { "1.0 |" } else { "    |" });
        for &sample in samples {
            out.push(if sample >= threshold { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out.push_str("0.0 +");
    out.push_str(&"-".repeat(samples.len()));
    out.push('\n');
    out
}
