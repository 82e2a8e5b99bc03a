//! Property-based tests for hamming-evo
//!
//! Uses proptest to verify invariants and properties of the library.

use hamming_evo::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn equal_length_pair() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (1usize..64).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
    })
}

proptest! {
    // ==================== Fitness Properties ====================

    #[test]
    fn fitness_against_self_is_length(bits in prop::collection::vec(any::<bool>(), 1..100)) {
        let genome = BitString::new(bits);
        let fitness = TargetFitness::new(genome.clone());
        prop_assert_eq!(fitness.fitness(&genome), genome.len());
    }

    #[test]
    fn fitness_bounded_by_length((target, candidate) in equal_length_pair()) {
        let len = target.len();
        let fitness = TargetFitness::new(BitString::new(target));
        let score = fitness.fitness(&BitString::new(candidate));
        prop_assert!(score <= len);
    }

    #[test]
    fn fitness_mismatched_lengths_is_zero(
        target in prop::collection::vec(any::<bool>(), 1..32),
        extra in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let fitness = TargetFitness::new(BitString::new(target.clone()));
        let mut longer = target;
        longer.extend(extra);
        prop_assert_eq!(fitness.fitness(&BitString::new(longer)), 0);
    }

    #[test]
    fn average_fitness_within_range((target, candidate) in equal_length_pair()) {
        let len = target.len();
        let fitness = TargetFitness::new(BitString::new(target));
        let population = vec![BitString::new(candidate)];
        let average = fitness.average(&population).unwrap();
        prop_assert!(average >= 0.0 && average <= len as f64);
    }

    // ==================== Crossover Properties ====================

    #[test]
    fn crossover_children_preserve_length((a, b) in equal_length_pair(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let parent_a = BitString::new(a);
        let parent_b = BitString::new(b);

        let (child_a, child_b) = OnePointCrossover::new().crossover(&parent_a, &parent_b, &mut rng);
        prop_assert_eq!(child_a.len(), parent_a.len());
        prop_assert_eq!(child_b.len(), parent_b.len());
    }

    #[test]
    fn crossover_child_is_a_splice((a, b) in equal_length_pair(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let parent_a = BitString::new(a);
        let parent_b = BitString::new(b);
        let n = parent_a.len();

        let (child, _) = OnePointCrossover::new().crossover(&parent_a, &parent_b, &mut rng);

        let is_splice = (0..n).any(|p| {
            child.bits()[..p] == parent_a.bits()[..p]
                && child.bits()[p..] == parent_b.bits()[p..]
        });
        prop_assert!(is_splice);
    }

    #[test]
    fn offspring_batch_has_requested_count(
        (a, b) in equal_length_pair(),
        count in 0usize..40,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let parents = vec![BitString::new(a), BitString::new(b)];

        let offspring = OnePointCrossover::new()
            .generate_offspring(OffspringRequest { parents: &parents, count }, &mut rng)
            .unwrap();
        prop_assert_eq!(offspring.len(), count);
    }

    // ==================== Selection Properties ====================

    #[test]
    fn selection_is_sorted_descending(
        genomes in prop::collection::vec(prop::collection::vec(any::<bool>(), 8), 1..20)
    ) {
        let population: Vec<BitString> = genomes.into_iter().map(BitString::new).collect();
        let fitness = TargetFitness::new(BitString::ones(8));

        let selected = TruncationSelection::new().select(SelectionRequest {
            population: &population,
            fitness: &fitness,
            count: population.len(),
        });

        let scores: Vec<usize> = selected.iter().map(|g| fitness.fitness(g)).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn selection_never_exceeds_count(
        genomes in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 1..20),
        count in 0usize..25
    ) {
        let population: Vec<BitString> = genomes.into_iter().map(BitString::new).collect();
        let fitness = TargetFitness::new(BitString::ones(6));

        let selected = TruncationSelection::new().select(SelectionRequest {
            population: &population,
            fitness: &fitness,
            count,
        });
        prop_assert_eq!(selected.len(), count.min(population.len()));
    }

    // ==================== Convergence Properties ====================

    #[test]
    fn tracker_window_never_exceeds_capacity(
        samples in prop::collection::vec(0.0f64..=1.0, 0..50),
        capacity in 1usize..10
    ) {
        let mut tracker = ConvergenceTracker::new(capacity, 0.01);
        for sample in samples {
            tracker.record(sample);
            prop_assert!(tracker.len() <= capacity);
        }
    }

    #[test]
    fn tracker_changing_until_capacity_reached(
        samples in prop::collection::vec(0.0f64..=1.0, 0..10),
        capacity in 1usize..20
    ) {
        prop_assume!(samples.len() < capacity);

        let mut tracker = ConvergenceTracker::new(capacity, 0.0);
        for sample in samples {
            tracker.record(sample);
        }
        prop_assert!(tracker.is_changing());
    }

    #[test]
    fn tracker_full_window_follows_range_rule(
        samples in prop::collection::vec(0.0f64..=1.0, 1..30),
        capacity in 1usize..10,
        tolerance in 0.0f64..=1.0
    ) {
        prop_assume!(samples.len() >= capacity);

        let mut tracker = ConvergenceTracker::new(capacity, tolerance);
        for &sample in &samples {
            tracker.record(sample);
        }

        let window = &samples[samples.len() - capacity..];
        let max = window.iter().fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));
        let min = window.iter().fold(f64::INFINITY, |acc, &s| acc.min(s));
        prop_assert_eq!(tracker.is_changing(), max - min > tolerance);
    }

    // ==================== Engine Properties ====================

    #[test]
    fn engine_generation_counts_are_exhaustive(
        size in 5usize..40,
        keep in 0.2f64..0.8,
        mutate_share in 0.0f64..0.95,
        seed in any::<u64>()
    ) {
        // mutate drawn as a share of the room the keep fraction leaves,
        // kept clear of the sum==1 boundary so rounding cannot tip it over.
        let mutate = (1.0 - keep) * mutate_share;
        let num_keep = (size as f64 * keep).floor() as usize;
        let num_cross = (size as f64 * mutate).floor() as usize;
        prop_assert!(num_keep + num_cross <= size);

        let mut rng = StdRng::seed_from_u64(seed);
        let population: Vec<BitString> =
            (0..size).map(|_| BitString::random(10, &mut rng)).collect();

        let mut engine = EngineBuilder::new()
            .target(BitString::ones(10))
            .population(population)
            .keep_fraction(keep)
            .mutate_fraction(mutate)
            .halt_range(0.01)
            .halt_history(4)
            .build(rng)
            .unwrap();

        for _ in 0..5 {
            engine.evolve().unwrap();
            prop_assert_eq!(engine.population_size(), size);
            prop_assert_eq!(engine.genome_length(), 10);
        }
        prop_assert!(engine.convergence().len() <= 4);
    }

    #[test]
    fn engine_rejects_fraction_sum_above_one(
        keep in 0.0f64..=1.0,
        mutate in 0.0f64..=1.0
    ) {
        prop_assume!(keep + mutate > 1.0);

        let result = EngineBuilder::new()
            .target(BitString::ones(4))
            .population(vec![BitString::zeros(4)])
            .keep_fraction(keep)
            .mutate_fraction(mutate)
            .build(StdRng::seed_from_u64(0));
        prop_assert!(result.is_err());
    }

    // ==================== Serialization Properties ====================

    #[test]
    fn bit_string_serde_roundtrip(bits in prop::collection::vec(any::<bool>(), 0..64)) {
        let original = BitString::new(bits);
        let serialized = serde_json::to_string(&original).unwrap();
        let recovered: BitString = serde_json::from_str(&serialized).unwrap();
        prop_assert_eq!(original, recovered);
    }
}
