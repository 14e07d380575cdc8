//! End-to-end scenarios: parameter selection, generation and claim
//! simulation chained together.
//!
//! Expected counts are fixed reference values for the given parameters and
//! seeds; every generator is deterministic, so they never change.

use approx::assert_relative_eq;
use congruent_core::{is_valid, select_or_generate, GeneratorParameters, SearchConfig};
use congruent_sim::mc::{simulate, ClaimParams, MonteCarloSimulator};
use congruent_sim::rng::{
    additive, inversive, linear, AdditiveGenerator, CongruentialGenerator, FallbackRecorder,
    InversiveGenerator,
};

const M31: i64 = 1 << 31;
const M32_1: i64 = 4_294_967_295;
const M32_5: i64 = 4_294_967_291;

const CLIENTS: usize = 1_000;
const P_EVENT: f64 = 0.02;
const PAYOUT: f64 = 100_000.0;

#[test]
fn test_power_of_two_selection_and_generation() {
    assert!(!is_valid(5, 12, M31).unwrap());

    let selection = select_or_generate(5, 12, M31, &SearchConfig::default()).unwrap();
    assert_eq!((selection.params.a, selection.params.b), (5, 13));

    let first = linear::generate(selection.params, 123, 10);
    let second = linear::generate(selection.params, 123, 10);
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
    assert!(first.iter().all(|&x| (0.0..1.0).contains(&x)));
    assert_eq!(first[9], 1_232_910_153.0 / M31 as f64);

    let neighbour = linear::generate(selection.params, 124, 3);
    assert_eq!(neighbour[0], 633.0 / M31 as f64);
}

#[test]
fn test_linear_claims_unvalidated_parameters() {
    let params = GeneratorParameters::new(5, 13, M32_1).unwrap();
    assert!(!params.is_full_period());

    let sequence = linear::generate(params, 123, CLIENTS);
    let result = simulate(&sequence, P_EVENT, PAYOUT).unwrap();

    assert_eq!(result.total_events, 21);
    assert_eq!(result.total_payout, 2_100_000.0);
    assert_eq!(result.mean_payout, 2_100.0);
    assert_relative_eq!(result.empirical_probability, 0.021);
}

#[test]
fn test_additive_claims() {
    let sequence = additive::generate(&[123, 456, 789], CLIENTS, M32_5).unwrap();
    let result = simulate(&sequence, P_EVENT, PAYOUT).unwrap();

    assert_eq!(result.sample_size, CLIENTS);
    assert_eq!(result.total_events, 32);
    assert_eq!(result.total_payout, result.total_events as f64 * PAYOUT);
    assert_eq!(result.mean_payout, result.total_payout / CLIENTS as f64);
    assert_relative_eq!(result.empirical_probability, 0.032);

    // Stable across runs
    let again = simulate(
        &additive::generate(&[123, 456, 789], CLIENTS, M32_5).unwrap(),
        P_EVENT,
        PAYOUT,
    )
    .unwrap();
    assert_eq!(result, again);
}

#[test]
fn test_inversive_claims() {
    let mut generator =
        InversiveGenerator::with_observer(123, 17, 31, M32_5, FallbackRecorder::new()).unwrap();
    let simulator = MonteCarloSimulator::new(ClaimParams::new(P_EVENT, PAYOUT));
    let result = simulator.simulate_from(&mut generator, CLIENTS).unwrap();

    assert_eq!(result.total_events, 28);
    assert_eq!(result.mean_payout, 2_800.0);
    // 2^32 - 5 is prime and the walk never hits 0
    assert_eq!(generator.fallback_count(), 0);
    assert!(generator.into_observer().is_empty());

    let direct = inversive::generate(123, 17, 31, M32_5, CLIENTS).unwrap();
    assert_eq!(simulate(&direct, P_EVENT, PAYOUT).unwrap(), result);
}

#[test]
fn test_generators_are_interchangeable() {
    fn run<G: CongruentialGenerator>(generator: &mut G) -> usize {
        MonteCarloSimulator::default()
            .simulate_from(generator, CLIENTS)
            .unwrap()
            .sample_size
    }

    let params = GeneratorParameters::new(5, 13, M31).unwrap();
    assert_eq!(run(&mut linear::LinearGenerator::new(params, 123)), CLIENTS);
    assert_eq!(
        run(&mut AdditiveGenerator::new(&[123, 456, 789], M32_5).unwrap()),
        CLIENTS
    );
    assert_eq!(
        run(&mut InversiveGenerator::new(123, 17, 31, M32_5).unwrap()),
        CLIENTS
    );
}
