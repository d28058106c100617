//! Population-level variation steps.
//!
//! These apply a problem's pairwise [`crossover`](GaProblem::crossover) and
//! single-individual [`mutate`](GaProblem::mutate) across the tournament
//! winners and their offspring, with the configured rates.

use super::types::GaProblem;
use rand::Rng;

/// Builds the offspring of one generation.
///
/// Each winner, independently with probability `crossover_rate`, is paired
/// with a partner drawn uniformly from `winners` (itself included) and all
/// children of the pair are appended. Winners that are not picked produce
/// nothing, so the offspring count varies between generations.
///
/// `winners` holds indices into `population`.
pub fn recombine<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    winners: &[usize],
    crossover_rate: f64,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut offspring = Vec::with_capacity(winners.len() * 2);
    if winners.is_empty() {
        return offspring;
    }
    for &first in winners {
        if rng.random_range(0.0..1.0) < crossover_rate {
            let second = winners[rng.random_range(0..winners.len())];
            offspring.extend(problem.crossover(&population[first], &population[second], rng));
        }
    }
    offspring
}

/// Mutates each offspring in place with probability `mutation_rate`.
pub fn mutate_offspring<P: GaProblem, R: Rng>(
    problem: &P,
    offspring: &mut [P::Individual],
    mutation_rate: f64,
    rng: &mut R,
) {
    for child in offspring.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            problem.mutate(child, rng);
        }
    }
}
