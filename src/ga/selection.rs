//! Binary tournament selection without replacement.
//!
//! The population is shuffled and split into consecutive pairs; the fitter
//! member of each pair survives. Every individual competes exactly once,
//! so a single pass yields `n / 2` winners.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::seq::SliceRandom;
use rand::Rng;

/// Runs one pass of pairwise tournaments and returns the winners' indices.
///
/// The winner of a pair is the member with strictly lower fitness; on a tie
/// the first member of the shuffled pair wins. With an odd population the
/// last shuffled individual has no partner and is dropped.
///
/// # Complexity
/// O(n)
pub fn pairwise_tournament<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.shuffle(rng);

    order
        .chunks_exact(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            if population[b].fitness() < population[a].fitness() {
                b
            } else {
                a
            }
        })
        .collect()
}
