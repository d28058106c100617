//! Job-shop crossover and mutation.
//!
//! # Crossover
//!
//! [`job_point_crossover`]: single-point crossover at job granularity. The
//! cut falls between two jobs' gene lists, never inside one, so children
//! inherit whole-job assignments and always keep a valid shape.
//!
//! # Mutation
//!
//! [`reassign_mutation`]: resample the machine of one random operation.

use super::chromosome::Chromosome;
use crate::ga::Fitness;
use crate::instance::ProblemInstance;
use rand::Rng;

/// Smallest job count for which an interior cut point exists.
pub const MIN_CROSSOVER_JOBS: usize = 3;

/// Single-point crossover between whole jobs.
///
/// Picks a cut `c` uniformly in `1..=job_count - 2` and returns
/// `(p1[..c] ++ p2[c..], p2[..c] ++ p1[c..])`. Children are unevaluated.
///
/// # Panics
/// Panics if the parents have different job counts or fewer than
/// [`MIN_CROSSOVER_JOBS`] jobs.
pub fn job_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.job_count();
    assert_eq!(n, parent2.job_count(), "parents must have equal job counts");
    assert!(
        n >= MIN_CROSSOVER_JOBS,
        "crossover needs at least {MIN_CROSSOVER_JOBS} jobs, got {n}"
    );

    let cut = rng.random_range(1..=n - 2);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// `head[..cut] ++ tail[cut..]`, with cloned gene lists.
fn splice(head: &Chromosome, tail: &Chromosome, cut: usize) -> Chromosome {
    let assignments = head.assignments[..cut]
        .iter()
        .chain(&tail.assignments[cut..])
        .cloned()
        .collect();
    Chromosome {
        assignments,
        makespan: f64::worst(),
    }
}

/// Reassigns one operation to a uniformly random machine.
///
/// A job is drawn uniformly among jobs that have operations, then a
/// position within it; the new machine may equal the old one. Does nothing
/// if no job has operations. Invalidates the cached makespan.
pub fn reassign_mutation<R: Rng>(
    chromosome: &mut Chromosome,
    instance: &ProblemInstance,
    rng: &mut R,
) {
    let candidates: Vec<usize> = chromosome
        .assignments
        .iter()
        .enumerate()
        .filter(|(_, genes)| !genes.is_empty())
        .map(|(j, _)| j)
        .collect();
    if candidates.is_empty() {
        return;
    }

    let job = candidates[rng.random_range(0..candidates.len())];
    let genes = &mut chromosome.assignments[job];
    let position = rng.random_range(0..genes.len());
    genes[position] = rng.random_range(0..instance.machine_count());
    chromosome.makespan = f64::worst();
}
