//! Machine-assignment chromosome.
//!
//! One gene list per job, in instance order; gene `k` of job `j` is the
//! machine that runs the `k`-th operation of `j`.

use crate::error::ScheduleError;
use crate::ga::{Fitness, Individual};
use crate::instance::ProblemInstance;
use crate::schedule::check_assignment;
use rand::Rng;

/// A candidate machine assignment and its cached makespan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    /// `assignments[job][position]` = machine index.
    pub assignments: Vec<Vec<usize>>,
    /// Makespan from the last evaluation; `f64::INFINITY` until evaluated.
    pub makespan: f64,
}

impl Chromosome {
    /// Draws every gene uniformly from `0..machine_count`.
    pub fn random<R: Rng>(instance: &ProblemInstance, rng: &mut R) -> Self {
        let m = instance.machine_count();
        let assignments = instance
            .jobs()
            .iter()
            .map(|job| (0..job.len()).map(|_| rng.random_range(0..m)).collect())
            .collect();
        Self {
            assignments,
            makespan: f64::worst(),
        }
    }

    /// Wraps an explicit assignment after checking it against `instance`.
    pub fn from_assignments(
        instance: &ProblemInstance,
        assignments: Vec<Vec<usize>>,
    ) -> Result<Self, ScheduleError> {
        check_assignment(instance, &assignments)?;
        Ok(Self {
            assignments,
            makespan: f64::worst(),
        })
    }

    /// Number of job lists.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.assignments.len()
    }

    /// Machine assigned to operation `position` of `job`.
    #[inline]
    pub fn machine(&self, job: usize, position: usize) -> usize {
        self.assignments[job][position]
    }

    /// Number of `(job, position)` genes that differ from `other`.
    ///
    /// Both chromosomes must have the same shape.
    pub fn gene_distance(&self, other: &Chromosome) -> usize {
        self.assignments
            .iter()
            .zip(&other.assignments)
            .map(|(a, b)| a.iter().zip(b).filter(|(x, y)| x != y).count())
            .sum()
    }
}

impl Individual for Chromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.makespan
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.makespan = fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::reference_instance;
    use crate::random::create_rng;

    #[test]
    fn test_random_matches_instance_shape() {
        let inst = reference_instance();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let ch = Chromosome::random(&inst, &mut rng);
            assert!(check_assignment(&inst, &ch.assignments).is_ok());
            assert!(ch.makespan.is_infinite());
        }
    }

    #[test]
    fn test_random_covers_all_machines() {
        let inst = reference_instance();
        let mut rng = create_rng(7);
        let mut seen = [false; 4];
        for _ in 0..50 {
            let ch = Chromosome::random(&inst, &mut rng);
            for &m in ch.assignments.iter().flatten() {
                seen[m] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some machine never drawn: {seen:?}");
    }

    #[test]
    fn test_from_assignments_rejects_bad_shape() {
        let inst = reference_instance();
        let err = Chromosome::from_assignments(&inst, vec![vec![0]]);
        assert!(matches!(err, Err(ScheduleError::JobCountMismatch { .. })));
    }

    #[test]
    fn test_gene_distance() {
        let a = Chromosome {
            assignments: vec![vec![0, 1], vec![2]],
            makespan: 0.0,
        };
        let mut b = a.clone();
        assert_eq!(a.gene_distance(&b), 0);
        b.assignments[0][1] = 3;
        assert_eq!(a.gene_distance(&b), 1);
        assert_eq!(b.machine(0, 1), 3);
    }
}
