//! Forward simulation of a machine assignment.
//!
//! # Algorithm
//!
//! Each machine and each job keeps a "free at" clock, both starting at 0.
//! Jobs are visited in instance order and their operations in sequence
//! order. Operation `k` of job `j` on machine `m` starts at
//! `max(job_free[j], machine_free[m])`, runs for `p[op][m]`, and advances
//! both clocks to its end time. The makespan is the largest machine clock.
//!
//! Single pass, O(total operations), no backtracking. Contention between
//! jobs on a machine is resolved by visiting order, which makes the result
//! a pure function of `(instance, assignment)`.

use super::trace::{ScheduleTrace, TimingRecord};
use crate::error::ScheduleError;
use crate::instance::ProblemInstance;

/// Checks that an assignment matches the shape of `instance`.
///
/// One machine list per job, one machine per operation, every machine
/// index in `0..machine_count`.
pub fn check_assignment(
    instance: &ProblemInstance,
    assignments: &[Vec<usize>],
) -> Result<(), ScheduleError> {
    if assignments.len() != instance.job_count() {
        return Err(ScheduleError::JobCountMismatch {
            expected: instance.job_count(),
            actual: assignments.len(),
        });
    }
    let machine_count = instance.machine_count();
    for (job, (spec, machines)) in instance.jobs().iter().zip(assignments).enumerate() {
        if machines.len() != spec.len() {
            return Err(ScheduleError::LengthMismatch {
                job,
                expected: spec.len(),
                actual: machines.len(),
            });
        }
        if let Some((position, &machine)) =
            machines.iter().enumerate().find(|(_, &m)| m >= machine_count)
        {
            return Err(ScheduleError::MachineOutOfRange {
                job,
                position,
                machine,
                machine_count,
            });
        }
    }
    Ok(())
}

/// Evaluates an assignment, returning the full timing trace.
///
/// # Examples
///
/// ```
/// use u_jobshop::instance::ProblemInstance;
/// use u_jobshop::schedule::evaluate;
///
/// let instance = ProblemInstance::builder()
///     .operation("O1", [2.0, 5.0])
///     .operation("O2", [3.0, 1.0])
///     .job("j1", ["O1", "O2"])
///     .build()
///     .unwrap();
///
/// let trace = evaluate(&instance, &[vec![0, 1]]).unwrap();
/// assert_eq!(trace.makespan, 3.0);
/// assert_eq!((trace.records[1].start, trace.records[1].end), (2.0, 3.0));
/// ```
pub fn evaluate(
    instance: &ProblemInstance,
    assignments: &[Vec<usize>],
) -> Result<ScheduleTrace, ScheduleError> {
    check_assignment(instance, assignments)?;

    let mut records = Vec::with_capacity(instance.operation_count());
    let makespan = simulate(instance, assignments, |rec| records.push(rec));
    Ok(ScheduleTrace { records, makespan })
}

/// Computes only the makespan, without building a trace.
///
/// This is the fitness function used inside the GA loop, where every
/// chromosome is produced by operators that preserve its shape.
///
/// # Panics
/// Panics if the assignment does not match the instance. A malformed
/// chromosome at this point is a defect in an operator.
pub fn makespan(instance: &ProblemInstance, assignments: &[Vec<usize>]) -> f64 {
    if let Err(e) = check_assignment(instance, assignments) {
        panic!("malformed chromosome: {e}");
    }
    simulate(instance, assignments, |_| {})
}

/// Core simulation. Assumes the assignment has already been checked.
fn simulate<F: FnMut(TimingRecord)>(
    instance: &ProblemInstance,
    assignments: &[Vec<usize>],
    mut emit: F,
) -> f64 {
    let mut machine_free = vec![0.0_f64; instance.machine_count()];

    for (job_idx, (job, machines)) in instance.jobs().iter().zip(assignments).enumerate() {
        let mut job_free = 0.0_f64;
        for (position, (&operation, &machine)) in job.operations.iter().zip(machines).enumerate() {
            let start = job_free.max(machine_free[machine]);
            let end = start + instance.processing_time(operation, machine);
            emit(TimingRecord {
                job: job_idx,
                operation,
                position,
                machine,
                start,
                end,
            });
            job_free = end;
            machine_free[machine] = end;
        }
    }

    machine_free.into_iter().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::reference_instance;
    use proptest::prelude::*;

    fn two_machine_instance() -> ProblemInstance {
        ProblemInstance::builder()
            .operation("O1", [2.0, 5.0])
            .operation("O2", [3.0, 1.0])
            .job("j1", ["O1", "O2"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_job_trace() {
        let inst = two_machine_instance();
        let trace = evaluate(&inst, &[vec![0, 1]]).unwrap();

        assert_eq!(trace.makespan, 3.0);
        assert_eq!(
            trace.records,
            vec![
                TimingRecord {
                    job: 0,
                    operation: 0,
                    position: 0,
                    machine: 0,
                    start: 0.0,
                    end: 2.0
                },
                TimingRecord {
                    job: 0,
                    operation: 1,
                    position: 1,
                    machine: 1,
                    start: 2.0,
                    end: 3.0
                },
            ]
        );
    }

    #[test]
    fn test_machine_contention_follows_job_order() {
        let inst = ProblemInstance::builder()
            .operation("A", [4.0, 1.0])
            .job("j1", ["A"])
            .job("j2", ["A"])
            .build()
            .unwrap();

        // Both on machine 0: j2 waits for j1.
        let trace = evaluate(&inst, &[vec![0], vec![0]]).unwrap();
        assert_eq!(trace.records[1].start, 4.0);
        assert_eq!(trace.makespan, 8.0);

        // Different machines run concurrently.
        let trace = evaluate(&inst, &[vec![0], vec![1]]).unwrap();
        assert_eq!(trace.records[1].start, 0.0);
        assert_eq!(trace.makespan, 4.0);
    }

    #[test]
    fn test_machine_free_time_is_last_write() {
        // j1 ends late on machine 0; j2 then uses machine 0 after j1,
        // even though its own clock is earlier.
        let inst = ProblemInstance::builder()
            .operation("A", [1.0, 10.0])
            .operation("B", [2.0, 2.0])
            .job("j1", ["A", "B"])
            .job("j2", ["B"])
            .build()
            .unwrap();
        let trace = evaluate(&inst, &[vec![1, 0], vec![0]]).unwrap();
        // j1: A on m1 [0,10), B on m0 [10,12). j2: B on m0 [12,14).
        assert_eq!(trace.records[2].start, 12.0);
        assert_eq!(trace.makespan, 14.0);
    }

    #[test]
    fn test_empty_job_contributes_nothing() {
        let inst = ProblemInstance::builder()
            .operation("A", [1.5])
            .job("j1", Vec::<String>::new())
            .job("j2", ["A"])
            .build()
            .unwrap();
        let trace = evaluate(&inst, &[vec![], vec![0]]).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.makespan, 1.5);
    }

    #[test]
    fn test_deterministic() {
        let inst = reference_instance();
        let a: Vec<Vec<usize>> = inst.jobs().iter().map(|j| vec![2; j.len()]).collect();
        let t1 = evaluate(&inst, &a).unwrap();
        let t2 = evaluate(&inst, &a).unwrap();
        assert_eq!(t1, t2);
        assert_eq!(makespan(&inst, &a), t1.makespan);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let inst = two_machine_instance();
        assert_eq!(
            evaluate(&inst, &[vec![0]]),
            Err(ScheduleError::LengthMismatch {
                job: 0,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_rejects_job_count_mismatch() {
        let inst = two_machine_instance();
        assert_eq!(
            evaluate(&inst, &[vec![0, 1], vec![0]]),
            Err(ScheduleError::JobCountMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rejects_machine_out_of_range() {
        let inst = two_machine_instance();
        assert_eq!(
            evaluate(&inst, &[vec![0, 2]]),
            Err(ScheduleError::MachineOutOfRange {
                job: 0,
                position: 1,
                machine: 2,
                machine_count: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "malformed chromosome")]
    fn test_makespan_panics_on_malformed() {
        let inst = two_machine_instance();
        makespan(&inst, &[vec![0, 1, 1]]);
    }

    /// Splits a flat gene vector into per-job lists for the reference instance.
    fn split_by_job(inst: &ProblemInstance, genes: &[usize]) -> Vec<Vec<usize>> {
        let mut out = Vec::with_capacity(inst.job_count());
        let mut offset = 0;
        for job in inst.jobs() {
            out.push(genes[offset..offset + job.len()].to_vec());
            offset += job.len();
        }
        out
    }

    proptest! {
        #[test]
        fn prop_makespan_lower_bounds(genes in proptest::collection::vec(0usize..4, 22)) {
            let inst = reference_instance();
            let assign = split_by_job(&inst, &genes);
            let trace = evaluate(&inst, &assign).unwrap();

            for (job, machines) in inst.jobs().iter().zip(&assign) {
                let path: f64 = job
                    .operations
                    .iter()
                    .zip(machines)
                    .map(|(&op, &m)| inst.processing_time(op, m))
                    .sum();
                prop_assert!(trace.makespan + 1e-9 >= path);
            }
            for m in 0..inst.machine_count() {
                prop_assert!(trace.makespan + 1e-9 >= trace.machine_load(m));
            }
            let latest = trace.records.iter().map(|r| r.end).fold(0.0, f64::max);
            prop_assert_eq!(trace.makespan, latest);
        }

        #[test]
        fn prop_precedence_and_exclusivity(genes in proptest::collection::vec(0usize..4, 22)) {
            let inst = reference_instance();
            let assign = split_by_job(&inst, &genes);
            let trace = evaluate(&inst, &assign).unwrap();
            prop_assert_eq!(trace.len(), inst.operation_count());

            for j in 0..inst.job_count() {
                let recs = trace.job_records(j);
                for pair in recs.windows(2) {
                    prop_assert!(pair[0].end <= pair[1].start);
                }
            }
            for m in 0..inst.machine_count() {
                let recs = trace.by_machine(m);
                for (i, a) in recs.iter().enumerate() {
                    for b in &recs[i + 1..] {
                        prop_assert!(!a.overlaps(b), "overlap on machine {}: {:?} {:?}", m, a, b);
                    }
                }
            }
        }
    }
}
