//! Problem instance model.
//!
//! A [`ProblemInstance`] is built once, validated, and then shared
//! read-only by the evaluator and every GA operator.

use crate::error::InstanceError;
use std::collections::{HashMap, HashSet};

/// An operation type with one processing time per machine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operation {
    /// Operation identifier (e.g. `"O1"`).
    pub id: String,
    /// Processing time on each machine. Length equals the machine count.
    pub processing_times: Vec<f64>,
}

/// A job: an ordered sequence of operations.
///
/// Operation `k` cannot start before operation `k - 1` of the same job ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Job {
    /// Job identifier (e.g. `"j1"`).
    pub id: String,
    /// Indices into [`ProblemInstance::operations`], in execution order.
    pub operations: Vec<usize>,
}

impl Job {
    /// Number of operations in this job.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the job has no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A validated job-shop instance.
///
/// # Examples
///
/// ```
/// use u_jobshop::instance::ProblemInstance;
///
/// let instance = ProblemInstance::builder()
///     .operation("O1", [2.0, 5.0])
///     .operation("O2", [3.0, 1.0])
///     .job("j1", ["O1", "O2"])
///     .build()
///     .unwrap();
///
/// assert_eq!(instance.machine_count(), 2);
/// assert_eq!(instance.processing_time(1, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProblemInstance {
    operations: Vec<Operation>,
    jobs: Vec<Job>,
    machine_count: usize,
}

impl ProblemInstance {
    /// Starts building an instance.
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::default()
    }

    /// Number of machines.
    #[inline]
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Number of jobs.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Total number of operations across all jobs.
    pub fn operation_count(&self) -> usize {
        self.jobs.iter().map(Job::len).sum()
    }

    /// Operation types, in definition order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Jobs, in definition order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Processing time of operation type `operation` on `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn processing_time(&self, operation: usize, machine: usize) -> f64 {
        self.operations[operation].processing_times[machine]
    }
}

/// Incremental builder for [`ProblemInstance`].
///
/// Operations and jobs are referenced by their string ids; ids are resolved
/// and every structural rule is checked in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    operations: Vec<(String, Vec<f64>)>,
    jobs: Vec<(String, Vec<String>)>,
}

impl InstanceBuilder {
    /// Adds an operation type with its per-machine processing times.
    pub fn operation(
        mut self,
        id: impl Into<String>,
        times: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.operations.push((id.into(), times.into_iter().collect()));
        self
    }

    /// Adds a job as an ordered list of operation ids.
    pub fn job<S: Into<String>>(
        mut self,
        id: impl Into<String>,
        operations: impl IntoIterator<Item = S>,
    ) -> Self {
        self.jobs
            .push((id.into(), operations.into_iter().map(Into::into).collect()));
        self
    }

    /// Validates and builds the instance.
    ///
    /// Checks, in order:
    /// 1. At least one operation type, and all time vectors share one length ≥ 1
    /// 2. Every processing time is finite and strictly positive
    /// 3. No duplicate operation or job ids
    /// 4. At least one job
    /// 5. Every operation referenced by a job exists
    pub fn build(self) -> Result<ProblemInstance, InstanceError> {
        let machine_count = match self.operations.first() {
            Some((_, times)) if !times.is_empty() => times.len(),
            _ => return Err(InstanceError::NoMachines),
        };

        let mut op_index: HashMap<&str, usize> = HashMap::with_capacity(self.operations.len());
        for (idx, (id, times)) in self.operations.iter().enumerate() {
            if op_index.insert(id.as_str(), idx).is_some() {
                return Err(InstanceError::DuplicateOperation(id.clone()));
            }
            if times.len() != machine_count {
                return Err(InstanceError::MachineCountMismatch {
                    operation: id.clone(),
                    expected: machine_count,
                    actual: times.len(),
                });
            }
            if let Some((machine, &value)) = times
                .iter()
                .enumerate()
                .find(|(_, t)| !(t.is_finite() && **t > 0.0))
            {
                return Err(InstanceError::NonPositiveTime {
                    operation: id.clone(),
                    machine,
                    value,
                });
            }
        }

        if self.jobs.is_empty() {
            return Err(InstanceError::NoJobs);
        }

        let mut job_ids = HashSet::with_capacity(self.jobs.len());
        let mut jobs = Vec::with_capacity(self.jobs.len());
        for (id, op_ids) in &self.jobs {
            if !job_ids.insert(id.as_str()) {
                return Err(InstanceError::DuplicateJob(id.clone()));
            }
            let operations = op_ids
                .iter()
                .map(|op| {
                    op_index
                        .get(op.as_str())
                        .copied()
                        .ok_or_else(|| InstanceError::UnknownOperation {
                            job: id.clone(),
                            operation: op.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            jobs.push(Job {
                id: id.clone(),
                operations,
            });
        }

        let operations = self
            .operations
            .into_iter()
            .map(|(id, processing_times)| Operation {
                id,
                processing_times,
            })
            .collect();

        Ok(ProblemInstance {
            operations,
            jobs,
            machine_count,
        })
    }
}

/// The 4-machine, 5-operation, 6-job workshop used throughout the tests
/// and benchmarks.
pub fn reference_instance() -> ProblemInstance {
    ProblemInstance::builder()
        .operation("O1", [3.5, 6.7, 2.5, 8.2])
        .operation("O2", [5.5, 4.2, 7.6, 9.0])
        .operation("O3", [6.1, 7.3, 5.5, 6.7])
        .operation("O4", [4.8, 5.3, 3.8, 4.7])
        .operation("O5", [3.8, 3.4, 4.2, 3.6])
        .job("j1", ["O2", "O4", "O5"])
        .job("j2", ["O1", "O3", "O5"])
        .job("j3", ["O1", "O2", "O3", "O4", "O5"])
        .job("j4", ["O4", "O5", "O1", "O3"])
        .job("j5", ["O2", "O4", "O1"])
        .job("j6", ["O1", "O2", "O4", "O5"])
        .build()
        .expect("reference instance is well-formed")
}
