//! Error types.
//!
//! - [`InstanceError`]: malformed problem definition, detected once at build time.
//! - [`ConfigError`]: invalid GA parameters, detected before the first generation.
//! - [`ScheduleError`]: a chromosome that does not fit the instance it is
//!   evaluated against.

use thiserror::Error;

/// A problem instance failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("instance defines no machines")]
    NoMachines,

    #[error("instance defines no jobs")]
    NoJobs,

    #[error("duplicate operation id: {0}")]
    DuplicateOperation(String),

    #[error("duplicate job id: {0}")]
    DuplicateJob(String),

    #[error("operation '{operation}' has {actual} processing times, expected {expected}")]
    MachineCountMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("operation '{operation}' has non-positive time {value} on machine {machine}")]
    NonPositiveTime {
        operation: String,
        machine: usize,
        value: f64,
    },

    #[error("job '{job}' references unknown operation '{operation}'")]
    UnknownOperation { job: String, operation: String },
}

/// GA parameters rejected before the run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("population_size must be even for pairwise tournament, got {0}")]
    OddPopulation(usize),

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,

    #[error("crossover needs at least {required} jobs, instance has {jobs}")]
    TooFewJobs { jobs: usize, required: usize },
}

/// A chromosome does not match the instance shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("chromosome has {actual} job lists, instance has {expected} jobs")]
    JobCountMismatch { expected: usize, actual: usize },

    #[error("job {job} has {actual} machine assignments, expected {expected}")]
    LengthMismatch {
        job: usize,
        expected: usize,
        actual: usize,
    },

    #[error("job {job} position {position} assigned to machine {machine}, only {machine_count} machines")]
    MachineOutOfRange {
        job: usize,
        position: usize,
        machine: usize,
        machine_count: usize,
    },
}
