//! GA machine-assignment search for job shops.
//!
//! Plugs the job-shop encoding into the generic [`crate::ga`] engine.
//!
//! # Encoding
//!
//! A [`Chromosome`] holds, for each job, the machine chosen for each of its
//! operations. Operation order is fixed by the instance; only machine choice
//! is searched. Any combination of machine indices is a feasible schedule.
//!
//! # Operators
//!
//! - Crossover: single cut between whole jobs ([`operators::job_point_crossover`])
//! - Mutation: reassign one operation ([`operators::reassign_mutation`])
//!
//! # Entry Points
//!
//! - [`optimize`] / [`optimize_with_cancel`]: run with a [`GaConfig`](crate::ga::GaConfig)
//! - [`run`]: run with explicit parameters

mod chromosome;
pub mod operators;
mod problem;

pub use chromosome::Chromosome;
pub use problem::{optimize, optimize_with_cancel, run, JobShopProblem, OptimizationResult};
