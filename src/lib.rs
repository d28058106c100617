//! Genetic-algorithm machine assignment for job shops.
//!
//! Searches for a low-makespan assignment of job operations to machines.
//! Each operation has a processing time on every machine; operations of a
//! job run in a fixed order; a machine runs one operation at a time.
//!
//! - **`instance`**: Validated problem definition (operations, jobs, machines)
//! - **`schedule`**: Forward simulation from an assignment to a timing trace
//!   and makespan
//! - **`ga`**: Generic generational GA: pairwise tournament, rate-driven
//!   crossover and mutation, elitist truncation
//! - **`jobshop`**: The job-shop chromosome, its operators, and the
//!   [`jobshop::optimize`] entry point
//! - **`report`**: Tables and summary statistics for external renderers
//!
//! # Example
//!
//! ```
//! use u_jobshop::instance::reference_instance;
//! use u_jobshop::jobshop::run;
//! use u_jobshop::report::ReportTable;
//!
//! let instance = reference_instance();
//! let result = run(&instance, 20, 15, 0.15, 0.8, Some(123)).unwrap();
//!
//! assert!(result.best_makespan > 0.0);
//! let table = ReportTable::from_trace(&instance, &result.best_trace);
//! assert_eq!(table.rows.len(), instance.operation_count());
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"

pub mod error;
pub mod ga;
pub mod instance;
pub mod jobshop;
pub mod random;
pub mod report;
pub mod schedule;

pub use error::{ConfigError, InstanceError, ScheduleError};
