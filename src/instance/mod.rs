//! Job-shop problem instances.
//!
//! An instance defines operation types (one processing time per machine)
//! and jobs (ordered operation sequences). It is validated once when built
//! and never mutated afterwards.
//!
//! # Key Types
//!
//! - [`ProblemInstance`]: Validated, immutable instance
//! - [`InstanceBuilder`]: Builds an instance from string ids
//! - `InstanceSpec` (feature `serde`): Serializable wire shape

#[cfg(feature = "serde")]
mod spec;
mod types;

#[cfg(feature = "serde")]
pub use spec::{InstanceSpec, JobSpec, OperationSpec};
pub use types::{reference_instance, InstanceBuilder, Job, Operation, ProblemInstance};
