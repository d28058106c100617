//! Serializable instance definition.
//!
//! [`InstanceSpec`] is the wire shape of a problem instance: operation
//! types with their time vectors and jobs as lists of operation ids.
//! It carries no guarantees until converted with
//! [`ProblemInstance::from_spec`].

use super::types::ProblemInstance;
use crate::error::InstanceError;
use serde::{Deserialize, Serialize};

/// An operation type as it appears in an instance file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    pub id: String,
    pub times: Vec<f64>,
}

/// A job as it appears in an instance file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub id: String,
    pub operations: Vec<String>,
}

/// Unvalidated instance definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceSpec {
    pub operations: Vec<OperationSpec>,
    pub jobs: Vec<JobSpec>,
}

impl ProblemInstance {
    /// Validates a deserialized definition.
    pub fn from_spec(spec: InstanceSpec) -> Result<Self, InstanceError> {
        let mut builder = ProblemInstance::builder();
        for op in spec.operations {
            builder = builder.operation(op.id, op.times);
        }
        for job in spec.jobs {
            builder = builder.job(job.id, job.operations);
        }
        builder.build()
    }

    /// Converts back to the wire shape.
    pub fn to_spec(&self) -> InstanceSpec {
        InstanceSpec {
            operations: self
                .operations()
                .iter()
                .map(|op| OperationSpec {
                    id: op.id.clone(),
                    times: op.processing_times.clone(),
                })
                .collect(),
            jobs: self
                .jobs()
                .iter()
                .map(|job| JobSpec {
                    id: job.id.clone(),
                    operations: job
                        .operations
                        .iter()
                        .map(|&op| self.operations()[op].id.clone())
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::reference_instance;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "operations": [
                {"id": "O1", "times": [2.0, 5.0]},
                {"id": "O2", "times": [3.0, 1.0]}
            ],
            "jobs": [
                {"id": "j1", "operations": ["O1", "O2"]}
            ]
        }"#;
        let spec: InstanceSpec = serde_json::from_str(json).unwrap();
        let inst = ProblemInstance::from_spec(spec).unwrap();
        assert_eq!(inst.machine_count(), 2);
        assert_eq!(inst.jobs()[0].operations, vec![0, 1]);
    }

    #[test]
    fn test_from_json_rejects_unknown_operation() {
        let json = r#"{
            "operations": [{"id": "O1", "times": [2.0]}],
            "jobs": [{"id": "j1", "operations": ["O9"]}]
        }"#;
        let spec: InstanceSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(
            ProblemInstance::from_spec(spec),
            Err(InstanceError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn test_spec_preserves_instance() {
        let inst = reference_instance();
        let back = ProblemInstance::from_spec(inst.to_spec()).unwrap();
        assert_eq!(back, inst);
    }
}
