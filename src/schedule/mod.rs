//! Makespan evaluation.
//!
//! Turns a machine assignment into a [`ScheduleTrace`] (per-operation start
//! and end times) and a makespan. The evaluator is the only component that
//! interprets what a chromosome means; GA operators treat it as opaque.

mod evaluator;
mod trace;

pub use evaluator::{check_assignment, evaluate, makespan};
pub use trace::{ScheduleTrace, TimingRecord};
