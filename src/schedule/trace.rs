//! Evaluation output: timing records and schedule traces.

/// Start and end time of one operation on its assigned machine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingRecord {
    /// Job index in the instance.
    pub job: usize,
    /// Operation-type index in the instance.
    pub operation: usize,
    /// Position of the operation within its job.
    pub position: usize,
    /// Machine the operation ran on.
    pub machine: usize,
    /// Start time.
    pub start: f64,
    /// End time.
    pub end: f64,
}

impl TimingRecord {
    /// Processing duration (`end - start`).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the half-open intervals `[start, end)` of two records overlap.
    #[inline]
    pub fn overlaps(&self, other: &TimingRecord) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The complete timing of one chromosome.
///
/// Records appear in evaluation order: jobs in instance order, operations
/// in sequence order within each job.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleTrace {
    /// One record per operation.
    pub records: Vec<TimingRecord>,
    /// Latest end time across all machines.
    pub makespan: f64,
}

impl ScheduleTrace {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records processed on `machine`, sorted by start time.
    pub fn by_machine(&self, machine: usize) -> Vec<&TimingRecord> {
        let mut recs: Vec<&TimingRecord> =
            self.records.iter().filter(|r| r.machine == machine).collect();
        recs.sort_by(|a, b| a.start.total_cmp(&b.start));
        recs
    }

    /// Records of `job`, in sequence order.
    pub fn job_records(&self, job: usize) -> Vec<&TimingRecord> {
        self.records.iter().filter(|r| r.job == job).collect()
    }

    /// Total processing time assigned to `machine`.
    pub fn machine_load(&self, machine: usize) -> f64 {
        self.records
            .iter()
            .filter(|r| r.machine == machine)
            .map(TimingRecord::duration)
            .sum()
    }

    /// Fraction of `[0, makespan]` that `machine` spends processing.
    ///
    /// Returns 0.0 for an empty schedule.
    pub fn machine_utilization(&self, machine: usize) -> f64 {
        if self.makespan <= 0.0 {
            return 0.0;
        }
        self.machine_load(machine) / self.makespan
    }
}
