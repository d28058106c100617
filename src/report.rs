//! Reporting data for optimization runs.
//!
//! Produces the values that external renderers (tables, convergence plots,
//! Gantt charts) consume. Nothing here draws or prints.
//!
//! | Output | Source |
//! |--------|--------|
//! | [`ReportTable`] | Best trace, one row per operation |
//! | [`HistorySummary`] | Mean / sample std-dev / min / max of a history |
//! | [`convergence_points`] | `(generation, best, worst)` per generation |

use std::fmt;

use crate::instance::ProblemInstance;
use crate::jobshop::OptimizationResult;
use crate::schedule::ScheduleTrace;

/// One operation of the final schedule, labelled for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportRow {
    /// Machine label, e.g. `"M2"`.
    pub machine: String,
    /// `"job/operation"` label, e.g. `"j3/O1"`.
    pub task: String,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

/// Rows of a schedule report, ordered by machine then start time.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Builds the report for `trace` using the ids from `instance`.
    pub fn from_trace(instance: &ProblemInstance, trace: &ScheduleTrace) -> Self {
        let mut records: Vec<_> = trace.records.iter().collect();
        records.sort_by(|a, b| {
            a.machine
                .cmp(&b.machine)
                .then_with(|| a.start.total_cmp(&b.start))
        });

        let rows = records
            .into_iter()
            .map(|r| ReportRow {
                machine: format!("M{}", r.machine),
                task: format!(
                    "{}/{}",
                    instance.jobs()[r.job].id,
                    instance.operations()[r.operation].id
                ),
                start: r.start,
                end: r.end,
                duration: r.duration(),
            })
            .collect();
        Self { rows }
    }
}

const HEADERS: [&str; 5] = ["Machine", "Job/Operation", "Start", "End", "Duration"];

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.machine.clone(),
                    r.task.clone(),
                    format!("{:.2}", r.start),
                    format!("{:.2}", r.end),
                    format!("{:.2}", r.duration),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let rule = widths
            .iter()
            .map(|&w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        writeln!(f, "+{rule}+")?;
        write_row(f, &HEADERS, &widths)?;
        writeln!(f, "+{rule}+")?;
        for row in &cells {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "+{rule}+")
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &w) in cells.iter().zip(widths) {
        write!(f, " {:<w$} |", cell.as_ref())?;
    }
    writeln!(f)
}

/// Descriptive statistics of a fitness history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySummary {
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); `None` for `n < 2`.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl HistorySummary {
    /// Summarizes `history`. Returns `None` if it is empty.
    pub fn from_history(history: &[f64]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }
        let n = history.len() as f64;
        let mean = history.iter().sum::<f64>() / n;
        let std_dev = (history.len() >= 2).then(|| {
            let ss: f64 = history.iter().map(|x| (x - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        });
        let min = history.iter().copied().fold(f64::INFINITY, f64::min);
        let max = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// `(generation, best, worst)` for each generation, 1-based.
pub fn convergence_points(result: &OptimizationResult) -> Vec<(usize, f64, f64)> {
    result
        .best_history
        .iter()
        .zip(&result.worst_history)
        .enumerate()
        .map(|(i, (&best, &worst))| (i + 1, best, worst))
        .collect()
}
