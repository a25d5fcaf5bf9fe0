//! Data-quality defects applied to a freshly synthesized table.
//!
//! Four passes run in a fixed order: whitespace padding on `department`,
//! lower-casing of `attendance_status`, dropping `attendance_status`, and
//! appending duplicates. Each pass draws its own row subset without
//! replacement; subsets of different passes may overlap.

use rand::rngs::StdRng;
use rand::seq::index;
use tracing::debug;

use crate::config::DefectRates;
use crate::model::Dataset;

const PADDING: &str = "  ";

/// Row indices touched by each pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectLog {
    pub padded_departments: Vec<usize>,
    pub lowercased_statuses: Vec<usize>,
    pub missing_statuses: Vec<usize>,
    /// Source rows of the copies appended to the end, in append order.
    pub duplicated_from: Vec<usize>,
}

/// Number of rows a pass selects: `fraction * rows` rounded half to even.
pub fn sample_size(fraction: f64, rows: usize) -> usize {
    ((fraction * rows as f64).round_ties_even() as usize).min(rows)
}

fn sample_rows(rng: &mut StdRng, fraction: f64, rows: usize) -> Vec<usize> {
    let amount = sample_size(fraction, rows);
    index::sample(rng, rows, amount).into_vec()
}

pub fn inject_defects(dataset: &mut Dataset, rates: &DefectRates, rng: &mut StdRng) -> DefectLog {
    let rows = dataset.len();
    let mut log = DefectLog::default();

    log.padded_departments = sample_rows(rng, rates.whitespace, rows);
    for &i in &log.padded_departments {
        dataset.records_mut()[i].department.push_str(PADDING);
    }

    log.lowercased_statuses = sample_rows(rng, rates.lowercase, rows);
    for &i in &log.lowercased_statuses {
        let record = &mut dataset.records_mut()[i];
        record.attendance_status = record.attendance_status.as_deref().map(str::to_lowercase);
    }

    log.missing_statuses = sample_rows(rng, rates.missing_status, rows);
    for &i in &log.missing_statuses {
        dataset.records_mut()[i].attendance_status = None;
    }

    log.duplicated_from = sample_rows(rng, rates.duplicate, rows);
    let copies: Vec<_> = log
        .duplicated_from
        .iter()
        .map(|&i| dataset.records()[i].clone())
        .collect();
    for copy in copies {
        dataset.push(copy);
    }

    debug!(
        padded = log.padded_departments.len(),
        lowercased = log.lowercased_statuses.len(),
        missing = log.missing_statuses.len(),
        duplicated = log.duplicated_from.len(),
        rows = dataset.len(),
        "injected defects"
    );

    log
}
