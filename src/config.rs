//! Generator configuration.
//!
//! Every knob of the generator lives here with the defaults of the original
//! dataset. A partial JSON file can override individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

pub const DEFAULT_OUTPUT: &str = "attendance_raw_dataset.csv";

/// Fraction of rows hit by each defect-injection step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefectRates {
    /// Rows whose department gets two trailing spaces.
    pub whitespace: f64,
    /// Rows whose status is lower-cased.
    pub lowercase: f64,
    /// Rows whose status is dropped.
    pub missing_status: f64,
    /// Rows appended again at the end of the table.
    pub duplicate: f64,
}

impl DefectRates {
    pub fn none() -> Self {
        Self {
            whitespace: 0.0,
            lowercase: 0.0,
            missing_status: 0.0,
            duplicate: 0.0,
        }
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("whitespace", self.whitespace),
            ("lowercase", self.lowercase),
            ("missing_status", self.missing_status),
            ("duplicate", self.duplicate),
        ]
    }
}

impl Default for DefectRates {
    fn default() -> Self {
        Self {
            whitespace: 0.05,
            lowercase: 0.05,
            missing_status: 0.03,
            duplicate: 0.03,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub num_records: usize,
    pub num_employees: usize,
    pub departments: Vec<String>,
    pub shift_types: Vec<String>,
    pub locations: Vec<String>,
    pub attendance_statuses: Vec<String>,
    pub start_date: NaiveDate,
    pub date_span_days: u32,
    pub defects: DefectRates,
    /// Fixed seed for reproducible output; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub output_path: PathBuf,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_records: 2500,
            num_employees: 60,
            departments: strings(&["HR", "IT", "Finance", "Operations", "Sales"]),
            shift_types: strings(&["Morning", "Evening"]),
            locations: strings(&["Office", "Remote"]),
            attendance_statuses: strings(&["Present", "Absent", "Late", "Work From Home"]),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            date_span_days: 90,
            defects: DefectRates::default(),
            seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Rejects values the generator cannot honour. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        let domains = [
            ("departments", &self.departments),
            ("shift_types", &self.shift_types),
            ("locations", &self.locations),
            ("attendance_statuses", &self.attendance_statuses),
        ];
        for (name, values) in domains {
            if values.is_empty() {
                return Err(GeneratorError::InvalidConfig(format!(
                    "`{name}` must list at least one value"
                )));
            }
            // one record per line in the raw file
            if let Some(value) = values.iter().find(|v| v.contains(['\n', '\r'])) {
                return Err(GeneratorError::InvalidConfig(format!(
                    "`{name}` value {value:?} contains a line break"
                )));
            }
        }

        if self.num_records > 0 && self.num_employees == 0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "`num_employees` must be at least 1 to generate {} records",
                self.num_records
            )));
        }

        if self.num_records > 0 && self.date_span_days == 0 {
            return Err(GeneratorError::InvalidConfig(
                "`date_span_days` must be at least 1".to_string(),
            ));
        }

        if self.date_span_days > 0 {
            let last = Days::new(u64::from(self.date_span_days - 1));
            if self.start_date.checked_add_days(last).is_none() {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{} days from {} runs past the last representable date",
                    self.date_span_days, self.start_date
                )));
            }
        }

        for (name, rate) in self.defects.named() {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(GeneratorError::InvalidConfig(format!(
                    "defect rate `{name}` must lie within [0, 1], got {rate}"
                )));
            }
        }

        Ok(())
    }
}
