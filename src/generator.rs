//! Master data and record synthesis.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngExt, SeedableRng};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::defects::{DefectLog, inject_defects};
use crate::error::Result;
use crate::model::{AttendanceRecord, Dataset, EmployeeIdentity};

/// The three renderings a date may take in the raw file.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m-%d-%Y"];

pub const CHECK_IN_HOURS: std::ops::RangeInclusive<u32> = 8..=11;
pub const CHECK_OUT_HOURS: std::ops::RangeInclusive<u32> = 16..=20;

const ABSENT: &str = "Absent";

/// Ids are `E1000`, `E1001`, ... paired with `Employee_0`, `Employee_1`, ...
pub fn build_employee_catalog(num_employees: usize) -> Vec<EmployeeIdentity> {
    (0..num_employees)
        .map(|i| EmployeeIdentity {
            employee_id: format!("E{}", 1000 + i),
            employee_name: format!("Employee_{i}"),
        })
        .collect()
}

/// `span_days` consecutive dates from `start`. The span is checked against
/// the calendar range in `GeneratorConfig::validate`.
pub fn build_date_pool(start: NaiveDate, span_days: u32) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take(span_days as usize)
        .collect()
}

/// Final table plus a log of what the defect pass did to it.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub dataset: Dataset,
    pub defects: DefectLog,
    pub seed: u64,
}

pub struct DatasetGenerator {
    config: GeneratorConfig,
    employees: Vec<EmployeeIdentity>,
    dates: Vec<NaiveDate>,
    rng: StdRng,
    seed: u64,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        // keep the seed around even when none was configured so a run can be replayed
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, "seeding attendance generator");

        let employees = build_employee_catalog(config.num_employees);
        let dates = build_date_pool(config.start_date, config.date_span_days);

        Ok(Self {
            config,
            employees,
            dates,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn employees(&self) -> &[EmployeeIdentity] {
        &self.employees
    }

    /// Draws `num_records` rows, every column sampled independently with replacement.
    pub fn synthesize_records(&mut self) -> Dataset {
        let mut dataset = Dataset::new(Vec::with_capacity(self.config.num_records));
        if self.employees.is_empty() || self.dates.is_empty() {
            return dataset;
        }

        for _ in 0..self.config.num_records {
            // only empty domains yield None, and validate() rules those out
            let Some(record) = self.next_record() else {
                break;
            };
            dataset.push(record);
        }

        debug!(records = dataset.len(), "synthesized raw records");
        dataset
    }

    /// Synthesis followed by the defect pass.
    pub fn generate(&mut self) -> GenerationOutcome {
        let mut dataset = self.synthesize_records();
        let defects = inject_defects(&mut dataset, &self.config.defects, &mut self.rng);

        GenerationOutcome {
            dataset,
            defects,
            seed: self.seed,
        }
    }

    fn next_record(&mut self) -> Option<AttendanceRecord> {
        let employee = self.employees.choose(&mut self.rng)?.clone();
        let department = self.config.departments.choose(&mut self.rng)?.clone();
        let shift_type = self.config.shift_types.choose(&mut self.rng)?.clone();
        let location = self.config.locations.choose(&mut self.rng)?.clone();
        let status = self.config.attendance_statuses.choose(&mut self.rng)?.clone();
        let date = *self.dates.choose(&mut self.rng)?;

        // mixed date formats are part of the raw data
        let format = *DATE_FORMATS.choose(&mut self.rng)?;
        let attendance_date = date.format(format).to_string();

        let (check_in_time, check_out_time) = if status == ABSENT {
            (String::new(), String::new())
        } else {
            (
                clock_time(&mut self.rng, CHECK_IN_HOURS),
                clock_time(&mut self.rng, CHECK_OUT_HOURS),
            )
        };

        Some(AttendanceRecord {
            employee_id: employee.employee_id,
            employee_name: employee.employee_name,
            department,
            attendance_date,
            check_in_time,
            check_out_time,
            attendance_status: Some(status),
            shift_type,
            location,
        })
    }
}

// `H:M` without zero padding, e.g. "9:5"
fn clock_time(rng: &mut StdRng, hours: std::ops::RangeInclusive<u32>) -> String {
    let hour = rng.random_range(hours);
    let minute = rng.random_range(0..=59u32);
    format!("{hour}:{minute}")
}
