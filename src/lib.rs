//! Synthesizes a raw employee attendance table with deliberate data-quality
//! defects, for exercising cleaning and validation pipelines.
//!
//! ```no_run
//! use attendance_gen::{GeneratorConfig, generate_attendance_csv};
//!
//! let config = GeneratorConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let outcome = generate_attendance_csv(&config)?;
//! println!("{} rows", outcome.dataset.len());
//! # Ok::<(), attendance_gen::GeneratorError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod data_ingestion;
pub mod defects;
pub mod error;
pub mod export;
pub mod generator;
pub mod model;

pub use config::{DefectRates, GeneratorConfig};
pub use error::{GeneratorError, Result};
pub use generator::{DatasetGenerator, GenerationOutcome};
pub use model::{AttendanceRecord, Dataset, EmployeeIdentity};

/// Generates the table and writes it to `config.output_path`.
pub fn generate_attendance_csv(config: &GeneratorConfig) -> Result<GenerationOutcome> {
    let mut generator = DatasetGenerator::new(config.clone())?;
    let outcome = generator.generate();
    export::write_csv(&outcome.dataset, &config.output_path)?;
    Ok(outcome)
}
