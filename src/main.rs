use std::path::{Path, PathBuf};

use anyhow::Context;
use attendance_gen::analysis::profile;
use attendance_gen::{DefectRates, GeneratorConfig, generate_attendance_csv};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "attendance-gen")]
#[command(about = "Generates a raw employee attendance CSV with injected data-quality defects")]
#[command(version)]
struct Cli {
    /// JSON file with generator settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows to synthesize before duplication
    #[arg(long)]
    records: Option<usize>,

    /// Size of the employee catalog
    #[arg(long)]
    employees: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Write a clean table (all defect rates set to zero)
    #[arg(long, default_value = "false")]
    no_defects: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(records) = self.records {
            config.num_records = records;
        }
        if let Some(employees) = self.employees {
            config.num_employees = employees;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if self.no_defects {
            config.defects = DefectRates::none();
        }
        Ok(config)
    }
}

fn summary_lines(path: &Path, total: usize) -> [String; 3] {
    [
        "Dataset generated successfully!".to_string(),
        format!("File saved as {}", path.display()),
        format!("Total records: {total}"),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .init();

    let config = cli.into_config()?;
    let outcome = generate_attendance_csv(&config)
        .with_context(|| format!("generating {}", config.output_path.display()))?;

    let summary = profile(&outcome.dataset);
    info!(seed = outcome.seed, ?summary, "dataset profile");

    for line in summary_lines(&config.output_path, outcome.dataset.len()) {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(Path::new("attendance_raw_dataset.csv"), 2575);
        assert_eq!(
            lines,
            [
                "Dataset generated successfully!",
                "File saved as attendance_raw_dataset.csv",
                "Total records: 2575",
            ]
        );
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "attendance-gen",
            "--records",
            "10",
            "--employees",
            "2",
            "--seed",
            "4",
            "--no-defects",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.num_records, 10);
        assert_eq!(config.num_employees, 2);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.defects, DefectRates::none());
        assert_eq!(config.output_path, PathBuf::from("attendance_raw_dataset.csv"));
    }
}
