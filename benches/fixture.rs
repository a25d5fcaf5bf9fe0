use std::path::Path;
use std::sync::OnceLock;

use attendance_gen::GeneratorConfig;

static DATA_FILE: OnceLock<String> = OnceLock::new();

pub const BENCH_RECORDS: usize = 250_000;

pub fn bench_config(path: &str) -> GeneratorConfig {
    GeneratorConfig {
        num_records: BENCH_RECORDS,
        seed: Some(42),
        output_path: path.into(),
        ..Default::default()
    }
}

pub fn init_fixture() -> &'static str {
    DATA_FILE.get_or_init(|| {
        let file_path = "bench_attendance.csv";

        if !Path::new(file_path).exists() {
            println!("Generating benchmark data...");
            attendance_gen::generate_attendance_csv(&bench_config(file_path))
                .expect("Failed to generate benchmark data");
        }

        file_path.to_string()
    })
}
