use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::{AttendanceRecord, Dataset};

const DELIMITER: char = ',';

/// Quotes a cell only when it would otherwise break the row.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row<'a, W: Write>(writer: &mut W, fields: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let line = fields
        .into_iter()
        .map(escape)
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{line}")?;
    Ok(())
}

/// Header plus one line per record; no index column.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: &mut W) -> Result<()> {
    write_row(writer, AttendanceRecord::COLUMNS)?;
    for record in dataset {
        write_row(writer, record.fields())?;
    }
    Ok(())
}

pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_dataset(dataset, &mut writer)?;
    writer.flush()?;

    debug!(path = %path.display(), rows = dataset.len(), "wrote attendance csv");
    Ok(())
}

#[cfg(feature = "polars")]
fn column<'a>(dataset: &'a Dataset, field: fn(&AttendanceRecord) -> &str) -> Vec<&'a str> {
    dataset.iter().map(field).collect()
}

#[cfg(feature = "polars")]
impl Dataset {
    /// Column-oriented copy of the table; missing statuses become nulls.
    pub fn to_dataframe(&self) -> Result<polars::prelude::DataFrame> {
        use polars::prelude::*;

        let statuses: Vec<Option<&str>> = self
            .iter()
            .map(|r| r.attendance_status.as_deref())
            .collect();

        let df = df!(
            "Employee_ID" => column(self, |r| r.employee_id.as_str()),
            "Employee_Name" => column(self, |r| r.employee_name.as_str()),
            "Department" => column(self, |r| r.department.as_str()),
            "Attendance_Date" => column(self, |r| r.attendance_date.as_str()),
            "Check_In_Time" => column(self, |r| r.check_in_time.as_str()),
            "Check_Out_Time" => column(self, |r| r.check_out_time.as_str()),
            "Attendance_Status" => statuses,
            "Shift_Type" => column(self, |r| r.shift_type.as_str()),
            "Location" => column(self, |r| r.location.as_str())
        )?;
        Ok(df)
    }
}
