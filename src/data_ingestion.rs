//! Reads an exported attendance file back into memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::model::AttendanceRecord;

/// A row as found on disk. An empty status cell reads back as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        AttendanceRecord::COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.get("Attendance_Status").filter(|s| !s.is_empty())
    }

    /// True when this row matches `record` cell for cell.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.cells.iter().map(String::as_str).eq(record.fields())
    }
}

/// Splits one line on commas, honouring double-quoted cells.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            ('"', true) => quoted = false,
            ('"', false) if cell.is_empty() => quoted = true,
            (',', false) => cells.push(std::mem::take(&mut cell)),
            (c, _) => cell.push(c),
        }
    }

    if quoted {
        return Err(GeneratorError::MalformedCsv {
            line: line_no,
            reason: "unterminated quoted field".to_string(),
        });
    }
    cells.push(cell);
    Ok(cells)
}

pub fn open_file(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => parse_line(&line?, 1)?,
        None => {
            return Err(GeneratorError::MalformedCsv {
                line: 1,
                reason: "missing header".to_string(),
            });
        }
    };
    if header.iter().map(String::as_str).ne(AttendanceRecord::COLUMNS) {
        return Err(GeneratorError::MalformedCsv {
            line: 1,
            reason: format!("unexpected header: {}", header.join(",")),
        });
    }

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let cells = parse_line(&line?, line_no)?;
        if cells.len() != AttendanceRecord::COLUMNS.len() {
            return Err(GeneratorError::MalformedCsv {
                line: line_no,
                reason: format!("expected 9 fields, found {}", cells.len()),
            });
        }
        rows.push(RawRow { cells });
    }

    Ok(rows)
}
