use std::collections::HashSet;

use crate::model::Dataset;

/// Counts of the data-quality issues visible in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetProfile {
    pub rows: usize,
    pub padded_departments: usize,
    pub lowercased_statuses: usize,
    pub missing_statuses: usize,
    pub absent_rows: usize,
    /// Rows equal to some earlier row.
    pub exact_duplicates: usize,
}

pub fn profile(dataset: &Dataset) -> DatasetProfile {
    let mut seen = HashSet::with_capacity(dataset.len());
    let mut profile = DatasetProfile {
        rows: dataset.len(),
        ..Default::default()
    };

    for record in dataset {
        if record.department.ends_with("  ") {
            profile.padded_departments += 1;
        }
        match record.attendance_status.as_deref() {
            None => profile.missing_statuses += 1,
            Some(status) => {
                if status.chars().any(char::is_alphabetic) && status == status.to_lowercase() {
                    profile.lowercased_statuses += 1;
                }
                if status.eq_ignore_ascii_case("absent") {
                    profile.absent_rows += 1;
                }
            }
        }
        if !seen.insert(record) {
            profile.exact_duplicates += 1;
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceRecord;

    fn record(id: &str, department: &str, status: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id.into(),
            employee_name: "Employee_0".into(),
            department: department.into(),
            attendance_date: "2024-02-29".into(),
            check_in_time: String::new(),
            check_out_time: String::new(),
            attendance_status: status.map(String::from),
            shift_type: "Morning".into(),
            location: "Office".into(),
        }
    }

    #[test]
    fn test_profile_counts() {
        let dataset = Dataset::new(vec![
            record("E1000", "HR  ", Some("Absent")),
            record("E1001", "IT", Some("absent")),
            record("E1002", "Sales", None),
            record("E1000", "HR  ", Some("Absent")),
        ]);

        let profile = profile(&dataset);
        assert_eq!(
            profile,
            DatasetProfile {
                rows: 4,
                padded_departments: 2,
                lowercased_statuses: 1,
                missing_statuses: 1,
                absent_rows: 3,
                exact_duplicates: 1,
            }
        );
    }

    #[test]
    fn test_empty_profile() {
        assert_eq!(profile(&Dataset::default()), DatasetProfile::default());
    }
}
