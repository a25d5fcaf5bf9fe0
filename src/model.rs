use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmployeeIdentity {
    pub employee_id: String,
    pub employee_name: String,
}

/// One row of the raw attendance table.
///
/// `attendance_status` is `None` once the missing-value defect has hit the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub attendance_date: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub attendance_status: Option<String>,
    pub shift_type: String,
    pub location: String,
}

impl AttendanceRecord {
    pub const COLUMNS: [&'static str; 9] = [
        "Employee_ID",
        "Employee_Name",
        "Department",
        "Attendance_Date",
        "Check_In_Time",
        "Check_Out_Time",
        "Attendance_Status",
        "Shift_Type",
        "Location",
    ];

    /// Cell values in `COLUMNS` order; a missing status becomes an empty cell.
    pub fn fields(&self) -> [&str; 9] {
        [
            self.employee_id.as_str(),
            self.employee_name.as_str(),
            self.department.as_str(),
            self.attendance_date.as_str(),
            self.check_in_time.as_str(),
            self.check_out_time.as_str(),
            self.attendance_status.as_deref().unwrap_or(""),
            self.shift_type.as_str(),
            self.location.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<AttendanceRecord>,
}

impl Dataset {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [AttendanceRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttendanceRecord> {
        self.records.iter()
    }

    pub(crate) fn push(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    pub fn into_records(self) -> Vec<AttendanceRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AttendanceRecord;
    type IntoIter = std::slice::Iter<'a, AttendanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "E1000".into(),
            employee_name: "Employee_0".into(),
            department: "HR  ".into(),
            attendance_date: "01/02/2024".into(),
            check_in_time: "9:5".into(),
            check_out_time: "17:30".into(),
            attendance_status: status.map(String::from),
            shift_type: "Morning".into(),
            location: "Office".into(),
        }
    }

    #[test]
    fn test_fields_follow_column_order() {
        let late = record(Some("Late"));
        let fields = late.fields();
        assert_eq!(fields.len(), AttendanceRecord::COLUMNS.len());
        assert_eq!(fields[0], "E1000");
        assert_eq!(fields[2], "HR  ");
        assert_eq!(fields[6], "Late");
        assert_eq!(fields[8], "Office");
    }

    #[test]
    fn test_missing_status_is_empty_cell() {
        assert_eq!(record(None).fields()[6], "");
    }
}
