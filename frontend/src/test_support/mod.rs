#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    pub fn employee(id: i64, employee_id: &str, full_name: &str) -> Employee {
        Employee {
            id,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: "IT".into(),
        }
    }

    pub fn jane_doe() -> Employee {
        employee(1, "EMP001", "Jane Doe")
    }

    pub fn record(
        id: i64,
        employee_id: &str,
        date: (i32, u32, u32),
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
            status,
        }
    }

    pub fn employee_json(employee: &Employee) -> serde_json::Value {
        serde_json::to_value(employee).expect("employee json")
    }

    pub fn record_json(record: &AttendanceRecord) -> serde_json::Value {
        serde_json::to_value(record).expect("record json")
    }
}
