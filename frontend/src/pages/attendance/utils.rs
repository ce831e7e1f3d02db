use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, MarkAttendance},
    utils::{
        form::{required, FormError},
        time::{parse_input_date, to_input_date},
    },
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceFormState {
    pub employee_id: String,
    /// `YYYY-MM-DD`, as held by the date input.
    pub date: String,
    pub status: AttendanceStatus,
}

impl MarkAttendanceFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: to_input_date(today),
            status: AttendanceStatus::Present,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn to_request(&self) -> Result<MarkAttendance, FormError> {
        let employee_id = required("Employee", &self.employee_id)?;
        let date = required("Date", &self.date)?;
        let date = parse_input_date(&date).ok_or(FormError::InvalidDate("Date"))?;
        Ok(MarkAttendance {
            employee_id,
            date,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendancePageState {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
    pub loading: bool,
    pub form_open: bool,
    pub submitting: bool,
    /// `None` means the combined view.
    pub selected_employee: Option<String>,
}

impl AttendancePageState {
    pub fn mounting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_selected(&self, employee_id: Option<&str>) -> bool {
        self.selected_employee.as_deref() == employee_id
    }
}

pub fn employee_display_name(employees: &[Employee], employee_id: &str) -> String {
    employees
        .iter()
        .find(|employee| employee.employee_id == employee_id)
        .map(|employee| employee.full_name.clone())
        .unwrap_or_else(|| employee_id.to_string())
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} - {}", employee.employee_id, employee.full_name)
}

pub fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "bg-green-100 text-green-800",
        AttendanceStatus::Absent => "bg-red-100 text-red-800",
    }
}

pub fn filter_button_class(active: bool) -> &'static str {
    if active {
        "bg-blue-600 text-white"
    } else {
        "bg-gray-200 text-gray-700 hover:bg-gray-300"
    }
}
