use crate::{
    api::{CreateEmployee, Employee},
    utils::form::{required, FormError},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateEmployee, FormError> {
        Ok(CreateEmployee {
            employee_id: required("Employee ID", &self.employee_id)?,
            full_name: required("Full Name", &self.full_name)?,
            email: required("Email Address", &self.email)?,
            department: required("Department", &self.department)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePageState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub form_open: bool,
    pub submitting: bool,
    /// Employee awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl EmployeePageState {
    pub fn mounting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn pending_delete_name(&self) -> Option<String> {
        let employee_id = self.pending_delete.as_ref()?;
        Some(
            self.employees
                .iter()
                .find(|employee| &employee.employee_id == employee_id)
                .map(|employee| format!("{} ({})", employee.full_name, employee.employee_id))
                .unwrap_or_else(|| employee_id.clone()),
        )
    }
}
