use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, MarkAttendance};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance().await
    }

    pub async fn fetch_employee_attendance(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance_for_employee(employee_id).await
    }

    pub async fn mark_attendance(
        &self,
        payload: MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(&payload).await
    }
}
