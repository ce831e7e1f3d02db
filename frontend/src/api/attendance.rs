use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, AttendanceRecord, MarkAttendance},
};

impl ApiClient {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance/").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn list_attendance_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!(
                "/attendance/employee/{}",
                encode_path_segment(employee_id)
            ))
            .await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance/").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }
}
