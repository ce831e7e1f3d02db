use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, CreateEmployee, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees/").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_path_segment(employee_id)))
            .await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees/").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    /// The server answers with a confirmation message that is not needed here.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_path_segment(employee_id)))
            .await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
