use super::{
    repository::AttendanceRepository,
    utils::{AttendancePageState, MarkAttendanceFormState},
};
use crate::{
    api::{ApiClient, ApiError},
    state::alert::AlertController,
    utils::time::today_in_app_tz,
};
use futures::future::join;
use leptos::*;
use std::rc::Rc;

pub const MSG_FETCH_FAILED: &str = "Failed to fetch data";
pub const MSG_EMPLOYEE_FETCH_FAILED: &str = "Failed to fetch employee attendance";
pub const MSG_MARKED: &str = "Attendance marked successfully";
pub const MSG_MARK_FAILED: &str = "Failed to mark attendance";

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub repository: StoredValue<AttendanceRepository>,
    pub state: RwSignal<AttendancePageState>,
    pub form: RwSignal<MarkAttendanceFormState>,
    pub alerts: AlertController,
}

impl AttendanceViewModel {
    pub fn new(repository: AttendanceRepository) -> Self {
        Self::with_state(repository, AttendancePageState::mounting())
    }

    pub fn with_state(repository: AttendanceRepository, state: AttendancePageState) -> Self {
        Self {
            repository: store_value(repository),
            state: create_rw_signal(state),
            form: create_rw_signal(MarkAttendanceFormState::new(today_in_app_tz())),
            alerts: AlertController::new(),
        }
    }

    fn repo(&self) -> AttendanceRepository {
        self.repository.get_value()
    }

    pub fn load(&self) {
        let (repo, state, alerts) = (self.repo(), self.state, self.alerts);
        spawn_local(async move {
            load_all(&repo, state, alerts).await;
        });
    }

    pub fn on_toggle_form(&self) -> impl Fn(()) {
        let state = self.state;
        move |_| state.update(|s| s.form_open = !s.form_open)
    }

    pub fn on_submit(&self) -> impl Fn(()) {
        let vm = *self;
        move |_| {
            if vm.state.with_untracked(|s| s.submitting) {
                return;
            }
            let repo = vm.repo();
            spawn_local(async move {
                submit_attendance(&repo, vm.state, vm.form, vm.alerts).await;
            });
        }
    }

    pub fn on_view_employee(&self) -> impl Fn(String) {
        let vm = *self;
        move |employee_id| {
            let repo = vm.repo();
            spawn_local(async move {
                view_employee(&repo, vm.state, vm.alerts, employee_id).await;
            });
        }
    }

    pub fn on_view_all(&self) -> impl Fn(()) {
        let vm = *self;
        move |_| {
            let repo = vm.repo();
            spawn_local(async move {
                view_all(&repo, vm.state, vm.alerts).await;
            });
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = AttendanceViewModel::new(AttendanceRepository::new_with_client(Rc::new(api)));
            provide_context(vm);
            vm
        }
    }
}

/// Fetches employees and the combined attendance list together; either
/// failing reports a single error.
pub async fn load_all(
    repository: &AttendanceRepository,
    state: RwSignal<AttendancePageState>,
    alerts: AlertController,
) {
    state.update(|s| s.loading = true);
    let (employees, records) =
        join(repository.fetch_employees(), repository.fetch_attendance()).await;
    match (employees, records) {
        (Ok(employees), Ok(records)) => {
            log::debug!(
                "Loaded {} employees and {} attendance records",
                employees.len(),
                records.len()
            );
            state.update(|s| {
                s.employees = employees;
                s.records = records;
            });
        }
        (employees, records) => {
            if let Some(err) = employees.err().or(records.err()) {
                log::warn!("Failed to fetch attendance data: {}", err);
            }
            alerts.error(MSG_FETCH_FAILED);
        }
    }
    state.update(|s| s.loading = false);
}

pub async fn view_employee(
    repository: &AttendanceRepository,
    state: RwSignal<AttendancePageState>,
    alerts: AlertController,
    employee_id: String,
) {
    match repository.fetch_employee_attendance(&employee_id).await {
        Ok(records) => state.update(|s| {
            s.records = records;
            s.selected_employee = Some(employee_id);
        }),
        Err(err) => {
            log::warn!("Failed to fetch attendance for {}: {}", employee_id, err);
            alerts.error(MSG_EMPLOYEE_FETCH_FAILED);
        }
    }
}

pub async fn view_all(
    repository: &AttendanceRepository,
    state: RwSignal<AttendancePageState>,
    alerts: AlertController,
) {
    state.update(|s| s.selected_employee = None);
    load_all(repository, state, alerts).await;
}

/// After a successful mark the page returns to the combined view.
pub async fn submit_attendance(
    repository: &AttendanceRepository,
    state: RwSignal<AttendancePageState>,
    form: RwSignal<MarkAttendanceFormState>,
    alerts: AlertController,
) {
    let payload = match form.with_untracked(|f| f.to_request()).map_err(ApiError::from) {
        Ok(payload) => payload,
        Err(err) => {
            alerts.error(err.message_or(MSG_MARK_FAILED));
            return;
        }
    };

    state.update(|s| s.submitting = true);
    let result = repository.mark_attendance(payload).await;
    state.update(|s| s.submitting = false);

    match result {
        Ok(record) => {
            log::info!("Marked {} {} for {}", record.status, record.date, record.employee_id);
            alerts.success(MSG_MARKED);
            form.update(|f| f.reset(today_in_app_tz()));
            state.update(|s| {
                s.form_open = false;
                s.selected_employee = None;
            });
            load_all(repository, state, alerts).await;
        }
        Err(err) => {
            log::warn!("Failed to mark attendance: {}", err);
            alerts.error(err.message_or(MSG_MARK_FAILED));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{test_support::mock::*, AttendanceStatus};
    use crate::state::alert::AlertKind;
    use crate::test_support::helpers::{employee_json, jane_doe, record, record_json};
    use crate::test_support::ssr::runtime_guard;
    use serde_json::json;

    fn repository_for(server: &MockServer) -> AttendanceRepository {
        AttendanceRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.api_base(),
        )))
    }

    fn alert_text(alerts: &AlertController) -> Option<(AlertKind, String)> {
        alerts.current().map(|alert| (alert.kind, alert.message))
    }

    fn mock_combined(server: &MockServer, records: serde_json::Value) {
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.status(200).json_body(json!([employee_json(&jane_doe())]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/");
            then.status(200).json_body(records);
        });
    }

    #[tokio::test]
    async fn mount_fetches_employees_and_attendance() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        mock_combined(&server, json!([]));
        let vm = AttendanceViewModel::new(repository_for(&server));

        load_all(&vm.repo(), vm.state, vm.alerts).await;

        assert_eq!(server.hits(&GET, "/api/employees/"), 1);
        assert_eq!(server.hits(&GET, "/api/attendance/"), 1);
        let state = vm.state.get_untracked();
        assert!(!state.loading);
        assert_eq!(state.employees, vec![jane_doe()]);
        assert!(state.records.is_empty());
        assert!(state.is_selected(None));
        assert!(vm.alerts.current().is_none());
    }

    #[tokio::test]
    async fn either_failure_reports_one_combined_error() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.status(200).json_body(json!([employee_json(&jane_doe())]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/");
            then.status(500).no_body();
        });
        let vm = AttendanceViewModel::new(repository_for(&server));

        load_all(&vm.repo(), vm.state, vm.alerts).await;

        let state = vm.state.get_untracked();
        assert!(!state.loading);
        assert!(state.employees.is_empty());
        assert_eq!(
            alert_text(&vm.alerts),
            Some((AlertKind::Error, MSG_FETCH_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn view_employee_then_view_all_restores_combined_set() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        let combined = vec![
            record(1, "EMP001", (2024, 1, 15), AttendanceStatus::Present),
            record(2, "EMP002", (2024, 1, 15), AttendanceStatus::Absent),
        ];
        mock_combined(
            &server,
            json!(combined.iter().map(record_json).collect::<Vec<_>>()),
        );
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/employee/EMP001");
            then.status(200).json_body(json!([record_json(&combined[0])]));
        });
        let vm = AttendanceViewModel::new(repository_for(&server));
        load_all(&vm.repo(), vm.state, vm.alerts).await;

        view_employee(&vm.repo(), vm.state, vm.alerts, "EMP001".into()).await;
        let state = vm.state.get_untracked();
        assert!(state.is_selected(Some("EMP001")));
        assert_eq!(state.records, vec![combined[0].clone()]);

        view_all(&vm.repo(), vm.state, vm.alerts).await;
        let state = vm.state.get_untracked();
        assert!(state.is_selected(None));
        assert_eq!(state.records, combined);
        assert_eq!(server.hits(&GET, "/api/attendance/"), 2);
    }

    #[tokio::test]
    async fn failed_employee_view_keeps_previous_selection() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        let existing = vec![record(1, "EMP001", (2024, 1, 15), AttendanceStatus::Present)];
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/employee/EMP002");
            then.status(500).no_body();
        });
        let vm = AttendanceViewModel::with_state(
            repository_for(&server),
            AttendancePageState {
                records: existing.clone(),
                ..AttendancePageState::default()
            },
        );

        view_employee(&vm.repo(), vm.state, vm.alerts, "EMP002".into()).await;

        let state = vm.state.get_untracked();
        assert!(state.is_selected(None));
        assert_eq!(state.records, existing);
        assert_eq!(
            alert_text(&vm.alerts),
            Some((AlertKind::Error, MSG_EMPLOYEE_FETCH_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn marking_posts_exact_body_and_resets_form() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        let marked = record(10, "EMP001", (2024, 1, 15), AttendanceStatus::Present);
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/");
            then.status(200).json_body(record_json(&marked));
        });
        mock_combined(&server, json!([record_json(&marked)]));
        let vm = AttendanceViewModel::with_state(
            repository_for(&server),
            AttendancePageState {
                employees: vec![jane_doe()],
                form_open: true,
                selected_employee: Some("EMP001".into()),
                ..AttendancePageState::default()
            },
        );
        vm.form.set(MarkAttendanceFormState {
            employee_id: "EMP001".into(),
            date: "2024-01-15".into(),
            status: AttendanceStatus::Present,
        });

        submit_attendance(&vm.repo(), vm.state, vm.form, vm.alerts).await;

        let posts: Vec<_> = server
            .requests()
            .into_iter()
            .filter(|request| request.method == POST)
            .collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].body,
            Some(json!({ "employee_id": "EMP001", "date": "2024-01-15", "status": "Present" }))
        );
        assert_eq!(
            alert_text(&vm.alerts),
            Some((AlertKind::Success, MSG_MARKED.to_string()))
        );
        assert_eq!(
            vm.form.get_untracked(),
            MarkAttendanceFormState::new(today_in_app_tz())
        );
        let state = vm.state.get_untracked();
        assert!(!state.form_open);
        assert!(state.is_selected(None));
        assert_eq!(state.records, vec![marked]);
    }

    #[tokio::test]
    async fn mark_failure_prefers_server_detail() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/");
            then.status(404)
                .json_body(json!({ "detail": "Employee with ID 'EMP404' not found" }));
        });
        let vm = AttendanceViewModel::with_state(repository_for(&server), AttendancePageState::default());
        vm.form.update(|f| f.employee_id = "EMP404".into());

        submit_attendance(&vm.repo(), vm.state, vm.form, vm.alerts).await;

        assert_eq!(
            alert_text(&vm.alerts),
            Some((
                AlertKind::Error,
                "Employee with ID 'EMP404' not found".to_string()
            ))
        );
        assert_eq!(vm.form.get_untracked().employee_id, "EMP404");
        assert_eq!(server.hits(&GET, "/api/attendance/"), 0);
    }

    #[tokio::test]
    async fn mark_failure_without_detail_uses_generic_message() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/");
            then.status(400).no_body();
        });
        let vm = AttendanceViewModel::with_state(repository_for(&server), AttendancePageState::default());
        vm.form.update(|f| f.employee_id = "EMP001".into());

        submit_attendance(&vm.repo(), vm.state, vm.form, vm.alerts).await;

        assert_eq!(
            alert_text(&vm.alerts),
            Some((AlertKind::Error, MSG_MARK_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn missing_employee_is_rejected_before_posting() {
        let _rt = runtime_guard();
        let server = MockServer::start();
        let vm = AttendanceViewModel::with_state(repository_for(&server), AttendancePageState::default());

        submit_attendance(&vm.repo(), vm.state, vm.form, vm.alerts).await;

        assert!(server.requests().is_empty());
        assert_eq!(
            alert_text(&vm.alerts),
            Some((AlertKind::Error, "Employee is required".to_string()))
        );
    }
}
