use super::{
    repository::EmployeesRepository,
    utils::{EmployeeFormState, EmployeePageState},
};
use crate::{api::{ApiClient, ApiError}, state::alert::AlertController};
use leptos::*;
use std::rc::Rc;

pub const MSG_FETCH_FAILED: &str = "Failed to fetch employees";
pub const MSG_CREATED: &str = "Employee added successfully";
pub const MSG_CREATE_FAILED: &str = "Failed to add employee";
pub const MSG_DELETED: &str = "Employee deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Failed to delete employee";

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub repository: StoredValue<EmployeesRepository>,
    pub state: RwSignal<EmployeePageState>,
    pub form: RwSignal<EmployeeFormState>,
    pub alerts: AlertController,
}

impl EmployeesViewModel {
    pub fn new(repository: EmployeesRepository) -> Self {
        Self::with_state(repository, EmployeePageState::mounting())
    }

    pub fn with_state(repository: EmployeesRepository, state: EmployeePageState) -> Self {
        Self {
            repository: store_value(repository),
            state: create_rw_signal(state),
            form: create_rw_signal(EmployeeFormState::default()),
            alerts: AlertController::new(),
        }
    }

    fn repo(&self) -> EmployeesRepository {
        self.repository.get_value()
    }

    pub fn load(&self) {
        let (repo, state, alerts) = (self.repo(), self.state, self.alerts);
        spawn_local(async move {
            load_employees(&repo, state, alerts).await;
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
                submit_employee(&repo, vm.state, vm.form, vm.alerts).await;
            });
        }
    }

    pub fn on_request_delete(&self) -> impl Fn(String) {
        let state = self.state;
        move |employee_id| request_delete(state, employee_id)
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) {
        let state = self.state;
        move |_| cancel_delete(state)
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) {
        let vm = *self;
        move |_| {
            let repo = vm.repo();
            spawn_local(async move {
                confirm_delete(&repo, vm.state, vm.alerts).await;
            });
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = EmployeesViewModel::new(EmployeesRepository::new_with_client(Rc::new(api)));
            provide_context(vm);
            vm
        }
    }
}

pub async fn load_employees(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeePageState>,
    alerts: AlertController,
) {
    state.update(|s| s.loading = true);
    match repository.fetch_employees().await {
        Ok(employees) => {
            log::debug!("Loaded {} employees", employees.len());
            state.update(|s| s.employees = employees);
        }
        Err(err) => {
            log::warn!("Failed to fetch employees: {}", err);
            alerts.error(MSG_FETCH_FAILED);
        }
    }
    state.update(|s| s.loading = false);
}

pub async fn submit_employee(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeePageState>,
    form: RwSignal<EmployeeFormState>,
    alerts: AlertController,
) {
    let payload = match form.with_untracked(|f| f.to_request()).map_err(ApiError::from) {
        Ok(payload) => payload,
        Err(err) => {
            alerts.error(err.message_or(MSG_CREATE_FAILED));
            return;
        }
    };

    state.update(|s| s.submitting = true);
    let result = repository.create_employee(payload).await;
    state.update(|s| s.submitting = false);

    match result {
        Ok(employee) => {
            log::info!("Created employee {}", employee.employee_id);
            alerts.success(MSG_CREATED);
            form.update(|f| f.reset());
            state.update(|s| s.form_open = false);
            load_employees(repository, state, alerts).await;
        }
        Err(err) => {
            log::warn!("Failed to create employee: {}", err);
            alerts.error(err.message_or(MSG_CREATE_FAILED));
        }
    }
}

pub fn request_delete(state: RwSignal<EmployeePageState>, employee_id: String) {
    state.update(|s| s.pending_delete = Some(employee_id));
}

pub fn cancel_delete(state: RwSignal<EmployeePageState>) {
    state.update(|s| s.pending_delete = None);
}

/// Deletes the employee awaiting confirmation. Without one this does nothing.
pub async fn confirm_delete(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeePageState>,
    alerts: AlertController,
) {
    let Some(employee_id) = state
        .try_update(|s| s.pending_delete.take())
        .flatten()
    else {
        return;
    };

    match repository.delete_employee(&employee_id).await {
        Ok(()) => {
            log::info!("Deleted employee {}", employee_id);
            alerts.success(MSG_DELETED);
        }
        Err(err) => {
            log::warn!("Failed to delete employee {}: {}", employee_id, err);
            alerts.error(err.message_or(MSG_DELETE_FAILED));
        }
    }
    load_employees(repository, state, alerts).await;
}
