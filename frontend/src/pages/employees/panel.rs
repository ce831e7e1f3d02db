use super::{
    components::{form::EmployeeForm, table::EmployeeTable},
    view_model::use_employees_view_model,
};
use crate::components::{
    alert::AlertBanner,
    common::ButtonVariant,
    confirm_dialog::ConfirmDialog,
    layout::PageContainer,
    loading::Loading,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <Title text="Employees | HRMS Lite" />
        <PageContainer>
            <EmployeesPanel />
        </PageContainer>
    }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.state;

    create_effect(move |_| vm.load());

    let form_open = create_memo(move |_| state.with(|s| s.form_open));
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));
    let employees = Signal::derive(move || state.with(|s| s.employees.clone()));
    let confirm_open = Signal::derive(move || state.with(|s| s.pending_delete.is_some()));
    let confirm_message = Signal::derive(move || {
        let name = state.with(|s| s.pending_delete_name()).unwrap_or_default();
        format!("Are you sure you want to delete {}? This cannot be undone.", name)
    });
    let toggle_form = vm.on_toggle_form();

    view! {
        <div class="flex justify-between items-center mb-6">
            <h2 class="text-3xl font-bold text-gray-800">"Employees"</h2>
            <button
                type="button"
                class=format!(
                    "inline-flex items-center rounded-lg font-semibold transition-colors duration-200 {}",
                    ButtonVariant::Primary.classes()
                )
                on:click=move |_| toggle_form(())
            >
                {move || if form_open.get() { "Cancel" } else { "Add Employee" }}
            </button>
        </div>

        <AlertBanner controller=vm.alerts />

        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading message="Loading employees..." /> }
        >
            <Show when=move || form_open.get()>
                <EmployeeForm
                    form=vm.form
                    submitting=submitting
                    on_submit=Callback::new(vm.on_submit())
                />
            </Show>
            <EmployeeTable
                employees=employees
                on_delete=Callback::new(vm.on_request_delete())
            />
        </Show>

        <ConfirmDialog
            is_open=confirm_open
            title="Delete employee"
            message=confirm_message
            confirm_label="Delete"
            destructive=true
            on_confirm=Callback::new(vm.on_confirm_delete())
            on_cancel=Callback::new(vm.on_cancel_delete())
        />
    }
}
