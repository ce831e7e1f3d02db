use super::{
    components::{filter::EmployeeFilter, form::MarkAttendanceForm, table::AttendanceTable},
    view_model::use_attendance_view_model,
};
use crate::components::{
    alert::AlertBanner, common::ButtonVariant, layout::PageContainer, loading::Loading,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Title text="Attendance | HRMS Lite" />
        <PageContainer>
            <AttendancePanel />
        </PageContainer>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let state = vm.state;

    create_effect(move |_| vm.load());

    let loading = create_memo(move |_| state.with(|s| s.loading));
    let form_open = create_memo(move |_| state.with(|s| s.form_open));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));
    let employees = Signal::derive(move || state.with(|s| s.employees.clone()));
    let records = Signal::derive(move || state.with(|s| s.records.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_employee.clone()));
    let toggle_form = vm.on_toggle_form();

    view! {
        <div class="mb-6 flex justify-between items-center">
            <h2 class="text-3xl font-bold text-gray-900">"Attendance Management"</h2>
            <button
                type="button"
                class=format!(
                    "inline-flex items-center rounded-lg font-semibold transition-colors duration-200 {}",
                    ButtonVariant::Primary.classes()
                )
                on:click=move |_| toggle_form(())
            >
                {move || if form_open.get() { "Cancel" } else { "Mark Attendance" }}
            </button>
        </div>

        <AlertBanner controller=vm.alerts />

        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading message="Loading attendance data..." /> }
        >
            <Show when=move || form_open.get()>
                <MarkAttendanceForm
                    form=vm.form
                    employees=employees
                    submitting=submitting
                    on_submit=Callback::new(vm.on_submit())
                />
            </Show>
            <EmployeeFilter
                employees=employees
                selected=selected
                on_view_all=Callback::new(vm.on_view_all())
                on_view_employee=Callback::new(vm.on_view_employee())
            />
            <AttendanceTable records=records employees=employees />
        </Show>
    }
}
