use crate::{
    api::{AttendanceStatus, Employee},
    components::common::{Button, ButtonVariant},
    pages::attendance::utils::{employee_option_label, MarkAttendanceFormState},
};
use leptos::{ev, *};

const CONTROL_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn MarkAttendanceForm(
    form: RwSignal<MarkAttendanceFormState>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="bg-white shadow-md rounded-lg p-6 mb-6">
            <h3 class="text-xl font-semibold mb-4 text-gray-800">"Mark Attendance"</h3>
            <form on:submit=handle_submit>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div>
                        <label for="employee_id" class="block text-gray-700 text-sm font-medium mb-2">
                            "Employee *"
                        </label>
                        <select
                            id="employee_id"
                            name="employee_id"
                            required=true
                            class=CONTROL_CLASS
                            prop:value=move || form.with(|f| f.employee_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.employee_id = value);
                            }
                        >
                            <option value="">"Select Employee"</option>
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id
                                children=move |employee: Employee| {
                                    view! {
                                        <option value=employee.employee_id.clone()>
                                            {employee_option_label(&employee)}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div>
                        <label for="date" class="block text-gray-700 text-sm font-medium mb-2">
                            "Date *"
                        </label>
                        <input
                            id="date"
                            name="date"
                            type="date"
                            required=true
                            class=CONTROL_CLASS
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.date = value);
                            }
                        />
                    </div>
                    <div>
                        <label for="status" class="block text-gray-700 text-sm font-medium mb-2">
                            "Status *"
                        </label>
                        <select
                            id="status"
                            name="status"
                            required=true
                            class=CONTROL_CLASS
                            prop:value=move || form.with(|f| f.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {AttendanceStatus::ALL
                                .iter()
                                .map(|status| view! {
                                    <option value=status.as_str()>{status.as_str()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="mt-4">
                    <Button variant=ButtonVariant::Submit loading=submitting attr:type="submit">
                        "Mark Attendance"
                    </Button>
                </div>
            </form>
        </div>
    }
}
