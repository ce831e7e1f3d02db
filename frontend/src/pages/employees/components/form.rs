use crate::{
    components::common::{Button, ButtonVariant},
    pages::employees::utils::EmployeeFormState,
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700 mb-2">
                {label} " *"
            </label>
            <input
                id=name
                name=name
                type=input_type
                required=true
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&EmployeeFormState) -> String| {
        Signal::derive(move || form.with(read))
    };
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h3 class="text-xl font-semibold text-gray-800 mb-4">"Add New Employee"</h3>
            <form on:submit=handle_submit class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <FormField
                        label="Employee ID"
                        name="employee_id"
                        placeholder="e.g., EMP001"
                        value=field(|f| f.employee_id.clone())
                        on_input=Callback::new(move |value| form.update(|f| f.employee_id = value))
                    />
                    <FormField
                        label="Full Name"
                        name="full_name"
                        placeholder="e.g., John Doe"
                        value=field(|f| f.full_name.clone())
                        on_input=Callback::new(move |value| form.update(|f| f.full_name = value))
                    />
                    <FormField
                        label="Email Address"
                        name="email"
                        input_type="email"
                        placeholder="e.g., john@example.com"
                        value=field(|f| f.email.clone())
                        on_input=Callback::new(move |value| form.update(|f| f.email = value))
                    />
                    <FormField
                        label="Department"
                        name="department"
                        placeholder="e.g., Engineering"
                        value=field(|f| f.department.clone())
                        on_input=Callback::new(move |value| form.update(|f| f.department = value))
                    />
                </div>
                <div class="flex justify-end">
                    <Button variant=ButtonVariant::Submit loading=submitting attr:type="submit">
                        "Add Employee"
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_all_required_fields() {
        let html = render_to_string(|| {
            let form = create_rw_signal(EmployeeFormState {
                employee_id: "EMP007".into(),
                ..EmployeeFormState::default()
            });
            view! {
                <EmployeeForm
                    form=form
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        for label in ["Employee ID", "Full Name", "Email Address", "Department"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Add Employee"));
    }
}
