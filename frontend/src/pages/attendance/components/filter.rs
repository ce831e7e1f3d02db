use crate::{api::Employee, pages::attendance::utils::filter_button_class};
use leptos::*;

const FILTER_BASE_CLASS: &str = "px-4 py-2 rounded-lg font-medium transition-colors duration-200";

/// "View All" plus one button per loaded employee.
#[component]
pub fn EmployeeFilter(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_view_all: Callback<()>,
    on_view_employee: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex flex-wrap gap-2">
            <button
                type="button"
                class=move || format!(
                    "{} {}",
                    FILTER_BASE_CLASS,
                    filter_button_class(selected.with(Option::is_none))
                )
                on:click=move |_| on_view_all.call(())
            >
                "View All"
            </button>
            <For
                each=move || employees.get()
                key=|employee| employee.id
                children=move |employee: Employee| {
                    let employee_id = employee.employee_id.clone();
                    let is_active = {
                        let employee_id = employee_id.clone();
                        move || selected.with(|current| current.as_deref() == Some(employee_id.as_str()))
                    };
                    view! {
                        <button
                            type="button"
                            class=move || format!("{} {}", FILTER_BASE_CLASS, filter_button_class(is_active()))
                            on:click=move |_| on_view_employee.call(employee_id.clone())
                        >
                            {employee.full_name.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
