use crate::{
    api::Employee,
    components::empty_state::{EmptyState, EmptyStateIcon},
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || employees.with(|list| !list.is_empty())
            fallback=|| view! {
                <EmptyState
                    title="No employees"
                    description="Get started by adding a new employee."
                    icon=EmptyStateIcon::People
                />
            }
        >
            <div class="bg-white rounded-lg shadow-md overflow-hidden">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            {["Employee ID", "Full Name", "Email", "Department", "Actions"]
                                .into_iter()
                                .map(|heading| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        {heading}
                                    </th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee: Employee| {
                                let employee_id = employee.employee_id.clone();
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                            {employee.employee_id.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                            {employee.full_name.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {employee.email.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {employee.department.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-900 transition-colors duration-200"
                                                on:click=move |_| on_delete.call(employee_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
