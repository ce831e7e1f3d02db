use crate::{
    api::{AttendanceRecord, Employee},
    components::empty_state::{EmptyState, EmptyStateIcon},
    pages::attendance::utils::{employee_display_name, status_badge_class},
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn AttendanceTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || records.with(|list| !list.is_empty())
            fallback=|| view! {
                <EmptyState
                    title="No attendance records"
                    description="Get started by marking attendance for employees."
                    icon=EmptyStateIcon::Clipboard
                />
            }
        >
            <div class="bg-white shadow-md rounded-lg overflow-hidden">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            {["Employee ID", "Employee Name", "Date", "Status"]
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
                            each=move || records.get()
                            key=|record| record.id
                            children=move |record: AttendanceRecord| {
                                let name_id = record.employee_id.clone();
                                let name = move || employees.with(|list| employee_display_name(list, &name_id));
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                            {record.employee_id.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                            {name}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {format_display_date(record.date)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class=format!(
                                                "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                                                status_badge_class(record.status)
                                            )>
                                                {record.status.as_str()}
                                            </span>
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
