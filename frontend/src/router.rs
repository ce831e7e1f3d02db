use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Navigation,
    pages::{AttendancePage, EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Router>
            <AppShell/>
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    view! {
        <div class="min-h-screen bg-gray-100">
            <Navigation pathname=location.pathname/>
            <main>
                <Routes>
                    <Route path="/" view=EmployeesPage/>
                    <Route path="/attendance" view=AttendancePage/>
                </Routes>
            </main>
        </div>
    }
}
