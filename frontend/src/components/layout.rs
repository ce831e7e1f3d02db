use crate::api::ApiClient;
use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[("/", "Employees"), ("/attendance", "Attendance")];

pub fn nav_link_class(current_path: &str, link_path: &str) -> &'static str {
    if current_path == link_path {
        "bg-blue-700 text-white"
    } else {
        "text-blue-100 hover:bg-blue-700 hover:text-white"
    }
}

#[component]
pub fn Navigation(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    view! {
        <nav class="bg-blue-600 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex">
                        <div class="flex-shrink-0 flex items-center">
                            <h1 class="text-white text-2xl font-bold">"HRMS Lite"</h1>
                        </div>
                        <div class="hidden sm:ml-6 sm:flex sm:items-center sm:space-x-4">
                            {NAV_LINKS
                                .iter()
                                .map(|(path, label)| {
                                    let path = *path;
                                    view! {
                                        <a
                                            href=path
                                            class=move || format!(
                                                "{} px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200",
                                                nav_link_class(&pathname.get(), path)
                                            )
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center">
                        <ApiStatusBadge />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn PageContainer(children: Children) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking API...",
            ApiStatus::Online => "API online",
            ApiStatus::Offline => "API offline",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "bg-blue-500 text-blue-50",
            ApiStatus::Online => "bg-green-100 text-green-800",
            ApiStatus::Offline => "bg-red-100 text-red-800",
        }
    }
}

/// One-shot health probe shown in the navigation bar.
#[component]
pub fn ApiStatusBadge() -> impl IntoView {
    let status = create_rw_signal(ApiStatus::Checking);
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let next = match api.health().await {
                Ok(_) => ApiStatus::Online,
                Err(err) => {
                    log::warn!("API health check failed: {}", err);
                    ApiStatus::Offline
                }
            };
            let _ = status.try_set(next);
        });
    });

    view! {
        <span class=move || format!("px-2 py-1 rounded-full text-xs font-semibold {}", status.get().classes())>
            {move || status.get().label()}
        </span>
    }
}
