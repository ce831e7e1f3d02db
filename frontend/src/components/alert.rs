use crate::state::alert::{AlertController, AlertKind};
use leptos::*;

pub fn alert_classes(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "bg-green-50 border-green-400 text-green-800",
        AlertKind::Error => "bg-red-50 border-red-400 text-red-800",
    }
}

#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let role = match kind {
        AlertKind::Success => "status",
        AlertKind::Error => "alert",
    };
    view! {
        <div class=format!("mb-4 border-l-4 p-4 rounded-md flex justify-between items-start {}", alert_classes(kind)) role=role>
            <p class="text-sm font-medium">{message}</p>
            <button
                type="button"
                aria-label="Dismiss"
                class="ml-4 text-lg leading-none opacity-70 hover:opacity-100"
                on:click=move |_| on_close.call(())
            >
                {"×"}
            </button>
        </div>
    }
}

/// Renders the controller's current alert, if any.
#[component]
pub fn AlertBanner(controller: AlertController) -> impl IntoView {
    let current = controller.signal();
    let on_close = Callback::new(move |_| controller.dismiss());
    move || {
        current.get().map(|alert| {
            view! { <Alert kind=alert.kind message=alert.message on_close=on_close /> }.into_view()
        })
    }
}
