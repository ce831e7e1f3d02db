use leptos::*;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());
    view! {
        <div class="flex justify-center items-center min-h-[400px]" role="status">
            <div class="text-center">
                <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                <p class="mt-4 text-gray-600">{message}</p>
            </div>
        </div>
    }
}
