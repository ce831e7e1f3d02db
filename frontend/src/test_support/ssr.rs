use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Keeps a reactive runtime alive across `.await` points in async tests.
pub struct RuntimeGuard(RuntimeId);

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        self.0.dispose();
    }
}

pub fn runtime_guard() -> RuntimeGuard {
    RuntimeGuard(leptos::create_runtime())
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
