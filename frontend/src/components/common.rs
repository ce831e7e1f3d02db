use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Submit,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white py-2 px-4",
            ButtonVariant::Submit => "bg-green-600 hover:bg-green-700 text-white py-2 px-6",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "inline-flex items-center justify-center rounded-lg font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {}",
                variant.classes()
            )
            disabled=move || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_colors() {
        assert!(ButtonVariant::Primary.classes().contains("bg-blue-600"));
        assert!(ButtonVariant::Submit.classes().contains("bg-green-600"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn in_flight_button_is_disabled() {
        let html = crate::test_support::ssr::render_to_string(|| {
            view! { <Button variant=ButtonVariant::Submit loading=true>"Add Employee"</Button> }
        });
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
        assert!(html.contains("bg-green-600"));
    }
}
