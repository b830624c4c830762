use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Approve,
    Reject,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Approve => "border border-green-600 text-green-600 hover:bg-green-50",
            ButtonVariant::Reject => "border border-red-600 text-red-600 hover:bg-red-50",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "inline-flex items-center justify-center rounded-md px-3 py-1 text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed {}",
                variant.classes()
            )
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn has_disabled_attribute(html: &str) -> bool {
        html.matches(" disabled").count() > html.matches(" disabled:").count()
    }

    #[test]
    fn disabled_flag_reaches_the_button() {
        let html = render_to_string(|| {
            view! { <Button variant=ButtonVariant::Approve disabled=true>"Approve"</Button> }
        });
        assert!(has_disabled_attribute(&html));
        assert!(html.contains("border-green-600"));

        let html = render_to_string(|| {
            view! { <Button variant=ButtonVariant::Reject>"Reject"</Button> }
        });
        assert!(!has_disabled_attribute(&html));
    }
}
