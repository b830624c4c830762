use leptos::*;

#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(into)] user_label: Signal<String>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="bg-white border-b">
            <div class="max-w-6xl mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="w-8 h-8 rounded-full bg-red-600" aria-hidden="true"></span>
                        <h1 class="text-xl font-bold">{title}</h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        <span class="text-sm text-gray-600">{move || user_label.get()}</span>
                        <button
                            class="px-3 py-1 text-sm rounded-md border border-gray-300 hover:bg-gray-50"
                            on:click=move |_| on_logout.call(())
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Layout(
    #[prop(into)] title: String,
    #[prop(into)] user_label: Signal<String>,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header title=title user_label=user_label on_logout=on_logout />
            <main class="max-w-6xl mx-auto px-4 py-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <p class="ml-3">"Loading..."</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_title_user_and_children() {
        let html = render_to_string(|| {
            view! {
                <Layout
                    title="SkillForge Admin"
                    user_label=Signal::derive(|| "Admin: a@x.com".to_string())
                    on_logout=Callback::new(|_| ())
                >
                    <p>"dashboard-body"</p>
                </Layout>
            }
        });
        assert!(html.contains("SkillForge Admin"));
        assert!(html.contains("Admin: a@x.com"));
        assert!(html.contains("Logout"));
        assert!(html.contains("dashboard-body"));
    }

    #[test]
    fn loading_spinner_shows_loading_text() {
        let html = render_to_string(|| view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading..."));
    }
}
