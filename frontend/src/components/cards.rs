use leptos::*;

#[component]
pub fn Card(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 pt-6">
                <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
            </div>
            <div class="p-6">
                <div class="space-y-4">{children()}</div>
            </div>
        </div>
    }
}
