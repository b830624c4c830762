use crate::pages::admin::utils::{tab_button_class, tab_label, AdminTab};
use leptos::*;

#[component]
pub fn AdminTabs(
    active: RwSignal<AdminTab>,
    #[prop(into)] employee_count: Signal<usize>,
    #[prop(into)] pending_count: Signal<usize>,
) -> impl IntoView {
    let tab_button = move |tab: AdminTab, count: Signal<usize>| {
        view! {
            <button
                class=move || tab_button_class(active.get() == tab)
                on:click=move |_| active.set(tab)
            >
                <span>{move || tab_label(tab, count.get())}</span>
            </button>
        }
    };

    view! {
        <div class="flex space-x-4 mb-6">
            {tab_button(AdminTab::Employees, employee_count)}
            {tab_button(AdminTab::Skills, pending_count)}
        </div>
    }
}
