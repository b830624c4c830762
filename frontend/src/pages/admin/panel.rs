use crate::{
    api::SkillDecision,
    components::layout::{Layout, LoadingSpinner},
    pages::admin::{
        components::{
            employees::EmployeesSection, skill_requests::SkillRequestsSection, tabs::AdminTabs,
        },
        utils::{employee_count, pending_count, AdminTab},
        view_model::{use_admin_view_model, AdminViewModel, DashboardPhase},
    },
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    view! { <AdminDashboardView vm=vm /> }
}

#[component]
pub fn AdminDashboardView(vm: AdminViewModel) -> impl IntoView {
    let state = vm.state;
    let phase = create_memo(move |_| state.with(|s| s.phase()));
    let user_label = Signal::derive(move || {
        state.with(|s| {
            s.session
                .as_ref()
                .map(|session| format!("Admin: {}", session.email()))
                .unwrap_or_default()
        })
    });
    let employees = Signal::derive(move || state.with(|s| s.employees.clone()));
    let requests = Signal::derive(move || state.with(|s| s.skill_requests.clone()));
    let total_employees = Signal::derive(move || state.with(|s| employee_count(&s.employees)));
    let pending = Signal::derive(move || state.with(|s| pending_count(&s.skill_requests)));
    let deciding = vm.decision_action.pending();
    let on_decide = Callback::new(move |payload: (i64, SkillDecision)| {
        vm.decision_action.dispatch(payload)
    });

    move || match phase.get() {
        // Session check or redirect still pending.
        DashboardPhase::Unauthenticated | DashboardPhase::Loading => {
            view! { <LoadingSpinner /> }.into_view()
        }
        DashboardPhase::Ready => view! {
            <Layout title="SkillForge Admin" user_label=user_label on_logout=vm.logout>
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
                    <p class="text-gray-600">"Manage employees and skill requests"</p>
                </div>
                <AdminTabs
                    active=vm.active_tab
                    employee_count=total_employees
                    pending_count=pending
                />
                {move || match vm.active_tab.get() {
                    AdminTab::Employees => view! {
                        <EmployeesSection employees=employees />
                    }
                    .into_view(),
                    AdminTab::Skills => view! {
                        <SkillRequestsSection
                            requests=requests
                            filter=vm.status_filter
                            on_decide=on_decide
                            deciding=deciding
                        />
                    }
                    .into_view(),
                }}
            </Layout>
        }
        .into_view(),
    }
}
