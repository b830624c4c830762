use crate::{
    components::{cards::Card, layout::Layout},
    pages::dashboard::view_model::{use_dashboard_view_model, DashboardViewModel},
};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! { <DashboardView vm=vm /> }
}

#[component]
pub fn DashboardView(vm: DashboardViewModel) -> impl IntoView {
    let email = Signal::derive(move || {
        vm.session
            .with(|s| s.as_ref().map(|s| s.email().to_string()).unwrap_or_default())
    });

    move || {
        vm.session.with(Option::is_some).then(|| {
            view! {
                <Layout title="SkillForge" user_label=email on_logout=vm.logout>
                    <Card title="Dashboard">
                        <p class="text-gray-600">{move || format!("Signed in as {}", email.get())}</p>
                    </Card>
                </Layout>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::{helpers::employee_user, ssr::render_to_string};

    #[test]
    fn signed_in_member_sees_email_and_logout() {
        let html = render_to_string(|| {
            let vm = DashboardViewModel {
                session: create_rw_signal(Some(Session {
                    user: employee_user(),
                    token: "t2".into(),
                })),
                logout: Callback::new(|_| ()),
            };
            view! { <DashboardView vm=vm /> }
        });
        assert!(html.contains("Signed in as e@x.com"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn nothing_renders_before_session_resolves() {
        let html = render_to_string(|| {
            let vm = DashboardViewModel {
                session: create_rw_signal(None),
                logout: Callback::new(|_| ()),
            };
            view! { <DashboardView vm=vm /> }
        });
        assert!(!html.contains("Logout"));
    }
}
