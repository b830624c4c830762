use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{SessionRedirect, ADMIN_PATH, DASHBOARD_PATH, LOGIN_PATH},
    pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH, ADMIN_PATH, DASHBOARD_PATH];

/// Routes that check the stored session themselves and redirect when it
/// does not fit.
pub const SESSION_ROUTE_PATHS: &[&str] = &["/", ADMIN_PATH, DASHBOARD_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="SkillForge" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=SessionRedirect/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=ADMIN_PATH view=AdminPage/>
                    <Route path=DASHBOARD_PATH view=DashboardPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
