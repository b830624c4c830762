use crate::components::guard::{evaluate_session, logout_session, SessionGate};
use crate::state::session::{use_session, Session, SessionHandle};
use leptos::*;
use leptos_router::use_navigate;

/// Keeps the session only when it belongs on the generic dashboard; anything
/// else is sent to its own home page.
pub fn resolve_member_session(
    sessions: &SessionHandle,
    navigate: impl Fn(&'static str),
) -> Option<Session> {
    match evaluate_session(sessions.load()) {
        SessionGate::Member(session) => Some(session),
        gate => {
            log::info!("Dashboard redirecting to {}", gate.home_path());
            navigate(gate.home_path());
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub session: RwSignal<Option<Session>>,
    pub logout: Callback<()>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let sessions = use_session();
    let navigate = use_navigate();
    let go = move |path: &'static str| navigate(path, Default::default());

    let session = create_rw_signal(None::<Session>);
    {
        let sessions = sessions.clone();
        let go = go.clone();
        create_effect(move |_| {
            session.set(resolve_member_session(&sessions, go.clone()));
        });
    }

    let logout = Callback::new(move |_: ()| logout_session(&sessions, go.clone()));
    DashboardViewModel { session, logout }
}
