use crate::{
    api::SessionUser,
    components::layout::LoadingSpinner,
    state::session::{use_session, Session, SessionError, SessionHandle},
};
use leptos::*;
use leptos_router::use_navigate;

pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";

/// Where a stored session is allowed to go.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    Login,
    Member(Session),
    Admin(Session),
}

impl SessionGate {
    pub fn home_path(&self) -> &'static str {
        match self {
            SessionGate::Login => LOGIN_PATH,
            SessionGate::Member(_) => DASHBOARD_PATH,
            SessionGate::Admin(_) => ADMIN_PATH,
        }
    }
}

pub fn evaluate_session(loaded: Result<Option<Session>, SessionError>) -> SessionGate {
    match loaded {
        Ok(Some(session)) if session.is_admin() => SessionGate::Admin(session),
        Ok(Some(session)) => SessionGate::Member(session),
        Ok(None) => SessionGate::Login,
        Err(err) => {
            log::warn!("Discarding unreadable session: {}", err);
            SessionGate::Login
        }
    }
}

pub fn home_path_for(user: &SessionUser) -> &'static str {
    if user.is_admin() {
        ADMIN_PATH
    } else {
        DASHBOARD_PATH
    }
}

/// Clears the stored session and returns to the login page. No server call.
pub fn logout_session(sessions: &SessionHandle, navigate: impl Fn(&'static str)) {
    if let Err(err) = sessions.clear() {
        log::error!("Failed to clear session: {}", err);
    }
    navigate(LOGIN_PATH);
}

#[component]
pub fn SessionRedirect() -> impl IntoView {
    let sessions = use_session();
    let navigate = use_navigate();
    create_effect(move |_| {
        let target = evaluate_session(sessions.load()).home_path();
        navigate(target, Default::default());
    });
    view! { <LoadingSpinner /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;
    use crate::state::session::{TOKEN_KEY, USER_KEY};
    use crate::test_support::helpers::{admin_user, stored_session};

    fn session(role: Role) -> Session {
        Session {
            user: SessionUser {
                id: Some(1),
                email: "a@x.com".into(),
                role,
                extra: Default::default(),
            },
            token: "t1".into(),
        }
    }

    #[test]
    fn gate_routes_by_role() {
        assert_eq!(evaluate_session(Ok(None)), SessionGate::Login);
        assert_eq!(
            evaluate_session(Ok(Some(session(Role::Admin)))).home_path(),
            ADMIN_PATH
        );
        assert_eq!(
            evaluate_session(Ok(Some(session(Role::Employee)))).home_path(),
            DASHBOARD_PATH
        );
        assert_eq!(
            evaluate_session(Ok(Some(session(Role::Other("MANAGER".into()))))).home_path(),
            DASHBOARD_PATH
        );
    }

    #[test]
    fn unreadable_session_sends_to_login() {
        let corrupt = serde_json::from_str::<SessionUser>("{").unwrap_err();
        assert_eq!(
            evaluate_session(Err(SessionError::Corrupt(corrupt))),
            SessionGate::Login
        );
    }

    #[test]
    fn login_home_path_matches_role() {
        assert_eq!(home_path_for(&session(Role::Admin).user), ADMIN_PATH);
        assert_eq!(home_path_for(&session(Role::Employee).user), DASHBOARD_PATH);
    }

    #[test]
    fn logout_clears_session_and_returns_to_login() {
        let (storage, sessions) = stored_session(&admin_user(), "t1");
        let visited = std::cell::RefCell::new(Vec::new());

        logout_session(&sessions, |path| visited.borrow_mut().push(path.to_string()));

        assert!(storage.raw(TOKEN_KEY).is_none());
        assert!(storage.raw(USER_KEY).is_none());
        assert_eq!(visited.into_inner(), vec![LOGIN_PATH.to_string()]);
    }
}
