use super::{
    repository::LoginRepository,
    utils::{login_error_message, validate_credentials},
};
use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::components::guard::home_path_for;
use crate::state::session::{use_session, Session, SessionHandle};
use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;

pub async fn submit_login(
    repo: &LoginRepository,
    sessions: &SessionHandle,
    request: LoginRequest,
    navigate: impl Fn(&'static str),
) -> Result<Session, ApiError> {
    let session = Session::from(repo.login(&request).await?);
    if let Err(err) = sessions.save(&session) {
        log::error!("Failed to persist session: {}", err);
        return Err(ApiError::unknown(err.to_string()));
    }
    let target = home_path_for(&session.user);
    log::info!("Signed in as {}, redirecting to {}", session.email(), target);
    navigate(target);
    Ok(session)
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn new(login_action: Action<LoginRequest, Result<(), ApiError>>) -> Self {
        let error = create_rw_signal(None::<ApiError>);
        create_effect(move |_| {
            if let Some(Err(err)) = login_action.value().get() {
                error.set(Some(ApiError::validation(login_error_message(&err))));
            }
        });
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
            error,
            login_action,
        }
    }

    /// Validates the form, updating the inline error, and returns the request
    /// to send when the input is acceptable.
    pub fn prepare_request(&self) -> Option<LoginRequest> {
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return None;
        }
        self.error.set(None);
        Some(LoginRequest { email, password })
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        if let Some(request) = self.prepare_request() {
            self.login_action.dispatch(request);
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));
    let sessions = use_session();
    let navigate = use_navigate();
    let go = move |path: &'static str| navigate(path, Default::default());

    let login_action = create_action(move |request: &LoginRequest| {
        let repo = repo.clone();
        let sessions = sessions.clone();
        let go = go.clone();
        let request = request.clone();
        async move {
            submit_login(&repo, &sessions, request, go)
                .await
                .map(|_| ())
        }
    });

    LoginViewModel::new(login_action)
}
