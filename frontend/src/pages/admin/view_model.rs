use super::{
    repository::AdminRepository,
    utils::{AdminTab, StatusFilter},
};
use crate::api::{ApiClient, ApiError, Employee, SkillDecision, SkillRequest};
use crate::components::guard::{evaluate_session, logout_session, SessionGate};
use crate::state::session::{use_session, Session, SessionHandle};
use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Unauthenticated,
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardState {
    pub session: Option<Session>,
    pub employees: Vec<Employee>,
    pub skill_requests: Vec<SkillRequest>,
    pub loading: bool,
}

impl Default for AdminDashboardState {
    fn default() -> Self {
        Self {
            session: None,
            employees: Vec::new(),
            skill_requests: Vec::new(),
            loading: true,
        }
    }
}

impl AdminDashboardState {
    pub fn phase(&self) -> DashboardPhase {
        match (&self.session, self.loading) {
            (None, _) => DashboardPhase::Unauthenticated,
            (Some(_), true) => DashboardPhase::Loading,
            (Some(_), false) => DashboardPhase::Ready,
        }
    }
}

/// Per-list result of a load. `Ok` carries the number of rows received.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub employees: Result<usize, ApiError>,
    pub skill_requests: Result<usize, ApiError>,
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        self.employees.is_ok() && self.skill_requests.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecisionOutcome {
    Applied(LoadOutcome),
    Failed(ApiError),
}

pub async fn initialize(
    repo: &AdminRepository,
    sessions: &SessionHandle,
    state: RwSignal<AdminDashboardState>,
    navigate: impl Fn(&'static str),
) -> Option<LoadOutcome> {
    match evaluate_session(sessions.load()) {
        SessionGate::Admin(session) => {
            let token = session.token.clone();
            state.update(|s| s.session = Some(session));
            Some(load_data(repo, &token, state).await)
        }
        gate => {
            let target = gate.home_path();
            log::info!("Admin dashboard requires an ADMIN session, redirecting to {}", target);
            navigate(target);
            None
        }
    }
}

/// Fetches both lists and replaces each one only when its request succeeds.
/// Failures are logged and leave the previous list in place.
pub async fn load_data(
    repo: &AdminRepository,
    token: &str,
    state: RwSignal<AdminDashboardState>,
) -> LoadOutcome {
    let employees = match repo.fetch_employees(token).await {
        Ok(list) => {
            let count = list.len();
            state.update(|s| s.employees = list);
            Ok(count)
        }
        Err(err) => {
            log::error!("Error fetching employees: {}", err);
            Err(err)
        }
    };

    let skill_requests = match repo.fetch_skill_requests(token).await {
        Ok(list) => {
            let count = list.len();
            state.update(|s| s.skill_requests = list);
            Ok(count)
        }
        Err(err) => {
            log::error!("Error fetching skill requests: {}", err);
            Err(err)
        }
    };

    state.update(|s| s.loading = false);
    LoadOutcome {
        employees,
        skill_requests,
    }
}

pub async fn submit_status_decision(
    repo: &AdminRepository,
    state: RwSignal<AdminDashboardState>,
    request_id: i64,
    decision: SkillDecision,
) -> DecisionOutcome {
    let token = state.with_untracked(|s| s.session.as_ref().map(|s| s.token.clone()));
    let Some(token) = token else {
        let err = ApiError::validation("No session");
        log::error!("Error updating skill request {}: {}", request_id, err);
        return DecisionOutcome::Failed(err);
    };

    match repo.update_skill_status(&token, request_id, decision).await {
        Ok(()) => DecisionOutcome::Applied(load_data(repo, &token, state).await),
        Err(err) => {
            log::error!("Error updating skill request {}: {}", request_id, err);
            DecisionOutcome::Failed(err)
        }
    }
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub state: RwSignal<AdminDashboardState>,
    pub active_tab: RwSignal<AdminTab>,
    pub status_filter: RwSignal<StatusFilter>,
    pub decision_action: Action<(i64, SkillDecision), DecisionOutcome>,
    pub logout: Callback<()>,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = AdminRepository::new_with_client(Rc::new(api));
    let sessions = use_session();
    let navigate = use_navigate();
    let go = move |path: &'static str| navigate(path, Default::default());

    let state = create_rw_signal(AdminDashboardState::default());
    let active_tab = create_rw_signal(AdminTab::default());
    let status_filter = create_rw_signal(StatusFilter::default());

    {
        let repo = repo.clone();
        let sessions = sessions.clone();
        let go = go.clone();
        spawn_local(async move {
            initialize(&repo, &sessions, state, go).await;
        });
    }

    let repo_decision = repo.clone();
    let decision_action = create_action(move |(id, decision): &(i64, SkillDecision)| {
        let repo = repo_decision.clone();
        let (id, decision) = (*id, *decision);
        async move { submit_status_decision(&repo, state, id, decision).await }
    });

    let logout = Callback::new(move |_: ()| logout_session(&sessions, go.clone()));

    AdminViewModel {
        state,
        active_tab,
        status_filter,
        decision_action,
        logout,
    }
}
