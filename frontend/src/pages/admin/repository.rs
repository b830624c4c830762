use crate::api::{ApiClient, ApiError, Employee, SkillDecision, SkillRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self, token: &str) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees(token).await
    }

    pub async fn fetch_skill_requests(&self, token: &str) -> Result<Vec<SkillRequest>, ApiError> {
        self.client.list_skill_requests(token).await
    }

    pub async fn update_skill_status(
        &self,
        token: &str,
        request_id: i64,
        decision: SkillDecision,
    ) -> Result<(), ApiError> {
        self.client
            .update_skill_status(token, request_id, decision)
            .await
    }
}
