use super::{
    client::ApiClient,
    types::{ApiError, SkillDecision, SkillRequest, UpdateSkillStatusRequest},
};

impl ApiClient {
    pub async fn list_skill_requests(&self, token: &str) -> Result<Vec<SkillRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/skills/employee-skill-requests", base_url)),
                token,
            )
            .await?;
        Self::map_typed_response(response).await
    }

    pub async fn update_skill_status(
        &self,
        token: &str,
        employee_skill_id: i64,
        status: SkillDecision,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = UpdateSkillStatusRequest {
            employee_skill_id,
            status,
        };
        let response = self
            .send_authorized(
                self.http_client()
                    .patch(format!("{}/skills/employee-skill-status", base_url))
                    .json(&payload),
                token,
            )
            .await?;
        Self::map_empty_response(response).await
    }
}
