use super::{
    client::ApiClient,
    types::{ApiError, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self, token: &str) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client().get(format!("{}/employees", base_url)),
                token,
            )
            .await?;
        Self::map_typed_response(response).await
    }
}
