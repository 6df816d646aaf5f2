use reqwest::Method;

use super::{
    client::{with_query, ApiClient},
    types::{ApiError, CreateSupportTicket, Paginated, SupportTicket},
};

impl ApiClient {
    pub async fn create_support_ticket(&self, ticket: &CreateSupportTicket) -> Result<(), ApiError> {
        let body = serde_json::to_value(ticket).map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::POST, "/support", Some(body))
            .await
    }

    pub async fn list_my_support_tickets(
        &self,
        page: u32,
        limit: u32,
        status: Option<&str>,
    ) -> Result<Paginated<SupportTicket>, ApiError> {
        let path = with_query(
            "/support/mine",
            &[
                ("page", Some(page.to_string())),
                ("limit", Some(limit.to_string())),
                ("status", status.map(str::to_string)),
            ],
        );
        self.get_json(&path).await
    }
}
