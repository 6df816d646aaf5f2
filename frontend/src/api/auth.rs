use log::info;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{
        ApiError, ChangePasswordRequest, Envelope, LoginRequest, LoginResponse, RegisterRequest,
        SubscriptionStatus, UserProfile,
    },
};

impl ApiClient {
    /// Exchanges credentials for a token and starts a new session with it.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        let response: LoginResponse = self
            .request(Method::POST, "/auth/login", Some(body), false)
            .await?;
        self.session().begin(&response.data.token)?;
        info!("logged in as {}", request.email);
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        self.request::<serde::de::IgnoredAny>(Method::POST, "/auth/register", Some(body), false)
            .await
            .map(|_| ())
    }

    /// `Ok(None)` when the API answers without a profile.
    pub async fn fetch_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        let envelope: Envelope<Option<UserProfile>> = self.get_json("/auth/profile").await?;
        Ok(envelope.data)
    }

    pub async fn fetch_subscription_status(&self) -> Result<SubscriptionStatus, ApiError> {
        self.get_json("/auth/subscription/status").await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::POST, "/auth/change-password", Some(body))
            .await
    }
}
