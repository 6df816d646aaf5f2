use crate::api::{ApiClient, ApiError, RegisterRequest};

pub async fn register(api: &ApiClient, request: RegisterRequest) -> Result<(), ApiError> {
    api.register(&request).await
}
