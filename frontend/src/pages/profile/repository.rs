use crate::api::{ApiClient, ApiError, ChangePasswordRequest, UserProfile};
use log::warn;

/// Fresh profile when the API has one, the cached copy otherwise.
pub async fn load_profile(api: &ApiClient) -> Option<UserProfile> {
    match api.fetch_profile().await {
        Ok(Some(profile)) => {
            api.session().cache_user(&profile);
            Some(profile)
        }
        Ok(None) => api.session().cached_user(),
        Err(err) => {
            warn!("profile refresh failed, using cached copy: {}", err);
            api.session().cached_user()
        }
    }
}

pub async fn change_password(api: &ApiClient, request: ChangePasswordRequest) -> Result<(), ApiError> {
    api.change_password(&request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::{free_profile, memory_session};
    use serde_json::json;

    #[tokio::test]
    async fn fresh_profile_is_cached() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200).json_body(json!({
                "data": { "_id": "u1", "username": "budi", "email": "budi@example.com", "role": "pro" }
            }));
        });
        let (session, _storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());

        let profile = load_profile(&api).await.unwrap();

        assert_eq!(profile.username, "budi");
        assert_eq!(session.cached_user().unwrap().username, "budi");
    }

    #[tokio::test]
    async fn failed_refresh_falls_back_to_cache() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(500).json_body(json!({ "message": "down" }));
        });
        let (session, _storage, _nav) = memory_session(Some("abc"));
        session.cache_user(&free_profile());
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        let profile = load_profile(&api).await.unwrap();

        assert_eq!(profile, free_profile());
    }

    #[tokio::test]
    async fn change_password_posts_camel_case_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/change-password");
            then.status(200).json_body(json!({ "success": true }));
        });
        let (session, _storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        change_password(
            &api,
            ChangePasswordRequest {
                current_password: "old-secret".into(),
                new_password: "new-secret".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            server.last_request().unwrap().body,
            Some(json!({ "currentPassword": "old-secret", "newPassword": "new-secret" }))
        );
    }
}
