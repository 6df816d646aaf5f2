use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserProfile},
    state::{
        access::{resolve_access, Access},
        session::SessionContext,
        use_api,
    },
};
use leptos::*;
use log::info;

pub const DASHBOARD_PATH: &str = "/dashboard";

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Where the session check stands. Starts at `Loading` on every page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: GuardStatus,
    pub user: Option<UserProfile>,
    /// `None` until resolved; gates must not render gated content before then.
    pub access: Option<Access>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == GuardStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status == GuardStatus::Loading
    }

    pub fn is_admin(&self) -> bool {
        self.access.as_ref().map(Access::is_admin).unwrap_or(false)
    }

    fn signed_out() -> Self {
        Self {
            status: GuardStatus::Unauthenticated,
            user: None,
            access: None,
        }
    }
}

/// Runs the guard state machine once. A missing token short-circuits
/// without touching the network; every failure path clears the session.
pub async fn check_session(api: &ApiClient) -> (GuardStatus, Option<UserProfile>) {
    let session = api.session();
    if !session.has_token() {
        info!("no session token");
        return (GuardStatus::Unauthenticated, None);
    }

    match api.fetch_profile().await {
        Ok(Some(profile)) if profile.is_force_logout() => {
            info!("server requested logout");
            session.clear();
            (GuardStatus::Unauthenticated, None)
        }
        Ok(Some(profile)) => {
            session.cache_user(&profile);
            (GuardStatus::Authenticated, Some(profile))
        }
        Ok(None) => {
            info!("profile missing, dropping session");
            session.clear();
            (GuardStatus::Unauthenticated, None)
        }
        Err(err) => {
            info!("profile check failed: {}", err);
            session.clear();
            (GuardStatus::Unauthenticated, None)
        }
    }
}

/// Session check followed by access resolution for authenticated users.
pub async fn bootstrap(api: &ApiClient, set_state: WriteSignal<AuthState>) {
    let (status, user) = check_session(api).await;
    set_state.set(AuthState {
        status,
        user,
        access: None,
    });
    if status == GuardStatus::Authenticated {
        refresh_access(api, set_state).await;
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let api = use_api();
    // effects never run during server rendering, so host tests see `Loading`
    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move { bootstrap(&api, set_auth_state).await });
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Re-resolves the role/plan pair. Gates show their loading state meanwhile.
pub async fn refresh_access(api: &ApiClient, set_state: WriteSignal<AuthState>) {
    set_state.update(|state| state.access = None);
    let access = resolve_access(api).await;
    set_state.update(|state| state.access = Some(access));
}

pub async fn login_request(
    api: &ApiClient,
    request: LoginRequest,
    set_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    api.login(&request).await?;
    let user = api.fetch_profile().await.ok().flatten();
    if let Some(profile) = &user {
        api.session().cache_user(profile);
    }
    set_state.set(AuthState {
        status: GuardStatus::Authenticated,
        user,
        access: None,
    });
    refresh_access(api, set_state).await;
    Ok(())
}

/// Login followed by navigation to the dashboard.
pub async fn login_and_enter(
    api: &ApiClient,
    request: LoginRequest,
    set_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    login_request(api, request, set_state).await?;
    api.session().navigate(DASHBOARD_PATH);
    Ok(())
}

pub fn logout(session: &SessionContext, set_state: WriteSignal<AuthState>) {
    set_state.set(AuthState::signed_out());
    session.invalidate();
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_and_enter(&api, payload, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let session = use_api().session().clone();
    Callback::new(move |_| logout(&session, set_auth))
}

pub fn use_refresh_access_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();
    create_action(move |_: &()| {
        let api = api.clone();
        async move { refresh_access(&api, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::access::{Plan, Role};
    use crate::state::session::{TOKEN_KEY, USER_KEY};
    use crate::utils::storage::KeyValueStore;
    use crate::test_support::helpers::memory_session;
    use serde_json::json;

    fn profile_body(extra: serde_json::Value) -> serde_json::Value {
        let mut data = json!({
            "_id": "u1",
            "username": "sari",
            "email": "sari@example.com",
            "role": "pro"
        });
        if let (Some(map), Some(extra)) = (data.as_object_mut(), extra.as_object()) {
            map.extend(extra.clone());
        }
        json!({ "data": data })
    }

    #[tokio::test]
    async fn no_token_is_unauthenticated_without_network() {
        let server = MockServer::start_async().await;
        let (session, _storage, _nav) = memory_session(None);
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        let (status, user) = check_session(&api).await;

        assert_eq!(status, GuardStatus::Unauthenticated);
        assert!(user.is_none());
        assert!(server.received().is_empty());
    }

    #[tokio::test]
    async fn valid_profile_authenticates_and_caches_user() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200).json_body(profile_body(json!({})));
        });
        let (session, storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());

        let (status, user) = check_session(&api).await;

        assert_eq!(status, GuardStatus::Authenticated);
        assert_eq!(user.unwrap().username, "sari");
        assert!(storage.get(USER_KEY).is_some());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn profile_with_virtual_id_keeps_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200)
                .json_body(profile_body(json!({ "id": "u1", "createdAt": "2025-01-02" })));
        });
        let (session, storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        let (status, user) = check_session(&api).await;

        assert_eq!(status, GuardStatus::Authenticated);
        assert_eq!(user.map(|u| u.id).as_deref(), Some("u1"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn force_logout_profile_clears_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200)
                .json_body(profile_body(json!({ "force_logout": true })));
        });
        let (session, storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        let (status, user) = check_session(&api).await;

        assert_eq!(status, GuardStatus::Unauthenticated);
        assert!(user.is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn missing_profile_or_error_clears_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200).json_body(json!({ "data": null }));
        });
        let (session, storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
        assert_eq!(check_session(&api).await.0, GuardStatus::Unauthenticated);
        assert!(storage.is_empty());

        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(500).json_body(json!({ "message": "down" }));
        });
        session.begin("again").unwrap();
        assert_eq!(check_session(&api).await.0, GuardStatus::Unauthenticated);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn bootstrap_resolves_access_for_authenticated_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200).json_body(profile_body(json!({})));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/subscription/status");
            then.status(200).json_body(json!({ "status": "free" }));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (session, _storage, _nav) = memory_session(Some("abc"));
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        bootstrap(&api, set_state).await;

        let snapshot = state.get_untracked();
        assert!(snapshot.is_authenticated());
        let access = snapshot.access.unwrap();
        assert_eq!(access.role, Role::Pro);
        assert_eq!(access.plan, Plan::Free);
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_stores_token_and_enters_dashboard() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({ "data": { "token": "abc" } }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile");
            then.status(200).json_body(profile_body(json!({ "role": "free" })));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/subscription/status");
            then.status(200).json_body(json!({ "status": "pro" }));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (session, storage, nav) = memory_session(None);
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        login_and_enter(
            &api,
            LoginRequest {
                email: "sari@example.com".into(),
                password: "secret".into(),
            },
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(nav.redirects(), vec![DASHBOARD_PATH.to_string()]);
        let snapshot = state.get_untracked();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.access.unwrap().plan, Plan::Pro);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({ "message": "Invalid credentials" }));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::signed_out());
        let (session, _storage, nav) = memory_session(None);
        let api = ApiClient::new_with_base_url(server.url("/api"), session);

        let err = login_and_enter(
            &api,
            LoginRequest {
                email: "sari@example.com".into(),
                password: "bad".into(),
            },
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(nav.redirects().is_empty());
        assert_eq!(state.get_untracked(), AuthState::signed_out());
        runtime.dispose();
    }

    #[test]
    fn logout_clears_state_and_redirects_to_login() {
        let runtime = create_runtime();
        let (session, storage, nav) = memory_session(Some("abc"));
        let (state, set_state) = create_signal(AuthState {
            status: GuardStatus::Authenticated,
            user: None,
            access: Some(Access::default()),
        });

        logout(&session, set_state);

        assert!(storage.is_empty());
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
        assert!(state.get_untracked().access.is_none());
        runtime.dispose();
    }
}
