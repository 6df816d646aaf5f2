pub mod access;
pub mod auth;
pub mod session;

use crate::api::ApiClient;
use leptos::*;
use session::SessionContext;

/// The client provided at the root, or one bound to the browser session.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_default()
}

/// Provides one session and one client sharing it. Called once at the root.
pub fn provide_session(session: SessionContext) -> ApiClient {
    let api = ApiClient::new(session.clone());
    provide_context(session);
    provide_context(api.clone());
    api
}
