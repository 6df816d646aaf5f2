use crate::{
    api::UserProfile,
    utils::storage::{KeyValueStore, MemoryStorage, StorageError},
};
use log::{info, warn};
use std::rc::Rc;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LOGIN_PATH: &str = "/login";

/// Where the app currently is and how to leave it.
pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn redirect(&self, path: &str);
}

/// Full page navigation through `window.location`.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn current_path(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn current_path(&self) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect(&self, path: &str) {
        match web_sys::window() {
            Some(window) => {
                navigation_succeeded(path, window.location().set_href(path));
            }
            None => warn!("no window to navigate to {}", path),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect(&self, path: &str) {
        warn!("navigation to {} requested outside the browser", path);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn navigation_succeeded<E: std::fmt::Debug>(path: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("navigation to {} failed: {:?}", path, err);
            false
        }
    }
}

/// The only writer of session state. Every component that needs the token,
/// the cached profile, or has to end the session goes through this handle.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Session storage of the current tab, or an in-memory store when the
    /// browser refuses access (private mode, non-browser targets).
    pub fn browser() -> Self {
        Self::new(browser_store(), Rc::new(BrowserNavigator))
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn begin(&self, token: &str) -> Result<(), StorageError> {
        self.store.remove(USER_KEY);
        self.store.set(TOKEN_KEY, token)
    }

    pub fn cache_user(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => {
                if let Err(err) = self.store.set(USER_KEY, &json) {
                    warn!("could not cache user profile: {}", err);
                }
            }
            Err(err) => warn!("could not serialize user profile: {}", err),
        }
    }

    pub fn cached_user(&self) -> Option<UserProfile> {
        self.store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// Ends the session and sends the user to the login page. Safe to call
    /// from several places for the same failure.
    pub fn invalidate(&self) {
        info!("session invalidated");
        self.clear();
        self.navigate(LOGIN_PATH);
    }

    pub fn navigate(&self, path: &str) {
        if self.navigator.current_path().as_deref() == Some(path) {
            return;
        }
        self.navigator.redirect(path);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::browser()
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_store() -> Rc<dyn KeyValueStore> {
    use crate::utils::storage::BrowserSessionStorage;
    match BrowserSessionStorage::new() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            warn!("{}; falling back to in-memory session", err);
            Rc::new(MemoryStorage::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_store() -> Rc<dyn KeyValueStore> {
    Rc::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{free_profile, memory_session};

    #[test]
    fn failed_navigation_is_reported() {
        assert!(navigation_succeeded::<String>("/login", Ok(())));
        assert!(!navigation_succeeded("/login", Err("SecurityError".to_string())));
    }

    #[test]
    fn token_ignores_blank_values() {
        let (session, storage, _nav) = memory_session(None);
        assert!(session.token().is_none());
        storage.set(TOKEN_KEY, "   ").unwrap();
        assert!(!session.has_token());
        session.begin("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn begin_drops_profile_of_previous_session() {
        let (session, _storage, _nav) = memory_session(Some("old"));
        session.cache_user(&free_profile());
        session.begin("new").unwrap();
        assert!(session.cached_user().is_none());
    }

    #[test]
    fn cached_user_round_trips_profile() {
        let (session, _storage, _nav) = memory_session(Some("abc"));
        session.cache_user(&free_profile());
        let cached = session.cached_user().unwrap();
        assert_eq!(cached.email, "free@example.com");
    }

    #[test]
    fn invalidate_clears_storage_and_redirects_once() {
        let (session, storage, nav) = memory_session(Some("abc"));
        session.cache_user(&free_profile());

        session.invalidate();
        assert!(storage.is_empty());
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);

        session.invalidate();
        assert_eq!(nav.redirects().len(), 1);
    }
}
