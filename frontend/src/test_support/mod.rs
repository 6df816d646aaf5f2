#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserProfile;
    use crate::state::access::{Access, Plan, Role};
    use crate::state::auth::{AuthContext, AuthState, GuardStatus};
    use crate::state::session::{Navigator, SessionContext, TOKEN_KEY};
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use leptos::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records redirects instead of leaving the page.
    pub struct RecordingNavigator {
        current: RefCell<String>,
        redirects: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn at(path: &str) -> Rc<Self> {
            Rc::new(Self {
                current: RefCell::new(path.to_string()),
                redirects: RefCell::new(Vec::new()),
            })
        }

        pub fn redirects(&self) -> Vec<String> {
            self.redirects.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> Option<String> {
            Some(self.current.borrow().clone())
        }

        fn redirect(&self, path: &str) {
            self.redirects.borrow_mut().push(path.to_string());
            *self.current.borrow_mut() = path.to_string();
        }
    }

    /// Session backed by memory, starting at `/`.
    pub fn memory_session(
        token: Option<&str>,
    ) -> (SessionContext, MemoryStorage, Rc<RecordingNavigator>) {
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.set(TOKEN_KEY, token).expect("memory storage write");
        }
        let navigator = RecordingNavigator::at("/");
        let session = SessionContext::new(Rc::new(storage.clone()), navigator.clone());
        (session, storage, navigator)
    }

    fn profile(id: &str, name: &str, role: &str) -> UserProfile {
        UserProfile {
            id: id.into(),
            username: name.into(),
            email: format!("{}@example.com", name),
            phone_number: None,
            role: Some(role.into()),
            force_logout: None,
        }
    }

    pub fn free_profile() -> UserProfile {
        profile("u-free", "free", "free")
    }

    pub fn pro_profile() -> UserProfile {
        profile("u-pro", "pro", "pro")
    }

    pub fn admin_profile() -> UserProfile {
        profile("u-admin", "admin", "admin")
    }

    pub fn access(role: Role, plan: Plan) -> Access {
        Access::new(role, plan)
    }

    /// Authenticated state with the given user and resolved access.
    pub fn provide_auth(user: UserProfile, access: Option<Access>) -> AuthContext {
        provide_auth_state(AuthState {
            status: GuardStatus::Authenticated,
            user: Some(user),
            access,
        })
    }

    pub fn provide_auth_state(state: AuthState) -> AuthContext {
        let ctx = create_signal(state);
        provide_context::<AuthContext>(ctx);
        ctx
    }

    /// Provides a memory-backed session so components never touch the browser.
    pub fn provide_memory_session(token: Option<&str>) -> Rc<RecordingNavigator> {
        let (session, _storage, navigator) = memory_session(token);
        crate::state::provide_session(session);
        navigator
    }
}
