use super::utils;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates locally and dispatches the login. Navigation to the
    /// dashboard happens inside the action on success.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if let Err(err) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest { email, password });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            password.set(String::new());
            error.set(Some(err));
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_memory_session;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_memory_session(None);
            let vm = use_login_view_model();
            assert!(vm.error.get_untracked().is_none());
            assert!(vm.email.get_untracked().is_empty());
        });
    }

    #[test]
    fn submit_with_blank_email_sets_validation_error() {
        with_runtime(|| {
            provide_memory_session(None);
            let vm = use_login_view_model();
            vm.password.set("secret".into());
            vm.submit();
            let err = vm.error.get_untracked().unwrap();
            assert_eq!(err.code(), "VALIDATION_ERROR");
            assert!(vm.login_action.input().get_untracked().is_none());
        });
    }
}
