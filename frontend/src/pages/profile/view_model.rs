use super::{repository, utils::PasswordForm};
use crate::{
    api::{ApiError, ChangePasswordRequest, UserProfile},
    state::use_api,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub profile: Resource<(), Option<UserProfile>>,
    pub password_form: RwSignal<PasswordForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub password_action: Action<ChangePasswordRequest, Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn submit_password(&self) {
        if self.password_action.pending().get_untracked() {
            return;
        }
        match self.password_form.get_untracked().to_request() {
            Ok(request) => {
                self.error.set(None);
                self.password_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_api();

    let api_profile = api.clone();
    let profile = create_resource(
        || (),
        move |_| {
            let api = api_profile.clone();
            async move { repository::load_profile(&api).await }
        },
    );

    let password_action = create_action(move |request: &ChangePasswordRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::change_password(&api, request).await }
    });

    let vm = ProfileViewModel {
        profile,
        password_form: create_rw_signal(PasswordForm::default()),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        password_action,
    };

    create_effect(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(()) => {
                    vm.password_form.set(PasswordForm::default());
                    vm.notice.set(Some("Password changed".into()));
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}
