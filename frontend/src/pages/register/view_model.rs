use super::{repository, utils::RegisterForm};
use crate::{
    api::{ApiError, RegisterRequest},
    state::{session::LOGIN_PATH, use_api},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegisterForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_api();
    let form = create_rw_signal(RegisterForm::default());
    let error = create_rw_signal(None::<ApiError>);

    let register_action = create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            repository::register(&api, request).await?;
            api.session().navigate(LOGIN_PATH);
            Ok(())
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = register_action.value().get() {
            error.set(Some(err));
        }
    });

    RegisterViewModel {
        form,
        error,
        register_action,
    }
}
