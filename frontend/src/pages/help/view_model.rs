use super::utils::TicketForm;
use crate::{
    api::{ApiError, CreateSupportTicket},
    state::use_api,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HelpViewModel {
    pub form: RwSignal<TicketForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub send_action: Action<CreateSupportTicket, Result<(), ApiError>>,
}

impl HelpViewModel {
    pub fn submit(&self) {
        if self.send_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(request) => {
                self.error.set(None);
                self.send_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_help_view_model() -> HelpViewModel {
    let api = use_api();
    let send_action = create_action(move |request: &CreateSupportTicket| {
        let api = api.clone();
        let request = request.clone();
        async move { api.create_support_ticket(&request).await }
    });

    let vm = HelpViewModel {
        form: create_rw_signal(TicketForm::default()),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        send_action,
    };

    create_effect(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    vm.form.set(TicketForm::default());
                    vm.notice.set(Some(
                        "Message sent. We'll get back to you as soon as possible.".into(),
                    ));
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}
