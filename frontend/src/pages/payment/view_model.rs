use super::{
    repository,
    utils::{next_poll_step, validate_proof, PollStep},
};
use crate::{
    api::{ApiError, Payment},
    state::{auth::use_refresh_access_action, use_api},
    utils::{
        file::SelectedFile,
        polling::{submit_disabled, PollingTask, PAYMENT_POLL_INTERVAL_MS},
    },
};
use leptos::*;
use log::{info, warn};

type UploadPayload = (String, SelectedFile);

#[derive(Clone, Copy)]
pub struct PaymentViewModel {
    pub notes: RwSignal<String>,
    pub proof: RwSignal<Option<SelectedFile>>,
    pub pending: RwSignal<Vec<Payment>>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub upload_action: Action<UploadPayload, Result<(), ApiError>>,
    pub check_action: Action<(), Result<Vec<Payment>, ApiError>>,
    poller: StoredValue<Option<PollingTask>>,
}

impl PaymentViewModel {
    pub fn submit_disabled(&self) -> bool {
        submit_disabled(
            self.pending.with(Vec::len),
            self.upload_action.pending().get(),
        )
    }

    pub fn is_polling(&self) -> bool {
        self.poller
            .with_value(|task| task.as_ref().map(PollingTask::is_active).unwrap_or(false))
    }

    pub fn submit(&self) {
        if self.submit_disabled_untracked() {
            return;
        }
        let proof = self.proof.get_untracked();
        match validate_proof(proof.as_ref()) {
            Ok(proof) => {
                self.error.set(None);
                self.upload_action
                    .dispatch((self.notes.get_untracked(), proof.clone()));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    /// Applies one pending-payments check. Returns true when payments that
    /// were pending have all been reviewed.
    pub fn handle_check(&self, result: Result<Vec<Payment>, ApiError>) -> bool {
        let pending = match result {
            Ok(pending) => pending,
            Err(err) => {
                warn!("pending payment check failed: {}", err);
                return false;
            }
        };
        let was_pending = !self.pending.with_untracked(Vec::is_empty);
        let step = next_poll_step(was_pending, pending.len());
        self.pending.set(pending);
        match step {
            PollStep::Continue => {
                self.ensure_polling();
                false
            }
            PollStep::Stop { reviewed } => {
                self.stop_polling();
                reviewed
            }
        }
    }

    pub fn stop_polling(&self) {
        let _ = self.poller.try_update_value(|task| {
            if let Some(mut task) = task.take() {
                task.cancel();
            }
        });
    }

    fn ensure_polling(&self) {
        if self.is_polling() {
            return;
        }
        let check = self.check_action;
        let task = PollingTask::start(PAYMENT_POLL_INTERVAL_MS, move || {
            if !check.pending().get_untracked() {
                check.dispatch(());
            }
        });
        self.poller.set_value(Some(task));
    }

    fn submit_disabled_untracked(&self) -> bool {
        submit_disabled(
            self.pending.with_untracked(Vec::len),
            self.upload_action.pending().get_untracked(),
        )
    }
}

pub fn use_payment_view_model() -> PaymentViewModel {
    let api = use_api();
    let refresh_access = use_refresh_access_action();

    let api_upload = api.clone();
    let upload_action = create_action(move |(notes, proof): &UploadPayload| {
        let api = api_upload.clone();
        let (notes, proof) = (notes.clone(), proof.clone());
        async move { repository::submit_proof(&api, notes, proof).await }
    });

    let check_action = create_action(move |_: &()| {
        let api = api.clone();
        async move { repository::fetch_pending(&api).await }
    });

    let vm = PaymentViewModel {
        notes: create_rw_signal(String::new()),
        proof: create_rw_signal(None),
        pending: create_rw_signal(Vec::new()),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        upload_action,
        check_action,
        poller: store_value(None),
    };

    // first check on mount; later ones come from the poller
    create_effect(move |_| untrack(|| check_action.dispatch(())));

    create_effect(move |_| {
        if let Some(result) = check_action.value().get() {
            if vm.handle_check(result) {
                info!("pending payments reviewed, refreshing access");
                vm.notice
                    .set(Some("Your payment has been reviewed".into()));
                refresh_access.dispatch(());
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(()) => {
                    vm.notes.set(String::new());
                    vm.proof.set(None);
                    vm.notice.set(Some(
                        "Payment proof submitted. We will review it and upgrade your account soon."
                            .into(),
                    ));
                    check_action.dispatch(());
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    on_cleanup(move || vm.stop_polling());

    vm
}
