use super::{repository, utils::EntryForm};
use crate::{
    api::{ApiError, Ledger, Transaction, TransactionInput},
    state::use_api,
    utils::time::today_in_app_tz,
};
use leptos::*;

type SavePayload = (Option<String>, TransactionInput);

#[derive(Clone, Copy)]
pub struct LedgerViewModel {
    pub ledger: Ledger,
    pub entries: Resource<u32, Result<Vec<Transaction>, ApiError>>,
    pub categories: Resource<(), Result<Vec<String>, ApiError>>,
    pub search: RwSignal<String>,
    pub category_filter: RwSignal<String>,
    pub form: RwSignal<EntryForm>,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub save_action: Action<SavePayload, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    reload: RwSignal<u32>,
}

impl LedgerViewModel {
    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.set(EntryForm::blank(today_in_app_tz()));
        self.error.set(None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, entry: &Transaction) {
        self.editing.set(Some(entry.id.clone()));
        self.form.set(EntryForm::from_entry(entry));
        self.error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.editing.set(None);
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_input() {
            Ok(input) => {
                self.error.set(None);
                self.save_action
                    .dispatch((self.editing.get_untracked(), input));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(id);
        }
    }

    pub fn reload(&self) {
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_ledger_view_model(ledger: Ledger) -> LedgerViewModel {
    let api = use_api();
    let reload = create_rw_signal(0u32);

    let api_list = api.clone();
    let entries = create_resource(
        move || reload.get(),
        move |_| {
            let api = api_list.clone();
            async move { repository::list(&api, ledger).await }
        },
    );

    let api_categories = api.clone();
    let categories = create_resource(
        || (),
        move |_| {
            let api = api_categories.clone();
            async move { repository::categories(&api, ledger).await }
        },
    );

    let api_save = api.clone();
    let save_action = create_action(move |(id, input): &SavePayload| {
        let api = api_save.clone();
        let (id, input) = (id.clone(), input.clone());
        async move { repository::save(&api, ledger, id, input).await }
    });

    let delete_action = create_action(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move { repository::delete(&api, ledger, id).await }
    });

    let vm = LedgerViewModel {
        ledger,
        entries,
        categories,
        search: create_rw_signal(String::new()),
        category_filter: create_rw_signal(String::new()),
        form: create_rw_signal(EntryForm::default()),
        form_open: create_rw_signal(false),
        editing: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        save_action,
        delete_action,
        reload,
    };

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    vm.close_form();
                    vm.notice
                        .set(Some(format!("{} saved", capitalize(ledger.singular()))));
                    vm.reload();
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            vm.pending_delete.set(None);
            match result {
                Ok(()) => {
                    vm.notice
                        .set(Some(format!("{} deleted", capitalize(ledger.singular()))));
                    vm.reload();
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
