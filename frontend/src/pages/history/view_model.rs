use super::{repository, utils::ListQuery};
use crate::{
    api::{ApiError, Paginated, Payment, SupportTicket},
    state::use_api,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryTab {
    #[default]
    Payments,
    Support,
}

#[derive(Clone, Copy)]
pub struct HistoryViewModel {
    pub tab: RwSignal<HistoryTab>,
    pub payment_query: RwSignal<ListQuery>,
    pub ticket_query: RwSignal<ListQuery>,
    pub payments: Resource<ListQuery, Result<Paginated<Payment>, ApiError>>,
    pub tickets: Resource<ListQuery, Result<Paginated<SupportTicket>, ApiError>>,
}

impl HistoryViewModel {
    pub fn filter_payments(&self, status: &str) {
        self.payment_query.update(|q| *q = q.with_status(status));
    }

    pub fn filter_tickets(&self, status: &str) {
        self.ticket_query.update(|q| *q = q.with_status(status));
    }
}

pub fn use_history_view_model() -> HistoryViewModel {
    let api = use_api();
    let payment_query = create_rw_signal(ListQuery::default());
    let ticket_query = create_rw_signal(ListQuery::default());

    let api_payments = api.clone();
    let payments = create_resource(
        move || payment_query.get(),
        move |query| {
            let api = api_payments.clone();
            async move { repository::fetch_payments(&api, &query).await }
        },
    );

    let tickets = create_resource(
        move || ticket_query.get(),
        move |query| {
            let api = api.clone();
            async move { repository::fetch_tickets(&api, &query).await }
        },
    );

    HistoryViewModel {
        tab: create_rw_signal(HistoryTab::default()),
        payment_query,
        ticket_query,
        payments,
        tickets,
    }
}
