use super::utils::{ListQuery, PAGE_SIZE};
use crate::api::{ApiClient, ApiError, Paginated, Payment, SupportTicket};

pub async fn fetch_payments(api: &ApiClient, query: &ListQuery) -> Result<Paginated<Payment>, ApiError> {
    api.list_my_payments(query.page, PAGE_SIZE, query.status_param())
        .await
}

pub async fn fetch_tickets(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Paginated<SupportTicket>, ApiError> {
    api.list_my_support_tickets(query.page, PAGE_SIZE, query.status_param())
        .await
}
