use crate::api::{ApiClient, ApiError, Ledger, Transaction, TransactionInput};

pub async fn list(api: &ApiClient, ledger: Ledger) -> Result<Vec<Transaction>, ApiError> {
    api.list_entries(ledger).await
}

pub async fn categories(api: &ApiClient, ledger: Ledger) -> Result<Vec<String>, ApiError> {
    api.list_categories(ledger).await
}

/// Creates when `id` is `None`, updates otherwise.
pub async fn save(
    api: &ApiClient,
    ledger: Ledger,
    id: Option<String>,
    input: TransactionInput,
) -> Result<(), ApiError> {
    match id {
        Some(id) => api.update_entry(ledger, &id, &input).await,
        None => api.create_entry(ledger, &input).await,
    }
}

pub async fn delete(api: &ApiClient, ledger: Ledger, id: String) -> Result<(), ApiError> {
    api.delete_entry(ledger, &id).await
}
