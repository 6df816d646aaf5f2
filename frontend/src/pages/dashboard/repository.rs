use crate::api::{ApiClient, ApiError, Ledger, ReportPeriod, ReportRow, Transaction};

pub async fn fetch_recent(api: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    api.recent_expenses().await
}

pub async fn fetch_monthly_totals(api: &ApiClient) -> Result<Vec<ReportRow>, ApiError> {
    api.expense_report(ReportPeriod::Monthly).await
}

pub async fn fetch_six_month_trend(api: &ApiClient) -> Result<Vec<ReportRow>, ApiError> {
    api.expense_report(ReportPeriod::LastSixMonths).await
}

pub async fn fetch_expenses(api: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    api.list_entries(Ledger::Expenses).await
}
