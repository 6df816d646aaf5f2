use crate::api::{ApiClient, ApiError, ReportPeriod, ReportRow};

pub async fn fetch_report(api: &ApiClient, period: ReportPeriod) -> Result<Vec<ReportRow>, ApiError> {
    api.expense_report(period).await
}

pub fn grand_total(rows: &[ReportRow]) -> f64 {
    rows.iter().map(|row| row.total).sum()
}
