use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CategoryName, ListPayload, ReportPeriod, ReportRow, Transaction, TransactionInput},
};

/// The two money books a user keeps. Both share the same REST shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ledger {
    Expenses,
    Income,
}

impl Ledger {
    pub fn base_path(&self) -> &'static str {
        match self {
            Self::Expenses => "/expenses",
            Self::Income => "/income",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Income => "Income",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Expenses => "expense",
            Self::Income => "income",
        }
    }

    fn entry_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_path(), encode_segment(id))
    }
}

impl ApiClient {
    pub async fn list_entries(&self, ledger: Ledger) -> Result<Vec<Transaction>, ApiError> {
        let payload: ListPayload<Transaction> = self.get_json(ledger.base_path()).await?;
        Ok(payload.into_vec())
    }

    pub async fn create_entry(
        &self,
        ledger: Ledger,
        input: &TransactionInput,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(input).map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::POST, ledger.base_path(), Some(body))
            .await
    }

    pub async fn update_entry(
        &self,
        ledger: Ledger,
        id: &str,
        input: &TransactionInput,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(input).map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::PUT, &ledger.entry_path(id), Some(body))
            .await
    }

    pub async fn delete_entry(&self, ledger: Ledger, id: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &ledger.entry_path(id), None)
            .await
    }

    pub async fn list_categories(&self, ledger: Ledger) -> Result<Vec<String>, ApiError> {
        let path = format!("{}/categories", ledger.base_path());
        let payload: ListPayload<CategoryName> = self.get_json(&path).await?;
        Ok(payload
            .into_vec()
            .into_iter()
            .map(CategoryName::into_string)
            .collect())
    }

    pub async fn recent_expenses(&self) -> Result<Vec<Transaction>, ApiError> {
        let payload: ListPayload<Transaction> = self.get_json("/expenses/recent").await?;
        Ok(payload.into_vec())
    }

    pub async fn expense_report(&self, period: ReportPeriod) -> Result<Vec<ReportRow>, ApiError> {
        let path = format!("/expenses/report/{}", period.as_path());
        let payload: ListPayload<ReportRow> = self.get_json(&path).await?;
        Ok(payload.into_vec())
    }
}
