use crate::{
    api::{ApiError, Transaction, TransactionInput},
    utils::{time::input_date, validate},
};
use chrono::NaiveDate;

/// Entries whose description or category contains `search`
/// (case-insensitive), optionally restricted to one category.
pub fn filter_entries(entries: &[Transaction], search: &str, category: &str) -> Vec<Transaction> {
    let needle = search.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| category.is_empty() || entry.category == category)
        .filter(|entry| {
            needle.is_empty()
                || entry.description.to_lowercase().contains(&needle)
                || entry.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn total(entries: &[Transaction]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl EntryForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn from_entry(entry: &Transaction) -> Self {
        Self {
            amount: entry.amount.to_string(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            date: input_date(&entry.date),
        }
    }

    pub fn to_input(&self) -> Result<TransactionInput, ApiError> {
        let amount = validate::parse_amount(&self.amount)?;
        validate::require(&self.category, "Category")?;
        validate::require(&self.date, "Date")?;
        Ok(TransactionInput {
            amount,
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.trim().to_string(),
        })
    }
}
