use crate::api::{ReportRow, Transaction};
use crate::utils::time::parse_api_date;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// `(year, month)` of a monthly report row, whatever shape its label has.
pub fn month_key(row: &ReportRow) -> Option<(i32, u32)> {
    let label = row.label_text();
    let mut parts = label.split('-');
    let year = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

pub fn month_total(rows: &[ReportRow], today: NaiveDate) -> f64 {
    rows.iter()
        .filter(|row| month_key(row) == Some((today.year(), today.month())))
        .map(|row| row.total)
        .sum()
}

pub fn average_daily(total: f64, today: NaiveDate) -> f64 {
    (total / f64::from(today.day())).round()
}

/// Category totals for the month of `today`, largest first.
pub fn category_totals(expenses: &[Transaction], today: NaiveDate) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        let in_month = parse_api_date(&expense.date)
            .map(|d| d.year() == today.year() && d.month() == today.month())
            .unwrap_or(false);
        if in_month {
            *totals.entry(expense.category.clone()).or_default() += expense.amount;
        }
    }
    let mut totals: Vec<_> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}

/// Width of a bar relative to the largest value, in whole percent.
pub fn bar_percent(value: f64, max: f64) -> u32 {
    if max <= 0.0 || value <= 0.0 {
        0
    } else {
        ((value / max) * 100.0).round().clamp(1.0, 100.0) as u32
    }
}
