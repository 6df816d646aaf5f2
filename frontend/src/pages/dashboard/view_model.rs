use super::{repository, utils};
use crate::{
    api::{ApiError, ReportRow, Transaction},
    state::use_api,
    utils::time::today_in_app_tz,
};
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub total: f64,
    pub average_daily: f64,
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub recent: Resource<(), Result<Vec<Transaction>, ApiError>>,
    pub summary: Resource<(), Result<MonthSummary, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_api();

    let api_recent = api.clone();
    let recent = create_resource(
        || (),
        move |_| {
            let api = api_recent.clone();
            async move { repository::fetch_recent(&api).await }
        },
    );

    let summary = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                let rows = repository::fetch_monthly_totals(&api).await?;
                let today = today_in_app_tz();
                let total = utils::month_total(&rows, today);
                Ok(MonthSummary {
                    total,
                    average_daily: utils::average_daily(total, today),
                })
            }
        },
    );

    DashboardViewModel { recent, summary }
}

/// Data behind the Pro chart section. Only created once the gate opens.
#[derive(Clone, Copy)]
pub struct ChartsViewModel {
    pub trend: Resource<(), Result<Vec<ReportRow>, ApiError>>,
    pub categories: Resource<(), Result<Vec<(String, f64)>, ApiError>>,
}

pub fn use_charts_view_model() -> ChartsViewModel {
    let api = use_api();

    let api_trend = api.clone();
    let trend = create_resource(
        || (),
        move |_| {
            let api = api_trend.clone();
            async move { repository::fetch_six_month_trend(&api).await }
        },
    );

    let categories = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                let expenses = repository::fetch_expenses(&api).await?;
                Ok(utils::category_totals(&expenses, today_in_app_tz()))
            }
        },
    );

    ChartsViewModel { trend, categories }
}
