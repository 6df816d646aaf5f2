use super::repository;
use crate::{
    api::{ApiError, ReportPeriod, ReportRow},
    state::use_api,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub period: RwSignal<ReportPeriod>,
    pub report: Resource<ReportPeriod, Result<Vec<ReportRow>, ApiError>>,
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = use_api();
    let period = create_rw_signal(ReportPeriod::Monthly);
    let report = create_resource(
        move || period.get(),
        move |period| {
            let api = api.clone();
            async move { repository::fetch_report(&api, period).await }
        },
    );
    ReportsViewModel { period, report }
}
