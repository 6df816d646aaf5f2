use super::{repository::grand_total, view_model::use_reports_view_model};
use crate::{
    api::{ReportPeriod, ReportRow},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        guard::FeatureGate,
        layout::{Layout, LoadingSpinner},
    },
    state::access::Feature,
    utils::format::format_rupiah,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Title text="Reports | CAPE"/>
        <Layout>
            <h1 class="text-2xl font-bold mb-4">"Reports"</h1>
            <FeatureGate feature=Feature::Reports>
                {|| view! { <ReportsPanel /> }}
            </FeatureGate>
        </Layout>
    }
}

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let vm = use_reports_view_model();
    view! {
        <div class="space-y-4">
            <div class="flex gap-2">
                {ReportPeriod::ALL
                    .into_iter()
                    .map(|period| {
                        let class = move || {
                            if vm.period.get() == period {
                                "px-3 py-1 rounded bg-emerald-600 text-white"
                            } else {
                                "px-3 py-1 rounded bg-slate-100"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| vm.period.set(period)>
                                {period.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || vm.report.get().map(|result| match result {
                    Ok(rows) if rows.is_empty() => {
                        view! { <EmptyState title="No data for this period" /> }.into_view()
                    }
                    Ok(rows) => view! { <ReportTable rows=rows /> }.into_view(),
                    Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ReportTable(rows: Vec<ReportRow>) -> impl IntoView {
    let sum = grand_total(&rows);
    view! {
        <table class="w-full text-sm bg-white border rounded-lg">
            <thead>
                <tr class="text-left text-slate-500">
                    <th class="p-2">"Period"</th>
                    <th class="p-2 text-right">"Total"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr class="border-t">
                        <td class="p-2">{row.label_text()}</td>
                        <td class="p-2 text-right">{format_rupiah(row.total)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr class="border-t font-semibold">
                    <td class="p-2">"Grand total"</td>
                    <td class="p-2 text-right">{format_rupiah(sum)}</td>
                </tr>
            </tfoot>
        </table>
    }
}
