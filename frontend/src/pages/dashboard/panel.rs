use super::{
    utils::bar_percent,
    view_model::{use_charts_view_model, use_dashboard_view_model},
};
use crate::{
    api::Transaction,
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        guard::FeatureGate,
        layout::{Layout, LoadingSpinner},
    },
    state::access::Feature,
    utils::{format::format_rupiah, time::format_api_date},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | CAPE"/>
        <Layout>
            <DashboardPanel />
        </Layout>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"Dashboard"</h1>
                <p class="text-slate-600">"Overview of your personal finances"</p>
            </div>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || vm.summary.get().map(|result| match result {
                    Ok(summary) => view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            <div class="bg-white rounded-lg border p-4">
                                <p class="text-sm text-slate-500">"Total expenses this month"</p>
                                <p class="text-2xl font-bold">{format_rupiah(summary.total)}</p>
                            </div>
                            <div class="bg-white rounded-lg border p-4">
                                <p class="text-sm text-slate-500">"Average daily spending"</p>
                                <p class="text-2xl font-bold">{format_rupiah(summary.average_daily)}</p>
                            </div>
                        </div>
                    }.into_view(),
                    Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                })}
            </Suspense>
            <FeatureGate feature=Feature::DashboardCharts>
                {|| view! { <DashboardCharts /> }}
            </FeatureGate>
            <section class="bg-white rounded-lg border p-4">
                <h2 class="text-lg font-semibold mb-2">"Recent transactions"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.recent.get().map(|result| match result {
                        Ok(items) if items.is_empty() => view! {
                            <EmptyState title="No transactions yet" description="Expenses you add will show up here." />
                        }.into_view(),
                        Ok(items) => view! { <RecentTable items=items /> }.into_view(),
                        Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn RecentTable(items: Vec<Transaction>) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-slate-500">
                    <th>"Description"</th>
                    <th>"Category"</th>
                    <th>"Date"</th>
                    <th class="text-right">"Amount"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|item| view! {
                    <tr class="border-t">
                        <td>{item.description}</td>
                        <td>{item.category}</td>
                        <td>{format_api_date(&item.date)}</td>
                        <td class="text-right">{format_rupiah(item.amount)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn Bars(rows: Vec<(String, f64)>) -> impl IntoView {
    let max = rows.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    view! {
        <ul class="space-y-2">
            {rows.into_iter().map(|(label, value)| {
                let width = format!("width: {}%", bar_percent(value, max));
                view! {
                    <li>
                        <div class="flex justify-between text-sm">
                            <span>{label}</span>
                            <span>{format_rupiah(value)}</span>
                        </div>
                        <div class="h-2 bg-slate-100 rounded">
                            <div class="h-2 bg-emerald-500 rounded" style=width></div>
                        </div>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

#[component]
fn DashboardCharts() -> impl IntoView {
    let vm = use_charts_view_model();
    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <section class="bg-white rounded-lg border p-4">
                <h2 class="text-lg font-semibold mb-2">"Last 6 months"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.trend.get().map(|result| match result {
                        Ok(rows) => {
                            let rows = rows.iter().map(|r| (r.label_text(), r.total)).collect::<Vec<_>>();
                            view! { <Bars rows=rows /> }.into_view()
                        }
                        Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                    })}
                </Suspense>
            </section>
            <section class="bg-white rounded-lg border p-4">
                <h2 class="text-lg font-semibold mb-2">"Spending by category"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.categories.get().map(|result| match result {
                        Ok(rows) => view! { <Bars rows=rows /> }.into_view(),
                        Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::access::{Plan, Role};
    use crate::test_support::helpers::{access, free_profile, provide_auth, provide_memory_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn free_dashboard_shows_upgrade_prompt_instead_of_charts() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            provide_auth(free_profile(), Some(access(Role::Free, Plan::Free)));
            view! { <DashboardPanel /> }
        });
        assert!(html.contains("Dashboard charts is available on the Pro plan"));
        assert!(!html.contains("Spending by category"));
    }

    #[test]
    fn pro_dashboard_shows_chart_sections() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            provide_auth(free_profile(), Some(access(Role::Free, Plan::Pro)));
            view! { <DashboardPanel /> }
        });
        assert!(html.contains("Spending by category"));
        assert!(html.contains("Last 6 months"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let html = render_to_string(|| {
            view! { <Bars rows=vec![("Food".to_string(), 50.0), ("Rent".to_string(), 100.0)] /> }
        });
        assert!(html.contains("width: 50%"));
        assert!(html.contains("width: 100%"));
    }
}
