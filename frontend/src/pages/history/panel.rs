use super::{
    utils::{status_badge_class, status_label, ListQuery, PAYMENT_STATUSES, TICKET_STATUSES},
    view_model::{use_history_view_model, HistoryTab, HistoryViewModel},
};
use crate::{
    api::{ApiError, Paginated, Payment, SupportTicket},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    utils::{format::format_rupiah, time::format_api_date},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let vm = use_history_view_model();
    let tab_class = move |tab: HistoryTab| {
        move || {
            if vm.tab.get() == tab {
                "px-4 py-2 border-b-2 border-emerald-600 font-semibold"
            } else {
                "px-4 py-2 text-slate-500"
            }
        }
    };
    view! {
        <Title text="History | CAPE"/>
        <Layout>
            <h1 class="text-2xl font-bold mb-4">"History"</h1>
            <div class="flex gap-2 border-b mb-4">
                <button class=tab_class(HistoryTab::Payments) on:click=move |_| vm.tab.set(HistoryTab::Payments)>
                    "Payment"
                </button>
                <button class=tab_class(HistoryTab::Support) on:click=move |_| vm.tab.set(HistoryTab::Support)>
                    "Support"
                </button>
            </div>
            <Show
                when=move || vm.tab.get() == HistoryTab::Payments
                fallback=move || view! { <TicketHistory vm=vm /> }
            >
                <PaymentHistory vm=vm />
            </Show>
        </Layout>
    }
}

#[component]
fn StatusFilter(
    statuses: &'static [&'static str],
    query: RwSignal<ListQuery>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="border rounded px-2 py-1"
            prop:value=move || query.get().status
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {statuses
                .iter()
                .map(|status| view! { <option value=*status>{status_label(status)}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
fn Pager(query: RwSignal<ListQuery>, page_count: u32) -> impl IntoView {
    let page = move || query.get().page;
    view! {
        <div class="flex items-center justify-end gap-2 mt-3 text-sm">
            <button
                class="px-2 py-1 border rounded disabled:opacity-50"
                disabled=move || page() <= 1
                on:click=move |_| query.update(|q| *q = q.prev())
            >
                "Previous"
            </button>
            <span>{move || format!("Page {} of {}", page(), page_count)}</span>
            <button
                class="px-2 py-1 border rounded disabled:opacity-50"
                disabled=move || page() >= page_count
                on:click=move |_| query.update(|q| *q = q.next(page_count))
            >
                "Next"
            </button>
        </div>
    }
}

fn status_badge(status: &str) -> impl IntoView {
    let class = format!("px-2 py-0.5 rounded text-xs {}", status_badge_class(status));
    view! { <span class=class>{status_label(status)}</span> }
}

#[component]
fn PaymentHistory(vm: HistoryViewModel) -> impl IntoView {
    let on_change = Callback::new(move |status: String| vm.filter_payments(&status));
    view! {
        <div class="flex justify-end mb-3">
            <StatusFilter statuses=&PAYMENT_STATUSES query=vm.payment_query on_change=on_change />
        </div>
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || vm.payments.get().map(|result| match result {
                Ok(page) => payment_table(page, vm.payment_query).into_view(),
                Err(err) => error_view(err),
            })}
        </Suspense>
    }
}

fn payment_table(page: Paginated<Payment>, query: RwSignal<ListQuery>) -> impl IntoView {
    if page.data.is_empty() {
        return view! { <EmptyState title="No payments yet" /> }.into_view();
    }
    let page_count = page.page_count();
    view! {
        <table class="w-full text-sm bg-white border rounded-lg">
            <thead>
                <tr class="text-left text-slate-500">
                    <th class="p-2">"Date"</th>
                    <th class="p-2">"Amount"</th>
                    <th class="p-2">"Notes"</th>
                    <th class="p-2">"Status"</th>
                </tr>
            </thead>
            <tbody>
                {page.data.into_iter().map(|payment| view! {
                    <tr class="border-t">
                        <td class="p-2">
                            {payment.shown_date().map(format_api_date).unwrap_or_else(|| "-".into())}
                        </td>
                        <td class="p-2">{payment.amount.map(format_rupiah).unwrap_or_else(|| "-".into())}</td>
                        <td class="p-2">{payment.notes.clone().unwrap_or_default()}</td>
                        <td class="p-2">{status_badge(&payment.status)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
        <Pager query=query page_count=page_count />
    }
    .into_view()
}

#[component]
fn TicketHistory(vm: HistoryViewModel) -> impl IntoView {
    let on_change = Callback::new(move |status: String| vm.filter_tickets(&status));
    view! {
        <div class="flex justify-end mb-3">
            <StatusFilter statuses=&TICKET_STATUSES query=vm.ticket_query on_change=on_change />
        </div>
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || vm.tickets.get().map(|result| match result {
                Ok(page) => ticket_list(page, vm.ticket_query).into_view(),
                Err(err) => error_view(err),
            })}
        </Suspense>
    }
}

fn ticket_list(page: Paginated<SupportTicket>, query: RwSignal<ListQuery>) -> impl IntoView {
    if page.data.is_empty() {
        return view! { <EmptyState title="No support tickets yet" /> }.into_view();
    }
    let page_count = page.page_count();
    view! {
        <ul class="space-y-3">
            {page.data.into_iter().map(|ticket| view! {
                <li class="bg-white border rounded-lg p-4">
                    <div class="flex justify-between items-center">
                        <span class="font-medium">
                            {ticket.subject.clone().unwrap_or_else(|| "Support request".into())}
                        </span>
                        {status_badge(&ticket.status)}
                    </div>
                    <p class="text-sm mt-2">{ticket.message.clone()}</p>
                    {ticket.response.clone().map(|response| view! {
                        <p class="text-sm mt-2 text-emerald-700">"Reply: " {response}</p>
                    })}
                    <p class="text-xs text-slate-400 mt-2">
                        {ticket.created_at.as_deref().map(format_api_date).unwrap_or_default()}
                    </p>
                </li>
            }).collect_view()}
        </ul>
        <Pager query=query page_count=page_count />
    }
    .into_view()
}

fn error_view(err: ApiError) -> View {
    view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view()
}
