use crate::{
    api::{Payment, PaymentDecision},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::admin::{utils::PAYMENT_FILTERS, view_model::AdminViewModel},
    utils::{format::format_rupiah, time::format_api_date},
};
use leptos::*;

#[component]
pub fn PaymentsSection(vm: AdminViewModel) -> impl IntoView {
    view! {
        <div class="flex justify-end mb-3">
            <select
                class="border rounded px-2 py-1"
                prop:value=move || vm.payment_filter.get()
                on:change=move |ev| vm.payment_filter.set(event_target_value(&ev))
            >
                {PAYMENT_FILTERS.into_iter().map(|f| view! { <option value=f>{f}</option> }).collect_view()}
            </select>
        </div>
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || vm.payments.get().map(|result| match result {
                Ok(payments) if payments.is_empty() => {
                    view! { <EmptyState title="No payments to review" /> }.into_view()
                }
                Ok(payments) => view! { <PaymentTable vm=vm payments=payments /> }.into_view(),
                Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn PaymentTable(vm: AdminViewModel, payments: Vec<Payment>) -> impl IntoView {
    let busy = vm.verify_action.pending();
    view! {
        <table class="w-full text-sm bg-white border rounded-lg">
            <thead>
                <tr class="text-left text-slate-500">
                    <th class="p-2">"User"</th>
                    <th class="p-2">"Date"</th>
                    <th class="p-2">"Amount"</th>
                    <th class="p-2">"Proof"</th>
                    <th class="p-2">"Status"</th>
                    <th class="p-2"></th>
                </tr>
            </thead>
            <tbody>
                {payments.into_iter().map(|payment| {
                    let id = store_value(payment.id.clone());
                    let pending = payment.is_pending();
                    view! {
                        <tr class="border-t">
                            <td class="p-2">{payment.payer_label()}</td>
                            <td class="p-2">
                                {payment.shown_date().map(format_api_date).unwrap_or_else(|| "-".into())}
                            </td>
                            <td class="p-2">{payment.amount.map(format_rupiah).unwrap_or_else(|| "-".into())}</td>
                            <td class="p-2">
                                {payment.proof_image_url.clone().map(|url| view! {
                                    <a href=url target="_blank" class="text-emerald-700 underline">"View"</a>
                                })}
                            </td>
                            <td class="p-2">{payment.status.clone()}</td>
                            <td class="p-2 space-x-2">
                                <Show when=move || pending>
                                    <button
                                        class="px-2 py-1 rounded bg-emerald-600 text-white"
                                        disabled=move || busy.get()
                                        on:click=move |_| vm.decide(id.get_value(), PaymentDecision::Approved)
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        class="px-2 py-1 rounded bg-red-600 text-white"
                                        disabled=move || busy.get()
                                        on:click=move |_| vm.decide(id.get_value(), PaymentDecision::Rejected)
                                    >
                                        "Reject"
                                    </button>
                                </Show>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
