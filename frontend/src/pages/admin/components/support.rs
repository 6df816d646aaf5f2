use crate::{
    api::SupportTicket,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::admin::{
        utils::{TICKET_FILTERS, TICKET_STATUSES},
        view_model::AdminViewModel,
    },
    utils::time::format_api_date,
};
use leptos::*;
use serde_json::Value;

fn requester(ticket: &SupportTicket) -> String {
    match &ticket.user {
        Some(Value::Object(map)) => map
            .get("email")
            .or_else(|| map.get("username"))
            .and_then(Value::as_str)
            .unwrap_or("-")
            .to_string(),
        _ => "-".into(),
    }
}

#[component]
pub fn SupportSection(vm: AdminViewModel) -> impl IntoView {
    view! {
        <div class="flex justify-end mb-3">
            <select
                class="border rounded px-2 py-1"
                prop:value=move || vm.ticket_filter.get()
                on:change=move |ev| vm.ticket_filter.set(event_target_value(&ev))
            >
                {TICKET_FILTERS.into_iter().map(|f| view! { <option value=f>{f}</option> }).collect_view()}
            </select>
        </div>
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || vm.tickets.get().map(|result| match result {
                Ok(tickets) if tickets.is_empty() => {
                    view! { <EmptyState title="No support tickets" /> }.into_view()
                }
                Ok(tickets) => tickets
                    .into_iter()
                    .map(|ticket| view! { <TicketCard vm=vm ticket=ticket /> })
                    .collect_view(),
                Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn TicketCard(vm: AdminViewModel, ticket: SupportTicket) -> impl IntoView {
    let ticket_id = ticket.id.clone();
    let is_open = move || vm.replying.get().as_deref() == Some(ticket_id.as_str());
    let busy = vm.ticket_action.pending();
    let stored = store_value(ticket.clone());
    view! {
        <div class="bg-white border rounded-lg p-4 mb-3">
            <div class="flex justify-between text-sm text-slate-500">
                <span>{requester(&ticket)}</span>
                <span>{ticket.created_at.as_deref().map(format_api_date).unwrap_or_default()}</span>
            </div>
            <p class="font-medium mt-1">{ticket.subject.clone().unwrap_or_else(|| "Support request".into())}</p>
            <p class="text-sm mt-1">{ticket.message.clone()}</p>
            <p class="text-xs mt-1 uppercase">{ticket.status.clone()}</p>
            <Show
                when=is_open
                fallback=move || view! {
                    <button
                        class="mt-2 text-emerald-700 underline text-sm"
                        on:click=move |_| stored.with_value(|t| vm.open_reply(t))
                    >
                        "Reply"
                    </button>
                }
            >
                <div class="mt-3 space-y-2">
                    <textarea
                        class="w-full border rounded p-2"
                        rows="3"
                        prop:value=move || vm.reply_form.get().response
                        on:input=move |ev| vm.reply_form.update(|f| f.response = event_target_value(&ev))
                    ></textarea>
                    <select
                        class="border rounded px-2 py-1"
                        prop:value=move || vm.reply_form.get().status
                        on:change=move |ev| vm.reply_form.update(|f| f.status = event_target_value(&ev))
                    >
                        {TICKET_STATUSES.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                    </select>
                    <div class="space-x-2">
                        <button
                            class="px-3 py-1 rounded bg-emerald-600 text-white"
                            disabled=move || busy.get()
                            on:click=move |_| vm.send_reply()
                        >
                            "Send"
                        </button>
                        <button class="px-3 py-1 rounded border" on:click=move |_| vm.replying.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
