use super::{
    utils::{filter_entries, total, EntryForm},
    view_model::{use_ledger_view_model, LedgerViewModel},
};
use crate::{
    api::{Ledger, Transaction},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, SuccessMessage},
    },
    utils::{format::format_rupiah, time::format_api_date},
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn ExpensesPage() -> impl IntoView {
    view! {
        <Title text="Expenses | CAPE"/>
        <Layout><LedgerPanel ledger=Ledger::Expenses /></Layout>
    }
}

#[component]
pub fn IncomePage() -> impl IntoView {
    view! {
        <Title text="Income | CAPE"/>
        <Layout><LedgerPanel ledger=Ledger::Income /></Layout>
    }
}

#[component]
pub fn LedgerPanel(ledger: Ledger) -> impl IntoView {
    let vm = use_ledger_view_model(ledger);
    let visible = Signal::derive(move || {
        vm.entries
            .get()
            .and_then(Result::ok)
            .map(|entries| {
                filter_entries(&entries, &vm.search.get(), &vm.category_filter.get())
            })
    });
    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());

    view! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">{ledger.title()}</h1>
                <button
                    class="px-4 py-2 rounded bg-emerald-600 text-white"
                    on:click=move |_| vm.open_create()
                >
                    {format!("Add {}", ledger.singular())}
                </button>
            </div>
            {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            <InlineErrorMessage error=vm.error />
            <Filters vm=vm />
            <Show when=move || vm.form_open.get()>
                <EntryEditor vm=vm />
            </Show>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || match (vm.entries.get(), visible.get()) {
                    (Some(Err(err)), _) => Some(
                        view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }
                            .into_view(),
                    ),
                    (Some(Ok(_)), Some(rows)) if rows.is_empty() => Some(
                        view! { <EmptyState title=format!("No {} found", ledger.singular()) /> }
                            .into_view(),
                    ),
                    (Some(Ok(_)), Some(rows)) => Some(view! { <EntryTable vm=vm rows=rows /> }.into_view()),
                    _ => None,
                }}
            </Suspense>
            <ConfirmDialog
                is_open=delete_open
                title=format!("Delete {}", ledger.singular())
                message="This entry will be removed permanently."
                confirm_label="Delete"
                destructive=true
                busy=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </div>
    }
}

#[component]
fn Filters(vm: LedgerViewModel) -> impl IntoView {
    let categories = move || {
        vm.categories
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    };
    view! {
        <div class="flex flex-col md:flex-row gap-2">
            <input
                type="search"
                placeholder="Search description or category"
                class="flex-1 border rounded px-3 py-2"
                prop:value=move || vm.search.get()
                on:input=move |ev| vm.search.set(event_target_value(&ev))
            />
            <select
                class="border rounded px-3 py-2"
                on:change=move |ev| vm.category_filter.set(event_target_value(&ev))
            >
                <option value="">"All categories"</option>
                {move || categories().into_iter().map(|c| {
                    let value = c.clone();
                    view! { <option value=value>{c}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn EntryEditor(vm: LedgerViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let field = move |get: fn(&EntryForm) -> String| move || vm.form.with(get);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let title = move || {
        let action = if vm.editing.get().is_some() { "Edit" } else { "New" };
        format!("{} {}", action, vm.ledger.singular())
    };
    view! {
        <form class="bg-white border rounded-lg p-4 grid md:grid-cols-2 gap-3" on:submit=on_submit>
            <h2 class="md:col-span-2 font-semibold">{title}</h2>
            <input
                type="text"
                inputmode="decimal"
                placeholder="Amount"
                class="border rounded px-3 py-2"
                prop:value=field(|f| f.amount.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    vm.form.update(|f| f.amount = v);
                }
            />
            <input
                type="text"
                list="ledger-categories"
                placeholder="Category"
                class="border rounded px-3 py-2"
                prop:value=field(|f| f.category.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    vm.form.update(|f| f.category = v);
                }
            />
            <datalist id="ledger-categories">
                {move || vm.categories.get().and_then(Result::ok).unwrap_or_default()
                    .into_iter()
                    .map(|c| view! { <option value=c></option> })
                    .collect_view()}
            </datalist>
            <input
                type="date"
                class="border rounded px-3 py-2"
                prop:value=field(|f| f.date.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    vm.form.update(|f| f.date = v);
                }
            />
            <input
                type="text"
                placeholder="Description"
                class="border rounded px-3 py-2"
                prop:value=field(|f| f.description.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    vm.form.update(|f| f.description = v);
                }
            />
            <div class="md:col-span-2 flex justify-end gap-2">
                <button type="button" class="px-4 py-2 rounded bg-slate-100" on:click=move |_| vm.close_form()>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-emerald-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    "Save"
                </button>
            </div>
        </form>
    }
}

#[component]
fn EntryTable(vm: LedgerViewModel, rows: Vec<Transaction>) -> impl IntoView {
    let sum = total(&rows);
    view! {
        <table class="w-full text-sm bg-white border rounded-lg">
            <thead>
                <tr class="text-left text-slate-500">
                    <th class="p-2">"Date"</th>
                    <th class="p-2">"Description"</th>
                    <th class="p-2">"Category"</th>
                    <th class="p-2 text-right">"Amount"</th>
                    <th class="p-2"></th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|entry| {
                    let id = entry.id.clone();
                    let edit_entry = entry.clone();
                    view! {
                        <tr class="border-t">
                            <td class="p-2">{format_api_date(&entry.date)}</td>
                            <td class="p-2">{entry.description}</td>
                            <td class="p-2">{entry.category}</td>
                            <td class="p-2 text-right">{format_rupiah(entry.amount)}</td>
                            <td class="p-2 text-right space-x-2">
                                <button class="text-emerald-700" on:click=move |_| vm.open_edit(&edit_entry)>
                                    "Edit"
                                </button>
                                <button
                                    class="text-red-600"
                                    on:click=move |_| vm.pending_delete.set(Some(id.clone()))
                                >
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr class="border-t font-semibold">
                    <td class="p-2" colspan="3">"Total"</td>
                    <td class="p-2 text-right">{format_rupiah(sum)}</td>
                    <td></td>
                </tr>
            </tfoot>
        </table>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_memory_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn ledger_panel_renders_title_and_add_button() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            view! { <LedgerPanel ledger=Ledger::Income /> }
        });
        assert!(html.contains("Income"));
        assert!(html.contains("Add income"));
    }

    #[test]
    fn entry_table_renders_rows_and_total() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            let vm = use_ledger_view_model(Ledger::Expenses);
            let rows = vec![
                Transaction {
                    id: "e1".into(),
                    amount: 120500.0,
                    category: "Food".into(),
                    description: "Grocery shopping".into(),
                    date: "2025-04-12".into(),
                },
                Transaction {
                    id: "e2".into(),
                    amount: 850000.0,
                    category: "Housing".into(),
                    description: "Monthly rent".into(),
                    date: "2025-04-01".into(),
                },
            ];
            view! { <EntryTable vm=vm rows=rows /> }
        });
        assert!(html.contains("Grocery shopping"));
        assert!(html.contains("12 Apr 2025"));
        assert!(html.contains("Rp 970.500"));
    }
}
