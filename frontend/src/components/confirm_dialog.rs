use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal asking for a yes/no decision. Escape and the backdrop cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        "px-4 py-2 text-sm font-semibold rounded-md bg-red-600 text-white disabled:opacity-50"
    } else {
        "px-4 py-2 text-sm font-semibold rounded-md bg-emerald-600 text-white disabled:opacity-50"
    };
    let confirm_label = store_value(
        confirm_label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| "Confirm".to_string()),
    );
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold">{move || title_text.get()}</h2>
                    <p class="text-sm text-slate-600">{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 text-sm rounded-md bg-slate-100"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label.get_value()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
