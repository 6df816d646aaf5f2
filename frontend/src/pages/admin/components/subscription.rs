use crate::{
    components::layout::LoadingSpinner,
    pages::admin::view_model::AdminViewModel,
};
use leptos::*;

/// Days a Pro subscription lasts after a payment is approved.
#[component]
pub fn SubscriptionDurationSection(vm: AdminViewModel) -> impl IntoView {
    let busy = vm.duration_action.pending();
    view! {
        <div class="bg-white border rounded-lg p-6 max-w-md space-y-3">
            <h2 class="font-semibold">"Subscription duration"</h2>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || vm.duration.get().map(|result| match result {
                    Ok(days) => view! {
                        <p class="text-sm text-slate-500">{format!("Current: {} days", days)}</p>
                    }.into_view(),
                    Err(_) => view! {
                        <p class="text-sm text-slate-500">"Current value unavailable"</p>
                    }.into_view(),
                })}
            </Suspense>
            <label class="block text-sm" for="duration">"Days"</label>
            <input
                id="duration"
                type="number"
                min="1"
                class="w-full border rounded px-3 py-2"
                prop:value=move || vm.duration_input.get()
                on:input=move |ev| vm.duration_input.set(event_target_value(&ev))
            />
            <button
                class="px-4 py-2 rounded bg-emerald-600 text-white disabled:opacity-50"
                disabled=move || busy.get()
                on:click=move |_| vm.save_duration()
            >
                "Save"
            </button>
        </div>
    }
}
