use super::{
    utils::{ACCOUNT_NAME, ACCOUNT_NUMBER, BANK_NAME, PRO_PRICE},
    view_model::{use_payment_view_model, PaymentViewModel},
};
use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, SuccessMessage},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let vm = use_payment_view_model();
    view! {
        <Title text="Payment | CAPE"/>
        <Layout>
            <PaymentPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn PaymentPanel(vm: PaymentViewModel) -> impl IntoView {
    let on_file = move |ev: ev::Event| {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::{api::ApiError, utils::file::read_selected_file};
            spawn_local(async move {
                match read_selected_file(&ev).await {
                    Ok(file) => vm.proof.set(file),
                    Err(message) => vm.error.set(Some(ApiError::validation(message))),
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (ev, vm);
    };

    view! {
        <div class="max-w-2xl mx-auto bg-white border rounded-lg p-6 space-y-6">
            <div>
                <h1 class="text-xl font-semibold">"Payment Details"</h1>
                <p class="text-sm text-slate-500">"Please complete your payment and upload the proof"</p>
            </div>
            <div>
                <p class="text-sm font-medium">"Bank Transfer Details"</p>
                <div class="mt-2 p-4 bg-gray-50 rounded-lg space-y-2 text-sm">
                    <p>"Bank: " {BANK_NAME}</p>
                    <p>"Account Number: " {ACCOUNT_NUMBER}</p>
                    <p>"Account Name: " {ACCOUNT_NAME}</p>
                    <p class="font-semibold">"Amount: " {PRO_PRICE}</p>
                </div>
            </div>
            <Show when=move || !vm.pending.with(Vec::is_empty)>
                <div class="pending-notice border border-amber-300 bg-amber-50 rounded p-3 text-sm text-amber-800">
                    "Your previous payment is awaiting review. You can submit a new proof once it has been processed."
                </div>
            </Show>
            <InlineErrorMessage error=vm.error />
            {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div>
                    <label class="block text-sm font-medium" for="notes">"Additional Notes (Optional)"</label>
                    <textarea
                        id="notes"
                        class="mt-1 w-full border rounded p-2"
                        placeholder="Add any notes about your payment..."
                        prop:value=move || vm.notes.get()
                        on:input=move |ev| vm.notes.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label class="block text-sm font-medium" for="proof">"Payment Proof"</label>
                    <input id="proof" type="file" accept="image/*" class="mt-1" on:change=on_file />
                    <p class="text-sm text-gray-500 mt-1">
                        "Please upload a screenshot or photo of your payment receipt"
                    </p>
                    {move || vm.proof.get().map(|file| view! {
                        <p class="text-xs text-slate-500 mt-1">{file.name}</p>
                    })}
                </div>
                <button
                    type="submit"
                    id="submit-proof"
                    class="w-full py-2 rounded bg-emerald-600 text-white"
                    disabled=move || vm.submit_disabled()
                >
                    {move || if vm.upload_action.pending().get() { "Uploading..." } else { "Submit Payment Proof" }}
                </button>
            </form>
        </div>
    }
}
