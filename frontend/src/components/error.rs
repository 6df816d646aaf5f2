use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .and_then(|e| error_code_label(&e))
                        .map(|code| view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> })
                }}
            </div>
        </Show>
    }
}

/// Validation messages are self-explanatory; everything else shows its code.
fn error_code_label(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Validation(_) => None,
        other => Some(other.code()),
    }
}
