use super::{utils::RegisterForm, view_model::use_register_view_model};
use crate::components::{error::InlineErrorMessage, layout::PublicLayout};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register | CAPE"/>
        <PublicLayout>
            <RegisterPanel />
        </PublicLayout>
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    form: RwSignal<RegisterForm>,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium">{label}</span>
            <input
                id=id
                type=kind
                class="mt-1 block w-full border rounded px-3 py-2"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let pending = vm.register_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <h2 class="text-3xl font-bold text-center">"Create your account"</h2>
            <InlineErrorMessage error=vm.error />
            <form class="space-y-4 bg-white p-6 rounded-lg border" on:submit=on_submit>
                {text_field("name", "Full name", "text", form, |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("email", "Email address", "email", form, |f| f.email.clone(), |f, v| f.email = v)}
                {text_field("phone", "Phone number (optional)", "tel", form, |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                {text_field("password", "Password", "password", form, |f| f.password.clone(), |f, v| f.password = v)}
                <label class="flex items-center gap-2 text-sm">
                    <input
                        id="terms"
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.accept_terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.accept_terms = checked);
                        }
                    />
                    "I agree to the terms of service and privacy policy"
                </label>
                <button
                    type="submit"
                    class="w-full py-2 rounded bg-emerald-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <p class="text-center text-sm">
                "Already registered? " <a href="/login" class="text-emerald-700">"Sign in"</a>
            </p>
        </div>
    }
}
