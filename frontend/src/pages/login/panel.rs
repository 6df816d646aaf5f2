use super::view_model::use_login_view_model;
use crate::components::{error::InlineErrorMessage, layout::PublicLayout};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login | CAPE"/>
        <PublicLayout>
            <LoginPanel />
        </PublicLayout>
    }
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div class="text-center">
                <h2 class="text-3xl font-bold text-slate-900">"Welcome back"</h2>
                <p class="mt-2 text-sm text-slate-600">"Sign in to your account to continue"</p>
            </div>
            <InlineErrorMessage error=vm.error />
            <form class="space-y-4 bg-white p-6 rounded-lg border" on:submit=on_submit>
                <label class="block">
                    <span class="text-sm font-medium">"Email address"</span>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        class="mt-1 block w-full border rounded px-3 py-2"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">"Password"</span>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        class="mt-1 block w-full border rounded px-3 py-2"
                        prop:value=move || vm.password.get()
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="w-full py-2 rounded bg-emerald-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="text-center text-sm">
                "No account yet? " <a href="/register" class="text-emerald-700">"Register"</a>
            </p>
        </div>
    }
}
