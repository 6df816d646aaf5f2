use crate::state::{
    auth::{self, use_auth},
    use_session,
};
use leptos::*;

/// Links shown in the authenticated navigation bar.
pub const APP_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/expenses", "Expenses"),
    ("/income", "Income"),
    ("/reports", "Reports"),
    ("/history", "History"),
    ("/payment", "Payment"),
    ("/help", "Help"),
    ("/profile", "Profile"),
];

const LINK_CLASS: &str =
    "text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_admin = move || auth.get().is_admin();
    let tier = move || {
        auth.get()
            .access
            .map(|access| access.tier_label())
            .unwrap_or("pending")
    };
    let on_logout = auth::use_logout();
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
                <a href="/dashboard" class="text-xl font-semibold text-slate-900">"CAPE"</a>
                <button
                    type="button"
                    class="lg:hidden p-2 rounded-md text-slate-600"
                    on:click=toggle_menu
                    aria-expanded=move || menu_open.get()
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <nav class=move || {
                    if menu_open.get() { "flex flex-col lg:flex-row" } else { "hidden lg:flex" }
                }>
                    {APP_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class=LINK_CLASS on:click=move |_| set_menu_open.set(false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Show when=is_admin>
                        <a href="/admin" class=LINK_CLASS>"Admin"</a>
                    </Show>
                    <span class=move || {
                        format!("tier-badge tier-{} px-2 py-1 text-xs uppercase rounded bg-slate-100", tier())
                    }>
                        {tier}
                    </span>
                    <button on:click=move |_| on_logout.call(()) class=LINK_CLASS>
                        "Logout"
                    </button>
                </nav>
            </div>
        </header>
    }
}

/// Navigation for public pages: dashboard and logout with a session,
/// login and register without.
#[component]
pub fn PublicHeader() -> impl IntoView {
    let has_session = use_session().has_token();
    let on_logout = auth::use_logout();
    view! {
        <header class="bg-white border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
                <a href="/" class="text-xl font-semibold text-slate-900">"CAPE"</a>
                <nav class="flex gap-2">
                    <a href="/pricing" class=LINK_CLASS>"Pricing"</a>
                    <a href="/help" class=LINK_CLASS>"Help"</a>
                    {if has_session {
                        view! {
                            <a href="/dashboard" class=LINK_CLASS>"Dashboard"</a>
                            <button on:click=move |_| on_logout.call(()) class=LINK_CLASS>
                                "Logout"
                            </button>
                        }
                            .into_view()
                    } else {
                        view! {
                            <a href="/login" class=LINK_CLASS>"Login"</a>
                            <a href="/register" class=LINK_CLASS>"Register"</a>
                        }
                            .into_view()
                    }}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4">{children()}</main>
        </div>
    }
}

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <PublicHeader/>
            <main class="max-w-5xl mx-auto py-8 px-4">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-emerald-600"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="bg-emerald-50 border border-emerald-300 text-emerald-800 px-4 py-3 rounded mb-4">
            <p class="text-sm">{move || message.get()}</p>
        </div>
    }
}
