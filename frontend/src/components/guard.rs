use crate::{
    components::layout::LoadingSpinner,
    state::{
        access::{Access, Feature},
        auth::{use_auth, GuardStatus},
        session::LOGIN_PATH,
        use_session,
    },
};
use leptos::*;

pub const HOME_PATH: &str = "/";
pub const PRICING_PATH: &str = "/pricing";

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_session();
    let status = create_memo(move |_| auth.get().status);
    create_effect(move |_| {
        if let Some(target) = auth_redirect(status.get()) {
            session.navigate(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(status.get())
            fallback=move || {
                if status.get() == GuardStatus::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(status: GuardStatus) -> bool {
    status == GuardStatus::Authenticated
}

fn auth_redirect(status: GuardStatus) -> Option<&'static str> {
    match status {
        GuardStatus::Unauthenticated => Some(LOGIN_PATH),
        _ => None,
    }
}

/// Page-level guard for the admin console. Non-admins are sent home once
/// their access has resolved.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_session();
    let status = create_memo(move |_| auth.get().status);
    let access = create_memo(move |_| auth.get().access);
    create_effect(move |_| {
        if let Some(target) = admin_redirect(status.get(), access.get().as_ref()) {
            session.navigate(target);
        }
    });
    view! {
        <Show
            when=move || should_render_admin_children(status.get(), access.get().as_ref())
            fallback=move || {
                if admin_redirect(status.get(), access.get().as_ref()).is_none() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn admin_redirect(status: GuardStatus, access: Option<&Access>) -> Option<&'static str> {
    match (status, access) {
        (GuardStatus::Unauthenticated, _) => Some(LOGIN_PATH),
        (GuardStatus::Authenticated, Some(access)) if !access.is_admin() => Some(HOME_PATH),
        _ => None,
    }
}

fn should_render_admin_children(status: GuardStatus, access: Option<&Access>) -> bool {
    status == GuardStatus::Authenticated && access.map(Access::is_admin).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateView {
    Loading,
    Unlocked,
    Upsell,
}

fn gate_view(access: Option<&Access>, feature: Feature) -> GateView {
    match access {
        None => GateView::Loading,
        Some(access) if access.unlocks(feature) => GateView::Unlocked,
        Some(_) => GateView::Upsell,
    }
}

/// Renders `children` only when the resolved access unlocks `feature`.
#[component]
pub fn FeatureGate(feature: Feature, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let view_kind = create_memo(move |_| gate_view(auth.get().access.as_ref(), feature));
    let children = store_value(children);
    move || match view_kind.get() {
        GateView::Loading => view! { <LoadingSpinner /> }.into_view(),
        GateView::Unlocked => children.with_value(|children| children()).into_view(),
        GateView::Upsell => view! { <UpgradePrompt feature=feature /> }.into_view(),
    }
}

#[component]
pub fn UpgradePrompt(feature: Feature) -> impl IntoView {
    view! {
        <div class="upgrade-prompt border border-amber-300 bg-amber-50 rounded-lg p-6 text-center">
            <p class="font-semibold text-amber-800">
                {format!("{} is available on the Pro plan", feature.label())}
            </p>
            <p class="text-sm text-amber-700 mt-1">
                "Upgrade to unlock charts, reports and more."
            </p>
            <a href=PRICING_PATH class="inline-block mt-4 px-4 py-2 rounded bg-amber-600 text-white">
                "Upgrade to Pro"
            </a>
        </div>
    }
}
