use super::{
    utils::PasswordForm,
    view_model::{use_profile_view_model, ProfileViewModel},
};
use crate::{
    api::UserProfile,
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, SuccessMessage},
    },
    state::{access::Access, auth::use_auth},
    utils::time::format_api_date,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <Title text="Profile | CAPE"/>
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6">
                <h1 class="text-2xl font-bold">"Profile"</h1>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.profile.get().map(|profile| view! { <ProfileCard profile=profile /> })}
                </Suspense>
                <SubscriptionCard />
                <PasswordCard vm=vm />
            </div>
        </Layout>
    }
}

#[component]
fn ProfileCard(profile: Option<UserProfile>) -> impl IntoView {
    let Some(profile) = profile else {
        return view! {
            <p class="text-sm text-slate-500">"Profile details are unavailable right now."</p>
        }
        .into_view();
    };
    view! {
        <dl class="bg-white border rounded-lg p-6 grid grid-cols-3 gap-3 text-sm">
            <dt class="text-slate-500">"Full Name"</dt>
            <dd class="col-span-2">{profile.display_name().to_string()}</dd>
            <dt class="text-slate-500">"Email Address"</dt>
            <dd class="col-span-2">{profile.email.clone()}</dd>
            <dt class="text-slate-500">"Phone"</dt>
            <dd class="col-span-2">{profile.phone_number.clone().unwrap_or_else(|| "-".into())}</dd>
        </dl>
    }
    .into_view()
}

fn subscription_line(access: &Access) -> String {
    match access.subscription_end.as_deref() {
        Some(end) if access.is_pro() => format!("Active until {}", format_api_date(end)),
        _ if access.is_pro() => "Active".into(),
        _ => "No active subscription".into(),
    }
}

#[component]
fn SubscriptionCard() -> impl IntoView {
    let (auth, _) = use_auth();
    let access = create_memo(move |_| auth.get().access);
    view! {
        <div class="bg-white border rounded-lg p-6 flex justify-between items-center">
            {move || match access.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(access) => {
                    let label = access.tier_label();
                    view! {
                        <div>
                            <p class="text-sm text-slate-500">"Plan"</p>
                            <p class="text-sm">{subscription_line(&access)}</p>
                        </div>
                        <span class=format!("tier-{} px-3 py-1 rounded-full text-xs uppercase bg-emerald-100", label)>
                            {label}
                        </span>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn PasswordCard(vm: ProfileViewModel) -> impl IntoView {
    let busy = vm.password_action.pending();
    let field = move |id: &'static str,
                      label: &'static str,
                      get: fn(&PasswordForm) -> String,
                      set: fn(&mut PasswordForm, String)| {
        view! {
            <div class="space-y-1">
                <label class="block text-sm" for=id>{label}</label>
                <input
                    id=id
                    type="password"
                    class="w-full border rounded px-3 py-2"
                    prop:value=move || vm.password_form.with(get)
                    on:input=move |ev| vm.password_form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };
    view! {
        <form
            class="bg-white border rounded-lg p-6 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_password();
            }
        >
            <h2 class="font-semibold">"Change password"</h2>
            <InlineErrorMessage error=vm.error />
            {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            {field("current-password", "Current password", |f| f.current.clone(), |f, v| f.current = v)}
            {field("new-password", "New password", |f| f.new.clone(), |f, v| f.new = v)}
            {field("confirm-password", "Confirm new password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
            <button
                type="submit"
                class="px-4 py-2 rounded bg-emerald-600 text-white"
                disabled=move || busy.get()
            >
                "Update password"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::access::{Plan, Role};

    #[test]
    fn subscription_line_reflects_plan() {
        let mut pro = Access::new(Role::Free, Plan::Pro);
        pro.subscription_end = Some("2025-12-31T00:00:00Z".into());
        assert_eq!(subscription_line(&pro), "Active until 31 Dec 2025");
        assert_eq!(
            subscription_line(&Access::new(Role::Admin, Plan::Free)),
            "Active"
        );
        assert_eq!(
            subscription_line(&Access::new(Role::Free, Plan::Free)),
            "No active subscription"
        );
    }
}
