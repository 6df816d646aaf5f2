use super::{
    components::{
        payments::PaymentsSection, subscription::SubscriptionDurationSection,
        support::SupportSection, users::UsersSection,
    },
    layout::{AdminDashboardScaffold, AdminTabs},
    utils::AdminTab,
    view_model::use_admin_view_model,
};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    view! {
        <AdminDashboardScaffold>
            <AdminTabs vm=vm />
            <InlineErrorMessage error=vm.error />
            {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            {move || match vm.tab.get() {
                AdminTab::Users => view! { <UsersSection vm=vm /> }.into_view(),
                AdminTab::Payments => view! { <PaymentsSection vm=vm /> }.into_view(),
                AdminTab::Support => view! { <SupportSection vm=vm /> }.into_view(),
                AdminTab::Subscription => view! { <SubscriptionDurationSection vm=vm /> }.into_view(),
            }}
        </AdminDashboardScaffold>
    }
}
