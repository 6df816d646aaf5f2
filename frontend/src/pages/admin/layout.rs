use super::{utils::AdminTab, view_model::AdminViewModel};
use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AdminTabs(vm: AdminViewModel) -> impl IntoView {
    view! {
        <nav class="flex gap-2 border-b">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        if vm.tab.get() == tab {
                            "px-4 py-2 border-b-2 border-emerald-600 font-semibold"
                        } else {
                            "px-4 py-2 text-slate-500"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| vm.select_tab(tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn AdminDashboardScaffold(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Admin console"</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        "Manage users, verify payments, answer support tickets and set the subscription length."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
