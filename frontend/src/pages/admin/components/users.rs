use crate::{
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::admin::{
        utils::{role_badge_class, ROLE_OPTIONS},
        view_model::AdminViewModel,
    },
    state::access::Role,
};
use leptos::*;

#[component]
pub fn UsersSection(vm: AdminViewModel) -> impl IntoView {
    let busy = vm.role_action.pending();
    view! {
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || vm.users.get().map(|result| match result {
                Ok(users) if users.is_empty() => view! { <EmptyState title="No users found" /> }.into_view(),
                Ok(users) => view! {
                    <table class="w-full text-sm bg-white border rounded-lg">
                        <thead>
                            <tr class="text-left text-slate-500">
                                <th class="p-2">"Name"</th>
                                <th class="p-2">"Email"</th>
                                <th class="p-2">"Role"</th>
                                <th class="p-2">"Change role"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {users.into_iter().map(|user| {
                                let role = Role::from_profile(user.role.as_deref());
                                let user_id = store_value(user.id.clone());
                                view! {
                                    <tr class="border-t">
                                        <td class="p-2">{user.display_name().to_string()}</td>
                                        <td class="p-2">{user.email.clone()}</td>
                                        <td class="p-2">
                                            <span class=format!("px-2 py-0.5 rounded text-xs uppercase {}", role_badge_class(role))>
                                                {role.as_str()}
                                            </span>
                                        </td>
                                        <td class="p-2">
                                            <select
                                                class="border rounded px-2 py-1"
                                                disabled=move || busy.get()
                                                on:change=move |ev| {
                                                    let selected = Role::from_profile(Some(&event_target_value(&ev)));
                                                    if selected != role {
                                                        vm.change_role(user_id.get_value(), selected);
                                                    }
                                                }
                                            >
                                                {ROLE_OPTIONS.into_iter().map(|option| view! {
                                                    <option value=option.as_str() selected={option == role}>
                                                        {option.as_str()}
                                                    </option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view(),
                Err(err) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
            })}
        </Suspense>
    }
}
