use crate::components::guard::RequireAdmin;
use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AdminPanel;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Title text="Admin | CAPE"/>
        <RequireAdmin>
            <AdminPanel />
        </RequireAdmin>
    }
}
