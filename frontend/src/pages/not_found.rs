use crate::components::layout::PublicLayout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found | CAPE"/>
        <PublicLayout>
            <div class="text-center py-24">
                <h1 class="text-6xl font-bold text-slate-300">"404"</h1>
                <p class="mt-4 text-lg text-slate-600">"Oops! Page not found"</p>
                <a href="/" class="inline-block mt-6 text-emerald-700 underline">"Return to Home"</a>
            </div>
        </PublicLayout>
    }
}
