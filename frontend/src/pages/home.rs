use crate::components::layout::PublicLayout;
use leptos::*;
use leptos_meta::Title;

const FEATURES: [(&str, &str); 3] = [
    (
        "WhatsApp Integration",
        "Track expenses directly through WhatsApp. Just send a message with your expense details and CAPE handles the rest.",
    ),
    (
        "Insightful Reports",
        "Get detailed monthly reports and visualizations to understand your spending patterns and save more.",
    ),
    (
        "Cross-Platform Access",
        "Access your expense data anytime, anywhere through our responsive web app or WhatsApp on your phone.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Connect WhatsApp",
        "Link your WhatsApp account to CAPE with a simple setup process that takes less than a minute.",
    ),
    (
        "Track Expenses",
        "Log expenses by sending a message to CAPE via WhatsApp or using our web interface.",
    ),
    (
        "Get Insights",
        "Access detailed reports and visualizations to understand your spending habits and make better financial decisions.",
    ),
];

fn cards(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    items
        .iter()
        .map(|(title, body)| {
            view! {
                <div class="bg-white border rounded-lg p-6">
                    <h3 class="font-semibold mb-2">{*title}</h3>
                    <p class="text-sm text-slate-600">{*body}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="CAPE | Expense tracking"/>
        <PublicLayout>
            <section class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-slate-900 sm:text-5xl">
                    "Track Expenses Effortlessly via WhatsApp or Web"
                </h1>
                <p class="mt-4 max-w-2xl mx-auto text-lg text-slate-600">
                    "CAPE makes expense tracking simple. Use WhatsApp or our web app to log expenses, categorize spending, and get insightful reports to manage your finances better."
                </p>
                <div class="mt-8 flex justify-center gap-3">
                    <a href="/register" class="px-6 py-3 rounded-md bg-emerald-600 text-white font-medium">
                        "Get Started for Free"
                    </a>
                    <a href="/pricing" class="px-6 py-3 rounded-md border font-medium">"See Pricing"</a>
                </div>
            </section>
            <section class="grid md:grid-cols-3 gap-6 py-8">{cards(&FEATURES)}</section>
            <h2 class="text-2xl font-bold text-center mt-8">"How it works"</h2>
            <section class="grid md:grid-cols-3 gap-6 py-8">{cards(&STEPS)}</section>
        </PublicLayout>
    }
}
