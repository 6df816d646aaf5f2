use crate::{
    components::layout::PublicLayout,
    state::{
        access::{Access, Plan},
        auth::use_auth,
    },
};
use leptos::*;
use leptos_meta::Title;

pub const PAYMENT_PATH: &str = "/payment";

struct PlanCard {
    plan: Plan,
    name: &'static str,
    tagline: &'static str,
    price: &'static str,
    features: &'static [(&'static str, bool)],
}

static PLANS: [PlanCard; 2] = [
    PlanCard {
        plan: Plan::Free,
        name: "Free Plan",
        tagline: "Perfect for getting started",
        price: "Rp0",
        features: &[
            ("WhatsApp Integration", false),
            ("Web Input Only", true),
            ("Reports Access", false),
            ("Basic Expense Tracking", true),
        ],
    },
    PlanCard {
        plan: Plan::Pro,
        name: "Pro Plan",
        tagline: "For advanced expense tracking",
        price: "Rp99.000",
        features: &[
            ("WhatsApp Integration", true),
            ("Web & WhatsApp Input", true),
            ("Full Reports Access", true),
            ("Detailed Analytics", true),
        ],
    },
];

/// The card that should read "Current Plan". `None` until access resolves.
fn current_plan(access: Option<&Access>) -> Option<Plan> {
    access.map(|access| if access.is_pro() { Plan::Pro } else { Plan::Free })
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let current = create_memo(move |_| current_plan(auth.get().access.as_ref()));
    view! {
        <Title text="Pricing | CAPE"/>
        <PublicLayout>
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold mb-4">"Choose Your Plan"</h1>
                <p class="text-gray-600 max-w-2xl mx-auto">
                    "Select the perfect plan for your needs and start tracking your expenses efficiently"
                </p>
            </div>
            <div class="grid md:grid-cols-2 gap-8">
                {PLANS.iter().map(|card| view! { <PlanColumn card=card current=current /> }).collect_view()}
            </div>
        </PublicLayout>
    }
}

#[component]
fn PlanColumn(card: &'static PlanCard, current: Memo<Option<Plan>>) -> impl IntoView {
    let plan = card.plan;
    let is_current = move || current.get() == Some(plan);
    view! {
        <div class="bg-white border rounded-lg p-6 relative">
            {(plan == Plan::Pro).then(|| view! {
                <span class="absolute -top-2 right-4 px-2 py-0.5 text-xs rounded bg-emerald-600 text-white">
                    "Recommended"
                </span>
            })}
            <h2 class="text-xl font-semibold">{card.name}</h2>
            <p class="text-sm text-slate-500">{card.tagline}</p>
            <p class="mt-4">
                <span class="text-3xl font-bold">{card.price}</span>
                <span class="text-gray-500 ml-2">"/month"</span>
            </p>
            <ul class="mt-4 space-y-2">
                {card.features.iter().map(|(label, included)| {
                    let (mark, class) = if *included {
                        ("✓", "text-emerald-600 mr-2")
                    } else {
                        ("✗", "text-red-500 mr-2")
                    };
                    view! { <li><span class=class>{mark}</span>{*label}</li> }
                }).collect_view()}
            </ul>
            <div class="mt-6">
                {move || {
                    if is_current() {
                        view! {
                            <span class="current-plan block text-center w-full border rounded py-2">"Current Plan"</span>
                        }
                        .into_view()
                    } else if plan == Plan::Pro {
                        view! {
                            <a href=PAYMENT_PATH class="block text-center w-full rounded py-2 bg-emerald-600 text-white">
                                "Upgrade to Pro"
                            </a>
                        }
                        .into_view()
                    } else {
                        ().into_view()
                    }
                }}
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::access::Role;
    use crate::test_support::helpers::{access, free_profile, pro_profile, provide_auth, provide_memory_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn free_user_sees_upgrade_link() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            provide_auth(free_profile(), Some(access(Role::Free, Plan::Free)));
            view! { <PricingPage /> }
        });
        assert!(html.contains("Rp99.000"));
        assert!(html.contains("href=\"/payment\""));
        assert_eq!(html.matches("current-plan").count(), 1);
    }

    #[test]
    fn pro_user_has_no_upgrade_link() {
        let html = render_to_string(|| {
            provide_memory_session(Some("abc"));
            provide_auth(pro_profile(), Some(access(Role::Free, Plan::Pro)));
            view! { <PricingPage /> }
        });
        assert!(!html.contains("Upgrade to Pro"));
        assert!(html.contains("Current Plan"));
    }
}
