use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{
        AdminPage, DashboardPage, ExpensesPage, HelpPage, HistoryPage, HomePage, IncomePage,
        LoginPage, NotFoundPage, PaymentPage, PricingPage, ProfilePage, RegisterPage,
        ReportsPage,
    },
    state::{auth::AuthProvider, provide_session, session::SessionContext},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/dashboard",
    "/expenses",
    "/income",
    "/reports",
    "/history",
    "/admin",
    "/pricing",
    "/payment",
    "/help",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/expenses",
    "/income",
    "/reports",
    "/history",
    "/admin",
    "/payment",
    "/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/pricing", "/help"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_session(SessionContext::browser());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/expenses" view=ProtectedExpenses/>
                    <Route path="/income" view=ProtectedIncome/>
                    <Route path="/reports" view=ProtectedReports/>
                    <Route path="/history" view=ProtectedHistory/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/pricing" view=PricingPage/>
                    <Route path="/payment" view=ProtectedPayment/>
                    <Route path="/help" view=HelpPage/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedExpenses() -> impl IntoView {
    view! { <RequireAuth><ExpensesPage/></RequireAuth> }
}

#[component]
fn ProtectedIncome() -> impl IntoView {
    view! { <RequireAuth><IncomePage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn ProtectedHistory() -> impl IntoView {
    view! { <RequireAuth><HistoryPage/></RequireAuth> }
}

// AdminPage carries its own admin check inside the session guard
#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAuth><AdminPage/></RequireAuth> }
}

#[component]
fn ProtectedPayment() -> impl IntoView {
    view! { <RequireAuth><PaymentPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}
