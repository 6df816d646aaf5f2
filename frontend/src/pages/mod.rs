pub mod admin;
pub mod dashboard;
pub mod help;
pub mod history;
pub mod home;
pub mod ledger;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod pricing;
pub mod profile;
pub mod register;
pub mod reports;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use help::HelpPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use ledger::{ExpensesPage, IncomePage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use payment::PaymentPage;
pub use pricing::PricingPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use reports::ReportsPage;
