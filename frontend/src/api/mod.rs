mod admin;
mod auth;
pub mod client;
pub mod ledger;
pub mod payments;
mod support;
pub mod types;

pub use client::*;
pub use ledger::Ledger;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
