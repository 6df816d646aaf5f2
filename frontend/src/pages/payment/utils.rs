use crate::{
    api::ApiError,
    utils::{file::SelectedFile, polling::keep_polling},
};

pub const BANK_NAME: &str = "Bank Central Asia (BCA)";
pub const ACCOUNT_NUMBER: &str = "1234567890";
pub const ACCOUNT_NAME: &str = "CAPE Admin";
pub const PRO_PRICE: &str = "Rp99.000";

/// What to do with the poller after a pending-payments check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    Continue,
    /// `reviewed` is set when payments were pending before and none are now.
    Stop { reviewed: bool },
}

pub fn next_poll_step(was_pending: bool, pending_count: usize) -> PollStep {
    if keep_polling(pending_count) {
        PollStep::Continue
    } else {
        PollStep::Stop {
            reviewed: was_pending,
        }
    }
}

pub fn validate_proof(proof: Option<&SelectedFile>) -> Result<&SelectedFile, ApiError> {
    let proof = proof.ok_or_else(|| ApiError::validation("Please choose a payment proof image"))?;
    if proof.bytes.is_empty() {
        return Err(ApiError::validation("The selected file is empty"));
    }
    if !proof.is_image() {
        return Err(ApiError::validation("Payment proof must be an image"));
    }
    Ok(proof)
}
