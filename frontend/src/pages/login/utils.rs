use crate::{api::ApiError, utils::validate};

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    validate::require(email, "Email")?;
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}
