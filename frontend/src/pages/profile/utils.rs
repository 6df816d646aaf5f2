use crate::{
    api::{ApiError, ChangePasswordRequest},
    utils::validate::{require, validate_password},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    pub fn to_request(&self) -> Result<ChangePasswordRequest, ApiError> {
        require(&self.current, "Current password")?;
        validate_password(&self.new)?;
        if self.new != self.confirm {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(ChangePasswordRequest {
            current_password: self.current.clone(),
            new_password: self.new.clone(),
        })
    }
}
