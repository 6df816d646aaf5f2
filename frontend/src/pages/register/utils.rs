use crate::{
    api::{ApiError, RegisterRequest},
    utils::validate,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub accept_terms: bool,
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        validate::require(&self.name, "Name")?;
        validate::validate_email(&self.email)?;
        validate::validate_password(&self.password)?;
        if !self.accept_terms {
            return Err(ApiError::validation(
                "You must agree to the terms of service",
            ));
        }
        let phone = self.phone_number.trim();
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            name: " Sari ".into(),
            email: "sari@example.com".into(),
            password: "secret1".into(),
            phone_number: String::new(),
            accept_terms: true,
        }
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.name, "Sari");
        assert!(request.phone_number.is_none());
    }

    #[test]
    fn terms_and_password_length_are_enforced() {
        let no_terms = RegisterForm {
            accept_terms: false,
            ..filled()
        };
        assert!(no_terms.to_request().is_err());

        let short = RegisterForm {
            password: "abc".into(),
            ..filled()
        };
        assert!(short
            .to_request()
            .unwrap_err()
            .to_string()
            .contains("at least 6"));
    }
}
