use crate::api::ApiError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    require(email, "Email")?;
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ApiError::validation("Enter a valid email address")),
    }
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// `1.500` or `12.345.678`: dots used as thousands separators.
fn is_dot_grouped(raw: &str) -> bool {
    let mut groups = raw.split('.');
    let head_ok = groups
        .next()
        .map(|head| (1..=3).contains(&head.len()) && head.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false);
    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses a positive amount; accepts `1.500,50` and `1.500` (Indonesian
/// grouping) as well as `1500.5`.
pub fn parse_amount(raw: &str) -> Result<f64, ApiError> {
    let raw = raw.trim();
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else if is_dot_grouped(raw) {
        raw.replace('.', "")
    } else {
        raw.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ApiError::validation("Amount must be greater than 0")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("  ", "Category").is_err());
        assert!(require("Food", "Category").is_ok());
        assert_eq!(
            require("", "Date").unwrap_err().to_string(),
            "Date is required"
        );
    }

    #[test]
    fn email_and_password_rules() {
        assert!(validate_email("sari@example.com").is_ok());
        assert!(validate_email("sari@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn amounts_must_be_positive() {
        assert_eq!(parse_amount("1500").unwrap(), 1500.0);
        assert_eq!(parse_amount("1.500,50").unwrap(), 1500.5);
        assert_eq!(parse_amount("1.500").unwrap(), 1500.0);
        assert_eq!(parse_amount("12.345.678").unwrap(), 12_345_678.0);
        assert_eq!(parse_amount("1500.5").unwrap(), 1500.5);
        assert_eq!(parse_amount("1.5").unwrap(), 1.5);
        assert_eq!(parse_amount("1234.500").unwrap(), 1234.5);
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
