//! Client-side form validation.
//!
//! Checks run locally before any request is issued; a failing field blocks
//! submission and its message is rendered inline next to the input.

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate an email address. Deliberately loose; the server is the
/// authority, this only catches obvious typos before a round trip.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("Enter a valid email address".to_string());
    }
    Ok(())
}

/// Validate a login password: presence only.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Validate a new password at registration.
pub fn validate_new_password(password: &str) -> Result<(), String> {
    validate_password(password)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Validate a required free-text field such as a name.
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

/// Validate the login form. Returns the first failing message.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)
}

/// Validate the registration form. Returns the first failing message.
pub fn validate_register(
    email: &str,
    password: &str,
    full_name: &str,
    firm_name: &str,
) -> Result<(), String> {
    validate_email(email)?;
    validate_new_password(password)?;
    validate_required(full_name, "Full name")?;
    validate_required(firm_name, "Firm name")
}

/// Validate the profile form. Names are required; email must stay valid.
pub fn validate_profile(email: &str, full_name: &str, firm_name: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_required(full_name, "Full name")?;
    validate_required(firm_name, "Firm name")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@firm.example.co").is_ok());
        assert!(validate_email("  padded@b.com  ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn test_login_password_presence_only() {
        assert!(validate_password("x").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_new_password_minimum_length() {
        assert!(validate_new_password("short").is_err());
        assert!(validate_new_password("long enough").is_ok());
    }

    #[test]
    fn test_register_first_failure_wins() {
        let err = validate_register("bad", "short", "", "").unwrap_err();
        assert_eq!(err, "Enter a valid email address");

        let err = validate_register("a@b.com", "longenough", "", "Firm").unwrap_err();
        assert_eq!(err, "Full name is required");
    }

    #[test]
    fn test_register_ok() {
        assert!(validate_register("a@b.com", "longenough", "Ada", "Firm").is_ok());
    }

    #[test]
    fn test_profile_requires_names() {
        assert!(validate_profile("a@b.com", "Ada", "Firm").is_ok());
        assert!(validate_profile("a@b.com", " ", "Firm").is_err());
        assert!(validate_profile("a@b.com", "Ada", "").is_err());
    }
}
