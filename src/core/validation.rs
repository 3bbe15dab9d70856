//! Client-side checks for the sign-in, sign-up and password reset forms
//!
//! These are shallow: a field is either filled in or not, an email only has
//! to contain `@` and the terms box must be ticked. Nothing is sent anywhere.

use thiserror::Error;

/// A form field that failed validation. `Display` is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please agree to the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

/// Field must contain something other than whitespace
pub fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    require("Email", value)?;
    if !value.contains('@') {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    require("Password confirmation", confirmation)?;
    if password != confirmation {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Sign-up is blocked until the terms checkbox is ticked
pub fn validate_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted {
        Ok(())
    } else {
        Err(FieldError::TermsNotAccepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("Name", "Ada").is_ok());
        assert_eq!(require("Name", ""), Err(FieldError::Required("Name")));
        assert_eq!(require("Name", "   \t"), Err(FieldError::Required("Name")));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        // Only the '@' is checked
        assert!(validate_email("a@b").is_ok());

        assert_eq!(validate_email(""), Err(FieldError::Required("Email")));
        assert_eq!(
            validate_email("ada.example.com"),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_confirmation() {
        assert!(validate_confirmation("hunter22", "hunter22").is_ok());
        assert_eq!(
            validate_confirmation("hunter22", ""),
            Err(FieldError::Required("Password confirmation"))
        );
        assert_eq!(
            validate_confirmation("hunter22", "hunter23"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_terms() {
        assert!(validate_terms(true).is_ok());
        assert_eq!(validate_terms(false), Err(FieldError::TermsNotAccepted));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required("Email").to_string(), "Email is required");
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            FieldError::TermsNotAccepted.to_string(),
            "Please agree to the Terms of Service and Privacy Policy"
        );
    }
}
