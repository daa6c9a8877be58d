//! Presence checks for signup and login input.
//!
//! Only emptiness (after trimming) is checked; the shape of an email is not.

use super::error::DomainError;

pub(crate) const EMAIL_REQUIRED: &str = "Email is required.";
pub(crate) const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub(crate) const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub(crate) const PASSWORD_REQUIRED: &str = "Password is required.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidationOutcome {
    pub(crate) valid: bool,
    pub(crate) errors: Vec<String>,
}

impl ValidationOutcome {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub(crate) fn into_result(self) -> Result<(), DomainError> {
        if self.valid {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(self.errors))
        }
    }
}

pub(crate) fn validate_signup(
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> ValidationOutcome {
    let mut errors = Vec::new();
    require(&mut errors, email, EMAIL_REQUIRED);
    require(&mut errors, first_name, FIRST_NAME_REQUIRED);
    require(&mut errors, last_name, LAST_NAME_REQUIRED);
    require(&mut errors, password, PASSWORD_REQUIRED);
    ValidationOutcome::from_errors(errors)
}

pub(crate) fn validate_login(email: &str, password: &str) -> ValidationOutcome {
    let mut errors = Vec::new();
    require(&mut errors, email, EMAIL_REQUIRED);
    require(&mut errors, password, PASSWORD_REQUIRED);
    ValidationOutcome::from_errors(errors)
}

pub(crate) fn require(errors: &mut Vec<String>, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_with_all_fields_is_valid() {
        let outcome = validate_signup("a@b.com", "Jane", "Doe", "secret");
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn signup_reports_blank_first_name() {
        let outcome = validate_signup("a@b.com", "", "Doe", "x");
        assert!(!outcome.valid);
        assert_eq!(outcome.errors, vec![FIRST_NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn signup_collects_every_failing_field_in_order() {
        let outcome = validate_signup("  ", "\t", "", " ");
        assert!(!outcome.valid);
        assert_eq!(
            outcome.errors,
            vec![
                EMAIL_REQUIRED.to_string(),
                FIRST_NAME_REQUIRED.to_string(),
                LAST_NAME_REQUIRED.to_string(),
                PASSWORD_REQUIRED.to_string(),
            ]
        );
    }

    #[test]
    fn signup_does_not_check_email_shape() {
        assert!(validate_signup("not-an-email", "Jane", "Doe", "x").valid);
    }

    #[test]
    fn login_requires_email_and_password() {
        let outcome = validate_login(" ", "");
        assert_eq!(
            outcome.errors,
            vec![EMAIL_REQUIRED.to_string(), PASSWORD_REQUIRED.to_string()]
        );
        assert!(validate_login("a@b.com", "pw").valid);
    }

    #[test]
    fn into_result_carries_error_list() {
        let err = validate_login("", "pw")
            .into_result()
            .expect_err("must be invalid");
        match err {
            DomainError::InvalidInput(errors) => assert_eq!(errors, vec![EMAIL_REQUIRED]),
            _ => panic!("expected DomainError::InvalidInput"),
        }
    }
}
