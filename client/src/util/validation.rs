//! Field validation rules for the registration form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::util::phone;

/// `local@domain.tld` with no whitespace and exactly one `@` per part.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Inline validation failure for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid mobile number.")]
    InvalidMobile,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    phone::is_complete_phone(mobile)
}

/// Both passwords present and identical.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !password.is_empty() && !confirm.is_empty() && password == confirm
}
