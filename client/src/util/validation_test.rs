use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn is_valid_email_accepts_simple_addresses() {
    assert!(is_valid_email("john.doe@example.com"));
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first+tag@sub.domain.org"));
}

#[test]
fn is_valid_email_rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("john"));
    assert!(!is_valid_email("john@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("john@.com"));
}

#[test]
fn is_valid_email_rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("john doe@example.com"));
    assert!(!is_valid_email("john@exa mple.com"));
    assert!(!is_valid_email("john@@example.com"));
    assert!(!is_valid_email("john@example@test.com"));
}

// =============================================================
// Mobile
// =============================================================

#[test]
fn is_valid_mobile_counts_digits_only() {
    assert!(is_valid_mobile("(123) 456-7890"));
    assert!(is_valid_mobile("1234567890"));
    assert!(!is_valid_mobile("(123) 456-789"));
    assert!(!is_valid_mobile(""));
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn passwords_match_requires_equal_non_empty_values() {
    assert!(passwords_match("hunter2", "hunter2"));
    assert!(!passwords_match("hunter2", "hunter3"));
    assert!(!passwords_match("", ""));
    assert!(!passwords_match("hunter2", ""));
}

#[test]
fn field_error_messages_match_inline_copy() {
    assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address.");
    assert_eq!(FieldError::InvalidMobile.to_string(), "Please enter a valid mobile number.");
    assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match.");
}
