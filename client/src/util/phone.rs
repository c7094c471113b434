//! North American phone number input formatting.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

/// Extract the ASCII digits from `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Count the digits in `raw`, ignoring punctuation and spaces.
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

/// Progressively reformat typed input as `(###) ###-####`.
///
/// Up to three digits are shown bare, four to six as `(###) ###`, and seven
/// or more as `(###) ###-####`. Digits beyond the tenth are dropped.
pub fn format_phone_input(raw: &str) -> String {
    let digits = digits_only(raw);
    let len = digits.len();
    if len <= 3 {
        digits
    } else if len <= 6 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        let end = len.min(PHONE_DIGITS);
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..end])
    }
}

/// Whether `raw` holds exactly ten digits.
pub fn is_complete_phone(raw: &str) -> bool {
    digit_count(raw) == PHONE_DIGITS
}
