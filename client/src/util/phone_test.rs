use super::*;

#[test]
fn digits_only_strips_punctuation() {
    assert_eq!(digits_only("(123) 456-7890"), "1234567890");
    assert_eq!(digits_only("abc"), "");
}

#[test]
fn format_phone_input_short_inputs_stay_bare() {
    assert_eq!(format_phone_input(""), "");
    assert_eq!(format_phone_input("1"), "1");
    assert_eq!(format_phone_input("123"), "123");
}

#[test]
fn format_phone_input_wraps_area_code_after_three_digits() {
    assert_eq!(format_phone_input("1234"), "(123) 4");
    assert_eq!(format_phone_input("123456"), "(123) 456");
}

#[test]
fn format_phone_input_adds_dash_after_six_digits() {
    assert_eq!(format_phone_input("1234567"), "(123) 456-7");
    assert_eq!(format_phone_input("1234567890"), "(123) 456-7890");
}

#[test]
fn format_phone_input_progressive_typing_reaches_full_format() {
    let mut field = String::new();
    for ch in "1234567890".chars() {
        field.push(ch);
        field = format_phone_input(&field);
    }
    assert_eq!(field, "(123) 456-7890");
}

#[test]
fn format_phone_input_drops_digits_past_ten() {
    assert_eq!(format_phone_input("(123) 456-78901"), "(123) 456-7890");
}

#[test]
fn format_phone_input_backspace_over_separator_reformats() {
    assert_eq!(format_phone_input("(123) "), "123");
    assert_eq!(format_phone_input("(123) 456-"), "(123) 456");
}

#[test]
fn is_complete_phone_requires_exactly_ten_digits() {
    assert!(is_complete_phone("(123) 456-7890"));
    assert!(!is_complete_phone("(123) 456-789"));
    assert!(!is_complete_phone("12345678901"));
    assert!(!is_complete_phone(""));
}
