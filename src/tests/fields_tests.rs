use std::{borrow::Cow, sync::Once};

use crate::{
    forms::{BdPhoneNumberField, BdPostCodeField, ErrorCode, Field, FieldOptions, RegexField},
    is_empty_value,
};

static LOGGER: Once = Once::new();

fn init_logger() {
    LOGGER.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

#[test]
fn empty_values() {
    assert!(is_empty_value(None));
    assert!(is_empty_value(Some("")));
    assert!(!is_empty_value(Some(" ")));
    assert!(!is_empty_value(Some("0")));
}

#[test]
fn post_code_accepts_four_digits() {
    init_logger();
    let field = BdPostCodeField::new();
    assert_eq!(field.clean(Some("1234")).unwrap(), "1234");
    assert_eq!(field.clean(Some("1000")).unwrap(), "1000");
}

#[test]
fn post_code_rejects_other_values() {
    init_logger();
    let field = BdPostCodeField::new();
    for input in ["123", "12345", "abcd", "12 34", " 1234", "1234\n", "১২৩"] {
        let err = field.clean(Some(input)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Invalid, "input {input:?}");
        assert_eq!(err.message(), "Enter a 4 digit post code.");
        assert_eq!(err.to_string(), "Enter a 4 digit post code.");
    }
}

#[test]
fn post_code_rejects_non_ascii_digits() {
    let field = BdPostCodeField::new();
    for input in ["১২০৭", "١٢٣٤", "１２３４"] {
        assert_eq!(field.clean(Some(input)).unwrap_err().code(), ErrorCode::Invalid, "input {input:?}");
    }
}

#[test]
fn post_code_empty_input() {
    let field = BdPostCodeField::new();
    assert_eq!(field.clean(None).unwrap(), "");
    assert_eq!(field.clean(Some("")).unwrap(), "");

    let required = BdPostCodeField::with_options(FieldOptions::new().required(true));
    assert!(required.required());
    let err = required.clean(Some("")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Required);
    assert_eq!(err.message(), "This field is required.");
}

#[test]
fn post_code_custom_message() {
    let field = BdPostCodeField::with_options(
        FieldOptions::new().error_message(ErrorCode::Invalid, "পোস্ট কোড ৪ অঙ্কের হতে হবে।"),
    );
    assert_eq!(field.options().message(ErrorCode::Invalid), "পোস্ট কোড ৪ অঙ্কের হতে হবে।");
    assert_eq!(field.clean(Some("99")).unwrap_err().message(), "পোস্ট কোড ৪ অঙ্কের হতে হবে।");
}

#[test]
fn phone_strips_separators() {
    init_logger();
    let field = BdPhoneNumberField::new();
    assert_eq!(field.clean(Some("(017) 123-45678")).unwrap(), "01712345678");
    assert_eq!(field.clean(Some("01712345678")).unwrap(), "01712345678");
    assert_eq!(field.clean(Some("880 1712 345678")).unwrap(), "8801712345678");
    assert_eq!(field.clean(Some("02-9556\t677")).unwrap(), "029556677");
    assert_eq!(field.clean(Some("  (02)  9556--677  ")).unwrap(), "029556677");
}

#[test]
fn phone_digit_count_bounds() {
    let field = BdPhoneNumberField::new();
    assert_eq!(field.clean(Some("12345678")).unwrap(), "12345678");
    assert_eq!(field.clean(Some("1234567890123")).unwrap(), "1234567890123");

    for input in ["1234567", "12345678901234", "123-4567", "(123) 4567-890-1234"] {
        let err = field.clean(Some(input)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Invalid, "input {input:?}");
        assert_eq!(err.message(), "Phone numbers must be between 8 to 13 digits.");
    }
}

#[test]
fn phone_rejects_other_characters() {
    let field = BdPhoneNumberField::new();
    for input in ["+8801712345678", "01712.345678", "0171234567a", "   ", "()-"] {
        assert!(field.clean(Some(input)).is_err(), "input {input:?}");
    }
}

#[test]
fn phone_empty_input() {
    let field = BdPhoneNumberField::new();
    assert_eq!(field.clean(None).unwrap(), "");
    assert_eq!(field.clean(Some("")).unwrap(), "");

    let required = BdPhoneNumberField::with_options(FieldOptions::new().required(true));
    assert_eq!(required.clean(None).unwrap_err().code(), ErrorCode::Required);
}

#[test]
fn phone_bengali_digits() {
    let input = "০১৭১২-৩৪৫৬৭৮";
    let err = BdPhoneNumberField::new().clean(Some(input)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert_eq!(
        BdPhoneNumberField::new().ascii_digits(true).clean(Some(input)).unwrap(),
        "01712345678"
    );
    assert_eq!(
        BdPhoneNumberField::new().ascii_digits(true).clean(Some("(٠١٧) ١٢٣٤٥٦٧٨")).unwrap(),
        "01712345678"
    );
}

#[test]
fn phone_keeps_non_ascii_spaces() {
    let field = BdPhoneNumberField::new();
    for input in ["01712\u{00A0}345678", "01712\u{3000}345678", "01712\u{2009}345678"] {
        assert_eq!(field.clean(Some(input)).unwrap_err().code(), ErrorCode::Invalid, "input {input:?}");
    }
    assert_eq!(field.clean(Some("01712\x0B345678\x0C")).unwrap(), "01712345678");
    assert_eq!(BdPhoneNumberField::normalize("0171\u{00A0}2"), "0171\u{00A0}2");
}

#[test]
fn default_messages_match_overrides_lookup() {
    let options = FieldOptions::new().error_message(ErrorCode::Required, "Give us a number.");
    let field = BdPhoneNumberField::with_options(options.clone().required(true));
    let err = field.clean(None).unwrap_err();
    assert_eq!(err.message(), field.options().message(ErrorCode::Required));
    assert_eq!(err.message(), "Give us a number.");
    assert_eq!(field.options().message(ErrorCode::Invalid), "Phone numbers must be between 8 to 13 digits.");
    assert_eq!(options.message(ErrorCode::MaxLength), ErrorCode::MaxLength.default_message());
}

#[test]
fn phone_normalize_borrows_clean_input() {
    assert!(matches!(BdPhoneNumberField::normalize("01712345678"), Cow::Borrowed(_)));
    assert_eq!(BdPhoneNumberField::normalize("(0)1-2 3"), "0123");
}

#[test]
fn regex_field_length_limits() {
    let field = RegexField::new(r"^[a-z]+$")
        .unwrap()
        .min_length(Some(3))
        .max_length(Some(5));
    assert_eq!(field.pattern(), r"^[a-z]+$");
    assert_eq!(field.clean(Some("abcd")).unwrap(), "abcd");

    let err = field.clean(Some("abcdef")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
    assert_eq!(err.message(), "Ensure this value has at most 5 characters (it has 6).");

    let err = field.clean(Some("ab")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MinLength);
    assert_eq!(err.message(), "Ensure this value has at least 3 characters (it has 2).");

    assert_eq!(field.clean(Some("ab1")).unwrap_err().code(), ErrorCode::Invalid);
}

#[test]
fn regex_field_searches_unanchored_patterns() {
    let field = RegexField::new(r"\d{2}").unwrap();
    assert_eq!(field.clean(Some("ab12cd")).unwrap(), "ab12cd");
    assert_eq!(field.clean(Some("a1b2")).unwrap_err().message(), "Enter a valid value.");
}

#[test]
fn regex_field_custom_length_message() {
    let field = RegexField::new(r"^\d+$")
        .unwrap()
        .max_length(Some(2))
        .with_options(FieldOptions::new().error_message(ErrorCode::MaxLength, "{length} > {max}"));
    assert_eq!(field.clean(Some("১২৩")).unwrap_err().message(), "3 > 2");
}

#[test]
fn regex_field_invalid_pattern() {
    init_logger();
    let err = RegexField::new(r"^(\d{4}$").unwrap_err();
    assert!(err.to_string().starts_with("An error occurred while trying to create regex"));
}
