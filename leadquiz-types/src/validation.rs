//! Field validators and normalizers shared by every front end.

use std::sync::LazyLock;

use regex::Regex;

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

/// Length of `(XXX) XXX-XXXX`.
pub const FORMATTED_PHONE_LEN: usize = 14;

/// Number of digits in a zip code.
pub const ZIP_DIGITS: usize = 5;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL.is_match(email)
}

/// Full name: more than two characters once trimmed.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() > 2
}

/// A formatted phone number holding all ten digits.
pub fn is_valid_phone(formatted: &str) -> bool {
    formatted.chars().count() >= FORMATTED_PHONE_LEN
}

/// Exactly five ASCII digits.
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == ZIP_DIGITS && zip.bytes().all(|b| b.is_ascii_digit())
}

/// Keep only the digits of `input`, at most `max` of them.
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Format whatever digits `input` holds as a US phone number.
///
/// Always recomputed from the digit string, so formatting an already
/// formatted value is a no-op and pasted text is handled the same way as
/// typed text.
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input, PHONE_DIGITS);
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.co.uk"));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b.c@d"));
    }

    #[test]
    fn name_needs_three_characters() {
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name("  Al  "));
        assert!(is_valid_name("Ada"));
        assert!(is_valid_name("John Doe"));
    }

    #[test]
    fn phone_formats_progressively() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "(5");
        assert_eq!(format_phone("512"), "(512");
        assert_eq!(format_phone("5124"), "(512) 4");
        assert_eq!(format_phone("512494"), "(512) 494");
        assert_eq!(format_phone("5124949"), "(512) 494-9");
        assert_eq!(format_phone("5124949400"), "(512) 494-9400");
    }

    #[test]
    fn phone_strips_and_truncates() {
        assert_eq!(format_phone("512-494-9400 ext 12"), "(512) 494-9400");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn phone_formatting_is_idempotent() {
        let once = format_phone("5124949400");
        assert_eq!(format_phone(&once), once);

        let partial = format_phone("51249");
        assert_eq!(format_phone(&partial), partial);
    }

    #[test]
    fn phone_valid_only_when_complete() {
        assert!(is_valid_phone(&format_phone("5124949400")));
        assert!(!is_valid_phone(&format_phone("512494940")));
    }

    #[test]
    fn zip_rules() {
        assert!(is_valid_zip("78704"));
        assert!(!is_valid_zip("7870"));
        assert!(!is_valid_zip("787044"));
        assert!(!is_valid_zip("7870a"));
        assert_eq!(digits_only("78-70 4x9", ZIP_DIGITS), "78704");
    }
}
