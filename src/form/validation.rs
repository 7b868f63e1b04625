//! Pure form validators. Total over arbitrary string input — malformed input
//! returns `false`, never a panic. Empty input is the caller's concern:
//! validators assume they are handed something the user actually typed.

use std::sync::LazyLock;

use regex::Regex;

/// Characters a phone number may contain in display form.
static RE_PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\-. ]+$").unwrap());

/// Digit-count rule for one country's phone numbers.
struct PhoneRule {
    country: &'static str,
    min_digits: usize,
    max_digits: usize,
    /// National trunk/country prefix allowed as an extra leading digit.
    trunk_prefix: Option<char>,
}

/// Countries with a specific national numbering plan. Anything else falls
/// back to the ITU E.164 bounds below.
const PHONE_RULES: &[PhoneRule] = &[
    PhoneRule { country: "US", min_digits: 10, max_digits: 10, trunk_prefix: Some('1') },
    PhoneRule { country: "CA", min_digits: 10, max_digits: 10, trunk_prefix: Some('1') },
    PhoneRule { country: "GB", min_digits: 10, max_digits: 10, trunk_prefix: Some('0') },
    PhoneRule { country: "AU", min_digits: 9, max_digits: 9, trunk_prefix: Some('0') },
    PhoneRule { country: "IN", min_digits: 10, max_digits: 10, trunk_prefix: Some('0') },
];

/// E.164 subscriber-number bounds for countries without a specific rule.
const GENERIC_MIN_DIGITS: usize = 7;
const GENERIC_MAX_DIGITS: usize = 15;

/// Country-aware phone number check.
///
/// The number must contain only digits and common punctuation, and its digit
/// count must satisfy the country's rule (an unknown or empty country uses
/// the generic E.164 bounds). A known trunk prefix is accepted as one extra
/// leading digit, so `1 503 555 0100` and `(503) 555-0100` both pass for US.
pub fn validate_phone_number(country_code: &str, phone: &str) -> bool {
    let phone = phone.trim();
    if phone.is_empty() || !RE_PHONE_CHARS.is_match(phone) {
        return false;
    }

    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }

    let country = country_code.trim().to_ascii_uppercase();
    match PHONE_RULES.iter().find(|r| r.country == country) {
        Some(rule) => {
            if digits.len() >= rule.min_digits && digits.len() <= rule.max_digits {
                return true;
            }
            // One extra digit is fine when it is the known prefix.
            rule.trunk_prefix
                .is_some_and(|p| digits.len() == rule.max_digits + 1 && digits[0] == p)
        }
        None => digits.len() >= GENERIC_MIN_DIGITS && digits.len() <= GENERIC_MAX_DIGITS,
    }
}

/// Height-inches bound: the inches component of a (foot, inches) pair.
pub fn validate_height_inches(inches: f64) -> bool {
    inches.is_finite() && (0.0..=11.0).contains(&inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Phone numbers ───────────────────────────────────────────────

    #[test]
    fn us_ten_digit_numbers_pass() {
        assert!(validate_phone_number("US", "5035550100"));
        assert!(validate_phone_number("US", "(503) 555-0100"));
        assert!(validate_phone_number("US", "503.555.0100"));
    }

    #[test]
    fn us_eleven_digits_require_leading_one() {
        assert!(validate_phone_number("US", "1 503 555 0100"));
        assert!(!validate_phone_number("US", "2 503 555 0100"));
    }

    #[test]
    fn us_short_number_rejected() {
        assert!(!validate_phone_number("US", "123"));
        assert!(!validate_phone_number("US", "555-0100"));
    }

    #[test]
    fn country_code_is_case_insensitive() {
        assert!(validate_phone_number("us", "5035550100"));
        assert!(validate_phone_number(" Us ", "5035550100"));
    }

    #[test]
    fn unknown_country_uses_generic_bounds() {
        assert!(validate_phone_number("", "55512345"));
        assert!(validate_phone_number("DE", "030 123456"));
        assert!(!validate_phone_number("", "123456"));
        assert!(!validate_phone_number("", "1234567890123456"));
    }

    #[test]
    fn letters_and_stray_symbols_rejected() {
        assert!(!validate_phone_number("US", "503-CALL-NOW"));
        assert!(!validate_phone_number("", "555_0100#22"));
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        assert!(!validate_phone_number("US", ""));
        assert!(!validate_phone_number("US", "   "));
        assert!(!validate_phone_number("US", "+"));
    }

    #[test]
    fn plus_prefix_is_tolerated() {
        assert!(validate_phone_number("", "+49 30 123456"));
    }

    // ── Height inches ───────────────────────────────────────────────

    #[test]
    fn inches_bound_is_inclusive() {
        assert!(validate_height_inches(0.0));
        assert!(validate_height_inches(11.0));
        assert!(validate_height_inches(5.5));
    }

    #[test]
    fn inches_out_of_bounds_rejected() {
        assert!(!validate_height_inches(12.0));
        assert!(!validate_height_inches(-1.0));
        assert!(!validate_height_inches(f64::NAN));
        assert!(!validate_height_inches(f64::INFINITY));
    }
}
