//! Input transforms applied to payment fields on every change.
//!
//! Each transform is pure, never fails and is idempotent on its own output.

use once_cell::sync::Lazy;
use regex::Regex;

const CARD_GROUP: usize = 4;
const CVV_DIGITS: usize = 3;

static CARD_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,16}").unwrap());

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Groups a card number into blocks of four digits.
///
/// Non-digits are dropped first. Only the first run of at most 16 digits is
/// kept; fewer than four digits are returned ungrouped.
pub fn format_card_number(raw: &str) -> String {
    let digits = digits_only(raw);
    let Some(run) = CARD_DIGIT_RUN.find(&digits) else {
        return digits;
    };
    let run = run.as_str();
    let groups: Vec<&str> = (0..run.len())
        .step_by(CARD_GROUP)
        .map(|start| &run[start..(start + CARD_GROUP).min(run.len())])
        .collect();
    groups.join(" ")
}

/// Shapes expiry input as `MM/YY`, discarding digits past the fourth.
pub fn format_expiry_date(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 2 {
        return digits;
    }
    let (month, rest) = digits.split_at(2);
    let year = &rest[..rest.len().min(2)];
    format!("{month}/{year}")
}

/// Keeps the first three digits.
pub fn format_cvv(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit())
        .take(CVV_DIGITS)
        .collect()
}

/// Transform attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Transform {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Transform::CardNumber => format_card_number(raw),
            Transform::ExpiryDate => format_expiry_date(raw),
            Transform::Cvv => format_cvv(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_card_numbers_pass_through() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("1"), "1");
        assert_eq!(format_card_number("12"), "12");
        assert_eq!(format_card_number("123"), "123");
    }

    #[test]
    fn card_numbers_are_grouped_by_four() {
        assert_eq!(format_card_number("1234"), "1234");
        assert_eq!(format_card_number("12345"), "1234 5");
        assert_eq!(format_card_number("12345678"), "1234 5678");
        assert_eq!(format_card_number("1234567890"), "1234 5678 90");
        assert_eq!(format_card_number("123456789012"), "1234 5678 9012");
        assert_eq!(
            format_card_number("1234567890123456"),
            "1234 5678 9012 3456"
        );
    }

    #[test]
    fn card_number_strips_non_digits() {
        assert_eq!(
            format_card_number("1234-5678 abc 9012!@#3456"),
            "1234 5678 9012 3456"
        );
        assert_eq!(format_card_number("1234abcd5678efgh9012"), "1234 5678 9012");
        assert_eq!(
            format_card_number("1234 5678 9012 3456"),
            "1234 5678 9012 3456"
        );
        assert_eq!(format_card_number("abc-def-ghi"), "");
        assert_eq!(format_card_number("   "), "");
        assert_eq!(format_card_number("!@#$%^&*()"), "");
    }

    #[test]
    fn card_number_is_capped_at_sixteen_digits() {
        assert_eq!(
            format_card_number("12345678901234567890"),
            "1234 5678 9012 3456"
        );
        assert_eq!(
            format_card_number("123456789012345678901234567890"),
            "1234 5678 9012 3456"
        );
    }

    #[test]
    fn card_number_formatting_is_idempotent() {
        let samples = [
            "",
            "1",
            "123",
            "12345",
            "1234-5678 abc 9012!@#3456",
            "123456789012345678901234567890",
            "4111 1111 1111 1111",
            "x9y8z7",
        ];
        for sample in samples {
            let once = format_card_number(sample);
            assert_eq!(format_card_number(&once), once, "input {sample:?}");
        }
    }

    #[test]
    fn expiry_date_takes_month_then_year() {
        assert_eq!(format_expiry_date(""), "");
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date("0"), "0");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("00"), "00/");
        assert_eq!(format_expiry_date("123"), "12/3");
        assert_eq!(format_expiry_date("000"), "00/0");
        assert_eq!(format_expiry_date("1234"), "12/34");
        assert_eq!(format_expiry_date("0123"), "01/23");
        assert_eq!(format_expiry_date("1201"), "12/01");
        assert_eq!(format_expiry_date("0000"), "00/00");
    }

    #[test]
    fn expiry_date_strips_and_truncates() {
        assert_eq!(format_expiry_date("12345"), "12/34");
        assert_eq!(format_expiry_date("1234567890"), "12/34");
        assert_eq!(format_expiry_date("12-34"), "12/34");
        assert_eq!(format_expiry_date("12ab34"), "12/34");
        assert_eq!(format_expiry_date("12!@#34$%^"), "12/34");
        assert_eq!(format_expiry_date("abc-def"), "");
        assert_eq!(format_expiry_date("   "), "");
        assert_eq!(format_expiry_date("!@#$%^&*()"), "");
    }

    #[test]
    fn expiry_date_formatting_is_idempotent() {
        for sample in ["1", "12", "123", "1234", "12345"] {
            let once = format_expiry_date(sample);
            assert_eq!(format_expiry_date(&once), once);
        }
    }

    #[test]
    fn cvv_keeps_three_digits() {
        assert_eq!(format_cvv("12a3!@#"), "123");
        assert_eq!(format_cvv("abc"), "");
        assert_eq!(format_cvv("1-2-3"), "123");
        assert_eq!(format_cvv("123456789"), "123");
        assert_eq!(format_cvv("1234"), "123");
        assert_eq!(format_cvv("12"), "12");
        assert_eq!(format_cvv("1"), "1");
        assert_eq!(format_cvv(""), "");
        assert_eq!(format_cvv("   "), "");
        assert_eq!(format_cvv("\t\t\t"), "");
    }

    #[test]
    fn transform_dispatches_to_formatter() {
        assert_eq!(Transform::CardNumber.apply("12345"), "1234 5");
        assert_eq!(Transform::ExpiryDate.apply("1225"), "12/25");
        assert_eq!(Transform::Cvv.apply("9876"), "987");
    }
}
