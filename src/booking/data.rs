use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one field of [`BookingData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    FullName,
    Email,
    Phone,
    Message,
    CardNumber,
    ExpiryDate,
    Cvv,
    BillingZip,
    AgreeToTerms,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::FullName,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Message,
        FieldKey::CardNumber,
        FieldKey::ExpiryDate,
        FieldKey::Cvv,
        FieldKey::BillingZip,
        FieldKey::AgreeToTerms,
    ];

    /// Record key as it appears in the serialized booking.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FullName => "fullName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Message => "message",
            FieldKey::CardNumber => "cardNumber",
            FieldKey::ExpiryDate => "expiryDate",
            FieldKey::Cvv => "cvv",
            FieldKey::BillingZip => "billingZip",
            FieldKey::AgreeToTerms => "agreeToTerms",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value held by a form control.
///
/// Mirrors what a browser form hands to validation: text inputs yield text,
/// checkboxes a flag, and an untouched control may have no value at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Absent,
    Text(String),
    Flag(bool),
    Number(i64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// `Absent`, empty text, `false` and `0` count as "no value".
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Flag(flag) => !flag,
            FieldValue::Number(number) => *number == 0,
        }
    }

    /// String coercion used by validators that inspect characters.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Number(number) => number.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        !self.is_falsy()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Everything the customer entered across all steps.
///
/// Every field always holds a value; strings start empty and the terms flag
/// starts unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub billing_zip: String,
    pub agree_to_terms: bool,
}

impl BookingData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::FullName => FieldValue::text(&self.full_name),
            FieldKey::Email => FieldValue::text(&self.email),
            FieldKey::Phone => FieldValue::text(&self.phone),
            FieldKey::Message => FieldValue::text(&self.message),
            FieldKey::CardNumber => FieldValue::text(&self.card_number),
            FieldKey::ExpiryDate => FieldValue::text(&self.expiry_date),
            FieldKey::Cvv => FieldValue::text(&self.cvv),
            FieldKey::BillingZip => FieldValue::text(&self.billing_zip),
            FieldKey::AgreeToTerms => FieldValue::Flag(self.agree_to_terms),
        }
    }

    /// Returns a copy with the named fields of `update` overwritten.
    pub fn merged(&self, update: &BookingUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }

    pub fn apply(&mut self, update: &BookingUpdate) {
        for (key, value) in update.entries() {
            self.set(*key, value);
        }
    }

    fn set(&mut self, key: FieldKey, value: &FieldValue) {
        match key {
            FieldKey::AgreeToTerms => self.agree_to_terms = value.as_flag(),
            FieldKey::FullName => self.full_name = value.to_text(),
            FieldKey::Email => self.email = value.to_text(),
            FieldKey::Phone => self.phone = value.to_text(),
            FieldKey::Message => self.message = value.to_text(),
            FieldKey::CardNumber => self.card_number = value.to_text(),
            FieldKey::ExpiryDate => self.expiry_date = value.to_text(),
            FieldKey::Cvv => self.cvv = value.to_text(),
            FieldKey::BillingZip => self.billing_zip = value.to_text(),
        }
    }

    /// Card number reduced to its last four digits, e.g. `"•••• 3456"`.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|ch| ch.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return String::new();
        }
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("•••• {tail}")
    }
}

/// Partial update to a [`BookingData`]; only the listed fields change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingUpdate {
    entries: Vec<(FieldKey, FieldValue)>,
}

impl BookingUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: FieldKey, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, replacing an earlier entry for the same field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<FieldValue>) {
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    pub fn entries(&self) -> &[(FieldKey, FieldValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_and_unchecked() {
        let data = BookingData::new();
        for key in FieldKey::ALL {
            assert!(data.get(key).is_falsy(), "{key} should start empty");
        }
        assert!(!data.agree_to_terms);
    }

    #[test]
    fn merge_only_overwrites_named_fields() {
        let base = BookingData {
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            ..BookingData::default()
        };
        let update = BookingUpdate::new()
            .with(FieldKey::Email, "ada@lovelace.dev")
            .with(FieldKey::AgreeToTerms, true);

        let merged = base.merged(&update);
        assert_eq!(merged.full_name, "Ada");
        assert_eq!(merged.email, "ada@lovelace.dev");
        assert!(merged.agree_to_terms);
        assert_eq!(base.email, "ada@example.com");
    }

    #[test]
    fn update_set_replaces_existing_entry() {
        let mut update = BookingUpdate::new().with(FieldKey::Phone, "1");
        update.set(FieldKey::Phone, "2");
        assert_eq!(update.entries().len(), 1);
        assert_eq!(update.get(FieldKey::Phone), Some(&FieldValue::text("2")));
    }

    #[test]
    fn falsy_values_follow_form_semantics() {
        assert!(FieldValue::Absent.is_falsy());
        assert!(FieldValue::text("").is_falsy());
        assert!(FieldValue::Flag(false).is_falsy());
        assert!(FieldValue::Number(0).is_falsy());
        assert!(!FieldValue::text(" ").is_falsy());
        assert!(!FieldValue::Flag(true).is_falsy());
        assert_eq!(FieldValue::Flag(true).to_text(), "true");
        assert_eq!(FieldValue::Number(42).to_text(), "42");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let data = BookingData {
            full_name: "Ada".into(),
            billing_zip: "92108".into(),
            agree_to_terms: true,
            ..BookingData::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["billingZip"], "92108");
        assert_eq!(json["agreeToTerms"], true);
        for key in FieldKey::ALL {
            assert!(json.get(key.as_str()).is_some(), "missing {key}");
        }
    }

    #[test]
    fn masks_all_but_last_four_digits() {
        let data = BookingData {
            card_number: "1234 5678 9012 3456".into(),
            ..BookingData::default()
        };
        assert_eq!(data.masked_card_number(), "•••• 3456");
        assert_eq!(BookingData::default().masked_card_number(), "");
    }
}
