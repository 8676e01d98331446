//! Field layout of each booking step.

use crate::booking::{BookingStep, FieldKey};
use crate::forms::formatters::Transform;
use crate::forms::validators::{cvv_rules, presence_rules, required_rules, FieldRules};

pub const TERMS_REQUIRED_MESSAGE: &str = "You must agree to the terms and conditions";

pub const TERMS_TEXT: &str = "I will pay at least 24 hours before the beginning of your \
appointment or you may be charged cancellation fee of $100. In the event of emergency, contact \
us directly. Your card will not be used in case of late cancellation and for future purchases, \
it will not be charged now.";

pub const CONFIRMATION_HEADLINE: &str = "Your appointment has been booked!";
pub const CONFIRMATION_DETAIL: &str = "A confirmation has been sent to your email address.";

/// Kind of control used to collect a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// Masked while typing.
    Password,
    TextArea { rows: u8 },
    Checkbox,
}

/// Declarative description of a single form field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub rules: Option<FieldRules>,
    pub transform: Option<Transform>,
}

impl FieldDescriptor {
    pub fn new(key: FieldKey, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            placeholder: None,
            rules: None,
            transform: None,
        }
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.is_some()
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox)
    }
}

/// A step's heading and ordered fields.
#[derive(Debug, Clone)]
pub struct FormDescriptor {
    pub step: BookingStep,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn field(&self, key: FieldKey) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Form for `step`, `None` for the confirmation screen.
    pub fn for_step(step: BookingStep) -> Option<Self> {
        match step {
            BookingStep::Contact => Some(contact_form()),
            BookingStep::Payment => Some(payment_form()),
            BookingStep::Confirmation => None,
        }
    }
}

pub fn contact_form() -> FormDescriptor {
    FormDescriptor {
        step: BookingStep::Contact,
        title: "Enter your details below",
        subtitle: None,
        fields: vec![
            FieldDescriptor::new(FieldKey::FullName, "Full Name", FieldKind::Text)
                .with_rules(required_rules("Full Name")),
            FieldDescriptor::new(FieldKey::Email, "Email", FieldKind::Email)
                .with_rules(required_rules("Email")),
            FieldDescriptor::new(FieldKey::Phone, "Phone", FieldKind::Tel)
                .with_rules(required_rules("Phone")),
            FieldDescriptor::new(
                FieldKey::Message,
                "Visit reason",
                FieldKind::TextArea { rows: 3 },
            )
            .with_rules(required_rules("Visit reason")),
        ],
    }
}

pub fn payment_form() -> FormDescriptor {
    FormDescriptor {
        step: BookingStep::Payment,
        title: "Secure your appointment by card",
        subtitle: Some("A credit or debit card is required to secure your appointment."),
        fields: vec![
            FieldDescriptor::new(FieldKey::CardNumber, "Card Information", FieldKind::Text)
                .with_placeholder("1234 1234 1234 1234")
                .with_transform(Transform::CardNumber)
                .with_rules(required_rules("Card Information")),
            FieldDescriptor::new(FieldKey::ExpiryDate, "MM/YY", FieldKind::Text)
                .with_placeholder("MM/YY")
                .with_transform(Transform::ExpiryDate)
                .with_rules(required_rules("MM/YY")),
            FieldDescriptor::new(FieldKey::Cvv, "CVV", FieldKind::Password)
                .with_placeholder("CVV")
                .with_transform(Transform::Cvv)
                .with_rules(cvv_rules("CVV")),
            FieldDescriptor::new(FieldKey::BillingZip, "Billing zip code", FieldKind::Text)
                .with_rules(required_rules("Billing zip code")),
            FieldDescriptor::new(FieldKey::AgreeToTerms, TERMS_TEXT, FieldKind::Checkbox)
                .with_rules(presence_rules("Terms").with_required_message(TERMS_REQUIRED_MESSAGE)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_covers_contact_fields() {
        let form = contact_form();
        let keys: Vec<FieldKey> = form.fields.iter().map(|field| field.key).collect();
        assert_eq!(
            keys,
            vec![
                FieldKey::FullName,
                FieldKey::Email,
                FieldKey::Phone,
                FieldKey::Message
            ]
        );
        assert!(form.fields.iter().all(FieldDescriptor::is_required));
    }

    #[test]
    fn payment_fields_carry_transforms() {
        let form = payment_form();
        assert_eq!(
            form.field(FieldKey::CardNumber).and_then(|f| f.transform),
            Some(Transform::CardNumber)
        );
        assert_eq!(
            form.field(FieldKey::ExpiryDate).and_then(|f| f.transform),
            Some(Transform::ExpiryDate)
        );
        assert_eq!(
            form.field(FieldKey::Cvv).and_then(|f| f.transform),
            Some(Transform::Cvv)
        );
        assert!(form.field(FieldKey::BillingZip).unwrap().transform.is_none());
        assert!(form.field(FieldKey::AgreeToTerms).unwrap().is_checkbox());
    }

    #[test]
    fn confirmation_has_no_form() {
        assert!(FormDescriptor::for_step(BookingStep::Confirmation).is_none());
        assert_eq!(
            FormDescriptor::for_step(BookingStep::Payment).map(|f| f.step),
            Some(BookingStep::Payment)
        );
    }
}
