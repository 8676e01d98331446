//! Screen text for the booking steps.
//!
//! Builders return lines instead of printing so the layout can be checked
//! without a terminal.

use crate::booking::{BookingData, BookingReceipt};
use crate::business::Business;
use crate::cli::output::{style, MessageKind, OutputPreferences};
use crate::forms::steps::{CONFIRMATION_DETAIL, CONFIRMATION_HEADLINE};
use crate::forms::{FieldDescriptor, FieldKind, FormDescriptor};

const LABEL_WIDTH: usize = 9;
const MAX_RULE_WIDTH: usize = 60;

/// Horizontal rule sized to the terminal, capped for readability.
pub fn rule(width: usize, prefs: &OutputPreferences) -> String {
    let width = width.clamp(1, MAX_RULE_WIDTH);
    let glyph = if prefs.plain_mode { "-" } else { "─" };
    glyph.repeat(width)
}

fn labelled(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

pub fn business_card(business: &Business, prefs: &OutputPreferences) -> Vec<String> {
    let mut lines = vec![style(MessageKind::Section, &business.name, prefs)];
    for (index, line) in business.address.lines().iter().enumerate() {
        let label = if index == 0 { "Address" } else { "" };
        lines.push(labelled(label, line));
    }
    lines.push(labelled("Email", &business.email));
    lines.push(labelled("Phone", &business.phone));
    lines
}

pub fn step_header(
    descriptor: &FormDescriptor,
    position: usize,
    total: usize,
    prefs: &OutputPreferences,
) -> Vec<String> {
    let mut lines = vec![style(
        MessageKind::Section,
        format!("Step {} of {} – {}", position, total, descriptor.title),
        prefs,
    )];
    if let Some(subtitle) = descriptor.subtitle {
        lines.push(style(MessageKind::Detail, subtitle, prefs));
    }
    lines
}

/// Prompt text for a field, e.g. `"CVV (CVV)"` or `"Visit reason"`.
pub fn field_prompt(field: &FieldDescriptor) -> String {
    match (field.kind, field.placeholder) {
        (FieldKind::Checkbox, _) => "I agree to the terms above".to_string(),
        (_, Some(placeholder)) if placeholder != field.label => {
            format!("{} ({})", field.label, placeholder)
        }
        _ => field.label.to_string(),
    }
}

/// Value as shown back to the user; secrets are masked.
pub fn display_value(field: &FieldDescriptor, value: &str) -> String {
    match field.kind {
        FieldKind::Password => "•".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

pub fn confirmation(
    business: &Business,
    receipt: Option<&BookingReceipt>,
    prefs: &OutputPreferences,
) -> Vec<String> {
    let mut lines = vec![
        style(MessageKind::Success, CONFIRMATION_HEADLINE, prefs),
        CONFIRMATION_DETAIL.to_string(),
    ];
    if let Some(receipt) = receipt {
        lines.push(String::new());
        lines.extend(booking_summary(&receipt.data));
        lines.push(labelled("Ref", &receipt.reference.to_string()));
    }
    lines.push(String::new());
    lines.extend(business_card(business, prefs));
    lines
}

fn booking_summary(data: &BookingData) -> Vec<String> {
    vec![
        labelled("Name", &data.full_name),
        labelled("Email", &data.email),
        labelled("Phone", &data.phone),
        labelled("Reason", &data.message),
        labelled("Card", &data.masked_card_number()),
    ]
}
