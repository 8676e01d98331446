use std::collections::BTreeMap;
use std::fmt;

use crate::booking::{BookingData, BookingStep, BookingUpdate, FieldKey, FieldValue};
use crate::forms::steps::{FieldDescriptor, FormDescriptor};
use crate::forms::validators::ValidationError;

/// Per-field messages collected from a failed submit, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    entries: Vec<(FieldKey, ValidationError)>,
}

impl FieldErrors {
    pub fn push(&mut self, key: FieldKey, error: ValidationError) {
        self.entries.push((key, error));
    }

    pub fn get(&self, key: FieldKey) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, error)| error)
    }

    pub fn message(&self, key: FieldKey) -> Option<&str> {
        self.get(key).map(|error| error.message.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(FieldKey, ValidationError)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .entries
            .iter()
            .map(|(_, error)| error.message.as_str())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Live values of one step's form.
///
/// Seeded from the booking record when the step is shown; every text input
/// runs through the field's transform before it is stored.
#[derive(Debug, Clone)]
pub struct FormSession {
    descriptor: FormDescriptor,
    values: BTreeMap<FieldKey, FieldValue>,
}

impl FormSession {
    pub fn new(descriptor: FormDescriptor, data: &BookingData) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|field| (field.key, data.get(field.key)))
            .collect();
        Self { descriptor, values }
    }

    pub fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    pub fn step(&self) -> BookingStep {
        self.descriptor.step
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.descriptor.fields
    }

    pub fn value(&self, key: FieldKey) -> FieldValue {
        self.values.get(&key).cloned().unwrap_or_default()
    }

    /// Stores raw text for `key` after applying its transform.
    ///
    /// Returns the stored display value, or `None` when the form has no such
    /// text field.
    pub fn input(&mut self, key: FieldKey, raw: &str) -> Option<String> {
        let field = self.descriptor.field(key)?;
        if field.is_checkbox() {
            return None;
        }
        let display = match field.transform {
            Some(transform) => transform.apply(raw),
            None => raw.to_string(),
        };
        self.values.insert(key, FieldValue::text(display.clone()));
        Some(display)
    }

    pub fn set_flag(&mut self, key: FieldKey, checked: bool) -> bool {
        match self.descriptor.field(key) {
            Some(field) if field.is_checkbox() => {
                self.values.insert(key, FieldValue::Flag(checked));
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self, key: FieldKey) -> bool {
        let checked = !self.value(key).as_flag();
        self.set_flag(key, checked) && checked
    }

    /// Validates one field the way submit does.
    pub fn check_field(&self, key: FieldKey) -> Result<(), ValidationError> {
        match self.descriptor.field(key).and_then(|field| field.rules.as_ref()) {
            Some(rules) => rules.check(&self.value(key)),
            None => Ok(()),
        }
    }

    /// Runs every field's rules; on success returns the step's values as an
    /// update to merge into the booking.
    pub fn validate(&self) -> Result<BookingUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();
        let mut update = BookingUpdate::new();
        for field in &self.descriptor.fields {
            if let Err(error) = self.check_field(field.key) {
                errors.push(field.key, error);
            }
            update.set(field.key, self.value(field.key));
        }
        if errors.is_empty() {
            Ok(update)
        } else {
            Err(errors)
        }
    }
}
