//! Step forms, their fields, and the formatters and validators wired to them.

pub mod formatters;
pub mod session;
pub mod steps;
pub mod validators;

pub use formatters::{format_card_number, format_cvv, format_expiry_date, Transform};
pub use session::{FieldErrors, FormSession};
pub use steps::{contact_form, payment_form, FieldDescriptor, FieldKind, FormDescriptor};
pub use validators::{cvv_rules, required_rules, FieldRules, ValidationError, Validator};
