#![doc(test(attr(deny(warnings))))]

//! Spa Booking models a three-step appointment booking flow: contact details,
//! card details and a confirmation screen, together with the formatters and
//! validators applied to each field.
//!
//! ```
//! use spa_booking::booking::{BookingStep, BookingWizard, FieldKey};
//! use spa_booking::business::Business;
//!
//! let mut wizard = BookingWizard::new(Business::default());
//! let mut form = wizard.form().unwrap();
//! form.input(FieldKey::FullName, "Ada Lovelace");
//! form.input(FieldKey::Email, "ada@example.com");
//! form.input(FieldKey::Phone, "555-0100");
//! form.input(FieldKey::Message, "Massage");
//! assert_eq!(wizard.submit(&form).unwrap(), BookingStep::Payment);
//! ```

pub mod booking;
pub mod business;
pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Spa Booking tracing initialized.");
    });
}
