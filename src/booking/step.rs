use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of the wizard in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Contact,
    Payment,
    Confirmation,
}

impl BookingStep {
    /// The step reached after a successful submit, `None` once confirmed.
    pub fn next(self) -> Option<BookingStep> {
        match self {
            BookingStep::Contact => Some(BookingStep::Payment),
            BookingStep::Payment => Some(BookingStep::Confirmation),
            BookingStep::Confirmation => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStep::Contact => "contact",
            BookingStep::Payment => "payment",
            BookingStep::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
