//! Linear booking flow: contact, then payment, then confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::{BookingData, BookingStep};
use crate::business::Business;
use crate::errors::WizardError;
use crate::forms::{FormDescriptor, FormSession};

/// Record handed to whoever processes the booking once it is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub data: BookingData,
}

/// What the active step needs in order to be shown.
#[derive(Debug)]
pub enum StepView<'a> {
    Contact {
        business: &'a Business,
        form: FormSession,
    },
    Payment {
        business: &'a Business,
        form: FormSession,
    },
    Confirmation {
        business: &'a Business,
        receipt: Option<&'a BookingReceipt>,
    },
}

/// Holds the active step and the booking collected so far.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    business: Business,
    step: BookingStep,
    data: BookingData,
    receipt: Option<BookingReceipt>,
}

impl BookingWizard {
    pub fn new(business: Business) -> Self {
        Self {
            business,
            step: BookingStep::Contact,
            data: BookingData::default(),
            receipt: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn data(&self) -> &BookingData {
        &self.data
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    pub fn receipt(&self) -> Option<&BookingReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.step.is_terminal()
    }

    /// Fresh form for the active step, pre-filled from the booking.
    pub fn form(&self) -> Option<FormSession> {
        FormDescriptor::for_step(self.step)
            .map(|descriptor| FormSession::new(descriptor, &self.data))
    }

    pub fn view(&self) -> StepView<'_> {
        let business = &self.business;
        match (self.step, self.form()) {
            (BookingStep::Contact, Some(form)) => StepView::Contact { business, form },
            (BookingStep::Payment, Some(form)) => StepView::Payment { business, form },
            _ => StepView::Confirmation {
                business,
                receipt: self.receipt.as_ref(),
            },
        }
    }

    /// Validates `form` and, when it passes, merges its values and advances.
    ///
    /// A failed submit leaves both the step and the booking untouched.
    pub fn submit(&mut self, form: &FormSession) -> Result<BookingStep, WizardError> {
        let Some(next) = self.step.next() else {
            return Err(WizardError::AlreadyConfirmed);
        };
        if form.step() != self.step {
            return Err(WizardError::StepMismatch {
                expected: self.step,
                found: form.step(),
            });
        }

        let update = form.validate().map_err(|errors| {
            tracing::debug!(step = %self.step, failures = errors.len(), "step validation failed");
            WizardError::Validation(errors)
        })?;

        self.data.apply(&update);
        tracing::debug!(from = %self.step, to = %next, "booking step advanced");
        self.step = next;

        if next.is_terminal() {
            self.confirm();
        }
        Ok(next)
    }

    fn confirm(&mut self) {
        let receipt = BookingReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            data: self.data.clone(),
        };
        tracing::info!(
            reference = %receipt.reference,
            business = %self.business.name,
            customer = %self.data.full_name,
            card = %self.data.masked_card_number(),
            "booking submitted"
        );
        self.receipt = Some(receipt);
    }
}
