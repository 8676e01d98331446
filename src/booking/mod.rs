pub mod data;
pub mod step;
pub mod wizard;

pub use data::{BookingData, BookingUpdate, FieldKey, FieldValue};
pub use step::BookingStep;
pub use wizard::{BookingReceipt, BookingWizard, StepView};
