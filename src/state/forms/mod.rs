//! Form domain layer
//!
//! Field values, focus handling and the editing/submitted state machine of
//! the registration form.

mod field;
mod form_state;

pub use field::{Branch, Field, FormData};
pub use form_state::{Form, RegistrationForm, SubmitOutcome};
