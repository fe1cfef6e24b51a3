//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `registration_form`: The student registration form

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
