//! View description derived from the form state
//!
//! The UI layer renders a [`RegistrationView`] and never inspects the form
//! state machine directly.

use super::age::Clock;
use super::forms::{Branch, Field, RegistrationForm};
use super::validation::DOB_FORMAT;

/// Placeholder shown while no branch is selected
pub const BRANCH_PLACEHOLDER: &str = "Select Branch";

/// Everything needed to draw one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: String,
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub error: Option<String>,
    pub is_active: bool,
    pub is_multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationView {
    Form {
        fields: Vec<FieldView>,
        submit_focused: bool,
    },
    Success {
        full_name: String,
        dob: String,
        branch_name: &'static str,
        age: i32,
    },
}

/// Describe what should be on screen for the current form state
pub fn describe<C: Clock>(form: &RegistrationForm<C>) -> RegistrationView {
    match form.submission() {
        Some(result) => RegistrationView::Success {
            full_name: result.data.full_name.trim().to_string(),
            dob: result.dob.format(DOB_FORMAT).to_string(),
            branch_name: result.branch.display_name(),
            age: result.age,
        },
        None => {
            let data = form.data();
            let errors = form.errors();
            let focused = form.focused_field();
            let fields = Field::ALL
                .iter()
                .map(|&field| {
                    let raw = data.get(field);
                    let (value, placeholder) = match field {
                        Field::Branch => match Branch::from_code(raw) {
                            Some(branch) => (
                                format!("{} ({})", branch.display_name(), branch.code()),
                                None,
                            ),
                            None => (String::new(), Some(BRANCH_PLACEHOLDER)),
                        },
                        Field::Dob => (raw.to_string(), Some("YYYY-MM-DD")),
                        _ => (raw.to_string(), None),
                    };
                    FieldView {
                        label: format!("{} *", field.label()),
                        value,
                        placeholder,
                        error: errors.message(field),
                        is_active: focused == Some(field),
                        is_multiline: field.is_multiline(),
                    }
                })
                .collect();
            RegistrationView::Form {
                fields,
                submit_focused: form.is_submit_focused(),
            }
        }
    }
}
