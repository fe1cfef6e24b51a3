//! Registration form state machine

use super::field::{Branch, Field, FormData};
use crate::state::age::{calculate_age, Clock, SystemClock};
use crate::state::validation::{validate, ErrorMap};
use chrono::NaiveDate;
use thiserror::Error;

/// Maximum length of the date-of-birth text (`YYYY-MM-DD`)
const DOB_MAX_LEN: usize = 10;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Rejected form operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form has already been submitted")]
    NotEditing,
    #[error("form has not been submitted")]
    NotSubmitted,
}

/// Accepted registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub data: FormData,
    pub dob: NaiveDate,
    pub branch: Branch,
    pub age: i32,
}

/// Lifecycle of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted(SubmissionResult),
}

/// Outcome of a submit attempt made while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { age: i32 },
    Rejected { error_count: usize },
}

/// Registration form: field values, errors, phase and focus
#[derive(Debug, Clone)]
pub struct RegistrationForm<C: Clock = SystemClock> {
    data: FormData,
    errors: ErrorMap,
    phase: FormPhase,
    clock: C,
    /// 0..=3 are the fields, 4 is the Submit button
    pub active_field_index: usize,
}

impl RegistrationForm<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RegistrationForm<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RegistrationForm<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            data: FormData::default(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            clock,
            active_field_index: 0,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, FormPhase::Editing)
    }

    pub fn submission(&self) -> Option<&SubmissionResult> {
        match &self.phase {
            FormPhase::Editing => None,
            FormPhase::Submitted(result) => Some(result),
        }
    }

    /// Replace one field's value. Existing errors stay until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if !self.is_editing() {
            return Err(FormError::NotEditing);
        }
        self.data.set(field, value.into());
        Ok(())
    }

    /// Validate the whole form and move to the submitted phase when it passes
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if !self.is_editing() {
            return Err(FormError::NotEditing);
        }

        let today = self.clock.today();
        let valid = match validate(&self.data, today) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(
                    failing = ?errors.fields().map(|f| f.key()).collect::<Vec<_>>(),
                    "Registration rejected"
                );
                let error_count = errors.len();
                self.errors = errors;
                return Ok(SubmitOutcome::Rejected { error_count });
            }
        };
        let age = calculate_age(valid.dob, today);

        tracing::info!(
            full_name = %self.data.full_name,
            dob = %valid.dob,
            address = %self.data.address,
            branch = %valid.branch.code(),
            age,
            "Registration submitted"
        );

        self.errors = ErrorMap::new();
        self.phase = FormPhase::Submitted(SubmissionResult {
            data: self.data.clone(),
            dob: valid.dob,
            branch: valid.branch,
            age,
        });
        Ok(SubmitOutcome::Accepted { age })
    }

    /// Clear everything and return to editing
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.is_editing() {
            return Err(FormError::NotSubmitted);
        }
        self.data = FormData::default();
        self.errors = ErrorMap::new();
        self.phase = FormPhase::Editing;
        self.active_field_index = 0;
        tracing::debug!("Registration form reset");
        Ok(())
    }

    /// Field under focus, or None when the Submit button is focused
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    /// Returns true if the Submit button is focused
    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Field::ALL.len()
    }

    /// Append a typed character to the focused field
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        match field {
            Field::Branch => {
                if c == ' ' {
                    self.cycle_branch(true)?;
                }
                Ok(())
            }
            Field::Dob if !(c.is_ascii_digit() || c == '-') => Ok(()),
            Field::Dob if self.data.dob.len() >= DOB_MAX_LEN => Ok(()),
            _ => {
                let mut value = self.data.get(field).to_string();
                value.push(c);
                self.set_field(field, value)
            }
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) -> Result<(), FormError> {
        match self.focused_field() {
            Some(Field::Branch) => self.set_field(Field::Branch, ""),
            Some(field) => {
                let mut value = self.data.get(field).to_string();
                value.pop();
                self.set_field(field, value)
            }
            None => Ok(()),
        }
    }

    /// Insert a newline when the focused field is multiline
    pub fn newline(&mut self) -> Result<(), FormError> {
        match self.focused_field() {
            Some(field) if field.is_multiline() => {
                let mut value = self.data.get(field).to_string();
                value.push('\n');
                self.set_field(field, value)
            }
            _ => Ok(()),
        }
    }

    /// Select the next or previous branch option
    pub fn cycle_branch(&mut self, forward: bool) -> Result<(), FormError> {
        let next = Branch::cycle_code(&self.data.branch, forward);
        self.set_field(Field::Branch, next)
    }
}

impl<C: Clock> Form for RegistrationForm<C> {
    fn field_count(&self) -> usize {
        Field::ALL.len() + 1 // fields + Submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Field::ALL.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::age::MockClock;
    use crate::state::validation::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today());
        clock
    }

    fn new_form() -> RegistrationForm<MockClock> {
        RegistrationForm::with_clock(fixed_clock())
    }

    fn fill_valid(form: &mut RegistrationForm<MockClock>) {
        form.set_field(Field::FullName, "John Doe").unwrap();
        form.set_field(Field::Dob, "2000-01-01").unwrap();
        form.set_field(Field::Address, "123 Main Street").unwrap();
        form.set_field(Field::Branch, "CS").unwrap();
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_blank_and_editing() {
            let form = new_form();
            assert!(form.is_editing());
            assert!(form.data().is_blank());
            assert!(form.errors().is_empty());
            assert!(form.submission().is_none());
        }

        #[test]
        fn test_valid_submit_moves_to_submitted() {
            let mut form = new_form();
            fill_valid(&mut form);

            let outcome = form.submit().unwrap();
            let expected_age = calculate_age(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), today());
            assert_eq!(outcome, SubmitOutcome::Accepted { age: expected_age });
            assert_eq!(expected_age, 26);

            assert!(!form.is_editing());
            assert!(form.errors().is_empty());
            let result = form.submission().unwrap();
            assert_eq!(result.age, 26);
            assert_eq!(result.branch, Branch::Cs);
            assert_eq!(result.data.full_name, "John Doe");
        }

        #[test]
        fn test_blank_submit_reports_four_errors_and_stays_editing() {
            let mut form = new_form();
            let outcome = form.submit().unwrap();
            assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 4 });
            assert!(form.is_editing());
            assert_eq!(form.errors().len(), 4);
            assert!(form.submission().is_none());
        }

        #[test]
        fn test_resubmit_recomputes_errors_from_scratch() {
            let mut form = new_form();
            form.submit().unwrap();
            assert_eq!(form.errors().len(), 4);

            form.set_field(Field::FullName, "Jane").unwrap();
            form.set_field(Field::Address, "tiny").unwrap();
            form.submit().unwrap();

            assert!(form.errors().get(Field::FullName).is_none());
            assert_eq!(
                form.errors().get(Field::Address),
                Some(&ValidationError::TooShort { min: 10 })
            );
            assert_eq!(form.errors().len(), 3);
        }

        #[test]
        fn test_reset_after_submit_returns_to_blank_editing() {
            let mut form = new_form();
            fill_valid(&mut form);
            form.submit().unwrap();
            form.active_field_index = 4;

            form.reset().unwrap();
            assert!(form.is_editing());
            assert!(form.data().is_blank());
            assert!(form.errors().is_empty());
            assert!(form.submission().is_none());
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_reset_while_editing_is_rejected() {
            let mut form = new_form();
            form.set_field(Field::FullName, "John").unwrap();
            assert_eq!(form.reset(), Err(FormError::NotSubmitted));
            assert_eq!(form.data().full_name, "John");
        }

        #[test]
        fn test_edit_after_submit_is_rejected() {
            let mut form = new_form();
            fill_valid(&mut form);
            form.submit().unwrap();
            assert_eq!(
                form.set_field(Field::FullName, "Someone Else"),
                Err(FormError::NotEditing)
            );
            assert_eq!(form.data().full_name, "John Doe");
        }

        #[test]
        fn test_submit_after_submit_is_rejected() {
            let mut form = new_form();
            fill_valid(&mut form);
            form.submit().unwrap();
            assert_eq!(form.submit(), Err(FormError::NotEditing));
        }

        #[test]
        fn test_edit_does_not_clear_existing_error() {
            let mut form = new_form();
            form.submit().unwrap();
            form.set_field(Field::FullName, "John Doe").unwrap();
            assert!(form.errors().get(Field::FullName).is_some());
        }

        #[test]
        fn test_future_dob_blocks_submission() {
            let mut form = new_form();
            fill_valid(&mut form);
            form.set_field(Field::Dob, "2026-10-20").unwrap();
            assert_eq!(
                form.submit().unwrap(),
                SubmitOutcome::Rejected { error_count: 1 }
            );
            assert_eq!(form.errors().get(Field::Dob), Some(&ValidationError::FutureDate));
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles_through_submit() {
            let mut form = new_form();
            for expected in [1, 2, 3, 4, 0] {
                form.next_field();
                assert_eq!(form.active_field(), expected);
            }
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = new_form();
            form.prev_field();
            assert!(form.is_submit_focused());
            assert_eq!(form.focused_field(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = new_form();
            form.set_active_field(42);
            assert_eq!(form.active_field(), 4);
        }
    }

    mod keyboard_editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_appends_to_focused_field() {
            let mut form = new_form();
            for c in "Ada".chars() {
                form.input_char(c).unwrap();
            }
            assert_eq!(form.data().full_name, "Ada");
            assert_eq!(form.data().dob, "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut form = new_form();
            form.set_field(Field::FullName, "Ada").unwrap();
            form.backspace().unwrap();
            assert_eq!(form.data().full_name, "Ad");
        }

        #[test]
        fn test_backspace_on_empty_is_noop() {
            let mut form = new_form();
            form.backspace().unwrap();
            assert_eq!(form.data().full_name, "");
        }

        #[test]
        fn test_dob_accepts_only_date_characters() {
            let mut form = new_form();
            form.set_active_field(Field::Dob.index());
            for c in "2000-0a1/-01x".chars() {
                form.input_char(c).unwrap();
            }
            assert_eq!(form.data().dob, "2000-01-01");
        }

        #[test]
        fn test_dob_is_capped_at_ten_characters() {
            let mut form = new_form();
            form.set_active_field(Field::Dob.index());
            for c in "2000-01-0123".chars() {
                form.input_char(c).unwrap();
            }
            assert_eq!(form.data().dob, "2000-01-01");
        }

        #[test]
        fn test_newline_only_in_address() {
            let mut form = new_form();
            form.newline().unwrap();
            assert_eq!(form.data().full_name, "");

            form.set_active_field(Field::Address.index());
            form.set_field(Field::Address, "Flat 4").unwrap();
            form.newline().unwrap();
            assert_eq!(form.data().address, "Flat 4\n");
        }

        #[test]
        fn test_space_cycles_branch() {
            let mut form = new_form();
            form.set_active_field(Field::Branch.index());
            form.input_char(' ').unwrap();
            assert_eq!(form.data().branch, "CS");
            form.input_char('x').unwrap();
            assert_eq!(form.data().branch, "CS");
            form.cycle_branch(true).unwrap();
            assert_eq!(form.data().branch, "IT");
            form.backspace().unwrap();
            assert_eq!(form.data().branch, "");
        }

        #[test]
        fn test_typing_on_submit_button_is_ignored() {
            let mut form = new_form();
            form.set_active_field(4);
            form.input_char('a').unwrap();
            form.backspace().unwrap();
            assert!(form.data().is_blank());
        }

        #[test]
        fn test_typing_after_submit_is_rejected() {
            let mut form = new_form();
            fill_valid(&mut form);
            form.submit().unwrap();
            assert_eq!(form.input_char('a'), Err(FormError::NotEditing));
        }
    }

    mod diagnostics {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};
        use tracing::Level;

        /// In-memory log sink shared with the subscriber
        #[derive(Clone, Default)]
        struct CapturedLog(Arc<Mutex<Vec<u8>>>);

        impl CapturedLog {
            fn contents(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        impl io::Write for CapturedLog {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        /// Run `f` with an info-level fmt subscriber and return what it wrote
        fn capture_info(f: impl FnOnce()) -> String {
            let log = CapturedLog::default();
            let writer = log.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(Level::INFO)
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, f);
            log.contents()
        }

        #[test]
        fn test_accepted_submission_is_logged_with_all_values() {
            let mut form = new_form();
            fill_valid(&mut form);

            let output = capture_info(|| {
                form.submit().unwrap();
            });

            assert!(output.contains("INFO"), "{output}");
            assert!(output.contains("Registration submitted"), "{output}");
            assert!(output.contains("full_name=John Doe"), "{output}");
            assert!(output.contains("dob=2000-01-01"), "{output}");
            assert!(output.contains("address=123 Main Street"), "{output}");
            assert!(output.contains("branch=CS"), "{output}");
            assert!(output.contains("age=26"), "{output}");
        }

        #[test]
        fn test_rejected_submission_logs_nothing_at_info() {
            let mut form = new_form();
            form.set_field(Field::FullName, "John Doe").unwrap();

            let output = capture_info(|| {
                form.submit().unwrap();
            });

            assert!(!form.errors().is_empty());
            assert_eq!(output, "");
        }
    }
}
