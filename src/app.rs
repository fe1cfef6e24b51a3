//! Application state and key handling

use crate::config::TuiConfig;
use crate::state::{
    describe, Clock, Field, Form, RegistrationForm, RegistrationView, SubmitOutcome, SystemClock,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<C: Clock = SystemClock> {
    /// Registration form state
    pub form: RegistrationForm<C>,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App<SystemClock> {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self::with_form(config, RegistrationForm::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_form(config: TuiConfig, form: RegistrationForm<C>) -> Self {
        Self {
            form,
            config,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Description of what should currently be on screen
    pub fn view(&self) -> RegistrationView {
        describe(&self.form)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.form.is_editing() {
            self.handle_form_key(key)
        } else {
            self.handle_success_key(key)
        }
    }

    /// Handle keys while the form is being filled in
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit = self.form.is_submit_focused();
        let on_branch = self.form.focused_field() == Some(Field::Branch);
        let on_multiline = self.form.focused_field().is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit()?;
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter if on_submit => self.submit()?,
            KeyCode::Enter if on_multiline => self.form.newline()?,
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Left if on_branch => self.form.cycle_branch(false)?,
            KeyCode::Right if on_branch => self.form.cycle_branch(true)?,
            KeyCode::Backspace => self.form.backspace()?,
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => self.form.input_char(c)?,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the success view
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('n') => {
                self.form.reset()?;
                self.status_message = None;
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Submit the form, focusing the first failing field on rejection
    fn submit(&mut self) -> Result<()> {
        match self.form.submit()? {
            SubmitOutcome::Accepted { age } => {
                self.status_message = Some(format!("Registration successful (age {age})"));
            }
            SubmitOutcome::Rejected { error_count } => {
                let first_failing = self.form.errors().fields().next();
                if let Some(first) = first_failing {
                    self.form.set_active_field(first.index());
                }
                let noun = if error_count == 1 { "field" } else { "fields" };
                self.status_message = Some(format!("Please fix {error_count} {noun}"));
            }
        }
        Ok(())
    }
}
