//! Contact submission state machine

use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::{ContactForm, EmailTransport, Field};
use crate::constants::contact::SUCCESS_RESET;
use crate::error::{FolioError, Result};

/// Submission status shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending,
    /// Delivered; reverts to idle after the reset delay
    Success { since: Instant },
    /// Delivery failed; carries the localized banner text
    Error(String),
}

impl ContactStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, ContactStatus::Sending)
    }
}

/// Owns the form values and drives the submission lifecycle
#[derive(Debug, Clone)]
pub struct ContactController {
    form: ContactForm,
    status: ContactStatus,
    error_message: String,
    success_reset: Duration,
}

impl ContactController {
    /// `error_message` is the generic localized failure text
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            status: ContactStatus::Idle,
            error_message: error_message.into(),
            success_reset: SUCCESS_RESET,
        }
    }

    pub fn with_success_reset(mut self, reset: Duration) -> Self {
        self.success_reset = reset;
        self
    }

    /// Replace the failure text (language changed)
    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        if let ContactStatus::Error(text) = &mut self.status {
            text.clone_from(&self.error_message);
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    /// Replace a field's value
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
        self.clear_error();
    }

    pub fn insert_char(&mut self, field: Field, c: char) {
        self.form.get_mut(field).push(c);
        self.clear_error();
    }

    pub fn delete_char(&mut self, field: Field) {
        self.form.get_mut(field).pop();
        self.clear_error();
    }

    /// Validate and enter `Sending`; returns the values to deliver
    ///
    /// A failed validation leaves the status untouched and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<ContactForm> {
        if self.status.is_sending() {
            return Err(FolioError::SubmissionInProgress);
        }
        self.form.validate()?;
        self.status = ContactStatus::Sending;
        Ok(self.form.clone())
    }

    /// Record the delivery outcome of the in-flight submission
    pub fn finish(&mut self, outcome: Result<()>, now: Instant) {
        if !self.status.is_sending() {
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Contact message delivered");
                self.form.clear();
                self.status = ContactStatus::Success { since: now };
            }
            Err(e) => {
                warn!(error = %e, "Contact delivery failed");
                self.status = ContactStatus::Error(self.error_message.clone());
            }
        }
    }

    /// Expire the success banner; returns whether the status changed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.status {
            ContactStatus::Success { since }
                if now.saturating_duration_since(since) >= self.success_reset =>
            {
                self.status = ContactStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Validate, deliver and record the outcome in one step
    ///
    /// Returns whether the message was delivered. Validation failures and
    /// double submissions are returned as errors without contacting the
    /// transport.
    pub async fn submit_with<T: EmailTransport + ?Sized>(&mut self, transport: &T) -> Result<bool> {
        let form = self.begin_submit()?;
        let outcome = transport.send(&form).await;
        let delivered = outcome.is_ok();
        self.finish(outcome, Instant::now());
        Ok(delivered)
    }

    fn clear_error(&mut self) {
        if matches!(self.status, ContactStatus::Error(_)) {
            self.status = ContactStatus::Idle;
        }
    }
}
