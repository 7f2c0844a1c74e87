//! Contact form submission
//!
//! Delivery runs on a spawned task; the result comes back over a oneshot
//! channel polled every frame.

use std::time::Instant;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use folio_core::contact::{Field, ValidationError};
use folio_core::{FolioError, Translator};

use crate::tui::app::App;
use crate::tui::components::Toast;

/// Localized text for a form that failed validation
pub(crate) fn validation_message(translator: &Translator, error: &ValidationError) -> String {
    match error {
        ValidationError::Missing(field) => {
            let label = translator.t(field.label_key());
            translator.t_with("contact.form.required", &[("field", &label)])
        }
        ValidationError::InvalidEmail => translator.t("contact.form.invalidEmail"),
    }
}

impl App {
    /// Validate the form and start delivery
    pub(crate) fn submit_contact(&mut self) {
        let form = match self.contact.begin_submit() {
            Ok(form) => form,
            Err(FolioError::Validation(error)) => {
                if let ValidationError::Missing(field) = &error {
                    self.contact_focus = Some(*field);
                } else {
                    self.contact_focus = Some(Field::Email);
                }
                let message = validation_message(&self.translator, &error);
                self.show_toast(Toast::error(message));
                return;
            }
            Err(e) => {
                debug!("Submit ignored: {}", e);
                return;
            }
        };

        let Some(transport) = self.transport.clone() else {
            self.contact
                .finish(Err(FolioError::MissingCredentials("emailjs")), Instant::now());
            let message = self.translator.t("contact.form.notConfigured");
            self.show_toast(Toast::error(message));
            return;
        };

        let (tx, rx) = oneshot::channel();
        self.channels.contact_result = Some(rx);
        tokio::spawn(async move {
            let outcome = transport.send(&form).await;
            let _ = tx.send(outcome);
        });
        self.needs_redraw = true;
    }

    /// Collect the delivery outcome; returns whether the status changed
    pub fn poll_contact(&mut self, now: Instant) -> bool {
        let Some(rx) = self.channels.contact_result.as_mut() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Contact delivery task ended without a result");
                Err(FolioError::Io(std::io::Error::other(
                    "delivery task aborted",
                )))
            }
        };
        self.channels.contact_result = None;

        let delivered = outcome.is_ok();
        self.contact.finish(outcome, now);
        if delivered {
            self.contact_focus = None;
            let message = self.translator.t("contact.form.success");
            self.show_toast(Toast::success(message));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Locale;

    #[test]
    fn test_validation_messages_are_localized() {
        let en = Translator::new(Locale::En);
        assert_eq!(
            validation_message(&en, &ValidationError::Missing(Field::Email)),
            "Your email is required"
        );
        assert_eq!(
            validation_message(&en, &ValidationError::InvalidEmail),
            "Enter a valid email address"
        );
    }
}
