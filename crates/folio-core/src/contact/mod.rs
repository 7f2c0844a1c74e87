//! Contact form and delivery
//!
//! - `form`: field values and pre-submission validation
//! - `status`: the `idle → sending → success | error` state machine
//! - `emailjs`: the email delivery transport

mod emailjs;
mod form;
mod status;

pub use emailjs::{EmailJsClient, EmailTransport};
pub use form::{ContactForm, Field, ValidationError};
pub use status::{ContactController, ContactStatus};
