//! Contact form fields and validation

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Address shape accepted by browsers for `type="email"` inputs
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Form inputs in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Translation key of the input label
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.yourName",
            Field::Email => "contact.form.yourEmail",
            Field::Message => "contact.form.yourMessage",
        }
    }

    /// Translation key of the input placeholder
    pub fn placeholder_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.placeholders.name",
            Field::Email => "contact.form.placeholders.email",
            Field::Message => "contact.form.placeholders.message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    pub fn is_multiline(self) -> bool {
        self == Field::Message
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

/// Reason a form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("email address is malformed")]
    InvalidEmail,
}

/// Current input values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields first, in tab order, then the email shape
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ValidationError::Missing(field));
        }
        if !RE_EMAIL.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_in_order() {
        let form = ContactForm::new("", "", "");
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::Name)));

        let form = ContactForm::new("Ana", "  ", "hi");
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::Email)));

        let form = ContactForm::new("Ana", "ana@example.com", "\n");
        assert_eq!(
            form.validate(),
            Err(ValidationError::Missing(Field::Message))
        );
    }

    #[test]
    fn test_email_pattern() {
        for good in ["a@b", "ana.maria+tag@mail.example.com", " x@y.io "] {
            assert!(ContactForm::new("n", good, "m").validate().is_ok(), "{good}");
        }
        for bad in ["plain", "@host", "a@", "a b@c.d", "a@-host.com", "a@host..com"] {
            assert_eq!(
                ContactForm::new("n", bad, "m").validate(),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
        assert!(Field::Message.is_multiline());
    }

    #[test]
    fn test_clear() {
        let mut form = ContactForm::new("a", "b", "c");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }
}
