//! The inquiry schema shared by the contact form and the HTTP boundary.
//!
//! Both sides run the same checks so a payload the form accepts is never
//! rejected by the server for a different reason.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::NewInquiry;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_EMAIL_CHARS: usize = 254;
pub const MAX_MESSAGE_CHARS: usize = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every schema violation found in one payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid inquiry: {}", summary(.errors))]
pub struct FieldErrors {
    pub errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_inquiry(inquiry: &NewInquiry) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if inquiry.name.trim().is_empty() {
        errors.push(Field::Name, "Name is required");
    } else if inquiry.name.chars().count() > MAX_NAME_CHARS {
        errors.push(
            Field::Name,
            format!("Name must be at most {MAX_NAME_CHARS} characters"),
        );
    }

    if inquiry.email.trim().is_empty() {
        errors.push(Field::Email, "Email is required");
    } else if inquiry.email.chars().count() > MAX_EMAIL_CHARS {
        errors.push(
            Field::Email,
            format!("Email must be at most {MAX_EMAIL_CHARS} characters"),
        );
    } else if !is_valid_email(&inquiry.email) {
        errors.push(Field::Email, "Invalid email address");
    }

    if inquiry.message.trim().is_empty() {
        errors.push(Field::Message, "Message is required");
    } else if inquiry.message.chars().count() > MAX_MESSAGE_CHARS {
        errors.push(
            Field::Message,
            format!("Message must be at most {MAX_MESSAGE_CHARS} characters"),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `local@domain.tld` with no whitespace, a single `@`, and a dotted domain
/// whose labels are non-empty.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
