use serde::{Deserialize, Serialize};
use shared::{
    domain::{Inquiry, NewInquiry},
    validation::{validate_inquiry, Field, FieldError, FieldErrors},
};
use tracing::{debug, warn};

use crate::transport::InquiryTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Inquiry sent".into(),
            description: "Thanks for reaching out. We'll be in touch shortly.".into(),
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Something went wrong".into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Schema check failed; nothing was sent.
    Invalid(FieldErrors),
    Sent(Inquiry),
    /// The call failed; entered values are kept so the user can resubmit.
    Failed(Notice),
}

/// State behind the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: FieldErrors,
    notice: Option<Notice>,
    pending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Editing a field clears its inline error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.errors.retain(|error| error.field != field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "Sending..."
        } else {
            "Send Inquiry"
        }
    }

    pub fn to_inquiry(&self) -> NewInquiry {
        NewInquiry::new(self.name.clone(), self.email.clone(), self.message.clone())
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors = FieldErrors::default();
    }

    /// Runs the shared schema over the current values and records any
    /// inline errors.
    pub fn validate(&mut self) -> Result<NewInquiry, FieldErrors> {
        let inquiry = self.to_inquiry();
        match validate_inquiry(&inquiry) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                Ok(inquiry)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validates, then makes exactly one transport call. Never retries.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: InquiryTransport + ?Sized,
    {
        let inquiry = match self.validate() {
            Ok(inquiry) => inquiry,
            Err(errors) => {
                debug!(%errors, "contact form rejected before sending");
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.notice = None;
        let result = {
            let _pending = PendingGuard::set(&mut self.pending);
            transport.create_inquiry(&inquiry).await
        };

        match result {
            Ok(created) => {
                self.reset();
                self.notice = Some(Notice::sent());
                SubmitOutcome::Sent(created)
            }
            Err(error) => {
                if let Some(rejection) = error.validation() {
                    if let Some(field) = rejection.field.as_deref().and_then(parse_field) {
                        let errors = FieldErrors {
                            errors: vec![FieldError {
                                field,
                                message: rejection.message.clone(),
                            }],
                        };
                        self.errors = errors.clone();
                        return SubmitOutcome::Invalid(errors);
                    }
                }
                warn!(%error, "inquiry submission failed");
                let notice = Notice::failed(error.to_string());
                self.notice = Some(notice.clone());
                SubmitOutcome::Failed(notice)
            }
        }
    }
}

/// Holds the pending flag for the duration of one transport call and clears
/// it on drop, including when the submit future is abandoned mid-flight.
struct PendingGuard<'a>(&'a mut bool);

impl<'a> PendingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn parse_field(raw: &str) -> Option<Field> {
    match raw {
        "name" => Some(Field::Name),
        "email" => Some(Field::Email),
        "message" => Some(Field::Message),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
