use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use shared::{
    domain::InquiryId,
    error::{ApiError, ErrorCode},
};

use crate::transport::TransportError;

enum Behaviour {
    Accept,
    Reject(ApiError),
}

struct FakeTransport {
    behaviour: Behaviour,
    calls: AtomicUsize,
    last: Mutex<Option<NewInquiry>>,
}

impl FakeTransport {
    fn accepting() -> Self {
        Self::new(Behaviour::Accept)
    }

    fn rejecting(error: ApiError) -> Self {
        Self::new(Behaviour::Reject(error))
    }

    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InquiryTransport for FakeTransport {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().expect("lock") = Some(inquiry.clone());
        match &self.behaviour {
            Behaviour::Accept => Ok(Inquiry::from_new(InquiryId(7), inquiry.clone(), Utc::now())),
            Behaviour::Reject(error) => Err(TransportError::Rejected(error.clone())),
        }
    }
}

fn jane_form() -> ContactForm {
    ContactForm::with_values("Jane Doe", "jane@example.com", "Interested in services")
}

#[tokio::test]
async fn successful_submit_clears_fields_and_shows_notice() {
    let transport = FakeTransport::accepting();
    let mut form = jane_form();
    let before = Utc::now();

    let outcome = form.submit(&transport).await;

    let SubmitOutcome::Sent(inquiry) = outcome else {
        panic!("expected sent, got {outcome:?}");
    };
    assert_eq!(inquiry.id, InquiryId(7));
    assert_eq!(inquiry.name, "Jane Doe");
    assert!(inquiry.created_at >= before);
    assert!(form.is_blank());
    assert_eq!(form.notice().map(|n| n.kind), Some(NoticeKind::Success));
    assert!(!form.is_pending());
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.last.lock().expect("lock").clone(),
        Some(NewInquiry::new(
            "Jane Doe",
            "jane@example.com",
            "Interested in services"
        ))
    );
}

#[tokio::test]
async fn invalid_input_never_reaches_transport() {
    let transport = FakeTransport::accepting();
    for (name, email, message, field) in [
        ("", "jane@example.com", "hi", Field::Name),
        ("Jane", "jane-at-example", "hi", Field::Email),
        ("Jane", "jane@example.com", "", Field::Message),
    ] {
        let mut form = ContactForm::with_values(name, email, message);
        let outcome = form.submit(&transport).await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome");
        };
        assert!(errors.get(field).is_some());
        assert!(form.error(field).is_some());
        assert_eq!(form.value(Field::Name), name);
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn store_failure_keeps_values_and_shows_error_notice() {
    let transport = FakeTransport::rejecting(ApiError::new(
        ErrorCode::Unavailable,
        "inquiry store unavailable",
    ));
    let mut form = jane_form();

    let outcome = form.submit(&transport).await;

    let SubmitOutcome::Failed(notice) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.description, "inquiry store unavailable");
    assert_eq!(form, {
        let mut expected = jane_form();
        expected.notice = Some(notice.clone());
        expected
    });
    assert_eq!(transport.calls(), 1);

    // Resubmitting is an explicit user action and makes one more call.
    form.submit(&transport).await;
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn server_side_field_rejection_is_shown_inline() {
    let transport = FakeTransport::rejecting(
        ApiError::new(ErrorCode::Validation, "Invalid email address").with_field("email"),
    );
    let mut form = jane_form();

    let outcome = form.submit(&transport).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(form.error(Field::Email), Some("Invalid email address"));
    assert!(form.notice().is_none());
    assert_eq!(form.email, "jane@example.com");
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = ContactForm::new();
    form.validate().expect_err("blank form");
    form.set(Field::Email, "jane@example.com");
    assert!(form.error(Field::Email).is_none());
    assert!(form.error(Field::Name).is_some());
    assert_eq!(form.value(Field::Email), "jane@example.com");
}

#[test]
fn submit_label_reflects_pending_state() {
    let mut form = ContactForm::new();
    assert_eq!(form.submit_label(), "Send Inquiry");
    let mut flag = false;
    let guard = PendingGuard::set(&mut flag);
    assert!(*guard.0);
    drop(guard);
    assert!(!flag);

    form.pending = true;
    assert_eq!(form.submit_label(), "Sending...");
}

struct StalledTransport;

#[async_trait]
impl InquiryTransport for StalledTransport {
    async fn create_inquiry(&self, _: &NewInquiry) -> Result<Inquiry, TransportError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn abandoned_submit_does_not_leave_form_pending() {
    let mut form = jane_form();

    let result = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        form.submit(&StalledTransport),
    )
    .await;

    assert!(result.is_err(), "stalled transport should time out");
    assert!(!form.is_pending());
    assert_eq!(form.submit_label(), "Send Inquiry");
    assert_eq!(form.name, "Jane Doe");
    assert_eq!(form.message, "Interested in services");
    assert!(form.notice().is_none());
}
