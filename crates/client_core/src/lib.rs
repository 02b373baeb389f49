//! Client side of the contact form: local state, validation before any
//! network call, and the transport that posts the inquiry.

pub mod form;
pub mod transport;

pub use form::{ContactForm, Notice, NoticeKind, SubmitOutcome};
pub use transport::{HttpInquiryTransport, InquiryTransport, TransportError};
