use async_trait::async_trait;
use chrono::Utc;
use shared::domain::{Inquiry, InquiryId, NewInquiry, StoreMode};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{InquiryStore, StoreError};

/// In-memory stand-in used when no database is configured.
///
/// Ids are the wall-clock time in milliseconds, so two inquiries created in
/// the same millisecond share an id. Every accepted inquiry is kept in memory
/// for [`MockInquiryStore::submitted`] and the log is never pruned, so memory
/// grows with each submission for the life of the process. Acceptable for
/// demo mode only.
#[derive(Debug, Default)]
pub struct MockInquiryStore {
    submitted: Mutex<Vec<Inquiry>>,
}

impl MockInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything accepted so far, oldest first.
    pub async fn submitted(&self) -> Vec<Inquiry> {
        self.submitted.lock().await.clone()
    }
}

#[async_trait]
impl InquiryStore for MockInquiryStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Mock
    }

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StoreError> {
        let created_at = Utc::now();
        let inquiry = Inquiry::from_new(
            InquiryId(created_at.timestamp_millis()),
            inquiry,
            created_at,
        );
        debug!(id = inquiry.id.0, "mock inquiry recorded");
        self.submitted.lock().await.push(inquiry.clone());
        Ok(inquiry)
    }
}
