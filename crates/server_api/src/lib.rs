use std::sync::Arc;

use shared::{
    domain::{Inquiry, NewInquiry, StoreMode},
    error::{ApiError, ErrorCode},
    protocol::CreateInquiryRequest,
    validation::validate_inquiry,
};
use storage::{InquiryStore, StoreError};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn InquiryStore>,
}

impl ApiContext {
    pub fn new(store: Arc<dyn InquiryStore>) -> Self {
        Self { store }
    }

    pub fn mode(&self) -> StoreMode {
        self.store.mode()
    }
}

/// Checks the payload against the shared schema and appends it to the store.
pub async fn create_inquiry(
    ctx: &ApiContext,
    request: CreateInquiryRequest,
) -> Result<Inquiry, ApiError> {
    let new_inquiry = NewInquiry::from(request);
    if let Err(errors) = validate_inquiry(&new_inquiry) {
        let first = errors.first();
        let mut error = ApiError::new(
            ErrorCode::Validation,
            first.map_or_else(|| errors.to_string(), |e| e.message.clone()),
        );
        if let Some(first) = first {
            error = error.with_field(first.field.as_str());
        }
        return Err(error);
    }

    let inquiry = ctx
        .store
        .create_inquiry(new_inquiry)
        .await
        .map_err(store_error)?;
    debug!(id = inquiry.id.0, "inquiry accepted");
    Ok(inquiry)
}

pub async fn health(ctx: &ApiContext) -> Result<(), ApiError> {
    ctx.store.health_check().await.map_err(store_error)
}

fn store_error(err: StoreError) -> ApiError {
    warn!(error = %err, "inquiry store failed");
    if err.is_unavailable() {
        ApiError::new(
            ErrorCode::Unavailable,
            "We couldn't save your inquiry right now. Please try again.",
        )
    } else {
        ApiError::new(ErrorCode::Internal, "failed to save inquiry")
    }
}
