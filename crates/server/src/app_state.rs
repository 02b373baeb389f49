use async_trait::async_trait;
use client_core::{InquiryTransport, TransportError};
use server_api::{create_inquiry, ApiContext};
use shared::{
    domain::{Inquiry, NewInquiry},
    protocol::CreateInquiryRequest,
};
use site::SceneKind;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
    pub(crate) scene: SceneKind,
}

/// Lets the no-script contact form drive the same submission flow as the
/// browser client, without a network hop.
pub(crate) struct LocalTransport<'a>(pub(crate) &'a ApiContext);

#[async_trait]
impl InquiryTransport for LocalTransport<'_> {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, TransportError> {
        create_inquiry(self.0, CreateInquiryRequest::from(inquiry))
            .await
            .map_err(TransportError::Rejected)
    }
}
