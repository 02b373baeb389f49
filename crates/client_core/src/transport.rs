use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{Inquiry, NewInquiry},
    error::{ApiError, ErrorCode},
    protocol::{inquiries_route, CreateInquiryRequest},
};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{}", .0.message)]
    Rejected(ApiError),
    #[error("unexpected response status {0}")]
    UnexpectedStatus(StatusCode),
}

impl TransportError {
    /// The server refused the payload itself rather than failing to store it.
    pub fn validation(&self) -> Option<&ApiError> {
        match self {
            Self::Rejected(error) if error.code == ErrorCode::Validation => Some(error),
            _ => None,
        }
    }
}

/// The single network call the contact form makes.
#[async_trait]
pub trait InquiryTransport: Send + Sync {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpInquiryTransport {
    http: Client,
    endpoint: Url,
}

impl HttpInquiryTransport {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(server_url)?.join(inquiries_route())?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl InquiryTransport for HttpInquiryTransport {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, TransportError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&CreateInquiryRequest::from(inquiry))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Inquiry>().await?);
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<ApiError>(&body) {
            Ok(error) => Err(TransportError::Rejected(error)),
            Err(_) => Err(TransportError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
