use serde::{Deserialize, Serialize};

use crate::domain::NewInquiry;

pub fn inquiries_route() -> &'static str {
    "/api/inquiries"
}

pub fn healthz_route() -> &'static str {
    "/healthz"
}

/// Body accepted by the inquiry endpoint. Missing fields deserialize as empty
/// strings so the schema, not serde, reports what is wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInquiryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl From<CreateInquiryRequest> for NewInquiry {
    fn from(value: CreateInquiryRequest) -> Self {
        NewInquiry {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

impl From<&NewInquiry> for CreateInquiryRequest {
    fn from(value: &NewInquiry) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
            message: value.message.clone(),
        }
    }
}
