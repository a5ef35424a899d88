use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Routes, Shape};
use crate::transport::Body;

/// A contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

crate::impl_resource!(
    Inquiry,
    "inquiries",
    "Inquiry",
    id: u64,
    InquiryDraft,
    Routes::new("inquiries")
        .list_shape(Shape::Envelope("inquiries"))
        .status_path("status")
        .public_creates()
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl InquiryDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: message.into(),
        }
    }
}

impl Encode for InquiryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}
