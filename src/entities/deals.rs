use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Routes, Shape};
use crate::transport::{Attachment, Body, MultipartForm};

/// A completed sale shown on the track-record page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedDeal {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

crate::impl_resource!(
    ClosedDeal,
    "closed-deals",
    "Closed deal",
    id: u64,
    ClosedDealDraft,
    Routes::new("closed-deals").list_shape(Shape::Envelope("deals"))
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedDealDraft {
    pub title: String,
    pub location: String,
    pub price: Option<f64>,
    pub closed_on: Option<String>,
    pub image: Option<Attachment>,
}

impl ClosedDealDraft {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            ..Self::default()
        }
    }
}

impl Encode for ClosedDealDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Ok(Body::Multipart(
            MultipartForm::new()
                .text("title", &self.title)
                .text("location", &self.location)
                .text_opt("price", self.price.map(|p| p.to_string()))
                .text_opt("closedOn", self.closed_on.as_deref())
                .file_opt("image", self.image.as_ref()),
        ))
    }
}

/// A property offered by a client through the public site, pending review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub images: Vec<String>,
}

crate::impl_resource!(
    Submission,
    "client-properties",
    "Client property",
    id: u64,
    SubmissionDraft,
    Routes::new("client-properties")
        .status_path("status")
        .public_creates()
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub description: Option<String>,
    pub images: Vec<Attachment>,
}

impl SubmissionDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: Attachment) -> Self {
        self.images.push(image);
        self
    }
}

impl Encode for SubmissionDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        require("location", &self.location)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Ok(Body::Multipart(
            MultipartForm::new()
                .text("name", &self.name)
                .text("phone", &self.phone)
                .text_opt("email", self.email.as_deref())
                .text("location", &self.location)
                .text_opt("description", self.description.as_deref())
                .files("images", &self.images),
        ))
    }
}
