//! Site content: careers, offices, testimonials, videos and news events.

use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Routes, Shape};
use crate::transport::{Attachment, Body, MultipartForm, Verb};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub open: bool,
}

crate::impl_resource!(
    Career,
    "careers",
    "Career",
    id: u64,
    CareerDraft,
    Routes::new("careers").update_with(Verb::Put)
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerDraft {
    pub title: String,
    pub department: String,
    pub description: String,
    pub open: bool,
}

impl Encode for CareerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub id: u64,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

crate::impl_resource!(
    Office,
    "offices",
    "Office",
    id: u64,
    OfficeDraft,
    Routes::new("offices").public_reads()
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficeDraft {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub image: Option<Attachment>,
}

impl Encode for OfficeDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("address", &self.address)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Ok(Body::Multipart(
            MultipartForm::new()
                .text("name", &self.name)
                .text("address", &self.address)
                .text_opt("phone", self.phone.as_deref())
                .file_opt("image", self.image.as_ref()),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub image: Option<String>,
}

crate::impl_resource!(
    Testimonial,
    "testimonials",
    "Testimonial",
    id: u64,
    TestimonialDraft,
    Routes::new("testimonials")
        .list_shape(Shape::Envelope("testimonials"))
        .public_reads()
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialDraft {
    pub name: String,
    pub message: String,
    pub rating: Option<u8>,
    pub image: Option<Attachment>,
}

impl Encode for TestimonialDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("message", &self.message)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Ok(Body::Multipart(
            MultipartForm::new()
                .text("name", &self.name)
                .text("message", &self.message)
                .text_opt("rating", self.rating.map(|r| r.to_string()))
                .file_opt("image", self.image.as_ref()),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub url: String,
}

crate::impl_resource!(
    Video,
    "videos",
    "Video",
    id: u64,
    VideoDraft,
    Routes::new("videos").update_with(Verb::Put).public_reads()
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VideoDraft {
    pub title: String,
    pub url: String,
}

impl Encode for VideoDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("url", &self.url)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}

/// A news item or company event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub images: Vec<String>,
}

crate::impl_resource!(
    Event,
    "events",
    "Event",
    id: u64,
    EventDraft,
    Routes::new("events")
        .item_shape(Shape::Envelope("event"))
        .public_reads()
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<String>,
    pub body: String,
    pub images: Vec<Attachment>,
}

impl Encode for EventDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Ok(Body::Multipart(
            MultipartForm::new()
                .text("title", &self.title)
                .text_opt("date", self.date.as_deref())
                .text("body", &self.body)
                .files("images", &self.images),
        ))
    }
}
