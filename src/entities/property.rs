//! Property listings, including search.
//!
//! Search runs against `properties/search` with the filters as query
//! parameters; see [`PropertySearch::query`].

use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Query, Routes, Shape};
use crate::transport::{Attachment, Body, MultipartForm};

// Also stored with bitcode by the search cache: keep the layout plain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
}

crate::impl_resource!(
    Property,
    "properties",
    "Property",
    id: u64,
    PropertyDraft,
    Routes::new("properties")
        .list_shape(Shape::Envelope("properties"))
        .item_shape(Shape::Envelope("property"))
        .status_path("status")
        .public_reads()
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub images: Vec<Attachment>,
    pub amenities: Vec<String>,
}

impl PropertyDraft {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image(mut self, image: Attachment) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }
}

impl Encode for PropertyDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("location", &self.location)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        let form = MultipartForm::new()
            .text("title", &self.title)
            .text("location", &self.location)
            .text_opt("description", self.description.as_deref())
            .text_opt("price", self.price.map(|p| p.to_string()))
            .text_opt("type", self.property_type.as_deref())
            .text_opt("bedrooms", self.bedrooms.map(|b| b.to_string()))
            .files("images", &self.images)
            .records("amenities", "name", &self.amenities);
        Ok(Body::Multipart(form))
    }
}

/// Filters for `properties/search`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn query(&self) -> Query {
        Query::at("search")
            .param_opt("location", self.location.as_ref())
            .param_opt("type", self.property_type.as_ref())
            .param_opt("minPrice", self.min_price)
            .param_opt("maxPrice", self.max_price)
            .param_opt("bedrooms", self.bedrooms)
    }

    /// The filters as sent, for the search cache.
    pub fn filters(&self) -> Vec<(String, String)> {
        self.query().params
    }
}
