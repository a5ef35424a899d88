use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Routes, Shape};
use crate::transport::{Body, Verb};

/// A viewing or consultation booked from the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "propertyId")]
    pub property_id: Option<u64>,
}

crate::impl_resource!(
    Appointment,
    "appointments",
    "Appointment",
    id: u64,
    AppointmentDraft,
    Routes::new("appointments")
        .list_shape(Shape::Envelope("appointments"))
        .status_path("status")
        .public_creates()
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub property_id: Option<u64>,
    pub note: Option<String>,
}

impl Encode for AppointmentDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("date", &self.date)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u64,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

crate::impl_resource!(
    Meeting,
    "meetings",
    "Meeting",
    id: u64,
    MeetingDraft,
    Routes::new("meetings").update_with(Verb::Put)
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeetingDraft {
    pub title: String,
    pub date: String,
    pub attendees: Vec<String>,
}

impl Encode for MeetingDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("date", &self.date)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seminar {
    pub id: u64,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub venue: String,
}

crate::impl_resource!(
    Seminar,
    "seminars",
    "Seminar",
    id: u64,
    SeminarDraft,
    Routes::new("seminars")
        .item_shape(Shape::Envelope("seminar"))
        .update_with(Verb::Put)
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeminarDraft {
    pub title: String,
    pub date: String,
    pub venue: String,
}

impl Encode for SeminarDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("date", &self.date)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        Body::json(self)
    }
}
