use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::resource::{require, Encode, Routes, Shape};
use crate::transport::{Attachment, Body, MultipartForm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u64,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
}

crate::impl_resource!(
    Agent,
    "agents",
    "Agent",
    id: u64,
    AgentDraft,
    Routes::new("agents").item_shape(Shape::Envelope("agent"))
);

/// Create/update payload for an agent profile, sent as multipart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentDraft {
    pub name: String,
    pub role: String,
    pub description: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub image: Option<Attachment>,
    pub certificates: Vec<Attachment>,
}

impl AgentDraft {
    pub fn new(name: impl Into<String>, role: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: Attachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_certificate(mut self, certificate: Attachment) -> Self {
        self.certificates.push(certificate);
        self
    }
}

impl Encode for AgentDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("description", &self.description)
    }

    fn encode(&self) -> Result<Body, TransportError> {
        let form = MultipartForm::new()
            .text("name", &self.name)
            .text("role", &self.role)
            .text("description", &self.description)
            .text_opt("phone", self.phone.as_deref())
            .text_opt("email", self.email.as_deref())
            .file_opt("image", self.image.as_ref())
            .files("certificates", &self.certificates);
        Ok(Body::Multipart(form))
    }
}
