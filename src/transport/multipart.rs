//! Multipart bodies with the backend's indexed field naming.
//!
//! Field names must match the backend exactly: arrays are flattened as
//! `certificates[0]`, arrays of records as `amenities[1][name]`.

use crate::error::TransportError;

/// A file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment, guessing the mime type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, file: Attachment },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

/// Ordered multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name[index]`
    pub fn indexed(name: &str, index: usize) -> String {
        format!("{name}[{index}]")
    }

    /// `name[index][field]`
    pub fn nested(name: &str, index: usize, field: &str) -> String {
        format!("{name}[{index}][{field}]")
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a text part only when a value is present.
    pub fn text_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn file(mut self, name: impl Into<String>, file: Attachment) -> Self {
        self.parts.push(Part::File {
            name: name.into(),
            file,
        });
        self
    }

    pub fn file_opt(self, name: impl Into<String>, file: Option<&Attachment>) -> Self {
        match file {
            Some(file) => self.file(name, file.clone()),
            None => self,
        }
    }

    /// Add `name[i]` file parts.
    pub fn files(mut self, name: &str, files: &[Attachment]) -> Self {
        for (index, file) in files.iter().enumerate() {
            self = self.file(Self::indexed(name, index), file.clone());
        }
        self
    }

    /// Add `name[i][field]` text parts.
    pub fn records<'a, I>(mut self, name: &str, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        for (index, value) in values.into_iter().enumerate() {
            self = self.text(Self::nested(name, index, field), value.clone());
        }
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(Part::name).collect()
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_files(&self) -> bool {
        self.parts.iter().any(|part| matches!(part, Part::File { .. }))
    }

    pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form, TransportError> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part {
                Part::Text { name, value } => form.text(name, value),
                Part::File { name, file } => {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)
                        .map_err(|e| TransportError::Encode(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
