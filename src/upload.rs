//! Binary payloads for media, audio and sticker uploads.
//!
//! Uploads go out either as `multipart/form-data` ([`MultipartUpload`]) or
//! embedded in a JSON body as base64 ([`FileUpload::to_base64`]).

use crate::{Error, Result};
use base64::Engine;
use std::fmt;

/// A file attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Name of the form field carrying the file.
    pub field_name: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload for the `file` form field.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field_name: "file".to_string(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Overrides the form field name.
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// Standard base64 of the content, as accepted by the JSON media fields.
    ///
    /// ```
    /// use evolution_client::FileUpload;
    ///
    /// let file = FileUpload::new("hi.txt", "text/plain", b"hi".to_vec());
    /// assert_eq!(file.to_base64(), "aGk=");
    /// ```
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    pub(crate) fn to_part(&self) -> Result<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|_| Error::InvalidArgument {
                argument: "mimeType",
                reason: format!("`{}` is not a valid MIME type", self.mime_type),
            })
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A `multipart/form-data` body: plain text fields plus one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartUpload {
    /// Text fields, sent in order.
    pub fields: Vec<(String, String)>,
    /// The attached file.
    pub file: FileUpload,
}

impl MultipartUpload {
    /// Creates a body carrying only `file`.
    pub fn new(file: FileUpload) -> Self {
        Self {
            fields: Vec::new(),
            file,
        }
    }

    /// Appends a text field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Appends a text field only when `value` is present.
    pub fn optional_field(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form> {
        let form = self
            .fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });
        Ok(form.part(self.file.field_name.clone(), self.file.to_part()?))
    }
}
