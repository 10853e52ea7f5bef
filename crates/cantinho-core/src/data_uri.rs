//! Data-URI embedding for memory attachments.
//!
//! Attachments are stored inline in the memory document as
//! `data:<content-type>;base64,<payload>` rather than in external storage.

use base64::Engine;

use crate::defaults::FALLBACK_CONTENT_TYPE;

/// A binary attachment read fully into memory, with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment, substituting the fallback type when none was declared.
    pub fn new(content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let content_type = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        Self {
            content_type,
            bytes,
        }
    }

    /// Encode as a data URI.
    pub fn to_data_uri(&self) -> String {
        encode(&self.content_type, &self.bytes)
    }
}

/// Encode bytes as `data:<content_type>;base64,<payload>`.
pub fn encode(content_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", content_type, payload)
}
