//! Avatar uploads.
//!
//! The picked file is stored inline on the profile as a `data:` URL. The bytes
//! are not decoded or resized.

use base64::Engine;
use mime::Mime;

use crate::error::AvatarError;

/// A file picked from the avatar file input
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarUpload {
    pub file_name: String,
    /// MIME type reported by the file picker
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Encode the upload as a `data:<mime>;base64,<payload>` URL.
    ///
    /// Only `image/*` types are accepted, matching the picker's filter.
    pub fn to_data_url(&self) -> Result<String, AvatarError> {
        let mime_type = Self::image_mime(&self.mime_type)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        Ok(format!("data:{};base64,{}", mime_type.essence_str(), encoded))
    }

    fn image_mime(raw: &str) -> Result<Mime, AvatarError> {
        let parsed: Mime = raw
            .trim()
            .parse()
            .map_err(|_| AvatarError::UnsupportedType(raw.to_string()))?;

        if parsed.type_() != mime::IMAGE {
            return Err(AvatarError::UnsupportedType(raw.to_string()));
        }
        Ok(parsed)
    }
}
