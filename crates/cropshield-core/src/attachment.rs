//! Image attachments for registration and land verification uploads.
//!
//! The service only keeps `png`, `jpg` and `jpeg` uploads and decides by file
//! extension, so attachments are sniffed here and given a matching name.

use std::fmt;
use std::path::Path;

use image::ImageFormat;

use crate::error::{ClientError, ClientResult};

/// An image file ready to be sent as a multipart part.
#[derive(Clone, PartialEq)]
pub struct Attachment {
    file_name: String,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl Attachment {
    /// Read an image from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Self::from_bytes(name, bytes)
    }

    /// Wrap in-memory image bytes, checking they are PNG or JPEG.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> ClientResult<Self> {
        let file_name = file_name.into();
        let format = image::guess_format(&bytes).map_err(|_| {
            ClientError::InvalidInput(format!("{} is not a recognizable image", file_name))
        })?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(ClientError::InvalidInput(format!(
                "{} must be a PNG or JPEG image",
                file_name
            )));
        }
        Ok(Self {
            file_name: with_extension(&file_name, format),
            format,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Convert into a multipart part.
    pub fn to_part(&self) -> ClientResult<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(self.mime())
            .map_err(|e| ClientError::InvalidInput(e.to_string()))
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime())
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Make sure the name ends with an extension the service accepts.
fn with_extension(name: &str, format: ImageFormat) -> String {
    let lower = name.to_lowercase();
    let ok = match format {
        ImageFormat::Png => lower.ends_with(".png"),
        _ => lower.ends_with(".jpg") || lower.ends_with(".jpeg"),
    };
    if ok {
        name.to_string()
    } else {
        let ext = if format == ImageFormat::Png { "png" } else { "jpg" };
        format!("{}.{}", name, ext)
    }
}
