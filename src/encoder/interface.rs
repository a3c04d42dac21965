use crate::error::EncodingError;
use crate::image_source::interface::ImageReference;

/// Base64 text of an image file's bytes, as sent to the vision API.
#[derive(Clone, PartialEq, Eq)]
pub struct Base64Payload(String);

impl Base64Payload {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Base64Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Base64Payload({} bytes)", self.0.len())
    }
}

pub trait Encoder {
    fn encode(&self, image: &ImageReference) -> Result<Base64Payload, EncodingError>;
}
