use crate::encoder::interface::{Base64Payload, Encoder};
use crate::error::EncodingError;
use crate::image_source::interface::ImageReference;
use crate::library::logger::interface::Logger;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

pub struct EncoderFile {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl EncoderFile {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("encoder").with_namespace("file"),
        }
    }
}

impl Encoder for EncoderFile {
    fn encode(&self, image: &ImageReference) -> Result<Base64Payload, EncodingError> {
        let bytes = std::fs::read(image.path()).map_err(|source| EncodingError::Read {
            path: image.to_string(),
            source,
        })?;

        let _ = self
            .logger
            .info(&format!("Encoding {} ({} bytes)", image, bytes.len()));

        let payload = Base64Payload::new(STANDARD.encode(bytes));
        if payload.is_empty() {
            return Err(EncodingError::Empty {
                path: image.to_string(),
            });
        }

        Ok(payload)
    }
}
