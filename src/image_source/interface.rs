use crate::error::PickError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Locator of a selected image on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(PathBuf);

impl ImageReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Images,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickOptions {
    pub media: MediaType,
    pub allows_editing: bool,
    /// Width:height the edited image is cropped to.
    pub aspect: (u32, u32),
    /// 0.0..=1.0, where 1.0 keeps the image lossless.
    pub quality: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickedAsset {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    pub cancelled: bool,
    pub assets: Vec<PickedAsset>,
}

impl PickResult {
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            assets: vec![],
        }
    }

    pub fn picked(image: &ImageReference) -> Self {
        Self {
            cancelled: false,
            assets: vec![PickedAsset {
                uri: image.to_string(),
            }],
        }
    }

    /// `None` when the user backed out of the picker or it handed back nothing.
    pub fn first_image(&self) -> Option<ImageReference> {
        if self.cancelled {
            return None;
        }
        self.assets
            .first()
            .map(|asset| ImageReference::new(asset.uri.clone()))
    }
}

pub trait ImageSource {
    fn pick_image(&self, options: &PickOptions) -> Result<PickResult, PickError>;
}
