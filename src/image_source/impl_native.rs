use crate::error::PickError;
use crate::image_source::edit::edit_picked_image;
use crate::image_source::interface::{
    ImageReference, ImageSource, MediaType, PickOptions, PickResult,
};
use crate::library::logger::interface::Logger;
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Native single-file dialog. Edited picks are written to a scratch directory
/// under the OS temp dir.
pub struct ImageSourceNative {
    logger: Arc<dyn Logger + Send + Sync>,
    scratch_dir: PathBuf,
}

impl ImageSourceNative {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("native"),
            scratch_dir: std::env::temp_dir().join("label-lens"),
        }
    }

    fn dialog(options: &PickOptions) -> FileDialog {
        match options.media {
            MediaType::Images => FileDialog::new()
                .set_title("Choose an Image")
                .add_filter("Images", IMAGE_EXTENSIONS),
        }
    }
}

impl ImageSource for ImageSourceNative {
    fn pick_image(&self, options: &PickOptions) -> Result<PickResult, PickError> {
        let _ = self.logger.info("Opening image picker...");

        let Some(path) = Self::dialog(options).pick_file() else {
            let _ = self.logger.info("Image picker cancelled");
            return Ok(PickResult::cancelled());
        };

        if !path.is_file() {
            return Err(PickError::Io {
                path: path.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a file"),
            });
        }

        if !options.allows_editing {
            let _ = self.logger.info(&format!("Picked {}", path.display()));
            return Ok(PickResult::picked(&ImageReference::new(path)));
        }

        std::fs::create_dir_all(&self.scratch_dir).map_err(|source| PickError::Io {
            path: self.scratch_dir.display().to_string(),
            source,
        })?;

        let edited = edit_picked_image(&path, options, &self.scratch_dir)?;

        let _ = self.logger.info(&format!(
            "Picked {} (cropped {}:{} to {})",
            path.display(),
            options.aspect.0,
            options.aspect.1,
            edited
        ));

        Ok(PickResult::picked(&edited))
    }
}
