use crate::error::PickError;
use crate::image_source::interface::{ImageReference, PickOptions};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Largest centered region of `width` x `height` with the given aspect ratio,
/// as `(x, y, width, height)`.
pub fn centered_crop(width: u32, height: u32, aspect: (u32, u32)) -> (u32, u32, u32, u32) {
    let (aspect_w, aspect_h) = (aspect.0.max(1) as u64, aspect.1.max(1) as u64);
    let (w, h) = (width as u64, height as u64);

    if w == 0 || h == 0 {
        return (0, 0, width, height);
    }

    let (crop_w, crop_h) = if w * aspect_h > h * aspect_w {
        ((h * aspect_w / aspect_h).max(1), h)
    } else {
        (w, (w * aspect_h / aspect_w).max(1))
    };

    (
        ((w - crop_w) / 2) as u32,
        ((h - crop_h) / 2) as u32,
        crop_w as u32,
        crop_h as u32,
    )
}

pub fn crop_to_aspect(image: &DynamicImage, aspect: (u32, u32)) -> DynamicImage {
    let (x, y, w, h) = centered_crop(image.width(), image.height(), aspect);
    image.crop_imm(x, y, w, h)
}

/// Crops the picked file to the requested aspect and writes the result into
/// a fresh file in `scratch_dir`. Full quality is written as PNG, anything
/// lower as JPEG.
pub fn edit_picked_image(
    source: &Path,
    options: &PickOptions,
    scratch_dir: &Path,
) -> Result<ImageReference, PickError> {
    let display = source.display().to_string();
    let edit_error = |source: image::ImageError| PickError::Edit {
        path: display.clone(),
        source,
    };

    let image = image::open(source).map_err(edit_error)?;
    let edited = crop_to_aspect(&image, options.aspect);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "picked".to_string());

    let lossless = options.quality >= 1.0;
    let (file, target) = tempfile::Builder::new()
        .prefix(&format!("{}-", stem))
        .suffix(if lossless { ".png" } else { ".jpg" })
        .tempfile_in(scratch_dir)
        .and_then(|named| named.keep().map_err(|e| e.error))
        .map_err(|source| PickError::Io {
            path: scratch_dir.display().to_string(),
            source,
        })?;
    let mut writer = BufWriter::new(file);

    if lossless {
        edited
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(edit_error)?;
    } else {
        let quality = (options.quality.clamp(0.01, 1.0) * 100.0).round() as u8;
        DynamicImage::ImageRgb8(edited.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
            .map_err(edit_error)?;
    }

    writer.flush().map_err(|source| PickError::Io {
        path: target.display().to_string(),
        source,
    })?;

    Ok(ImageReference::new(target))
}
