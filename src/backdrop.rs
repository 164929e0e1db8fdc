// Loads an optional backdrop image and scales it to the pixel buffer size.
// The pattern is drawn on top of it.

use std::path::Path;

use image::imageops::{self, FilterType};
use tracing::info;

use crate::error::Error;
use crate::types::PixelBuffer;

/// Decode the image at `path` and resize it to `width` x `height` RGBA.
pub fn load_backdrop(path: &Path, width: usize, height: usize) -> Result<PixelBuffer, Error> {
    let img = image::open(path)
        .map_err(|source| Error::ImageLoad { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), w = img.width(), h = img.height(), "loaded backdrop");

    let rgba = img.to_rgba8();
    let scaled = imageops::resize(&rgba, width as u32, height as u32, FilterType::Triangle);

    Ok(PixelBuffer { width, height, data: scaled.into_raw() })
}
