use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::ScenaResult;

/// Decoded raster image in straight-alpha RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixel bytes.
    pub rgba8: Arc<Vec<u8>>,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into RGBA8 pixels.
pub fn decode_image(bytes: &[u8]) -> ScenaResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}
