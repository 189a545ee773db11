//! Decode boundary between the load pipeline and the image codecs.
//!
//! The loader only cares whether a path produced a bitmap or not; codec
//! selection, format support and pixel conversion live behind the
//! [`ImageDecoder`] trait.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

/// A decoded image ready for display.
///
/// Pixels are tightly packed RGBA8, row-major. The pixel buffer is shared,
/// so cloning a `Bitmap` is cheap and the same decode result can cross the
/// worker/UI thread boundary without copying.
#[derive(Clone)]
pub struct Bitmap {
    pixels: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Wraps an RGBA8 pixel buffer.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba8(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len() as u64, width as u64 * height as u64 * 4);
        Self {
            pixels: pixels.into(),
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Trait for turning a file path into a displayable bitmap.
///
/// The contract is intentionally narrow: success with a bitmap, or failure
/// with no further detail. Implementations must be shareable with worker
/// threads, hence `Send + Sync`.
pub trait ImageDecoder: Send + Sync {
    /// Attempts to decode the image at `path`.
    ///
    /// Returns `None` on any failure (missing file, unsupported or corrupt
    /// format, permissions). Must not panic.
    fn decode(&self, path: &Path) -> Option<Bitmap>;
}

/// Production decoder backed by the `image` crate.
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Option<Bitmap> {
        match open_bitmap(path) {
            Ok(bitmap) => Some(bitmap),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %format!("{err:#}"), "decode failed");
                None
            }
        }
    }
}

/// Reads and decodes an image file into an RGBA8 [`Bitmap`].
pub fn open_bitmap(path: &Path) -> Result<Bitmap> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image: {:?}", path))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode image: {:?}", path))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Bitmap::from_rgba8(rgba.into_raw(), width, height))
}
