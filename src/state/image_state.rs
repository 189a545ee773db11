//! Currently displayed image and its file metadata.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use insight::Bitmap;

/// Basic file facts shown in the info panel.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// File name without directory components
    pub file_name: String,
    /// Full path as requested
    pub path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
    /// Last modification time, if the filesystem reports one
    pub modified: Option<SystemTime>,
}

impl FileMetadata {
    /// Reads metadata for `path` from the filesystem.
    pub fn read(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata: {:?}", path))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            file_name,
            path: path.to_path_buf(),
            size_bytes: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// The accepted image: bitmap, source path, GPU texture, file metadata.
///
/// Only results that survived the supervisor's stale filter land here, so
/// `path` always names the most recently accepted load.
pub struct ImageState {
    bitmap: Option<Bitmap>,
    path: Option<PathBuf>,
    texture: Option<egui::TextureHandle>,
    metadata: Option<FileMetadata>,
}

impl Default for ImageState {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageState {
    /// Creates an empty image state (nothing displayed).
    pub fn new() -> Self {
        Self {
            bitmap: None,
            path: None,
            texture: None,
            metadata: None,
        }
    }

    /// Accepts a freshly loaded image, replacing the previous one.
    pub fn accept(&mut self, bitmap: Bitmap, path: PathBuf, texture: egui::TextureHandle) {
        self.metadata = FileMetadata::read(&path).ok();
        self.bitmap = Some(bitmap);
        self.path = Some(path);
        self.texture = Some(texture);
    }

    /// True once an image has been accepted.
    pub fn has_image(&self) -> bool {
        self.bitmap.is_some()
    }

    /// The accepted bitmap, if any.
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Path of the most recently accepted image.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// GPU texture for the accepted image.
    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    /// File metadata of the accepted image.
    pub fn metadata(&self) -> Option<&FileMetadata> {
        self.metadata.as_ref()
    }

    /// Pixel dimensions of the accepted image as a vector.
    pub fn size_vec(&self) -> Option<egui::Vec2> {
        self.bitmap
            .as_ref()
            .map(|b| egui::Vec2::new(b.width() as f32, b.height() as f32))
    }
}
