//! Temporary on-disk storage for downloaded images.
//!
//! Files are named `<link_hash>_<random><ext>` inside the cache directory, so
//! everything written for one page can be released by its hash prefix.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::images::dimensions::{image_dimensions, ImageFormat};

/// A downloaded image saved to the cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Location of the temp file.
    pub path: PathBuf,
    /// Size on disk.
    pub bytes: u64,
    /// Pixel width from the header.
    pub width: u32,
    /// Pixel height from the header.
    pub height: u32,
}

/// Writes image bytes under a cache directory.
#[derive(Debug, Clone)]
pub struct TempImageStore {
    cache_dir: PathBuf,
    min_bytes: u64,
}

impl TempImageStore {
    /// Store under `cache_dir`, rejecting payloads smaller than `min_bytes`.
    pub fn new(cache_dir: impl Into<PathBuf>, min_bytes: u64) -> Self {
        Self { cache_dir: cache_dir.into(), min_bytes }
    }

    /// The directory files are written to.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Save image bytes and read their dimensions.
    ///
    /// Returns `None` for payloads that are not a recognized image format,
    /// are smaller than the minimum size, have an unreadable header, or
    /// cannot be written.
    #[must_use]
    pub fn save(&self, bytes: &[u8], link_hash: &str) -> Option<StoredImage> {
        let Some(format) = ImageFormat::sniff(bytes) else {
            debug!("downloaded payload is not a recognized image");
            return None;
        };

        let size = bytes.len() as u64;
        if size < self.min_bytes {
            debug!(size, min_bytes = self.min_bytes, "image below minimum size");
            return None;
        }

        let (width, height) = image_dimensions(bytes)?;

        if let Err(err) = fs::create_dir_all(&self.cache_dir) {
            warn!(dir = %self.cache_dir.display(), error = %err, "cannot create image cache directory");
            return None;
        }

        let file_name = format!("{link_hash}_{}{}", rand::random::<u32>(), format.extension());
        let path = self.cache_dir.join(file_name);
        if let Err(err) = fs::write(&path, bytes) {
            warn!(path = %path.display(), error = %err, "cannot write temp image");
            return None;
        }

        Some(StoredImage { path, bytes: size, width, height })
    }

    /// Delete one temp file. Failures are logged.
    pub fn discard(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "failed to delete temp image");
        }
    }

    /// Delete every temp file written for `link_hash`.
    ///
    /// Failures are logged and skipped. Returns how many files were removed.
    pub fn release_resources(&self, link_hash: &str) -> usize {
        let prefix = format!("{link_hash}_");
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %self.cache_dir.display(), error = %err, "no image cache to release");
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            if !entry.file_name().to_string_lossy().starts_with(&prefix) {
                continue;
            }
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(err) => warn!(path = %entry.path().display(), error = %err, "failed to delete temp image"),
            }
        }

        debug!(removed, link_hash, "released temp images");
        removed
    }
}
