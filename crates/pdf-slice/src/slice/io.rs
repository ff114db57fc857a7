//! Image and output-path I/O for slicing

use crate::types::*;
use std::path::{Path, PathBuf};

/// Expand an input path into the ordered list of image files to slice.
///
/// A file is returned as-is. A directory yields its regular files sorted by
/// path string, so `page10.png` sorts before `page2.png`.
pub async fn expand_inputs(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref().to_owned();
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| SliceError::input(&path, format!("cannot access input: {}", e)))?;

    if !metadata.is_dir() {
        return Ok(vec![path]);
    }

    let mut entries = tokio::fs::read_dir(&path).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }

    if files.is_empty() {
        return Err(SliceError::input(&path, "directory contains no files"));
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

/// Read (width, height) of each image from its header without decoding pixels
pub async fn read_dimensions(paths: &[PathBuf]) -> Result<Vec<(u32, u32)>> {
    let paths = paths.to_vec();
    tokio::task::spawn_blocking(move || {
        paths
            .iter()
            .map(|path| {
                image::image_dimensions(path)
                    .map_err(|e| SliceError::input(path, format!("cannot read size: {}", e)))
            })
            .collect::<Result<Vec<_>>>()
    })
    .await?
}

/// Load and decode a single image
pub async fn load_image(path: impl AsRef<Path>) -> Result<RasterImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| SliceError::input(&path, format!("cannot read image: {}", e)))?;

    tokio::task::spawn_blocking(move || {
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| SliceError::input(&path, format!("cannot decode image: {}", e)))?;
        if decoded.height() == 0 || decoded.width() == 0 {
            return Err(SliceError::input(&path, "image has zero height or width"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::debug!(
            "Decoded {} ({}x{})",
            name,
            decoded.width(),
            decoded.height()
        );
        Ok(RasterImage::new(name, decoded.to_rgb8()))
    })
    .await?
}

/// Load multiple images, preserving input order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<RasterImage>> {
    let mut images = Vec::new();
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}

/// Check that `path` is free to be created.
///
/// Fails when something already exists there or when its parent directory
/// is missing.
pub async fn check_output_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if tokio::fs::try_exists(path).await? {
        return Err(SliceError::output(path, "path is occupied"));
    }

    // A bare file name has an empty parent, meaning the working directory
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let is_dir = tokio::fs::metadata(parent)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(SliceError::output(path, "directory does not exist"));
        }
    }

    Ok(())
}
