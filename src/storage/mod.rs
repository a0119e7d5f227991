use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::geometry::Rect;
use thiserror::Error;

const DUMP_HEADER: &str = "# boxmark selection";
const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no selection to save")]
    NoSelection,
    #[error("failed to write selection: {path}")]
    Write { path: PathBuf, source: io::Error },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Plain `key=value` text dump of one selection.
pub fn render_selection_dump(image: Option<&Path>, rect: Rect) -> String {
    let image = image.map_or_else(|| "-".to_string(), |path| path.display().to_string());
    format!(
        "{DUMP_HEADER}\nimage={image}\nrect={},{},{},{}\n",
        rect.min_x, rect.min_y, rect.max_x, rect.max_y
    )
}

/// Appends `.txt` when the chosen file name has no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        return path;
    }
    path.with_extension(DEFAULT_EXTENSION)
}

pub fn save_selection(
    target: &Path,
    image: Option<&Path>,
    rect: Option<Rect>,
) -> StorageResult<PathBuf> {
    let rect = rect.ok_or(StorageError::NoSelection)?;
    let path = with_default_extension(target.to_path_buf());
    let write_error = |source| StorageError::Write {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(&path, render_selection_dump(image, rect)).map_err(write_error)?;

    tracing::info!(path = %path.display(), ?rect, "saved selection");
    Ok(path)
}
