use std::fs;
use std::path::{Path, PathBuf};

use super::{ImageError, ImageResult};

/// Non-empty, ordered list of images with a clamped cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    paths: Vec<PathBuf>,
    index: usize,
}

impl ImageList {
    pub fn new(paths: Vec<PathBuf>, index: usize) -> ImageResult<Self> {
        if paths.is_empty() {
            return Err(ImageError::EmptySelection);
        }
        let index = index.min(paths.len() - 1);
        Ok(Self { paths, index })
    }

    /// Several chosen files keep their order; a single file expands to its directory.
    pub fn from_selection(selected: Vec<PathBuf>, extensions: &[String]) -> ImageResult<Self> {
        if let [single] = selected.as_slice() {
            return Self::from_directory_of(single, extensions);
        }
        Self::new(selected, 0)
    }

    fn from_directory_of(file: &Path, extensions: &[String]) -> ImageResult<Self> {
        let dir = file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut paths = match list_images(dir, extensions) {
            Ok(paths) => paths,
            Err(ImageError::NoImagesInDirectory { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };
        if !paths.iter().any(|path| path == file) {
            // Chosen file with an extension outside the configured set.
            paths.push(file.to_path_buf());
            paths.sort();
        }
        let index = paths.iter().position(|path| path == file).unwrap_or(0);
        tracing::info!(dir = %dir.display(), count = paths.len(), index, "loaded image directory");
        Self::new(paths, index)
    }

    pub fn current(&self) -> &Path {
        &self.paths[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.paths.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Advances unless already at the last image; returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Steps back unless already at the first image; returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }
}

fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extensions
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        })
}

fn list_images(dir: &Path, extensions: &[String]) -> ImageResult<Vec<PathBuf>> {
    let read_error = |source| ImageError::ReadDirectory {
        dir: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_image_extension(&path, extensions) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(ImageError::NoImagesInDirectory {
            dir: dir.to_path_buf(),
            extensions: extensions.to_vec(),
        });
    }
    paths.sort();
    Ok(paths)
}
